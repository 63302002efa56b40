use std::time::{Duration, Instant};

use super::*;
use crate::backend::{BackendResponse, Suggestion};
use crate::notification::NotificationLevel;
use crate::test_utils::test_helpers::{app_with_prompt, connected_app, sample_templates, test_app};

const DEBOUNCE: Duration = Duration::from_millis(300);

#[test]
fn test_new_app_defaults() {
    let app = test_app();
    assert_eq!(app.focus, Focus::Prompt);
    assert!(!app.should_quit());
    assert_eq!(app.output_mode(), None);
    assert!(!app.enhancing);
    assert!(!app.autocomplete.is_visible());
    assert_eq!(app.prompt(), "");
}

#[test]
fn test_initial_prompt() {
    let app = app_with_prompt("a lighthouse at dusk");
    assert_eq!(app.prompt(), "a lighthouse at dusk");
    assert_eq!(app.input.cursor_offset(), 20);
}

#[test]
fn test_connect_backend_requests_templates() {
    let (_app, mut requests, _responses) = connected_app("");
    assert_eq!(requests.try_recv().unwrap(), BackendRequest::LoadTemplates);
    assert!(requests.try_recv().is_err());
}

#[test]
fn test_send_request_without_backend_returns_false() {
    let mut app = test_app();
    assert!(!app.send_request(BackendRequest::LoadTemplates));
}

#[test]
fn test_send_request_after_worker_gone_returns_false() {
    let (mut app, requests, _responses) = connected_app("");
    drop(requests);
    assert!(!app.send_request(BackendRequest::LoadTemplates));
}

#[test]
fn test_set_prompt_moves_cursor_to_end_and_dismisses() {
    let (mut app, _requests, response_tx) = connected_app("");
    let now = Instant::now();
    response_tx
        .send(BackendResponse::Suggestions {
            request_id: 0,
            result: Ok(vec![Suggestion::new("dog")]),
        })
        .unwrap();
    app.tick(now);
    assert!(app.autocomplete.is_visible());

    app.set_prompt("a cat, dreamy");
    assert_eq!(app.prompt(), "a cat, dreamy");
    assert_eq!(app.input.cursor_offset(), 13);
    assert!(!app.autocomplete.is_visible());
    assert!(!app.autocomplete.has_pending_query());
}

#[test]
fn test_tick_dispatches_due_query() {
    let (mut app, mut requests, _responses) = connected_app("happy do");
    let _ = requests.try_recv();
    let now = Instant::now();

    app.on_prompt_edited(now);
    app.tick(now + DEBOUNCE - Duration::from_millis(1));
    assert!(requests.try_recv().is_err());

    app.tick(now + DEBOUNCE);
    assert_eq!(
        requests.try_recv().unwrap(),
        BackendRequest::Suggest {
            token: "do".to_string(),
            request_id: 1,
        }
    );
}

#[test]
fn test_tick_expires_notification() {
    let mut app = test_app();
    let now = Instant::now();
    app.notification.info("hello");
    app.tick(now + Duration::from_secs(4));
    assert!(app.notification.current().is_none());
}

#[test]
fn test_accept_suggestion_splices_and_refocuses() {
    let (mut app, _requests, _responses) = connected_app("draw a cat, happy do");
    app.focus = Focus::TemplatePicker;

    app.accept_suggestion("dog", Instant::now());
    assert_eq!(app.prompt(), "draw a cat, happy dog");
    assert_eq!(app.input.cursor_offset(), 21);
    assert_eq!(app.focus, Focus::Prompt);
    // Re-run as a typed edit: "dog" is long enough to schedule a query
    assert!(app.autocomplete.has_pending_query());
}

#[test]
fn test_request_enhance_empty_prompt_warns() {
    let (mut app, mut requests, _responses) = connected_app("   ");
    let _ = requests.try_recv();

    app.request_enhance();
    assert!(requests.try_recv().is_err());
    assert!(!app.enhancing);
    let notification = app.notification.current().unwrap();
    assert_eq!(notification.level, NotificationLevel::Warning);
}

#[test]
fn test_request_enhance_sends_trimmed_prompt_once() {
    let (mut app, mut requests, _responses) = connected_app("  a castle  ");
    let _ = requests.try_recv();

    app.request_enhance();
    app.request_enhance();
    assert!(app.enhancing);
    assert_eq!(
        requests.try_recv().unwrap(),
        BackendRequest::Enhance {
            prompt: "a castle".to_string()
        }
    );
    assert!(requests.try_recv().is_err());
}

#[test]
fn test_request_enhance_without_backend_reports_error() {
    let mut app = app_with_prompt("a castle");
    app.request_enhance();
    assert!(!app.enhancing);
    assert_eq!(
        app.notification.current().unwrap().level,
        NotificationLevel::Error
    );
}

#[test]
fn test_open_template_picker_blurs_prompt() {
    let (mut app, _requests, response_tx) = connected_app("");
    response_tx
        .send(BackendResponse::Suggestions {
            request_id: 0,
            result: Ok(vec![Suggestion::new("dog")]),
        })
        .unwrap();
    app.tick(Instant::now());
    assert!(app.autocomplete.is_visible());

    app.open_template_picker();
    assert_eq!(app.focus, Focus::TemplatePicker);
    assert!(app.templates.is_visible());
    assert!(!app.autocomplete.is_visible());
}

#[test]
fn test_open_template_picker_retries_load_when_empty() {
    let (mut app, mut requests, _responses) = connected_app("");
    assert_eq!(requests.try_recv().unwrap(), BackendRequest::LoadTemplates);

    app.open_template_picker();
    assert_eq!(requests.try_recv().unwrap(), BackendRequest::LoadTemplates);
}

#[test]
fn test_open_template_picker_loaded_does_not_reload() {
    let (mut app, mut requests, _responses) = connected_app("");
    let _ = requests.try_recv();
    app.templates.set_templates(sample_templates());

    app.open_template_picker();
    assert!(requests.try_recv().is_err());
}

#[test]
fn test_focus_prompt_closes_picker() {
    let mut app = test_app();
    app.templates.set_templates(sample_templates());
    app.open_template_picker();

    app.focus_prompt();
    assert_eq!(app.focus, Focus::Prompt);
    assert!(!app.templates.is_visible());
}

#[cfg(test)]
pub mod test_helpers {
    use std::sync::mpsc;

    use std::time::Instant;

    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
    use tokio::sync::mpsc::{UnboundedReceiver, unbounded_channel};

    use crate::app::App;
    use crate::autocomplete::PromptField;
    use crate::backend::{BackendRequest, BackendResponse, Suggestion, Template};
    use crate::config::Config;

    /// Plain string standing in for the prompt field
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct StringField {
        pub text: String,
        pub cursor: usize,
    }

    impl StringField {
        pub fn new(text: &str, cursor: usize) -> Self {
            Self {
                text: text.to_string(),
                cursor,
            }
        }

        /// Cursor at the end of `text`
        pub fn typed(text: &str) -> Self {
            Self::new(text, text.chars().count())
        }
    }

    impl PromptField for StringField {
        fn text(&self) -> String {
            self.text.clone()
        }

        fn cursor_offset(&self) -> usize {
            self.cursor
        }

        fn set_text_and_cursor(&mut self, text: &str, cursor: usize) {
            self.text = text.to_string();
            self.cursor = cursor;
        }
    }

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    pub fn test_app() -> App {
        App::new(&Config::default(), "")
    }

    pub fn app_with_prompt(prompt: &str) -> App {
        App::new(&Config::default(), prompt)
    }

    /// App wired to in-memory channels: inspect requests, inject responses
    pub fn connected_app(
        prompt: &str,
    ) -> (
        App,
        UnboundedReceiver<BackendRequest>,
        mpsc::Sender<BackendResponse>,
    ) {
        connected_app_with_config(prompt, &Config::default())
    }

    pub fn connected_app_with_config(
        prompt: &str,
        config: &Config,
    ) -> (
        App,
        UnboundedReceiver<BackendRequest>,
        mpsc::Sender<BackendResponse>,
    ) {
        let (request_tx, request_rx) = unbounded_channel();
        let (response_tx, response_rx) = mpsc::channel();
        let mut app = App::new(config, prompt);
        app.connect_backend(request_tx, response_rx);
        (app, request_rx, response_tx)
    }

    pub fn sample_templates() -> Vec<Template> {
        [
            ("portrait", "Portrait", "Studio portrait"),
            ("landscape", "Landscape", "Mountain vista"),
            ("watercolor", "Art", "Watercolor painting"),
        ]
        .into_iter()
        .map(|(id, category, name)| Template {
            id: id.to_string(),
            name: name.to_string(),
            category: category.to_string(),
            prompt: format!("{{subject}}, {}", name.to_lowercase()),
            placeholder: "subject".to_string(),
        })
        .collect()
    }

    pub fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::empty(),
        }
    }

    /// Draw one frame so layout regions are recorded
    pub fn render_app(app: &mut App) {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
    }

    /// Rendered app showing ["dog", "doge", "dogma"] for "happy do"
    pub fn app_with_rendered_popup() -> App {
        let (mut app, _requests, responses) = connected_app("happy do");
        responses
            .send(BackendResponse::Suggestions {
                request_id: 0,
                result: Ok(vec![
                    Suggestion::new("dog"),
                    Suggestion::new("doge"),
                    Suggestion::new("dogma"),
                ]),
            })
            .unwrap();
        app.tick(Instant::now());
        render_app(&mut app);
        app
    }
}

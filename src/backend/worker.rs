//! Backend Worker Thread
//!
//! Runs backend requests on a background thread so the UI never blocks.
//! Each request becomes its own task, so two suggestion queries that are in
//! flight at once may complete in either order; callers see responses in
//! arrival order.

use std::sync::mpsc::Sender;
use std::thread::JoinHandle;

use tokio::sync::mpsc::UnboundedReceiver;
use tokio_util::sync::CancellationToken;

use super::client::{BackendClient, BackendError};
use super::types::{AppliedTemplate, EnhanceResult, Suggestion, TemplateCatalog};

/// Request messages sent to the worker thread
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendRequest {
    /// Fetch completions for a token
    Suggest {
        token: String,
        /// Monotonic id assigned by the suggestion controller
        request_id: u64,
    },
    Enhance {
        prompt: String,
    },
    LoadTemplates,
    ApplyTemplate {
        template_id: String,
        subject: String,
    },
}

/// Response messages received from the worker thread
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendResponse {
    Suggestions {
        request_id: u64,
        result: Result<Vec<Suggestion>, BackendError>,
    },
    Enhanced(Result<EnhanceResult, BackendError>),
    Templates(Result<TemplateCatalog, BackendError>),
    TemplateApplied(Result<AppliedTemplate, BackendError>),
}

/// Spawn the backend worker thread
///
/// The thread owns a current-thread tokio runtime and exits when the
/// request channel closes or `shutdown` is cancelled.
pub fn spawn_worker(
    client: BackendClient,
    request_rx: UnboundedReceiver<BackendRequest>,
    response_tx: Sender<BackendResponse>,
    shutdown: CancellationToken,
) -> std::io::Result<JoinHandle<()>> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    std::thread::Builder::new()
        .name("backend-worker".to_string())
        .spawn(move || {
            runtime.block_on(worker_loop(client, request_rx, response_tx, shutdown));
            log::debug!("Backend worker thread shutting down");
        })
}

async fn worker_loop(
    client: BackendClient,
    mut request_rx: UnboundedReceiver<BackendRequest>,
    response_tx: Sender<BackendResponse>,
    shutdown: CancellationToken,
) {
    loop {
        tokio::select! {
            biased;
            _ = shutdown.cancelled() => break,
            request = request_rx.recv() => {
                let Some(request) = request else { break };
                log::debug!("Dispatching {:?}", request);

                let client = client.clone();
                let response_tx = response_tx.clone();
                tokio::spawn(async move {
                    let response = handle_request(&client, request).await;
                    // Main thread gone means we are shutting down
                    let _ = response_tx.send(response);
                });
            }
        }
    }
}

async fn handle_request(client: &BackendClient, request: BackendRequest) -> BackendResponse {
    match request {
        BackendRequest::Suggest { token, request_id } => BackendResponse::Suggestions {
            request_id,
            result: client.suggestions(&token).await,
        },
        BackendRequest::Enhance { prompt } => {
            BackendResponse::Enhanced(client.enhance(&prompt).await)
        }
        BackendRequest::LoadTemplates => BackendResponse::Templates(client.templates().await),
        BackendRequest::ApplyTemplate {
            template_id,
            subject,
        } => BackendResponse::TemplateApplied(client.apply_template(&template_id, &subject).await),
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;

//! Backend API access
//!
//! Typed wire format, an async HTTP client for the prompt endpoints and the
//! worker thread that runs requests off the UI thread.

mod client;
pub mod types;
pub mod worker;

pub use client::{BackendClient, BackendError};
pub use types::{AppliedTemplate, EnhanceResult, Suggestion, Template, TemplateCatalog};
pub use worker::{BackendRequest, BackendResponse, spawn_worker};

#[cfg(test)]
#[path = "backend/test_server.rs"]
pub(crate) mod test_server;

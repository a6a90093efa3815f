//! Shared state for the analysis API.

use std::sync::Arc;

use crate::scoring::{ChatBackend, GroqClient};

/// State handed to every handler. Cloning is cheap; the chat backend is
/// shared behind an `Arc`. `backend` stays `None` when no API key is
/// configured, and scoring requests are rejected with an explanation.
#[derive(Clone)]
pub struct ApiContext {
    pub backend: Option<Arc<dyn ChatBackend>>,
}

impl ApiContext {
    pub fn new(backend: Option<Arc<dyn ChatBackend>>) -> Self {
        Self { backend }
    }

    /// Context with whatever backend the environment provides.
    pub fn from_env() -> Self {
        let backend =
            GroqClient::from_env().map(|client| Arc::new(client) as Arc<dyn ChatBackend>);
        Self::new(backend)
    }
}

//! LLM-backed risk scoring: prompt assembly, the chat backend, and
//! parsing of the model's JSON report.

pub mod llm;
pub mod parse;
pub mod prompt;

pub use llm::{ChatBackend, GroqClient, MockChat};
pub use parse::parse_report;
pub use prompt::{build_analysis_prompt, SYSTEM_PROMPT};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScoringError {
    #[error("Cannot connect to chat backend at {0}")]
    BackendConnection(String),

    #[error("Chat request timed out after {0}s")]
    BackendTimeout(u64),

    #[error("Chat backend returned status {status}: {body}")]
    BackendStatus { status: u16, body: String },

    #[error("HTTP client error: {0}")]
    HttpClient(String),

    #[error("Malformed chat completion: {0}")]
    CompletionDecode(String),

    #[error("Chat backend returned no completion choices")]
    EmptyCompletion,

    #[error("Invalid JSON response from AI: {0}")]
    InvalidJson(String),
}

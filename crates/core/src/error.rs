//! Error types for the Parley domain.
//!
//! Uses `thiserror` for ergonomic error definitions.
//! Each external collaborator has its own error enum and callers decide how
//! a failure degrades.

use thiserror::Error;

/// Failures of the external text-generation service.
#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    #[error("API request failed: {message} (status: {status_code})")]
    ApiError { status_code: u16, message: String },

    #[error("Rate limited by provider, retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Model not found: {0}")]
    ModelNotFound(String),

    #[error("Malformed provider response: {0}")]
    InvalidResponse(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Network error: {0}")]
    Network(String),
}

/// Failures of the external knowledge-lookup service.
#[derive(Debug, Clone, Error)]
pub enum KnowledgeError {
    #[error("Knowledge service returned status {status_code}: {message}")]
    Service { status_code: u16, message: String },

    #[error("Malformed knowledge response: {0}")]
    InvalidResponse(String),

    #[error("Network error: {0}")]
    Network(String),
}

/// Failures of the linguistic capability (tokenizer / tagger).
#[derive(Debug, Clone, Error)]
pub enum AnnotationError {
    #[error("Linguistic capability unavailable: {0}")]
    Unavailable(String),

    #[error("Tagging failed: {0}")]
    Failed(String),
}

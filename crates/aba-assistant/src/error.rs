//! Error types for assistant operations
//!
//! Classification, composition and script lookup never fail: a missing
//! translation or script falls back to English. Errors only come from the
//! boundary (parsing user-supplied codes, loading configuration) and from
//! blank submissions.

use thiserror::Error;

/// Assistant specific errors
#[derive(Debug, Error)]
pub enum AssistantError {
    /// Submission with blank or whitespace-only text
    #[error("Query is empty")]
    EmptyQuery,

    /// Language code not in the supported set
    #[error("Unknown language: {0}")]
    UnknownLanguage(String),

    /// Persona name not in the supported set
    #[error("Unknown persona: {0}")]
    UnknownPersona(String),

    /// Intent name not in the supported set
    #[error("Unknown intent: {0}")]
    UnknownIntent(String),

    /// Invalid configuration or language pack
    #[error("Configuration error: {0}")]
    Config(String),

    /// Template failed to compile
    #[error("Template '{name}' is invalid: {detail}")]
    Template { name: String, detail: String },

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration file could not be loaded
    #[error(transparent)]
    File(#[from] aba_utils::ConfigFileError),
}

/// Result type alias for assistant operations
pub type Result<T> = std::result::Result<T, AssistantError>;

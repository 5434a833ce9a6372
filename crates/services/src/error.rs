//! Shared error types for the services crate.

use thiserror::Error;

/// Errors emitted by `ChatRelay`.
///
/// All three variants are recoverable: the tutor layer turns them into a
/// user-visible message plus an offline hint, and the session carries on.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatError {
    #[error("API key missing. Paste your DeepSeek/OpenRouter API key to enable live AI.")]
    MissingApiKey,

    #[error("API error {status}: {body}")]
    Remote {
        status: reqwest::StatusCode,
        /// Response body, truncated to a short snippet.
        body: String,
    },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

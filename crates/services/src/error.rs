//! Shared error types for the services crate.

use thiserror::Error;

use crate::session::LoadErrorKind;

/// Errors emitted while acquiring a quiz item from a content provider.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProviderError {
    #[error("provider returned an empty text response")]
    EmptyResponse,
    #[error("provider returned a malformed quiz payload: {0}")]
    MalformedResponse(String),
    #[error("image generation failed: {0}")]
    ImageGenerationFailed(String),
    #[error("provider request failed with status {status}")]
    HttpStatus {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

impl ProviderError {
    /// Coarse classification kept on the session's load error.
    #[must_use]
    pub fn kind(&self) -> LoadErrorKind {
        match self {
            Self::EmptyResponse => LoadErrorKind::EmptyResponse,
            Self::MalformedResponse(_) => LoadErrorKind::MalformedResponse,
            Self::ImageGenerationFailed(_) => LoadErrorKind::ImageGenerationFailed,
            Self::HttpStatus { .. } | Self::Http(_) => LoadErrorKind::Transport,
        }
    }
}

/// Errors emitted while reading provider configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("{primary} environment variable not set (also checked {fallback})")]
    MissingApiKey {
        primary: &'static str,
        fallback: &'static str,
    },
}

/// A trigger that is not valid for the current session state.
///
/// These are contract violations by the caller, never user-facing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TransitionError {
    #[error("a question is already being fetched")]
    FetchInFlight,
    #[error("a game can only be started from the menu")]
    NotInMenu,
    #[error("there is no load error to retry")]
    NoErrorToRetry,
    #[error("the next question is only available after answering")]
    NotShowingResult,
    #[error("answers can only be selected while playing")]
    NotPlaying,
    #[error("no question is loaded")]
    NoCurrentItem,
    #[error("{0:?} is not one of the current options")]
    UnknownOption(String),
}

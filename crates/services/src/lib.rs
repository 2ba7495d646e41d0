#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod provider;
pub mod session;

pub use config::ProviderConfig;
pub use error::{ConfigError, ProviderError, TransitionError};
pub use provider::{GeminiBackend, GenerativeBackend, QuizAdapter, QuizProvider};
pub use session::{
    AnswerOutcome, FetchTicket, FetchTrigger, LOAD_ERROR_MESSAGE, LoadError, LoadErrorKind, Phase,
    SessionController, SessionState,
};

/// The production provider: the quiz adapter over the Gemini REST backend.
pub type GeminiQuizProvider = QuizAdapter<GeminiBackend>;

/// Build the production provider from `config`.
#[must_use]
pub fn gemini_provider(config: &ProviderConfig) -> GeminiQuizProvider {
    QuizAdapter::new(GeminiBackend::new(config)).with_config(config)
}

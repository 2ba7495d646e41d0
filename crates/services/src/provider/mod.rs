//! Content provider boundary: the contract the session controller depends on,
//! the generative backend port, and the Gemini implementation of that port.

mod adapter;
mod backend;
mod gemini;
pub mod prompt;

use async_trait::async_trait;
use quiz_core::QuizItem;

use crate::error::ProviderError;

pub use adapter::QuizAdapter;
pub use backend::{GeneratedImage, GenerativeBackend, ImageRequest, TextRequest};
pub use gemini::GeminiBackend;

/// Anything that can produce one complete, validated quiz item on demand.
#[async_trait]
pub trait QuizProvider: Send + Sync {
    async fn fetch_quiz_item(&self) -> Result<QuizItem, ProviderError>;
}

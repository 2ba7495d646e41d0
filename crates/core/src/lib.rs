#![forbid(unsafe_code)]

pub mod error;
pub mod model;

pub use error::Error;
pub use model::{ImageRef, ImageRefError, QuizDraft, QuizItem, QuizItemError, ValidatedQuiz};

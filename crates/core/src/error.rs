use thiserror::Error;

use crate::model::{ImageRefError, QuizItemError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    QuizItem(#[from] QuizItemError),
    #[error(transparent)]
    ImageRef(#[from] ImageRefError),
}

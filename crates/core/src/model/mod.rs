mod image;
mod quiz_item;

pub use image::{ImageRef, ImageRefError, JPEG_MIME};
pub use quiz_item::{OPTION_COUNT, QuizDraft, QuizItem, QuizItemError, ValidatedQuiz};

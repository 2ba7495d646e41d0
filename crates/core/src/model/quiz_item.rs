use serde::Serialize;
use thiserror::Error;

use crate::model::image::ImageRef;

/// Number of answer options every quiz item carries.
pub const OPTION_COUNT: usize = 3;

//
// ─── VALIDATION ERRORS ─────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizItemError {
    #[error("question text cannot be empty")]
    EmptyQuestion,

    #[error("expected {OPTION_COUNT} options, got {len}")]
    OptionCount { len: usize },

    #[error("option {index} is empty")]
    EmptyOption { index: usize },

    #[error("option {0:?} appears more than once")]
    DuplicateOption(String),

    #[error("correct answer {0:?} is not one of the options")]
    CorrectAnswerNotInOptions(String),
}

//
// ─── DRAFT (unvalidated provider output) ───────────────────────────────────────
//

/// Text fields of a quiz item as they arrive from a generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizDraft {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: String,
}

impl QuizDraft {
    /// Trim and validate the text fields.
    ///
    /// # Errors
    ///
    /// Returns `QuizItemError` when the question is blank, the option list is
    /// not exactly three distinct non-empty strings, or the correct answer is
    /// not among the options.
    pub fn validate(self) -> Result<ValidatedQuiz, QuizItemError> {
        let question = self.question.trim().to_string();
        if question.is_empty() {
            return Err(QuizItemError::EmptyQuestion);
        }

        if self.options.len() != OPTION_COUNT {
            return Err(QuizItemError::OptionCount {
                len: self.options.len(),
            });
        }

        let mut options: Vec<String> = Vec::with_capacity(OPTION_COUNT);
        for (index, option) in self.options.into_iter().enumerate() {
            let option = option.trim().to_string();
            if option.is_empty() {
                return Err(QuizItemError::EmptyOption { index });
            }
            if options.contains(&option) {
                return Err(QuizItemError::DuplicateOption(option));
            }
            options.push(option);
        }

        let correct_answer = self.correct_answer.trim().to_string();
        if !options.contains(&correct_answer) {
            return Err(QuizItemError::CorrectAnswerNotInOptions(correct_answer));
        }

        Ok(ValidatedQuiz {
            question,
            options,
            correct_answer,
        })
    }
}

/// Validated text fields still waiting for their illustration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedQuiz {
    question: String,
    options: Vec<String>,
    correct_answer: String,
}

impl ValidatedQuiz {
    #[must_use]
    pub fn question(&self) -> &str {
        &self.question
    }

    #[must_use]
    pub fn with_image(self, image: ImageRef) -> QuizItem {
        QuizItem {
            question: self.question,
            options: self.options,
            correct_answer: self.correct_answer,
            image,
        }
    }
}

//
// ─── QUIZ ITEM ─────────────────────────────────────────────────────────────────
//

/// One question, its answer options, the correct answer and an illustration.
///
/// Every value upholds `options.len() == OPTION_COUNT` and
/// `options.contains(correct_answer)`; the only ways in are
/// [`QuizItem::new`] and [`ValidatedQuiz::with_image`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizItem {
    question: String,
    options: Vec<String>,
    correct_answer: String,
    #[serde(rename = "imageUrl")]
    image: ImageRef,
}

impl QuizItem {
    /// Validate and assemble a quiz item in one step.
    ///
    /// # Errors
    ///
    /// Returns `QuizItemError` under the same rules as [`QuizDraft::validate`].
    pub fn new(
        question: impl Into<String>,
        options: Vec<String>,
        correct_answer: impl Into<String>,
        image: ImageRef,
    ) -> Result<Self, QuizItemError> {
        let draft = QuizDraft {
            question: question.into(),
            options,
            correct_answer: correct_answer.into(),
        };
        Ok(draft.validate()?.with_image(image))
    }

    #[must_use]
    pub fn question(&self) -> &str {
        &self.question
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn correct_answer(&self) -> &str {
        &self.correct_answer
    }

    #[must_use]
    pub fn image(&self) -> &ImageRef {
        &self.image
    }

    #[must_use]
    pub fn has_option(&self, answer: &str) -> bool {
        self.options.iter().any(|option| option == answer)
    }

    #[must_use]
    pub fn is_correct(&self, answer: &str) -> bool {
        self.correct_answer == answer
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

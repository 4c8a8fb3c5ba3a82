use thiserror::Error;

use crate::model::ids::{CourseId, QuestionId};

/// Fewest options a multiple-choice question may offer.
pub const MIN_OPTIONS: usize = 2;

//
// ─── QUESTION TYPES ────────────────────────────────────────────────────────────
//

/// Unvalidated question payload.
///
/// `answer_index` is signed so that negative input reaches validation instead
/// of failing deserialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionDraft {
    pub prompt: String,
    pub options: Vec<String>,
    pub answer_index: i64,
}

impl QuestionDraft {
    #[must_use]
    pub fn new<I, S>(prompt: impl Into<String>, options: I, answer_index: i64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            prompt: prompt.into(),
            options: options.into_iter().map(Into::into).collect(),
            answer_index,
        }
    }

    /// Check option count and answer bounds.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::TooFewOptions` with fewer than [`MIN_OPTIONS`] options.
    /// Returns `QuestionError::AnswerIndexOutOfRange` unless `0 <= answer_index < options.len()`.
    pub fn validate(self) -> Result<ValidatedQuestion, QuestionError> {
        if self.options.len() < MIN_OPTIONS {
            return Err(QuestionError::TooFewOptions {
                found: self.options.len(),
            });
        }

        let answer_index = usize::try_from(self.answer_index)
            .ok()
            .filter(|index| *index < self.options.len())
            .ok_or(QuestionError::AnswerIndexOutOfRange {
                index: self.answer_index,
                options: self.options.len(),
            })?;

        Ok(ValidatedQuestion {
            prompt: self.prompt,
            options: self.options,
            answer_index,
        })
    }
}

/// Question content whose answer index is known to point at an option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedQuestion {
    prompt: String,
    options: Vec<String>,
    answer_index: usize,
}

impl ValidatedQuestion {
    #[must_use]
    pub fn answer_index(&self) -> usize {
        self.answer_index
    }

    pub fn assign_id(self, id: QuestionId, course_id: CourseId) -> QuizQuestion {
        QuizQuestion {
            id,
            course_id,
            content: self,
        }
    }
}

/// A multiple-choice question belonging to a course.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizQuestion {
    id: QuestionId,
    course_id: CourseId,
    content: ValidatedQuestion,
}

impl QuizQuestion {
    #[must_use]
    pub fn id(&self) -> QuestionId {
        self.id
    }

    #[must_use]
    pub fn course_id(&self) -> CourseId {
        self.course_id
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.content.prompt
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.content.options
    }

    #[must_use]
    pub fn answer_index(&self) -> usize {
        self.content.answer_index
    }

    #[must_use]
    pub fn belongs_to(&self, course_id: CourseId) -> bool {
        self.course_id == course_id
    }

    /// Whether a submitted option index is the correct one.
    #[must_use]
    pub fn is_correct(&self, submitted: i64) -> bool {
        usize::try_from(submitted).is_ok_and(|index| index == self.content.answer_index)
    }

    pub fn apply(&mut self, content: ValidatedQuestion) {
        self.content = content;
    }
}

//
// ─── QUESTION VALIDATION ERRORS ────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("options must contain at least 2 entries (found {found})")]
    TooFewOptions { found: usize },

    #[error("answer_index out of range")]
    AnswerIndexOutOfRange { index: i64, options: usize },
}

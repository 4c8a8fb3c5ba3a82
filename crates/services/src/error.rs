//! Shared error types for the services crate.
//!
//! Each service folds storage lookups into its own not-found variants so the
//! HTTP layer never has to inspect `StorageError` for routine misses.

use thiserror::Error;

use kuizmo_core::AttemptError;
use kuizmo_core::model::{CourseId, ModuleId, QuestionError, QuestionId};
use storage::repository::StorageError;

/// Errors emitted by `CourseService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CourseServiceError {
    #[error("course {0} not found")]
    NotFound(CourseId),
    #[error(transparent)]
    Storage(StorageError),
}

impl From<StorageError> for CourseServiceError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::CourseNotFound(id) => Self::NotFound(id),
            other => Self::Storage(other),
        }
    }
}

/// Errors emitted by `ModuleService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ModuleServiceError {
    #[error("course {0} not found")]
    CourseNotFound(CourseId),
    #[error("module {0} not found")]
    ModuleNotFound(ModuleId),
    #[error(transparent)]
    Storage(StorageError),
}

impl From<StorageError> for ModuleServiceError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::CourseNotFound(id) => Self::CourseNotFound(id),
            StorageError::ModuleNotFound(id) => Self::ModuleNotFound(id),
            other => Self::Storage(other),
        }
    }
}

/// Errors emitted by `QuizService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizServiceError {
    #[error("course {0} not found")]
    CourseNotFound(CourseId),
    #[error("quiz question {0} not found")]
    QuestionNotFound(QuestionId),
    #[error(transparent)]
    InvalidQuestion(#[from] QuestionError),
    #[error(transparent)]
    Attempt(#[from] AttemptError),
    #[error(transparent)]
    Storage(StorageError),
}

impl From<StorageError> for QuizServiceError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::CourseNotFound(id) => Self::CourseNotFound(id),
            StorageError::QuestionNotFound(id) => Self::QuestionNotFound(id),
            other => Self::Storage(other),
        }
    }
}

/// Errors emitted by `ProgressService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProgressServiceError {
    #[error("course {0} not found")]
    CourseNotFound(CourseId),
    #[error("module {0} not found")]
    ModuleNotFound(ModuleId),
    #[error(transparent)]
    Storage(StorageError),
}

impl From<StorageError> for ProgressServiceError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::CourseNotFound(id) => Self::CourseNotFound(id),
            StorageError::ModuleNotFound(id) => Self::ModuleNotFound(id),
            other => Self::Storage(other),
        }
    }
}

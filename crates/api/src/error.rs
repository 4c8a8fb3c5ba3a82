use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, error};
use utoipa::ToSchema;

use kuizmo_core::AttemptError;
use kuizmo_core::model::QuestionError;
use services::{CourseServiceError, ModuleServiceError, ProgressServiceError, QuizServiceError};
use storage::StorageError;

pub type ApiResult<T> = Result<T, ApiError>;

const COURSE_NOT_FOUND: &str = "Course not found";
const MODULE_NOT_FOUND: &str = "Module not found";
const QUESTION_NOT_FOUND: &str = "Quiz question not found";
const INTERNAL: &str = "Internal server error";

/// A failed request, rendered as `{"detail": ...}` with its status code.
#[derive(Debug, Error)]
#[error("{status}: {detail}")]
pub struct ApiError {
    status: StatusCode,
    detail: String,
}

impl ApiError {
    pub fn new(status: StatusCode, detail: impl Into<String>) -> Self {
        Self {
            status,
            detail: detail.into(),
        }
    }

    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, detail)
    }

    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, detail)
    }

    pub fn unprocessable(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, detail)
    }

    pub fn method_not_allowed() -> Self {
        Self::new(StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed")
    }

    /// Logs the underlying fault and hides it from the client.
    fn internal(source: &dyn std::error::Error) -> Self {
        error!(error = %source, "request failed with an internal error");
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL)
    }

    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.status
    }

    #[must_use]
    pub fn detail(&self) -> &str {
        &self.detail
    }
}

/// Wire shape of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub detail: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_client_error() {
            debug!(status = %self.status, detail = %self.detail, "request rejected");
        }
        let body = Json(ErrorBody {
            detail: self.detail,
        });
        (self.status, body).into_response()
    }
}

//
// ─── CONVERSIONS ───────────────────────────────────────────────────────────────
//

impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::CourseNotFound(_) => Self::not_found(COURSE_NOT_FOUND),
            StorageError::ModuleNotFound(_) => Self::not_found(MODULE_NOT_FOUND),
            StorageError::QuestionNotFound(_) => Self::not_found(QUESTION_NOT_FOUND),
            other => Self::internal(&other),
        }
    }
}

impl From<QuestionError> for ApiError {
    fn from(err: QuestionError) -> Self {
        Self::unprocessable(err.to_string())
    }
}

impl From<AttemptError> for ApiError {
    fn from(err: AttemptError) -> Self {
        Self::bad_request(err.to_string())
    }
}

impl From<CourseServiceError> for ApiError {
    fn from(err: CourseServiceError) -> Self {
        match err {
            CourseServiceError::NotFound(_) => Self::not_found(COURSE_NOT_FOUND),
            CourseServiceError::Storage(err) => err.into(),
            other => Self::internal(&other),
        }
    }
}

impl From<ModuleServiceError> for ApiError {
    fn from(err: ModuleServiceError) -> Self {
        match err {
            ModuleServiceError::CourseNotFound(_) => Self::not_found(COURSE_NOT_FOUND),
            ModuleServiceError::ModuleNotFound(_) => Self::not_found(MODULE_NOT_FOUND),
            ModuleServiceError::Storage(err) => err.into(),
            other => Self::internal(&other),
        }
    }
}

impl From<QuizServiceError> for ApiError {
    fn from(err: QuizServiceError) -> Self {
        match err {
            QuizServiceError::CourseNotFound(_) => Self::not_found(COURSE_NOT_FOUND),
            QuizServiceError::QuestionNotFound(_) => Self::not_found(QUESTION_NOT_FOUND),
            QuizServiceError::InvalidQuestion(err) => err.into(),
            QuizServiceError::Attempt(err) => err.into(),
            QuizServiceError::Storage(err) => err.into(),
            other => Self::internal(&other),
        }
    }
}

impl From<ProgressServiceError> for ApiError {
    fn from(err: ProgressServiceError) -> Self {
        match err {
            ProgressServiceError::CourseNotFound(_) => Self::not_found(COURSE_NOT_FOUND),
            ProgressServiceError::ModuleNotFound(_) => Self::not_found(MODULE_NOT_FOUND),
            ProgressServiceError::Storage(err) => err.into(),
            other => Self::internal(&other),
        }
    }
}

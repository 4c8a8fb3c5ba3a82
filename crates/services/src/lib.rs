#![forbid(unsafe_code)]

pub mod app_services;
pub mod course_service;
pub mod error;
pub mod module_service;
pub mod progress_service;
pub mod quiz_service;

pub use app_services::AppServices;
pub use course_service::CourseService;
pub use error::{CourseServiceError, ModuleServiceError, ProgressServiceError, QuizServiceError};
pub use module_service::ModuleService;
pub use progress_service::ProgressService;
pub use quiz_service::QuizService;

use kuizmo_core::model::{Course, CourseId};
use storage::repository::{CourseRepository, StorageError};

/// Resolve a course that a scoped operation hangs off.
async fn require_course(
    courses: &dyn CourseRepository,
    course_id: CourseId,
) -> Result<Course, StorageError> {
    courses
        .get_course(course_id)
        .await?
        .ok_or(StorageError::CourseNotFound(course_id))
}

use std::sync::Arc;

use kuizmo_core::model::{Course, CourseDraft, CourseId};
use storage::repository::CourseRepository;
use tracing::debug;

use crate::error::CourseServiceError;

/// Orchestrates course CRUD.
#[derive(Clone)]
pub struct CourseService {
    courses: Arc<dyn CourseRepository>,
}

impl CourseService {
    #[must_use]
    pub fn new(courses: Arc<dyn CourseRepository>) -> Self {
        Self { courses }
    }

    /// List every course in creation order.
    ///
    /// # Errors
    ///
    /// Returns `CourseServiceError::Storage` if repository access fails.
    pub async fn list_courses(&self) -> Result<Vec<Course>, CourseServiceError> {
        Ok(self.courses.list_courses().await?)
    }

    /// # Errors
    ///
    /// Returns `CourseServiceError::NotFound` when the course does not exist.
    /// Returns `CourseServiceError::Storage` if repository access fails.
    pub async fn get_course(&self, course_id: CourseId) -> Result<Course, CourseServiceError> {
        Ok(crate::require_course(self.courses.as_ref(), course_id).await?)
    }

    /// # Errors
    ///
    /// Returns `CourseServiceError::Storage` if persistence fails.
    pub async fn create_course(&self, draft: CourseDraft) -> Result<Course, CourseServiceError> {
        let course = self.courses.insert_course(draft).await?;
        debug!(course_id = %course.id(), title = course.title(), "course created");
        Ok(course)
    }

    /// Replace title, description and tags of an existing course.
    ///
    /// # Errors
    ///
    /// Returns `CourseServiceError::NotFound` when the course does not exist.
    /// Returns `CourseServiceError::Storage` if persistence fails.
    pub async fn update_course(
        &self,
        course_id: CourseId,
        draft: CourseDraft,
    ) -> Result<Course, CourseServiceError> {
        let course = self.courses.update_course(course_id, draft).await?;
        debug!(course_id = %course_id, "course updated");
        Ok(course)
    }

    /// Delete a course together with its modules, questions and progress.
    ///
    /// # Errors
    ///
    /// Returns `CourseServiceError::NotFound` when the course does not exist.
    /// Returns `CourseServiceError::Storage` if persistence fails.
    pub async fn delete_course(&self, course_id: CourseId) -> Result<(), CourseServiceError> {
        if !self.courses.delete_course(course_id).await? {
            return Err(CourseServiceError::NotFound(course_id));
        }
        debug!(course_id = %course_id, "course deleted");
        Ok(())
    }
}

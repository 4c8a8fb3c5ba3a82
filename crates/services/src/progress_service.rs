use std::sync::Arc;

use kuizmo_core::model::{CourseId, ModuleId, UserProgress};
use storage::repository::ProgressRepository;
use tracing::debug;

use crate::error::ProgressServiceError;

/// Tracks which modules each user has completed per course.
#[derive(Clone)]
pub struct ProgressService {
    progress: Arc<dyn ProgressRepository>,
}

impl ProgressService {
    #[must_use]
    pub fn new(progress: Arc<dyn ProgressRepository>) -> Self {
        Self { progress }
    }

    /// Progress for a user in a course; empty if they have not started.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError::CourseNotFound` when the course does not exist.
    /// Returns `ProgressServiceError::Storage` if repository access fails.
    pub async fn get_progress(
        &self,
        user_id: &str,
        course_id: CourseId,
    ) -> Result<UserProgress, ProgressServiceError> {
        Ok(self.progress.get_progress(user_id, course_id).await?)
    }

    /// Mark a module of the course complete for the user.
    ///
    /// Course existence and module ownership are checked by the repository in
    /// the same step as the write, so a concurrent delete cannot leave a stale
    /// id behind.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError::CourseNotFound` when the course does not exist.
    /// Returns `ProgressServiceError::ModuleNotFound` when the module is missing or
    /// filed under another course.
    /// Returns `ProgressServiceError::Storage` if repository access fails.
    pub async fn record_completion(
        &self,
        user_id: &str,
        course_id: CourseId,
        module_id: ModuleId,
    ) -> Result<UserProgress, ProgressServiceError> {
        let progress = self
            .progress
            .record_completion(user_id, course_id, module_id)
            .await?;
        debug!(
            user_id,
            course_id = %course_id,
            module_id = %module_id,
            completed = progress.completed_module_ids().len(),
            "module completion recorded"
        );
        Ok(progress)
    }
}

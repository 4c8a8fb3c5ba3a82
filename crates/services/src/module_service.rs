use std::sync::Arc;

use kuizmo_core::model::{CourseId, Module, ModuleDraft, ModuleId};
use storage::repository::{CourseRepository, ModuleRepository};
use tracing::debug;

use crate::error::ModuleServiceError;

/// Module CRUD scoped under a course.
///
/// Every call first resolves the course, and a module is only visible through
/// the course it was created under.
#[derive(Clone)]
pub struct ModuleService {
    courses: Arc<dyn CourseRepository>,
    modules: Arc<dyn ModuleRepository>,
}

impl ModuleService {
    #[must_use]
    pub fn new(courses: Arc<dyn CourseRepository>, modules: Arc<dyn ModuleRepository>) -> Self {
        Self { courses, modules }
    }

    /// # Errors
    ///
    /// Returns `ModuleServiceError::CourseNotFound` when the course does not exist.
    /// Returns `ModuleServiceError::Storage` if repository access fails.
    pub async fn list_modules(
        &self,
        course_id: CourseId,
    ) -> Result<Vec<Module>, ModuleServiceError> {
        crate::require_course(self.courses.as_ref(), course_id).await?;
        Ok(self.modules.list_modules(course_id).await?)
    }

    /// # Errors
    ///
    /// Returns `ModuleServiceError::CourseNotFound` when the course does not exist.
    /// Returns `ModuleServiceError::Storage` if persistence fails.
    pub async fn create_module(
        &self,
        course_id: CourseId,
        draft: ModuleDraft,
    ) -> Result<Module, ModuleServiceError> {
        let module = self.modules.insert_module(course_id, draft).await?;
        debug!(course_id = %course_id, module_id = %module.id(), "module created");
        Ok(module)
    }

    /// Fetch a module that belongs to `course_id`.
    ///
    /// # Errors
    ///
    /// Returns `ModuleServiceError::CourseNotFound` when the course does not exist.
    /// Returns `ModuleServiceError::ModuleNotFound` when the module is missing or
    /// filed under another course.
    /// Returns `ModuleServiceError::Storage` if repository access fails.
    pub async fn get_module(
        &self,
        course_id: CourseId,
        module_id: ModuleId,
    ) -> Result<Module, ModuleServiceError> {
        crate::require_course(self.courses.as_ref(), course_id).await?;
        self.modules
            .get_module(module_id)
            .await?
            .filter(|module| module.belongs_to(course_id))
            .ok_or(ModuleServiceError::ModuleNotFound(module_id))
    }

    /// # Errors
    ///
    /// Same lookup failures as [`ModuleService::get_module`].
    pub async fn update_module(
        &self,
        course_id: CourseId,
        module_id: ModuleId,
        draft: ModuleDraft,
    ) -> Result<Module, ModuleServiceError> {
        self.get_module(course_id, module_id).await?;
        let module = self.modules.update_module(module_id, draft).await?;
        debug!(course_id = %course_id, module_id = %module_id, "module updated");
        Ok(module)
    }

    /// Delete a module; it is also dropped from every user's progress.
    ///
    /// # Errors
    ///
    /// Same lookup failures as [`ModuleService::get_module`].
    pub async fn delete_module(
        &self,
        course_id: CourseId,
        module_id: ModuleId,
    ) -> Result<(), ModuleServiceError> {
        self.get_module(course_id, module_id).await?;
        if !self.modules.delete_module(module_id).await? {
            return Err(ModuleServiceError::ModuleNotFound(module_id));
        }
        debug!(course_id = %course_id, module_id = %module_id, "module deleted");
        Ok(())
    }
}

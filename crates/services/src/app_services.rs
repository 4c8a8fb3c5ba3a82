use std::sync::Arc;

use storage::repository::Storage;

use crate::course_service::CourseService;
use crate::module_service::ModuleService;
use crate::progress_service::ProgressService;
use crate::quiz_service::QuizService;

/// Assembles the request-facing services over one shared storage.
#[derive(Clone)]
pub struct AppServices {
    courses: Arc<CourseService>,
    modules: Arc<ModuleService>,
    quizzes: Arc<QuizService>,
    progress: Arc<ProgressService>,
}

impl AppServices {
    #[must_use]
    pub fn new(storage: &Storage) -> Self {
        let courses = Arc::new(CourseService::new(Arc::clone(&storage.courses)));
        let modules = Arc::new(ModuleService::new(
            Arc::clone(&storage.courses),
            Arc::clone(&storage.modules),
        ));
        let quizzes = Arc::new(QuizService::new(
            Arc::clone(&storage.courses),
            Arc::clone(&storage.quizzes),
        ));
        let progress = Arc::new(ProgressService::new(Arc::clone(&storage.progress)));

        Self {
            courses,
            modules,
            quizzes,
            progress,
        }
    }

    /// Services over a fresh, empty in-memory store.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(&Storage::in_memory())
    }

    #[must_use]
    pub fn courses(&self) -> Arc<CourseService> {
        Arc::clone(&self.courses)
    }

    #[must_use]
    pub fn modules(&self) -> Arc<ModuleService> {
        Arc::clone(&self.modules)
    }

    #[must_use]
    pub fn quizzes(&self) -> Arc<QuizService> {
        Arc::clone(&self.quizzes)
    }

    #[must_use]
    pub fn progress(&self) -> Arc<ProgressService> {
        Arc::clone(&self.progress)
    }
}

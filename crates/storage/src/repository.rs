use async_trait::async_trait;
use kuizmo_core::model::{
    Course, CourseDraft, CourseId, Module, ModuleDraft, ModuleId, QuestionId, QuizQuestion,
    UserProgress, ValidatedQuestion,
};
use std::sync::{Arc, Mutex, MutexGuard};
use thiserror::Error;

use crate::store::RecordStore;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("course {0} not found")]
    CourseNotFound(CourseId),

    #[error("module {0} not found")]
    ModuleNotFound(ModuleId),

    #[error("quiz question {0} not found")]
    QuestionNotFound(QuestionId),

    #[error("record store lock poisoned: {0}")]
    Lock(String),
}

/// Repository contract for courses.
#[async_trait]
pub trait CourseRepository: Send + Sync {
    /// Store a new course under the next course id.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend is unavailable.
    async fn insert_course(&self, draft: CourseDraft) -> Result<Course, StorageError>;

    /// Replace a course's title, description and tags.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::CourseNotFound` if missing, or other storage errors.
    async fn update_course(&self, id: CourseId, draft: CourseDraft)
    -> Result<Course, StorageError>;

    /// Delete a course and everything filed under it.
    ///
    /// Returns `Ok(false)` when the course did not exist.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend is unavailable.
    async fn delete_course(&self, id: CourseId) -> Result<bool, StorageError>;

    /// Fetch a course by ID.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend is unavailable.
    async fn get_course(&self, id: CourseId) -> Result<Option<Course>, StorageError>;

    /// List all courses in creation order.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend is unavailable.
    async fn list_courses(&self) -> Result<Vec<Course>, StorageError>;
}

/// Repository contract for modules.
#[async_trait]
pub trait ModuleRepository: Send + Sync {
    /// Store a new module under an existing course.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::CourseNotFound` if the course is gone at write time,
    /// or other storage errors.
    async fn insert_module(
        &self,
        course_id: CourseId,
        draft: ModuleDraft,
    ) -> Result<Module, StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError::ModuleNotFound` if missing, or other storage errors.
    async fn update_module(&self, id: ModuleId, draft: ModuleDraft)
    -> Result<Module, StorageError>;

    /// Delete a module and remove it from all progress records.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend is unavailable.
    async fn delete_module(&self, id: ModuleId) -> Result<bool, StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError` if the backend is unavailable.
    async fn get_module(&self, id: ModuleId) -> Result<Option<Module>, StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError` if the backend is unavailable.
    async fn list_modules(&self, course_id: CourseId) -> Result<Vec<Module>, StorageError>;
}

/// Repository contract for quiz questions.
#[async_trait]
pub trait QuizRepository: Send + Sync {
    /// Store a validated question under an existing course.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::CourseNotFound` if the course is gone at write time,
    /// or other storage errors.
    async fn insert_question(
        &self,
        course_id: CourseId,
        content: ValidatedQuestion,
    ) -> Result<QuizQuestion, StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError::QuestionNotFound` if missing, or other storage errors.
    async fn update_question(
        &self,
        id: QuestionId,
        content: ValidatedQuestion,
    ) -> Result<QuizQuestion, StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError` if the backend is unavailable.
    async fn delete_question(&self, id: QuestionId) -> Result<bool, StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError` if the backend is unavailable.
    async fn get_question(&self, id: QuestionId) -> Result<Option<QuizQuestion>, StorageError>;

    /// List a course's questions in creation order.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend is unavailable.
    async fn list_questions(&self, course_id: CourseId)
    -> Result<Vec<QuizQuestion>, StorageError>;
}

/// Repository contract for per-user course progress.
#[async_trait]
pub trait ProgressRepository: Send + Sync {
    /// Upsert the progress record and mark the module complete.
    ///
    /// The course and the module's ownership are checked in the same step as
    /// the write.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::CourseNotFound` or `StorageError::ModuleNotFound`
    /// when the course is missing or the module is not one of its modules.
    /// Returns other storage errors if the backend is unavailable.
    async fn record_completion(
        &self,
        user_id: &str,
        course_id: CourseId,
        module_id: ModuleId,
    ) -> Result<UserProgress, StorageError>;

    /// Fetch progress, creating an empty record if none exists yet.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::CourseNotFound` if the course does not exist,
    /// or other storage errors.
    async fn get_progress(
        &self,
        user_id: &str,
        course_id: CourseId,
    ) -> Result<UserProgress, StorageError>;
}

/// Process-wide in-memory repository.
///
/// Every call takes the single store lock for the whole operation, so cascades
/// are never observed half-applied.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    store: Arc<Mutex<RecordStore>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::from_store(RecordStore::new())
    }

    /// Wrap an already populated store, e.g. one holding seed data.
    #[must_use]
    pub fn from_store(store: RecordStore) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }

    /// Run a read-only closure against the current store contents.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Lock` if the store lock is poisoned.
    pub fn inspect<R>(&self, f: impl FnOnce(&RecordStore) -> R) -> Result<R, StorageError> {
        let guard = self.lock()?;
        Ok(f(&guard))
    }

    fn lock(&self) -> Result<MutexGuard<'_, RecordStore>, StorageError> {
        self.store
            .lock()
            .map_err(|e| StorageError::Lock(e.to_string()))
    }
}

#[async_trait]
impl CourseRepository for InMemoryRepository {
    async fn insert_course(&self, draft: CourseDraft) -> Result<Course, StorageError> {
        Ok(self.lock()?.create_course(draft))
    }

    async fn update_course(
        &self,
        id: CourseId,
        draft: CourseDraft,
    ) -> Result<Course, StorageError> {
        self.lock()?.update_course(id, draft)
    }

    async fn delete_course(&self, id: CourseId) -> Result<bool, StorageError> {
        Ok(self.lock()?.delete_course(id))
    }

    async fn get_course(&self, id: CourseId) -> Result<Option<Course>, StorageError> {
        Ok(self.lock()?.course(id).cloned())
    }

    async fn list_courses(&self) -> Result<Vec<Course>, StorageError> {
        Ok(self.lock()?.courses().cloned().collect())
    }
}

#[async_trait]
impl ModuleRepository for InMemoryRepository {
    async fn insert_module(
        &self,
        course_id: CourseId,
        draft: ModuleDraft,
    ) -> Result<Module, StorageError> {
        let mut store = self.lock()?;
        require_course(&store, course_id)?;
        Ok(store.create_module(course_id, draft))
    }

    async fn update_module(
        &self,
        id: ModuleId,
        draft: ModuleDraft,
    ) -> Result<Module, StorageError> {
        self.lock()?.update_module(id, draft)
    }

    async fn delete_module(&self, id: ModuleId) -> Result<bool, StorageError> {
        Ok(self.lock()?.delete_module(id))
    }

    async fn get_module(&self, id: ModuleId) -> Result<Option<Module>, StorageError> {
        Ok(self.lock()?.module(id).cloned())
    }

    async fn list_modules(&self, course_id: CourseId) -> Result<Vec<Module>, StorageError> {
        Ok(self.lock()?.modules_for_course(course_id).cloned().collect())
    }
}

#[async_trait]
impl QuizRepository for InMemoryRepository {
    async fn insert_question(
        &self,
        course_id: CourseId,
        content: ValidatedQuestion,
    ) -> Result<QuizQuestion, StorageError> {
        let mut store = self.lock()?;
        require_course(&store, course_id)?;
        Ok(store.create_question(course_id, content))
    }

    async fn update_question(
        &self,
        id: QuestionId,
        content: ValidatedQuestion,
    ) -> Result<QuizQuestion, StorageError> {
        self.lock()?.update_question(id, content)
    }

    async fn delete_question(&self, id: QuestionId) -> Result<bool, StorageError> {
        Ok(self.lock()?.delete_question(id))
    }

    async fn get_question(&self, id: QuestionId) -> Result<Option<QuizQuestion>, StorageError> {
        Ok(self.lock()?.question(id).cloned())
    }

    async fn list_questions(
        &self,
        course_id: CourseId,
    ) -> Result<Vec<QuizQuestion>, StorageError> {
        Ok(self
            .lock()?
            .questions_for_course(course_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl ProgressRepository for InMemoryRepository {
    async fn record_completion(
        &self,
        user_id: &str,
        course_id: CourseId,
        module_id: ModuleId,
    ) -> Result<UserProgress, StorageError> {
        let mut store = self.lock()?;
        require_course(&store, course_id)?;
        if !store
            .module(module_id)
            .is_some_and(|module| module.belongs_to(course_id))
        {
            return Err(StorageError::ModuleNotFound(module_id));
        }
        Ok(store.record_module_completion(user_id, course_id, module_id))
    }

    async fn get_progress(
        &self,
        user_id: &str,
        course_id: CourseId,
    ) -> Result<UserProgress, StorageError> {
        let mut store = self.lock()?;
        require_course(&store, course_id)?;
        Ok(store.get_progress(user_id, course_id))
    }
}

/// Parent check for writes that must not outlive their course.
fn require_course(store: &RecordStore, course_id: CourseId) -> Result<(), StorageError> {
    store
        .course(course_id)
        .map(|_| ())
        .ok_or(StorageError::CourseNotFound(course_id))
}

/// Aggregates the repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub courses: Arc<dyn CourseRepository>,
    pub modules: Arc<dyn ModuleRepository>,
    pub quizzes: Arc<dyn QuizRepository>,
    pub progress: Arc<dyn ProgressRepository>,
}

impl Storage {
    /// Empty in-memory storage.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::from_repository(InMemoryRepository::new())
    }

    /// In-memory storage over a prepared store.
    #[must_use]
    pub fn from_store(store: RecordStore) -> Self {
        Self::from_repository(InMemoryRepository::from_store(store))
    }

    #[must_use]
    pub fn from_repository(repo: InMemoryRepository) -> Self {
        let courses: Arc<dyn CourseRepository> = Arc::new(repo.clone());
        let modules: Arc<dyn ModuleRepository> = Arc::new(repo.clone());
        let quizzes: Arc<dyn QuizRepository> = Arc::new(repo.clone());
        let progress: Arc<dyn ProgressRepository> = Arc::new(repo);
        Self {
            courses,
            modules,
            quizzes,
            progress,
        }
    }
}

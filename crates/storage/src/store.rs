//! The in-process record store.
//!
//! `RecordStore` owns every course, module, question and progress record,
//! assigns ids, and applies the cascade rules. It trusts its caller: it never
//! checks that a referenced course exists and never validates question content
//! beyond what `ValidatedQuestion` already guarantees.

use std::collections::BTreeMap;

use kuizmo_core::model::{
    Course, CourseDraft, CourseId, Module, ModuleDraft, ModuleId, QuestionId, QuizQuestion,
    UserProgress, ValidatedQuestion,
};

use crate::repository::StorageError;

type ProgressKey = (String, CourseId);

/// Keyed maps for each entity type plus one id counter per type.
///
/// Counters start at zero and are pre-incremented, so the first id of each type
/// is 1. Ids are never reused; ordered maps keep iteration in creation order.
#[derive(Debug, Default)]
pub struct RecordStore {
    course_counter: u64,
    module_counter: u64,
    question_counter: u64,
    courses: BTreeMap<CourseId, Course>,
    modules: BTreeMap<ModuleId, Module>,
    questions: BTreeMap<QuestionId, QuizQuestion>,
    progress: BTreeMap<ProgressKey, UserProgress>,
}

impl RecordStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    //
    // ─── COURSES ───────────────────────────────────────────────────────────────
    //

    pub fn create_course(&mut self, draft: CourseDraft) -> Course {
        self.course_counter += 1;
        let course = draft.assign_id(CourseId::new(self.course_counter));
        self.courses.insert(course.id(), course.clone());
        course
    }

    /// # Errors
    ///
    /// Returns `StorageError::CourseNotFound` if `id` is absent.
    pub fn update_course(
        &mut self,
        id: CourseId,
        draft: CourseDraft,
    ) -> Result<Course, StorageError> {
        let course = self
            .courses
            .get_mut(&id)
            .ok_or(StorageError::CourseNotFound(id))?;
        course.apply(draft);
        Ok(course.clone())
    }

    /// Remove a course with its modules, questions and progress records.
    ///
    /// Returns whether the course itself was present.
    pub fn delete_course(&mut self, id: CourseId) -> bool {
        let removed = self.courses.remove(&id).is_some();
        self.modules.retain(|_, module| !module.belongs_to(id));
        self.questions.retain(|_, question| !question.belongs_to(id));
        self.progress.retain(|(_, course_id), _| *course_id != id);
        removed
    }

    #[must_use]
    pub fn course(&self, id: CourseId) -> Option<&Course> {
        self.courses.get(&id)
    }

    pub fn courses(&self) -> impl Iterator<Item = &Course> {
        self.courses.values()
    }

    //
    // ─── MODULES ───────────────────────────────────────────────────────────────
    //

    pub fn create_module(&mut self, course_id: CourseId, draft: ModuleDraft) -> Module {
        self.module_counter += 1;
        let module = draft.assign_id(ModuleId::new(self.module_counter), course_id);
        self.modules.insert(module.id(), module.clone());
        module
    }

    /// # Errors
    ///
    /// Returns `StorageError::ModuleNotFound` if `id` is absent.
    pub fn update_module(
        &mut self,
        id: ModuleId,
        draft: ModuleDraft,
    ) -> Result<Module, StorageError> {
        let module = self
            .modules
            .get_mut(&id)
            .ok_or(StorageError::ModuleNotFound(id))?;
        module.apply(draft);
        Ok(module.clone())
    }

    /// Remove a module and strip it from every progress record.
    ///
    /// Progress is left untouched when the module did not exist.
    pub fn delete_module(&mut self, id: ModuleId) -> bool {
        if self.modules.remove(&id).is_none() {
            return false;
        }
        for progress in self.progress.values_mut() {
            progress.forget(id);
        }
        true
    }

    #[must_use]
    pub fn module(&self, id: ModuleId) -> Option<&Module> {
        self.modules.get(&id)
    }

    pub fn modules_for_course(&self, course_id: CourseId) -> impl Iterator<Item = &Module> {
        self.modules
            .values()
            .filter(move |module| module.belongs_to(course_id))
    }

    //
    // ─── QUIZ QUESTIONS ────────────────────────────────────────────────────────
    //

    pub fn create_question(
        &mut self,
        course_id: CourseId,
        content: ValidatedQuestion,
    ) -> QuizQuestion {
        self.question_counter += 1;
        let question = content.assign_id(QuestionId::new(self.question_counter), course_id);
        self.questions.insert(question.id(), question.clone());
        question
    }

    /// # Errors
    ///
    /// Returns `StorageError::QuestionNotFound` if `id` is absent.
    pub fn update_question(
        &mut self,
        id: QuestionId,
        content: ValidatedQuestion,
    ) -> Result<QuizQuestion, StorageError> {
        let question = self
            .questions
            .get_mut(&id)
            .ok_or(StorageError::QuestionNotFound(id))?;
        question.apply(content);
        Ok(question.clone())
    }

    pub fn delete_question(&mut self, id: QuestionId) -> bool {
        self.questions.remove(&id).is_some()
    }

    #[must_use]
    pub fn question(&self, id: QuestionId) -> Option<&QuizQuestion> {
        self.questions.get(&id)
    }

    /// Questions of a course in creation order, the order attempts are graded in.
    pub fn questions_for_course(
        &self,
        course_id: CourseId,
    ) -> impl Iterator<Item = &QuizQuestion> {
        self.questions
            .values()
            .filter(move |question| question.belongs_to(course_id))
    }

    //
    // ─── PROGRESS ──────────────────────────────────────────────────────────────
    //

    /// Upsert the `(user_id, course_id)` record and mark `module_id` complete.
    ///
    /// Completing the same module again leaves the record unchanged.
    pub fn record_module_completion(
        &mut self,
        user_id: &str,
        course_id: CourseId,
        module_id: ModuleId,
    ) -> UserProgress {
        let progress = self.progress_entry(user_id, course_id);
        progress.complete(module_id);
        progress.clone()
    }

    /// Fetch progress, persisting an empty record on first access.
    pub fn get_progress(&mut self, user_id: &str, course_id: CourseId) -> UserProgress {
        self.progress_entry(user_id, course_id).clone()
    }

    /// Look up progress without materializing a record.
    #[must_use]
    pub fn peek_progress(&self, user_id: &str, course_id: CourseId) -> Option<&UserProgress> {
        self.progress.get(&(user_id.to_owned(), course_id))
    }

    fn progress_entry(&mut self, user_id: &str, course_id: CourseId) -> &mut UserProgress {
        self.progress
            .entry((user_id.to_owned(), course_id))
            .or_insert_with(|| UserProgress::new(user_id, course_id))
    }

    //
    // ─── COUNTS ────────────────────────────────────────────────────────────────
    //

    #[must_use]
    pub fn course_count(&self) -> usize {
        self.courses.len()
    }

    #[must_use]
    pub fn module_count(&self) -> usize {
        self.modules.len()
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn progress_count(&self) -> usize {
        self.progress.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kuizmo_core::model::QuestionDraft;

    fn course(store: &mut RecordStore, title: &str) -> CourseId {
        store.create_course(CourseDraft::new(title, "desc")).id()
    }

    fn module(store: &mut RecordStore, course_id: CourseId, title: &str) -> ModuleId {
        store
            .create_module(course_id, ModuleDraft::new(title, "body"))
            .id()
    }

    fn question(store: &mut RecordStore, course_id: CourseId, answer_index: i64) -> QuestionId {
        let content = QuestionDraft::new("Q", ["A", "B", "C"], answer_index)
            .validate()
            .unwrap();
        store.create_question(course_id, content).id()
    }

    #[test]
    fn ids_are_sequential_per_type_despite_deletions() {
        let mut store = RecordStore::new();
        let first = course(&mut store, "one");
        let second = course(&mut store, "two");
        store.delete_course(first);
        let third = course(&mut store, "three");

        assert_eq!([first, second, third].map(|id| id.value()), [1, 2, 3]);

        let m1 = module(&mut store, second, "m1");
        store.delete_module(m1);
        let m2 = module(&mut store, second, "m2");
        assert_eq!((m1.value(), m2.value()), (1, 2));

        let q1 = question(&mut store, second, 0);
        store.delete_question(q1);
        let q2 = question(&mut store, third, 0);
        assert_eq!((q1.value(), q2.value()), (1, 2));
    }

    #[test]
    fn failed_update_does_not_advance_counters() {
        let mut store = RecordStore::new();
        assert!(matches!(
            store.update_course(CourseId::new(7), CourseDraft::new("x", "y")),
            Err(StorageError::CourseNotFound(id)) if id == CourseId::new(7)
        ));
        assert_eq!(course(&mut store, "first").value(), 1);
    }

    #[test]
    fn update_replaces_fields_in_place() {
        let mut store = RecordStore::new();
        let id = store
            .create_course(CourseDraft::new("Old", "old").with_tags(["a"]))
            .id();

        let updated = store
            .update_course(id, CourseDraft::new("New", "new"))
            .unwrap();

        assert_eq!(updated.title(), "New");
        assert!(updated.tags().is_empty());
        assert_eq!(store.course(id).unwrap(), &updated);
    }

    #[test]
    fn update_module_and_question_report_missing_ids() {
        let mut store = RecordStore::new();
        assert!(matches!(
            store.update_module(ModuleId::new(1), ModuleDraft::new("t", "c")),
            Err(StorageError::ModuleNotFound(_))
        ));

        let content = QuestionDraft::new("Q", ["A", "B"], 0).validate().unwrap();
        assert!(matches!(
            store.update_question(QuestionId::new(1), content),
            Err(StorageError::QuestionNotFound(_))
        ));
    }

    #[test]
    fn deleting_a_course_cascades_and_spares_others() {
        let mut store = RecordStore::new();
        let doomed = course(&mut store, "doomed");
        let kept = course(&mut store, "kept");

        let doomed_module = module(&mut store, doomed, "a");
        let kept_module = module(&mut store, kept, "b");
        question(&mut store, doomed, 0);
        let kept_question = question(&mut store, kept, 1);

        store.record_module_completion("ada", doomed, doomed_module);
        store.record_module_completion("ada", kept, kept_module);
        store.get_progress("bob", doomed);

        assert!(store.delete_course(doomed));

        assert!(store.course(doomed).is_none());
        assert_eq!(store.modules_for_course(doomed).count(), 0);
        assert_eq!(store.questions_for_course(doomed).count(), 0);
        assert!(store.peek_progress("ada", doomed).is_none());
        assert!(store.peek_progress("bob", doomed).is_none());

        assert!(store.course(kept).is_some());
        assert!(store.module(kept_module).is_some());
        assert!(store.question(kept_question).is_some());
        assert_eq!(
            store.peek_progress("ada", kept).unwrap().completed_module_ids(),
            [kept_module]
        );
        assert_eq!(store.module_count(), 1);
        assert_eq!(store.question_count(), 1);
        assert_eq!(store.progress_count(), 1);
    }

    #[test]
    fn deleting_a_missing_course_is_a_no_op() {
        let mut store = RecordStore::new();
        let id = course(&mut store, "only");
        assert!(!store.delete_course(CourseId::new(99)));
        assert!(store.course(id).is_some());
    }

    #[test]
    fn deleting_a_module_strips_it_from_all_progress() {
        let mut store = RecordStore::new();
        let c1 = course(&mut store, "c1");
        let c2 = course(&mut store, "c2");
        let m1 = module(&mut store, c1, "m1");
        let m2 = module(&mut store, c1, "m2");
        let m3 = module(&mut store, c2, "m3");

        store.record_module_completion("ada", c1, m1);
        store.record_module_completion("ada", c1, m2);
        store.record_module_completion("bob", c1, m1);
        store.record_module_completion("bob", c2, m3);

        assert!(store.delete_module(m1));

        assert_eq!(store.peek_progress("ada", c1).unwrap().completed_module_ids(), [m2]);
        assert!(store.peek_progress("bob", c1).unwrap().completed_module_ids().is_empty());
        assert_eq!(store.peek_progress("bob", c2).unwrap().completed_module_ids(), [m3]);
    }

    #[test]
    fn deleting_a_missing_module_leaves_progress_alone() {
        let mut store = RecordStore::new();
        let c1 = course(&mut store, "c1");
        // Completion of an id the store never issued; only reachable by trusting the caller.
        store.record_module_completion("ada", c1, ModuleId::new(42));

        assert!(!store.delete_module(ModuleId::new(42)));
        assert_eq!(
            store.peek_progress("ada", c1).unwrap().completed_module_ids(),
            [ModuleId::new(42)]
        );
    }

    #[test]
    fn recording_completion_twice_is_idempotent() {
        let mut store = RecordStore::new();
        let c1 = course(&mut store, "c1");
        let m1 = module(&mut store, c1, "m1");

        let once = store.record_module_completion("ada", c1, m1);
        let twice = store.record_module_completion("ada", c1, m1);

        assert_eq!(once, twice);
        assert_eq!(twice.completed_module_ids(), [m1]);
    }

    #[test]
    fn get_progress_materializes_an_empty_record() {
        let mut store = RecordStore::new();
        let c1 = course(&mut store, "c1");
        assert!(store.peek_progress("ada", c1).is_none());

        let progress = store.get_progress("ada", c1);

        assert_eq!(progress.user_id(), "ada");
        assert_eq!(progress.course_id(), c1);
        assert!(progress.completed_module_ids().is_empty());
        assert_eq!(store.peek_progress("ada", c1), Some(&progress));
    }

    #[test]
    fn store_does_not_check_course_references() {
        let mut store = RecordStore::new();
        let orphan = module(&mut store, CourseId::new(5), "orphan");
        assert_eq!(store.module(orphan).unwrap().course_id(), CourseId::new(5));
    }

    #[test]
    fn course_listings_follow_creation_order() {
        let mut store = RecordStore::new();
        let c1 = course(&mut store, "c1");
        let q1 = question(&mut store, c1, 2);
        let q2 = question(&mut store, c1, 1);

        let titles: Vec<_> = store.courses().map(Course::title).collect();
        assert_eq!(titles, ["c1"]);
        let ids: Vec<_> = store.questions_for_course(c1).map(QuizQuestion::id).collect();
        assert_eq!(ids, [q1, q2]);
    }
}

use crate::model::ids::{CourseId, ModuleId};

/// Which modules of one course a user has completed.
///
/// Keyed by `(user_id, course_id)`. `completed_module_ids` keeps first-completion
/// order and never holds duplicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProgress {
    user_id: String,
    course_id: CourseId,
    completed_module_ids: Vec<ModuleId>,
}

impl UserProgress {
    /// An empty record for a user who has not completed anything yet.
    #[must_use]
    pub fn new(user_id: impl Into<String>, course_id: CourseId) -> Self {
        Self {
            user_id: user_id.into(),
            course_id,
            completed_module_ids: Vec::new(),
        }
    }

    #[must_use]
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    #[must_use]
    pub fn course_id(&self) -> CourseId {
        self.course_id
    }

    #[must_use]
    pub fn completed_module_ids(&self) -> &[ModuleId] {
        &self.completed_module_ids
    }

    #[must_use]
    pub fn has_completed(&self, module_id: ModuleId) -> bool {
        self.completed_module_ids.contains(&module_id)
    }

    /// Mark a module complete. Returns false if it already was.
    pub fn complete(&mut self, module_id: ModuleId) -> bool {
        if self.has_completed(module_id) {
            return false;
        }
        self.completed_module_ids.push(module_id);
        true
    }

    /// Drop a module from the completed list. Returns false if it was not there.
    pub fn forget(&mut self, module_id: ModuleId) -> bool {
        let before = self.completed_module_ids.len();
        self.completed_module_ids.retain(|id| *id != module_id);
        before != self.completed_module_ids.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_is_idempotent_and_ordered() {
        let mut progress = UserProgress::new("ada", CourseId::new(1));
        assert!(progress.complete(ModuleId::new(3)));
        assert!(progress.complete(ModuleId::new(1)));
        assert!(!progress.complete(ModuleId::new(3)));

        assert_eq!(
            progress.completed_module_ids(),
            [ModuleId::new(3), ModuleId::new(1)]
        );
    }

    #[test]
    fn forget_only_touches_the_given_module() {
        let mut progress = UserProgress::new("ada", CourseId::new(1));
        progress.complete(ModuleId::new(1));
        progress.complete(ModuleId::new(2));

        assert!(progress.forget(ModuleId::new(1)));
        assert!(!progress.forget(ModuleId::new(1)));
        assert_eq!(progress.completed_module_ids(), [ModuleId::new(2)]);
    }
}

use crate::model::ids::{CourseId, ModuleId};

/// Title and body of a lesson.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ModuleDraft {
    pub title: String,
    pub content: String,
}

impl ModuleDraft {
    #[must_use]
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    pub fn assign_id(self, id: ModuleId, course_id: CourseId) -> Module {
        Module {
            id,
            course_id,
            title: self.title,
            content: self.content,
        }
    }
}

/// A single lesson belonging to a course.
///
/// `course_id` is a back-reference only; the course does not hold its modules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Module {
    id: ModuleId,
    course_id: CourseId,
    title: String,
    content: String,
}

impl Module {
    #[must_use]
    pub fn id(&self) -> ModuleId {
        self.id
    }

    #[must_use]
    pub fn course_id(&self) -> CourseId {
        self.course_id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns true when this module is filed under `course_id`.
    #[must_use]
    pub fn belongs_to(&self, course_id: CourseId) -> bool {
        self.course_id == course_id
    }

    pub fn apply(&mut self, draft: ModuleDraft) {
        self.title = draft.title;
        self.content = draft.content;
    }
}

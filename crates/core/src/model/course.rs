use crate::model::ids::CourseId;

//
// ─── COURSE TYPES ──────────────────────────────────────────────────────────────
//

/// Mutable fields of a course, as supplied on create and update.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CourseDraft {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
}

impl CourseDraft {
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            tags: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn assign_id(self, id: CourseId) -> Course {
        Course {
            id,
            title: self.title,
            description: self.description,
            tags: self.tags,
        }
    }
}

/// Top-level learning unit. Modules and quiz questions point back at it by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    id: CourseId,
    title: String,
    description: String,
    tags: Vec<String>,
}

impl Course {
    #[must_use]
    pub fn id(&self) -> CourseId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Tags in the order they were supplied.
    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Replace every mutable field, keeping the id.
    pub fn apply(&mut self, draft: CourseDraft) {
        self.title = draft.title;
        self.description = draft.description;
        self.tags = draft.tags;
    }
}

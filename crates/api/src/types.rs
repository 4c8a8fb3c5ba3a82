//! Request and response bodies.
//!
//! Requests convert into core drafts; responses are built from core entities
//! so the wire shape stays independent of the domain types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use kuizmo_core::QuizResult;
use kuizmo_core::model::{
    Course, CourseDraft, CourseId, Module, ModuleDraft, ModuleId, QuestionDraft, QuestionId,
    QuizQuestion, UserProgress,
};

//
// ─── REQUESTS ──────────────────────────────────────────────────────────────────
//

/// Body for creating or replacing a course.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CourseRequest {
    pub title: String,
    pub description: String,
    /// Defaults to an empty list.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl From<CourseRequest> for CourseDraft {
    fn from(request: CourseRequest) -> Self {
        CourseDraft::new(request.title, request.description).with_tags(request.tags)
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ModuleRequest {
    pub title: String,
    pub content: String,
}

impl From<ModuleRequest> for ModuleDraft {
    fn from(request: ModuleRequest) -> Self {
        ModuleDraft::new(request.title, request.content)
    }
}

/// `answer_index` is signed so out-of-range negatives reach validation
/// instead of failing deserialization.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct QuestionRequest {
    pub prompt: String,
    /// At least two options.
    pub options: Vec<String>,
    /// Zero-based index into `options`.
    pub answer_index: i64,
}

impl From<QuestionRequest> for QuestionDraft {
    fn from(request: QuestionRequest) -> Self {
        QuestionDraft::new(request.prompt, request.options, request.answer_index)
    }
}

/// One chosen option index per course question, in question order.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct AttemptRequest {
    pub answers: Vec<i64>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ProgressUpdateRequest {
    #[schema(value_type = u64)]
    pub module_id: ModuleId,
}

//
// ─── RESPONSES ─────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    #[must_use]
    pub fn ok() -> Self {
        Self {
            status: "ok".to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CourseResponse {
    #[schema(value_type = u64)]
    pub id: CourseId,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
}

impl From<Course> for CourseResponse {
    fn from(course: Course) -> Self {
        Self {
            id: course.id(),
            title: course.title().to_owned(),
            description: course.description().to_owned(),
            tags: course.tags().to_vec(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ModuleResponse {
    #[schema(value_type = u64)]
    pub id: ModuleId,
    #[schema(value_type = u64)]
    pub course_id: CourseId,
    pub title: String,
    pub content: String,
}

impl From<Module> for ModuleResponse {
    fn from(module: Module) -> Self {
        Self {
            id: module.id(),
            course_id: module.course_id(),
            title: module.title().to_owned(),
            content: module.content().to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct QuestionResponse {
    #[schema(value_type = u64)]
    pub id: QuestionId,
    #[schema(value_type = u64)]
    pub course_id: CourseId,
    pub prompt: String,
    pub options: Vec<String>,
    pub answer_index: usize,
}

impl From<QuizQuestion> for QuestionResponse {
    fn from(question: QuizQuestion) -> Self {
        Self {
            id: question.id(),
            course_id: question.course_id(),
            prompt: question.prompt().to_owned(),
            options: question.options().to_vec(),
            answer_index: question.answer_index(),
        }
    }
}

/// Outcome of a graded quiz attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AttemptResponse {
    pub score: usize,
    pub total: usize,
    /// Ids of the correctly answered questions, in question order.
    #[schema(value_type = Vec<u64>)]
    pub correct_question_ids: Vec<QuestionId>,
}

impl From<QuizResult> for AttemptResponse {
    fn from(result: QuizResult) -> Self {
        Self {
            score: result.score,
            total: result.total,
            correct_question_ids: result.correct_question_ids,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProgressResponse {
    pub user_id: String,
    #[schema(value_type = u64)]
    pub course_id: CourseId,
    #[schema(value_type = Vec<u64>)]
    pub completed_module_ids: Vec<ModuleId>,
}

impl From<UserProgress> for ProgressResponse {
    fn from(progress: UserProgress) -> Self {
        Self {
            user_id: progress.user_id().to_owned(),
            course_id: progress.course_id(),
            completed_module_ids: progress.completed_module_ids().to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn course_request_tags_default_to_empty() {
        let request: CourseRequest =
            serde_json::from_str(r#"{"title":"Rust","description":"Ownership"}"#).unwrap();
        assert!(request.tags.is_empty());

        let draft = CourseDraft::from(request);
        assert_eq!(draft.title, "Rust");
    }

    #[test]
    fn negative_answer_index_deserializes() {
        let request: QuestionRequest =
            serde_json::from_str(r#"{"prompt":"p","options":["a","b"],"answer_index":-1}"#)
                .unwrap();
        assert_eq!(request.answer_index, -1);
    }

    #[test]
    fn module_response_renders_plain_integer_ids() {
        let module = ModuleDraft::new("Intro", "...").assign_id(ModuleId::new(3), CourseId::new(1));
        let value = serde_json::to_value(ModuleResponse::from(module)).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "id": 3, "course_id": 1, "title": "Intro", "content": "..." })
        );
    }
}

//! OpenAPI document for the Kuizmo API, served at `/openapi.json`.

use axum::Json;
use utoipa::OpenApi;

use super::{courses, health, modules, progress, quizzes};
use crate::error::ErrorBody;
use crate::types::{
    AttemptRequest, AttemptResponse, CourseRequest, CourseResponse, HealthResponse,
    ModuleRequest, ModuleResponse, ProgressResponse, ProgressUpdateRequest, QuestionRequest,
    QuestionResponse,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Kuizmo API",
        version = "1.0.0",
        description = "A study API for managing courses, modules, quizzes, and progress."
    ),
    tags(
        (name = "system", description = "Service health"),
        (name = "courses", description = "Course management"),
        (name = "modules", description = "Lessons within a course"),
        (name = "quizzes", description = "Quiz questions and graded attempts"),
        (name = "progress", description = "Per-user module completion")
    ),
    paths(
        health::health,
        courses::list,
        courses::create,
        courses::get,
        courses::update,
        courses::delete,
        modules::list,
        modules::create,
        modules::get,
        modules::update,
        modules::delete,
        quizzes::list,
        quizzes::create,
        quizzes::get,
        quizzes::update,
        quizzes::delete,
        quizzes::attempt,
        progress::get,
        progress::record,
    ),
    components(schemas(
        ErrorBody,
        HealthResponse,
        CourseRequest,
        CourseResponse,
        ModuleRequest,
        ModuleResponse,
        QuestionRequest,
        QuestionResponse,
        AttemptRequest,
        AttemptResponse,
        ProgressUpdateRequest,
        ProgressResponse,
    ))
)]
pub struct ApiDoc;

pub(super) async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::Value;

    fn methods(doc: &Value, path: &str) -> Vec<String> {
        let mut methods: Vec<String> = doc["paths"][path]
            .as_object()
            .unwrap_or_else(|| panic!("{path} missing from document"))
            .keys()
            .filter(|key| ["get", "post", "put", "delete"].contains(&key.as_str()))
            .cloned()
            .collect();
        methods.sort();
        methods
    }

    #[test]
    fn document_lists_every_route() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        assert_eq!(doc["info"]["title"], "Kuizmo API");
        assert_eq!(doc["info"]["version"], "1.0.0");

        let expected: [(&str, &[&str]); 9] = [
            ("/health", &["get"]),
            ("/courses", &["get", "post"]),
            ("/courses/{course_id}", &["delete", "get", "put"]),
            ("/courses/{course_id}/modules", &["get", "post"]),
            ("/courses/{course_id}/modules/{module_id}", &["delete", "get", "put"]),
            ("/courses/{course_id}/quizzes", &["get", "post"]),
            ("/courses/{course_id}/quizzes/attempt", &["post"]),
            ("/courses/{course_id}/quizzes/{question_id}", &["delete", "get", "put"]),
            ("/courses/{course_id}/progress/{user_id}", &["get", "post"]),
        ];
        let paths = doc["paths"].as_object().unwrap();
        assert_eq!(paths.len(), expected.len());
        for (path, verbs) in expected {
            assert_eq!(methods(&doc, path), verbs, "methods for {path}");
        }
    }

    #[test]
    fn error_body_schema_is_published() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        assert!(doc["components"]["schemas"]["ErrorBody"]["properties"]["detail"].is_object());
    }
}

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use kuizmo_core::model::{CourseId, QuestionId};
use services::AppServices;

use crate::error::{ApiResult, ErrorBody};
use crate::extract::{ApiJson, ApiPath};
use crate::types::{AttemptRequest, AttemptResponse, QuestionRequest, QuestionResponse};

#[utoipa::path(
    get,
    path = "/courses/{course_id}/quizzes",
    tag = "quizzes",
    params(("course_id" = u64, Path, description = "Course id")),
    responses(
        (
            status = 200,
            description = "The course's questions in creation order",
            body = [QuestionResponse]
        ),
        (status = 404, description = "Course not found", body = ErrorBody),
    )
)]
pub(super) async fn list(
    State(services): State<AppServices>,
    ApiPath(course_id): ApiPath<CourseId>,
) -> ApiResult<Json<Vec<QuestionResponse>>> {
    let questions = services.quizzes().list_questions(course_id).await?;
    Ok(Json(
        questions.into_iter().map(QuestionResponse::from).collect(),
    ))
}

#[utoipa::path(
    post,
    path = "/courses/{course_id}/quizzes",
    tag = "quizzes",
    params(("course_id" = u64, Path, description = "Course id")),
    request_body = QuestionRequest,
    responses(
        (status = 201, description = "Question created", body = QuestionResponse),
        (status = 404, description = "Course not found", body = ErrorBody),
        (status = 422, description = "Invalid options or answer_index", body = ErrorBody),
    )
)]
pub(super) async fn create(
    State(services): State<AppServices>,
    ApiPath(course_id): ApiPath<CourseId>,
    ApiJson(request): ApiJson<QuestionRequest>,
) -> ApiResult<(StatusCode, Json<QuestionResponse>)> {
    let question = services
        .quizzes()
        .create_question(course_id, request.into())
        .await?;
    Ok((StatusCode::CREATED, Json(question.into())))
}

#[utoipa::path(
    get,
    path = "/courses/{course_id}/quizzes/{question_id}",
    tag = "quizzes",
    params(
        ("course_id" = u64, Path, description = "Course id"),
        ("question_id" = u64, Path, description = "Question id"),
    ),
    responses(
        (status = 200, description = "The question", body = QuestionResponse),
        (status = 404, description = "Course or question not found", body = ErrorBody),
    )
)]
pub(super) async fn get(
    State(services): State<AppServices>,
    ApiPath((course_id, question_id)): ApiPath<(CourseId, QuestionId)>,
) -> ApiResult<Json<QuestionResponse>> {
    let question = services
        .quizzes()
        .get_question(course_id, question_id)
        .await?;
    Ok(Json(question.into()))
}

#[utoipa::path(
    put,
    path = "/courses/{course_id}/quizzes/{question_id}",
    tag = "quizzes",
    params(
        ("course_id" = u64, Path, description = "Course id"),
        ("question_id" = u64, Path, description = "Question id"),
    ),
    request_body = QuestionRequest,
    responses(
        (status = 200, description = "Question replaced", body = QuestionResponse),
        (status = 404, description = "Course or question not found", body = ErrorBody),
        (status = 422, description = "Invalid options or answer_index", body = ErrorBody),
    )
)]
pub(super) async fn update(
    State(services): State<AppServices>,
    ApiPath((course_id, question_id)): ApiPath<(CourseId, QuestionId)>,
    ApiJson(request): ApiJson<QuestionRequest>,
) -> ApiResult<Json<QuestionResponse>> {
    let question = services
        .quizzes()
        .update_question(course_id, question_id, request.into())
        .await?;
    Ok(Json(question.into()))
}

#[utoipa::path(
    delete,
    path = "/courses/{course_id}/quizzes/{question_id}",
    tag = "quizzes",
    params(
        ("course_id" = u64, Path, description = "Course id"),
        ("question_id" = u64, Path, description = "Question id"),
    ),
    responses(
        (status = 204, description = "Question deleted"),
        (status = 404, description = "Course or question not found", body = ErrorBody),
    )
)]
pub(super) async fn delete(
    State(services): State<AppServices>,
    ApiPath((course_id, question_id)): ApiPath<(CourseId, QuestionId)>,
) -> ApiResult<StatusCode> {
    services
        .quizzes()
        .delete_question(course_id, question_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/courses/{course_id}/quizzes/attempt",
    tag = "quizzes",
    params(("course_id" = u64, Path, description = "Course id")),
    request_body = AttemptRequest,
    responses(
        (status = 200, description = "Graded attempt", body = AttemptResponse),
        (status = 400, description = "No questions, or wrong answer count", body = ErrorBody),
        (status = 404, description = "Course not found", body = ErrorBody),
    )
)]
pub(super) async fn attempt(
    State(services): State<AppServices>,
    ApiPath(course_id): ApiPath<CourseId>,
    ApiJson(request): ApiJson<AttemptRequest>,
) -> ApiResult<Json<AttemptResponse>> {
    let result = services
        .quizzes()
        .attempt(course_id, &request.answers)
        .await?;
    Ok(Json(result.into()))
}

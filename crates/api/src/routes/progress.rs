use axum::Json;
use axum::extract::State;
use kuizmo_core::model::CourseId;
use services::AppServices;

use crate::error::{ApiResult, ErrorBody};
use crate::extract::{ApiJson, ApiPath};
use crate::types::{ProgressResponse, ProgressUpdateRequest};

#[utoipa::path(
    get,
    path = "/courses/{course_id}/progress/{user_id}",
    tag = "progress",
    params(
        ("course_id" = u64, Path, description = "Course id"),
        ("user_id" = String, Path, description = "Opaque user identifier"),
    ),
    responses(
        (
            status = 200,
            description = "Progress, empty if the user has not started",
            body = ProgressResponse
        ),
        (status = 404, description = "Course not found", body = ErrorBody),
    )
)]
pub(super) async fn get(
    State(services): State<AppServices>,
    ApiPath((course_id, user_id)): ApiPath<(CourseId, String)>,
) -> ApiResult<Json<ProgressResponse>> {
    let progress = services
        .progress()
        .get_progress(&user_id, course_id)
        .await?;
    Ok(Json(progress.into()))
}

#[utoipa::path(
    post,
    path = "/courses/{course_id}/progress/{user_id}",
    tag = "progress",
    params(
        ("course_id" = u64, Path, description = "Course id"),
        ("user_id" = String, Path, description = "Opaque user identifier"),
    ),
    request_body = ProgressUpdateRequest,
    responses(
        (status = 200, description = "Updated progress", body = ProgressResponse),
        (status = 404, description = "Course or module not found", body = ErrorBody),
    )
)]
pub(super) async fn record(
    State(services): State<AppServices>,
    ApiPath((course_id, user_id)): ApiPath<(CourseId, String)>,
    ApiJson(request): ApiJson<ProgressUpdateRequest>,
) -> ApiResult<Json<ProgressResponse>> {
    let progress = services
        .progress()
        .record_completion(&user_id, course_id, request.module_id)
        .await?;
    Ok(Json(progress.into()))
}

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use kuizmo_core::model::CourseId;
use services::AppServices;

use crate::error::{ApiResult, ErrorBody};
use crate::extract::{ApiJson, ApiPath};
use crate::types::{CourseRequest, CourseResponse};

#[utoipa::path(
    get,
    path = "/courses",
    tag = "courses",
    responses(
        (status = 200, description = "All courses in creation order", body = [CourseResponse]),
    )
)]
pub(super) async fn list(
    State(services): State<AppServices>,
) -> ApiResult<Json<Vec<CourseResponse>>> {
    let courses = services.courses().list_courses().await?;
    Ok(Json(courses.into_iter().map(CourseResponse::from).collect()))
}

#[utoipa::path(
    post,
    path = "/courses",
    tag = "courses",
    request_body = CourseRequest,
    responses(
        (status = 201, description = "Course created", body = CourseResponse),
        (status = 422, description = "Malformed body", body = ErrorBody),
    )
)]
pub(super) async fn create(
    State(services): State<AppServices>,
    ApiJson(request): ApiJson<CourseRequest>,
) -> ApiResult<(StatusCode, Json<CourseResponse>)> {
    let course = services.courses().create_course(request.into()).await?;
    Ok((StatusCode::CREATED, Json(course.into())))
}

#[utoipa::path(
    get,
    path = "/courses/{course_id}",
    tag = "courses",
    params(("course_id" = u64, Path, description = "Course id, greater than 0")),
    responses(
        (status = 200, description = "The course", body = CourseResponse),
        (status = 404, description = "Course not found", body = ErrorBody),
        (status = 422, description = "Course id is 0", body = ErrorBody),
    )
)]
pub(super) async fn get(
    State(services): State<AppServices>,
    ApiPath(course_id): ApiPath<CourseId>,
) -> ApiResult<Json<CourseResponse>> {
    let course = services.courses().get_course(course_id).await?;
    Ok(Json(course.into()))
}

#[utoipa::path(
    put,
    path = "/courses/{course_id}",
    tag = "courses",
    params(("course_id" = u64, Path, description = "Course id")),
    request_body = CourseRequest,
    responses(
        (status = 200, description = "Course replaced", body = CourseResponse),
        (status = 404, description = "Course not found", body = ErrorBody),
    )
)]
pub(super) async fn update(
    State(services): State<AppServices>,
    ApiPath(course_id): ApiPath<CourseId>,
    ApiJson(request): ApiJson<CourseRequest>,
) -> ApiResult<Json<CourseResponse>> {
    let course = services
        .courses()
        .update_course(course_id, request.into())
        .await?;
    Ok(Json(course.into()))
}

#[utoipa::path(
    delete,
    path = "/courses/{course_id}",
    tag = "courses",
    params(("course_id" = u64, Path, description = "Course id")),
    responses(
        (status = 204, description = "Course and everything under it deleted"),
        (status = 404, description = "Course not found", body = ErrorBody),
    )
)]
pub(super) async fn delete(
    State(services): State<AppServices>,
    ApiPath(course_id): ApiPath<CourseId>,
) -> ApiResult<StatusCode> {
    services.courses().delete_course(course_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

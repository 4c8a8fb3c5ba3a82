use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use kuizmo_core::model::{CourseId, ModuleId};
use services::AppServices;

use crate::error::{ApiResult, ErrorBody};
use crate::extract::{ApiJson, ApiPath};
use crate::types::{ModuleRequest, ModuleResponse};

#[utoipa::path(
    get,
    path = "/courses/{course_id}/modules",
    tag = "modules",
    params(("course_id" = u64, Path, description = "Course id")),
    responses(
        (status = 200, description = "The course's modules", body = [ModuleResponse]),
        (status = 404, description = "Course not found", body = ErrorBody),
    )
)]
pub(super) async fn list(
    State(services): State<AppServices>,
    ApiPath(course_id): ApiPath<CourseId>,
) -> ApiResult<Json<Vec<ModuleResponse>>> {
    let modules = services.modules().list_modules(course_id).await?;
    Ok(Json(modules.into_iter().map(ModuleResponse::from).collect()))
}

#[utoipa::path(
    post,
    path = "/courses/{course_id}/modules",
    tag = "modules",
    params(("course_id" = u64, Path, description = "Course id")),
    request_body = ModuleRequest,
    responses(
        (status = 201, description = "Module created", body = ModuleResponse),
        (status = 404, description = "Course not found", body = ErrorBody),
    )
)]
pub(super) async fn create(
    State(services): State<AppServices>,
    ApiPath(course_id): ApiPath<CourseId>,
    ApiJson(request): ApiJson<ModuleRequest>,
) -> ApiResult<(StatusCode, Json<ModuleResponse>)> {
    let module = services
        .modules()
        .create_module(course_id, request.into())
        .await?;
    Ok((StatusCode::CREATED, Json(module.into())))
}

#[utoipa::path(
    get,
    path = "/courses/{course_id}/modules/{module_id}",
    tag = "modules",
    params(
        ("course_id" = u64, Path, description = "Course id"),
        ("module_id" = u64, Path, description = "Module id"),
    ),
    responses(
        (status = 200, description = "The module", body = ModuleResponse),
        (status = 404, description = "Course or module not found", body = ErrorBody),
    )
)]
pub(super) async fn get(
    State(services): State<AppServices>,
    ApiPath((course_id, module_id)): ApiPath<(CourseId, ModuleId)>,
) -> ApiResult<Json<ModuleResponse>> {
    let module = services.modules().get_module(course_id, module_id).await?;
    Ok(Json(module.into()))
}

#[utoipa::path(
    put,
    path = "/courses/{course_id}/modules/{module_id}",
    tag = "modules",
    params(
        ("course_id" = u64, Path, description = "Course id"),
        ("module_id" = u64, Path, description = "Module id"),
    ),
    request_body = ModuleRequest,
    responses(
        (status = 200, description = "Module replaced", body = ModuleResponse),
        (status = 404, description = "Course or module not found", body = ErrorBody),
    )
)]
pub(super) async fn update(
    State(services): State<AppServices>,
    ApiPath((course_id, module_id)): ApiPath<(CourseId, ModuleId)>,
    ApiJson(request): ApiJson<ModuleRequest>,
) -> ApiResult<Json<ModuleResponse>> {
    let module = services
        .modules()
        .update_module(course_id, module_id, request.into())
        .await?;
    Ok(Json(module.into()))
}

#[utoipa::path(
    delete,
    path = "/courses/{course_id}/modules/{module_id}",
    tag = "modules",
    params(
        ("course_id" = u64, Path, description = "Course id"),
        ("module_id" = u64, Path, description = "Module id"),
    ),
    responses(
        (status = 204, description = "Module deleted and dropped from all progress"),
        (status = 404, description = "Course or module not found", body = ErrorBody),
    )
)]
pub(super) async fn delete(
    State(services): State<AppServices>,
    ApiPath((course_id, module_id)): ApiPath<(CourseId, ModuleId)>,
) -> ApiResult<StatusCode> {
    services
        .modules()
        .delete_module(course_id, module_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

use axum::Json;

use crate::types::HealthResponse;

#[utoipa::path(
    get,
    path = "/health",
    tag = "system",
    responses((status = 200, description = "Service is up", body = HealthResponse))
)]
pub(super) async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

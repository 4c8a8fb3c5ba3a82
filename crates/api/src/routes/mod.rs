//! Route table and handlers.

mod courses;
mod health;
mod modules;
pub mod openapi;
mod progress;
mod quizzes;

use axum::Router;
use axum::http::StatusCode;
use axum::http::header::ALLOW;
use axum::middleware;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use services::AppServices;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::error::ApiError;

/// Build the full router over one set of services.
pub fn build_router(services: AppServices) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/openapi.json", get(openapi::openapi_json))
        // Courses
        .route("/courses", get(courses::list).post(courses::create))
        .route(
            "/courses/:course_id",
            get(courses::get).put(courses::update).delete(courses::delete),
        )
        // Modules
        .route(
            "/courses/:course_id/modules",
            get(modules::list).post(modules::create),
        )
        .route(
            "/courses/:course_id/modules/:module_id",
            get(modules::get).put(modules::update).delete(modules::delete),
        )
        // Quizzes
        .route(
            "/courses/:course_id/quizzes",
            get(quizzes::list).post(quizzes::create),
        )
        .route("/courses/:course_id/quizzes/attempt", post(quizzes::attempt))
        .route(
            "/courses/:course_id/quizzes/:question_id",
            get(quizzes::get).put(quizzes::update).delete(quizzes::delete),
        )
        // Progress
        .route(
            "/courses/:course_id/progress/:user_id",
            get(progress::get).post(progress::record),
        )
        .fallback(route_not_found)
        .layer(middleware::map_response(method_not_allowed_body))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(services)
}

async fn route_not_found() -> ApiError {
    ApiError::not_found("Not Found")
}

/// Gives the router's bodiless 405 the shared error body, keeping `Allow`.
async fn method_not_allowed_body(response: Response) -> Response {
    if response.status() != StatusCode::METHOD_NOT_ALLOWED {
        return response;
    }
    let allow = response.headers().get(ALLOW).cloned();
    let mut rendered = ApiError::method_not_allowed().into_response();
    if let Some(allow) = allow {
        rendered.headers_mut().insert(ALLOW, allow);
    }
    rendered
}

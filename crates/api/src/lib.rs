//! HTTP surface of the Kuizmo study API.
//!
//! Handlers are thin: they decode the request, call into [`services`], and
//! render either a JSON body or an [`ApiError`].

#![forbid(unsafe_code)]

pub mod error;
pub mod extract;
pub mod routes;
pub mod types;

pub use error::{ApiError, ApiResult};
pub use routes::build_router;
pub use routes::openapi::ApiDoc;

//! Extractors whose rejections share the `{"detail": ...}` error body.

use axum::Json;
use axum::async_trait;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use kuizmo_core::model::{CourseId, ModuleId, QuestionId};
use serde::de::DeserializeOwned;

use crate::error::ApiError;

const ID_NOT_POSITIVE: &str = "ensure this value is greater than 0";

/// `Json<T>` with rejections rendered as [`ApiError`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ApiJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::new(rejection.status(), rejection.body_text()))?;
        Ok(Self(value))
    }
}

/// Path segments that may carry store-assigned ids.
pub trait PathIds {
    /// False when an id segment can never name a stored record.
    fn ids_positive(&self) -> bool;
}

macro_rules! positive_path_id {
    ($($id:ty),*) => {
        $(
            impl PathIds for $id {
                fn ids_positive(&self) -> bool {
                    self.value() > 0
                }
            }
        )*
    };
}

positive_path_id!(CourseId, ModuleId, QuestionId);

impl PathIds for String {
    fn ids_positive(&self) -> bool {
        true
    }
}

impl<A: PathIds, B: PathIds> PathIds for (A, B) {
    fn ids_positive(&self) -> bool {
        self.0.ids_positive() && self.1.ids_positive()
    }
}

/// `Path<T>` with rejections rendered as [`ApiError`].
///
/// Works for a single id newtype or a tuple such as `(CourseId, ModuleId)`.
/// A zero id is rejected with 422 before the handler runs.
#[derive(Debug, Clone, Copy)]
pub struct ApiPath<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for ApiPath<T>
where
    S: Send + Sync,
    T: DeserializeOwned + PathIds + Send,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError::new(rejection.status(), rejection.body_text()))?;
        if !value.ids_positive() {
            return Err(ApiError::unprocessable(ID_NOT_POSITIVE));
        }
        Ok(Self(value))
    }
}

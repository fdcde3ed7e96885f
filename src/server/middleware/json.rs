use axum::extract::{FromRequest, Request};

use crate::server::error::AppError;

/// `axum::Json` body extractor whose rejection goes through `AppError`.
///
/// Missing fields, wrong types and non-JSON bodies become 400 with the usual
/// `{"error": "..."}` body.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    axum::Json<T>: FromRequest<S, Rejection = axum::extract::rejection::JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let axum::Json(value) = axum::Json::<T>::from_request(req, state).await?;

        Ok(ApiJson(value))
    }
}

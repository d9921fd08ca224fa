//! JSON body extractor whose rejection matches the API error contract.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};

use crate::error::AppError;

/// Wrapper around [`axum::Json`] that turns any body rejection (wrong content
/// type, unparseable JSON, type mismatch) into a 400 with a generic message.
/// No partial recovery is attempted.
pub struct AppJson<T>(pub T);

impl<S, T> FromRequest<S> for AppJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => {
                tracing::debug!("request body rejected: {}", rejection.body_text());
                Err(AppError::bad_request("Invalid request body"))
            }
        }
    }
}

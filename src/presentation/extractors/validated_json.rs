//! Extractor combining body parsing with payload validation.

use axum::{
    Json,
    body::Bytes,
    extract::{FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use serde::de::DeserializeOwned;
use validator::Validate;

use crate::presentation::validation::{ValidationError, parse_body};

/// Payload that already passed shape and length checks.
///
/// Any body problem, including one that is not JSON at all, is rejected with
/// the same `400 "Validation failed"`.
pub struct ValidatedJson<T>(pub T);

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, Json(self.to_string())).into_response()
    }
}

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ValidationError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state).await.map_err(|e| {
            tracing::error!(error = %e, "failed to read request body");
            ValidationError
        })?;

        parse_body(&body).map(ValidatedJson)
    }
}

//! Shape and length checks for incoming registration payloads.

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use validator::Validate;

use crate::usecase::register_user_usecase::RegisterUser;

/// Rejected request payload.
///
/// The cause is logged where it is detected; callers only ever see this
/// fixed text.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Validation failed")]
pub struct ValidationError;

/// json for register request
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct RegisterRequest {
    #[serde(rename = "userID")]
    #[validate(length(min = 5, max = 15))]
    pub user_id: String,
    #[validate(length(min = 5, max = 20))]
    pub password: String,
}

impl From<RegisterRequest> for RegisterUser {
    fn from(request: RegisterRequest) -> Self {
        Self {
            user_id: request.user_id,
            password: request.password,
        }
    }
}

/// Deserialize `raw` into `T` and check its declared bounds
pub fn parse<T: DeserializeOwned + Validate>(raw: serde_json::Value) -> Result<T, ValidationError> {
    let payload: T = serde_json::from_value(raw).map_err(|e| {
        tracing::error!(error = %e, "payload has the wrong shape");
        ValidationError
    })?;

    payload.validate().map_err(|e| {
        tracing::error!(error = %e, "payload is out of bounds");
        ValidationError
    })?;

    Ok(payload)
}

/// Parse a raw request body, which may not be JSON at all
pub fn parse_body<T: DeserializeOwned + Validate>(body: &[u8]) -> Result<T, ValidationError> {
    let raw: serde_json::Value = serde_json::from_slice(body).map_err(|e| {
        tracing::error!(error = %e, "body is not json");
        ValidationError
    })?;

    parse(raw)
}

//! JSON body extractor that runs `validator` rules.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use serde::de::DeserializeOwned;
use validator::Validate;

use momo_core::error::{AppError, ErrorKind};

use crate::error::{ApiError, validation_error};

/// A JSON body that has been deserialized and validated.
///
/// Malformed JSON, a missing JSON content type and rule violations are all
/// rejected with 422, so the handler only ever sees a payload that passed
/// validation. A body that could not be read keeps its own status (413 for
/// an oversized body).
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

/// Translates an axum JSON rejection into an `AppError`.
pub fn json_rejection_error(rejection: JsonRejection) -> AppError {
    match rejection {
        JsonRejection::JsonDataError(_)
        | JsonRejection::JsonSyntaxError(_)
        | JsonRejection::MissingJsonContentType(_) => AppError::validation(rejection.body_text()),
        other if other.status() == StatusCode::PAYLOAD_TOO_LARGE => {
            AppError::new(ErrorKind::PayloadTooLarge, other.body_text())
        }
        other => AppError::new(ErrorKind::BadRequest, other.body_text()),
    }
}

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(json_rejection_error)?;
        value.validate().map_err(validation_error)?;
        Ok(Self(value))
    }
}

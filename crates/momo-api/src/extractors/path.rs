//! Typed path parameter helpers.

use std::str::FromStr;

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use momo_core::error::AppError;
use momo_core::types::ParseIdError;

use crate::error::ApiError;

/// Parses an entity id from a path segment.
pub fn parse_id<Id>(s: &str) -> Result<Id, AppError>
where
    Id: FromStr<Err = ParseIdError>,
{
    s.parse::<Id>().map_err(|e| AppError::validation(e.to_string()))
}

/// The `{id}` path segment, parsed into a typed id.
///
/// A segment that is not a positive integer is rejected with 422 before
/// the handler runs.
#[derive(Debug, Clone, Copy)]
pub struct IdPath<Id>(pub Id);

impl<S, Id> FromRequestParts<S> for IdPath<Id>
where
    S: Send + Sync,
    Id: FromStr<Err = ParseIdError> + Send,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::validation(rejection.body_text()))?;
        Ok(Self(parse_id(&raw)?))
    }
}

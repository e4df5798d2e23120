//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use momo_service::UserInput;

/// Create/update user request body.
///
/// Missing fields deserialize as empty strings so that an incomplete body
/// is reported field by field rather than as a JSON error.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct UserPayload {
    /// Display name.
    #[validate(custom(function = "not_blank", message = "Name is required"))]
    pub name: String,
    /// Email address.
    #[validate(
        length(min = 1, message = "Email is required"),
        email(message = "Email must be a valid email address")
    )]
    pub email: String,
    /// Plaintext password.
    #[validate(length(
        min = 6,
        max = 72,
        message = "Password must be between 6 and 72 characters"
    ))]
    pub password: String,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

impl From<UserPayload> for UserInput {
    fn from(payload: UserPayload) -> Self {
        Self {
            name: payload.name.trim().to_string(),
            email: payload.email,
            password: payload.password,
        }
    }
}

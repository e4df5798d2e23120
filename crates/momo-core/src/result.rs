//! Convenience result type alias for Momo.

use crate::error::AppError;

/// A specialized `Result` type for Momo operations.
pub type AppResult<T> = Result<T, AppError>;

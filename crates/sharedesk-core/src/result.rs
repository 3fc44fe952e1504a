//! Convenience result type alias for ShareDesk.

use crate::error::AppError;

/// A specialized `Result` type for ShareDesk operations.
pub type AppResult<T> = Result<T, AppError>;

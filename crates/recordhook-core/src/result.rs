//! Convenience result type alias for RecordHook.

use crate::error::AppError;

/// A specialized `Result` type for RecordHook operations.
pub type AppResult<T> = Result<T, AppError>;

//! Convenience result type alias for not&notion.

use crate::error::AppError;

/// A specialized `Result` type for not&notion operations.
pub type AppResult<T> = Result<T, AppError>;

//! Result type aliases

use crate::error::AdminError;

/// Standard Result type for Records Admin operations
pub type AdminResult<T> = Result<T, AdminError>;

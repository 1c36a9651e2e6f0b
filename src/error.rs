//! Error types for record operations.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when mutating or querying a record's phone list.
///
/// Every failing operation reports its error before touching any state, so
/// a record is never left partially mutated.
#[derive(Error, Debug)]
pub enum RecordError {
    /// A phone value failed the 10-digit validation rule
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The phone value is already present on this record
    #[error("Phone {0} already exists in contacts")]
    DuplicatePhone(String),

    /// The requested phone does not exist on this record
    #[error("Phone {0} not found in contacts")]
    PhoneNotFound(String),
}

/// Convenience type alias for Results with RecordError
pub type RecordResult<T> = Result<T, RecordError>;

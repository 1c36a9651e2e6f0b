//! Contact Book - an in-memory contact directory with validated phone numbers.
//!
//! This library stores named records, each holding an ordered, duplicate-free
//! set of validated 10-digit phone numbers, in a directory keyed by
//! auto-assigned integer ids. All operations are synchronous, in-memory and
//! atomic: a failed call never leaves a record or the book partially mutated.
//!
//! # Architecture
//!
//! - **domain**: value objects for phone numbers, names and record ids
//! - **models**: the [`Record`] contact entity and its phone operations
//! - **book**: the [`AddressBook`] directory of records
//! - **error**: custom error types for precise error handling

// Re-export commonly used types
pub mod book;
pub mod domain;
pub mod error;
pub mod models;

pub use book::{AddressBook, DeleteOutcome};
pub use domain::{Name, PhoneNumber, RecordId, ValidationError};
pub use error::{RecordError, RecordResult};
pub use models::Record;

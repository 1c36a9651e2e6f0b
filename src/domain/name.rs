//! Name value object.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact's display name.
///
/// Deliberately permissive: any string is accepted and stored as-is, with no
/// trimming or validation. Names are not required to be unique across a book
/// either; see [`AddressBook::find_by_name`](crate::AddressBook::find_by_name).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Name(String);

impl Name {
    /// Create a new Name. Never fails.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

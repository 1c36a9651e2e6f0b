//! RecordId value object.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The identity of a record inside an [`AddressBook`](crate::AddressBook).
///
/// Ids are assigned by the book in strictly increasing order, starting at 1,
/// and are never reused once retired by a deletion. The ordering of ids
/// therefore matches the order in which records were added.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct RecordId(u64);

impl RecordId {
    /// Create a RecordId from a raw integer.
    ///
    /// Mostly useful for tests and embedders that persist ids externally;
    /// inside the library ids come from [`AddressBook::add_record`](crate::AddressBook::add_record).
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the underlying integer value.
    pub fn value(self) -> u64 {
        self.0
    }
}

// Display support
impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_id_ordering() {
        assert!(RecordId::new(1) < RecordId::new(2));
        assert!(RecordId::new(7) > RecordId::new(3));
    }

    #[test]
    fn test_record_id_display() {
        assert_eq!(format!("{}", RecordId::new(42)), "42");
    }

    #[test]
    fn test_record_id_serialization() {
        let id = RecordId::new(5);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "5");

        let back: RecordId = serde_json::from_str("5").unwrap();
        assert_eq!(back, id);
    }
}

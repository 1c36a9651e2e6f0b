//! The address book: an insertion-ordered directory of records keyed by id.

use crate::domain::RecordId;
use crate::models::Record;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Outcome of [`AddressBook::delete_by_name`].
///
/// Deleting a name that is not present is a benign, observable outcome
/// rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The first record with the given name was removed.
    Deleted,
    /// No record with the given name exists.
    NotFound,
}

/// An in-memory directory of contacts keyed by auto-assigned id.
///
/// Ids start at 1, advance by one on every [`add_record`](AddressBook::add_record),
/// and are never reused once a record is deleted. Because ids are handed out
/// in increasing order, iterating the map in ascending id order yields
/// records in insertion order, which is the order every name-based lookup
/// scans in.
///
/// The book provides no synchronization of its own. Callers exposing it to
/// concurrent access must guard it externally (a single mutex around the
/// whole book is sufficient); the borrow checker already rules out mutating
/// the book while [`entries`](AddressBook::entries) is being traversed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddressBook {
    entries: BTreeMap<RecordId, Record>,
    next_id: u64,
}

impl AddressBook {
    /// Create an empty book.
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Add a record, assigning it the next free id.
    ///
    /// Always succeeds and transfers ownership of the record to the book.
    /// Names are not required to be unique: adding a second record with an
    /// existing name is allowed, and name-based lookups resolve to the
    /// first match in insertion order.
    pub fn add_record(&mut self, record: Record) -> RecordId {
        let id = RecordId::new(self.next_id);
        self.next_id += 1;
        tracing::debug!("Added record {} with id {}", record.name(), id);
        self.entries.insert(id, record);
        id
    }

    /// Look up a record by its id.
    pub fn get(&self, id: RecordId) -> Option<&Record> {
        self.entries.get(&id)
    }

    /// Look up a record by its id, with mutable access.
    pub fn get_mut(&mut self, id: RecordId) -> Option<&mut Record> {
        self.entries.get_mut(&id)
    }

    /// Find the first record (in insertion order) whose name matches exactly.
    ///
    /// The comparison is case-sensitive and does not trim. Returns `None`
    /// when no record matches; absence is not an error at this layer.
    pub fn find_by_name(&self, name: &str) -> Option<(RecordId, &Record)> {
        self.entries
            .iter()
            .find(|(_, record)| record.name().as_str() == name)
            .map(|(id, record)| (*id, record))
    }

    /// Find the first record whose name matches, with mutable access.
    ///
    /// This is the lookup used to edit a found contact's phones in place.
    pub fn find_by_name_mut(&mut self, name: &str) -> Option<(RecordId, &mut Record)> {
        self.entries
            .iter_mut()
            .find(|(_, record)| record.name().as_str() == name)
            .map(|(id, record)| (*id, record))
    }

    /// Delete the first record (in insertion order) whose name matches.
    ///
    /// The freed id is retired permanently and never assigned again. A
    /// missing name reports [`DeleteOutcome::NotFound`] instead of failing.
    pub fn delete_by_name(&mut self, name: &str) -> DeleteOutcome {
        let found = self
            .entries
            .iter()
            .find(|(_, record)| record.name().as_str() == name)
            .map(|(id, _)| *id);

        match found {
            Some(id) => {
                self.entries.remove(&id);
                tracing::info!("Deleted record {} (id {})", name, id);
                DeleteOutcome::Deleted
            }
            None => {
                tracing::debug!("No record named {} to delete", name);
                DeleteOutcome::NotFound
            }
        }
    }

    /// Iterate all `(id, record)` pairs in insertion order.
    ///
    /// The iterator is lazy and restartable, and borrows the book shared,
    /// so mutation during traversal is rejected at compile time.
    pub fn entries(&self) -> impl Iterator<Item = (RecordId, &Record)> + '_ {
        self.entries.iter().map(|(id, record)| (*id, record))
    }

    /// Number of records in the book.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the book holds no records.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for AddressBook {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_starts_empty() {
        let book = AddressBook::new();
        assert!(book.is_empty());
        assert_eq!(book.len(), 0);
        assert_eq!(book.entries().count(), 0);
    }

    #[test]
    fn test_add_record_assigns_increasing_ids_from_one() {
        let mut book = AddressBook::new();
        let first = book.add_record(Record::new("John"));
        let second = book.add_record(Record::new("Jane"));

        assert_eq!(first.value(), 1);
        assert_eq!(second.value(), 2);
        assert_eq!(book.len(), 2);
    }

    #[test]
    fn test_find_by_name_is_exact() {
        let mut book = AddressBook::new();
        book.add_record(Record::new("John"));

        assert!(book.find_by_name("John").is_some());
        assert!(book.find_by_name("john").is_none());
        assert!(book.find_by_name(" John").is_none());
    }

    #[test]
    fn test_duplicate_names_resolve_to_first_insertion() {
        let mut book = AddressBook::new();
        let first = book.add_record(Record::new("John"));
        book.add_record(Record::new("John"));

        let (found_id, _) = book.find_by_name("John").unwrap();
        assert_eq!(found_id, first);

        assert_eq!(book.delete_by_name("John"), DeleteOutcome::Deleted);
        let (found_id, _) = book.find_by_name("John").unwrap();
        assert_eq!(found_id.value(), 2);
    }

    #[test]
    fn test_delete_by_name_outcomes() {
        let mut book = AddressBook::new();
        book.add_record(Record::new("Jane"));

        assert_eq!(book.delete_by_name("Jane"), DeleteOutcome::Deleted);
        assert_eq!(book.delete_by_name("Jane"), DeleteOutcome::NotFound);
        assert!(book.is_empty());
    }

    #[test]
    fn test_entries_in_insertion_order() {
        let mut book = AddressBook::new();
        book.add_record(Record::new("Alice"));
        book.add_record(Record::new("Bob"));
        book.add_record(Record::new("Carol"));

        let names: Vec<&str> = book
            .entries()
            .map(|(_, record)| record.name().as_str())
            .collect();
        assert_eq!(names, vec!["Alice", "Bob", "Carol"]);
    }

    #[test]
    fn test_book_serialization_round_trip() {
        let mut book = AddressBook::new();
        let mut john = Record::new("John");
        john.add_phone("1234567890").unwrap();
        book.add_record(john);
        book.delete_by_name("John");

        let json = serde_json::to_string(&book).unwrap();
        let mut back: AddressBook = serde_json::from_str(&json).unwrap();
        assert_eq!(back, book);

        // The id counter survives the round trip: retired ids stay retired.
        let next = back.add_record(Record::new("Jane"));
        assert_eq!(next.value(), 2);
    }
}

//! Record model representing one contact and its phone numbers.

use crate::domain::{Name, PhoneNumber};
use crate::error::{RecordError, RecordResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single contact: a name plus an ordered, duplicate-free list of
/// validated phone numbers.
///
/// The name is fixed at construction; the phone list is mutated through
/// [`add_phone`](Record::add_phone), [`remove_phone`](Record::remove_phone)
/// and [`edit_phone`](Record::edit_phone), all of which run their checks
/// before any write. Phone inputs are trimmed before comparison, and no
/// two stored phones are ever equal by string value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,
    phones: Vec<PhoneNumber>,
}

impl Record {
    /// Create a record with the given name and an empty phone list.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Name::new(name),
            phones: Vec::new(),
        }
    }

    /// The contact's name.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// The contact's phones, in insertion order.
    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    /// Add a phone number to the end of the list.
    ///
    /// The input is trimmed before any check.
    ///
    /// # Errors
    ///
    /// - [`RecordError::DuplicatePhone`] if the trimmed value is already
    ///   present on this record.
    /// - [`RecordError::Validation`] if the trimmed value is not exactly
    ///   10 digits.
    pub fn add_phone(&mut self, phone: &str) -> RecordResult<()> {
        let phone = phone.trim();
        if self.phones.iter().any(|p| p.as_str() == phone) {
            return Err(RecordError::DuplicatePhone(phone.to_string()));
        }
        let phone = PhoneNumber::new(phone)?;
        tracing::debug!("Added phone {} to contact {}", phone, self.name);
        self.phones.push(phone);
        Ok(())
    }

    /// Remove every phone matching the given value.
    ///
    /// The input is trimmed. Removing a value that is not present is a
    /// silent no-op: the call still succeeds. This intentionally differs
    /// from [`find_phone`](Record::find_phone), which treats absence as
    /// an error.
    pub fn remove_phone(&mut self, phone: &str) {
        let phone = phone.trim();
        let before = self.phones.len();
        self.phones.retain(|p| p.as_str() != phone);
        if self.phones.len() < before {
            tracing::debug!("Removed phone {} from contact {}", phone, self.name);
        } else {
            tracing::debug!("Phone {} not present on contact {}, nothing removed", phone, self.name);
        }
    }

    /// Replace `old` with `new`, keeping its position in the list.
    ///
    /// Both inputs are trimmed. The checks run in a fixed order so the
    /// reported error is stable: `new` is validated first, then checked
    /// for duplication, and only then is `old` looked up. Supplying an
    /// invalid `new` together with a nonexistent `old` therefore reports
    /// the validation failure, not the missing phone. The record is
    /// untouched unless every check passes.
    ///
    /// # Errors
    ///
    /// - [`RecordError::Validation`] if `new` is not exactly 10 digits.
    /// - [`RecordError::DuplicatePhone`] if `new` is already present.
    /// - [`RecordError::PhoneNotFound`] if `old` is absent.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> RecordResult<()> {
        let old = old.trim();
        let new = PhoneNumber::new(new)?;
        if self.phones.iter().any(|p| p.as_str() == new.as_str()) {
            return Err(RecordError::DuplicatePhone(new.into_inner()));
        }
        let slot = self
            .phones
            .iter_mut()
            .find(|p| p.as_str() == old)
            .ok_or_else(|| RecordError::PhoneNotFound(old.to_string()))?;
        tracing::debug!("Replaced phone {} with {} on contact {}", old, new, self.name);
        *slot = new;
        Ok(())
    }

    /// Find the first phone matching the given (trimmed) value.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::PhoneNotFound`] if no phone matches.
    pub fn find_phone(&self, phone: &str) -> RecordResult<&PhoneNumber> {
        let phone = phone.trim();
        self.phones
            .iter()
            .find(|p| p.as_str() == phone)
            .ok_or_else(|| RecordError::PhoneNotFound(phone.to_string()))
    }
}

// Display support - the canonical one-line rendering of a contact
impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Contact name: {}, phones: ", self.name)?;
        if self.phones.is_empty() {
            write!(f, "No phones")
        } else {
            let phones: Vec<&str> = self.phones.iter().map(|p| p.as_str()).collect();
            write!(f, "{}", phones.join("; "))
        }
    }
}

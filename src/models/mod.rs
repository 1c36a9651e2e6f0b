//! Data models for contact directory entities.
//!
//! This module contains the data structures representing contacts and their
//! phone lists.

pub mod record;

pub use record::Record;

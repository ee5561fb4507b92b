//! Financial entry domain
//!
//! This module provides domain types and traits for income/expense entries:
//! the entry entity and its lifecycle status, field validation, query-by-example
//! filtering, and the repository trait.

mod entity;
mod filter;
mod repository;
mod validation;

pub use entity::{Entry, EntryDraft, EntryId, EntryStatus, EntryType, NewEntry};
pub use filter::EntryFilter;
pub use repository::EntryRepository;
pub use validation::{validate_entry, EntryValidationError, ValidEntry};

#[cfg(test)]
pub use repository::mock::MockEntryRepository;

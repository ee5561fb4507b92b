//! Entry infrastructure module
//!
//! This module provides the entry service orchestrating validation, status
//! changes, and query-by-example search, plus an in-memory repository.

mod repository;
mod service;

pub use repository::InMemoryEntryRepository;
pub use service::EntryService;

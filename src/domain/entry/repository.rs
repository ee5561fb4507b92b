//! Entry repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::{Entry, EntryId, NewEntry};
use super::filter::EntryFilter;
use crate::domain::DomainError;

/// Repository trait for entry storage
#[async_trait]
pub trait EntryRepository: Send + Sync + Debug {
    /// Persist a new entry, assigning its identifier
    async fn save(&self, candidate: NewEntry) -> Result<Entry, DomainError>;

    /// Update an existing entry
    async fn update(&self, entry: &Entry) -> Result<Entry, DomainError>;

    /// Delete an entry, returning whether it existed
    async fn delete(&self, id: &EntryId) -> Result<bool, DomainError>;

    /// Get an entry by its ID
    async fn get(&self, id: &EntryId) -> Result<Option<Entry>, DomainError>;

    /// Find all entries matching the filter. Ordering is implementation-defined.
    async fn find_matching(&self, filter: &EntryFilter) -> Result<Vec<Entry>, DomainError>;
}

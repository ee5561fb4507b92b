//! In-memory entry repository implementation

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entry::{Entry, EntryFilter, EntryId, EntryRepository, NewEntry};
use crate::domain::DomainError;

/// In-memory implementation of EntryRepository
#[derive(Debug, Default)]
pub struct InMemoryEntryRepository {
    entries: Arc<RwLock<HashMap<EntryId, Entry>>>,
}

impl InMemoryEntryRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EntryRepository for InMemoryEntryRepository {
    async fn save(&self, candidate: NewEntry) -> Result<Entry, DomainError> {
        let mut entries = self.entries.write().await;
        let entry = Entry::new(EntryId::new(), candidate);
        entries.insert(entry.id(), entry.clone());
        Ok(entry)
    }

    async fn update(&self, entry: &Entry) -> Result<Entry, DomainError> {
        let mut entries = self.entries.write().await;

        if !entries.contains_key(&entry.id()) {
            return Err(DomainError::not_found(format!(
                "entry '{}' not found",
                entry.id()
            )));
        }

        entries.insert(entry.id(), entry.clone());
        Ok(entry.clone())
    }

    async fn delete(&self, id: &EntryId) -> Result<bool, DomainError> {
        let mut entries = self.entries.write().await;
        Ok(entries.remove(id).is_some())
    }

    async fn get(&self, id: &EntryId) -> Result<Option<Entry>, DomainError> {
        let entries = self.entries.read().await;
        Ok(entries.get(id).cloned())
    }

    async fn find_matching(&self, filter: &EntryFilter) -> Result<Vec<Entry>, DomainError> {
        let entries = self.entries.read().await;
        Ok(entries
            .values()
            .filter(|entry| filter.matches(entry))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entry::{EntryStatus, EntryType};
    use crate::domain::user::UserId;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn candidate(user_id: UserId, description: &str) -> NewEntry {
        NewEntry {
            description: description.to_string(),
            month: 3,
            year: 2023,
            user_id,
            amount: dec!(42.50),
            registration_date: NaiveDate::from_ymd_opt(2023, 3, 10).unwrap(),
            entry_type: EntryType::Income,
            status: EntryStatus::Pending,
        }
    }

    #[tokio::test]
    async fn test_save_assigns_distinct_ids() {
        let repo = InMemoryEntryRepository::new();
        let owner = UserId::new();

        let first = repo.save(candidate(owner, "Salary")).await.unwrap();
        let second = repo.save(candidate(owner, "Bonus")).await.unwrap();

        assert_ne!(first.id(), second.id());
        assert!(repo.get(&first.id()).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_update_replaces_stored_entry() {
        let repo = InMemoryEntryRepository::new();
        let mut entry = repo.save(candidate(UserId::new(), "Salary")).await.unwrap();

        entry.set_status(EntryStatus::Settled);
        repo.update(&entry).await.unwrap();

        let stored = repo.get(&entry.id()).await.unwrap().unwrap();
        assert_eq!(stored.status(), EntryStatus::Settled);
    }

    #[tokio::test]
    async fn test_update_unknown_entry_is_not_found() {
        let repo = InMemoryEntryRepository::new();
        let entry = Entry::new(EntryId::new(), candidate(UserId::new(), "Salary"));

        let result = repo.update(&entry).await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_find_matching_filters_by_owner() {
        let repo = InMemoryEntryRepository::new();
        let owner = UserId::new();
        repo.save(candidate(owner, "Salary")).await.unwrap();
        repo.save(candidate(owner, "Bonus")).await.unwrap();
        repo.save(candidate(UserId::new(), "Salary")).await.unwrap();

        let found = repo
            .find_matching(&EntryFilter::for_user(owner))
            .await
            .unwrap();

        assert_eq!(found.len(), 2);
        assert!(found.iter().all(|e| e.user_id() == owner));
    }
}

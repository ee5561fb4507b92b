//! Entry service for the income/expense lifecycle

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};

use crate::domain::entry::{
    validate_entry, Entry, EntryDraft, EntryFilter, EntryId, EntryRepository, EntryStatus,
};
use crate::domain::user::UserRepository;
use crate::domain::DomainError;

/// Entry service gatekeeping everything that reaches the entry store.
///
/// The user repository is only consulted to resolve filter owners; entry
/// ownership itself is a plain id reference.
#[derive(Debug)]
pub struct EntryService<E: EntryRepository, U: UserRepository> {
    entries: Arc<E>,
    users: Arc<U>,
}

impl<E: EntryRepository, U: UserRepository> EntryService<E, U> {
    /// Create a new entry service
    pub fn new(entries: Arc<E>, users: Arc<U>) -> Self {
        Self { entries, users }
    }

    /// Validate and persist a new entry.
    ///
    /// New entries always start in `Pending`, whatever the draft claims, and
    /// the registration date is stamped here.
    pub async fn save(&self, draft: EntryDraft) -> Result<Entry, DomainError> {
        let valid = validate_entry(&draft).map_err(|e| DomainError::validation(e.to_string()))?;

        info!(user_id = %valid.user_id, "Saving entry");

        let registration_date = Utc::now().date_naive();
        let candidate = valid.into_new_entry(registration_date, EntryStatus::Pending);

        self.entries.save(candidate).await
    }

    /// Validate and persist changes to an existing entry.
    ///
    /// The registration date is immutable: whatever the stored entry carries
    /// survives the update. A draft without a status keeps the stored status.
    pub async fn update(&self, id: EntryId, draft: EntryDraft) -> Result<Entry, DomainError> {
        info!(id = %id, "Updating entry");

        let existing = self
            .entries
            .get(&id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("entry '{id}' not found")))?;

        let valid = validate_entry(&draft).map_err(|e| DomainError::validation(e.to_string()))?;

        let status = draft.status.unwrap_or(existing.status());
        let candidate = valid.into_new_entry(existing.registration_date(), status);

        self.entries.update(&Entry::new(id, candidate)).await
    }

    /// Delete an entry.
    pub async fn delete(&self, id: &EntryId) -> Result<(), DomainError> {
        info!(id = %id, "Deleting entry");

        if !self.entries.delete(id).await? {
            return Err(DomainError::not_found(format!("entry '{id}' not found")));
        }

        Ok(())
    }

    /// Get an entry by ID
    pub async fn find(&self, id: &EntryId) -> Result<Option<Entry>, DomainError> {
        self.entries.get(id).await
    }

    /// Find all entries matching the filter.
    ///
    /// The filter's owner must exist; an unknown owner is an error, not an
    /// empty result.
    pub async fn search(&self, filter: EntryFilter) -> Result<Vec<Entry>, DomainError> {
        debug!(user_id = %filter.user_id(), "Searching entries");

        if self.users.get(&filter.user_id()).await?.is_none() {
            return Err(DomainError::not_found(format!(
                "user '{}' not found",
                filter.user_id()
            )));
        }

        self.entries.find_matching(&filter).await
    }

    /// Apply a lifecycle status to an entry and persist it.
    ///
    /// No transition graph: any status may follow any other. Fails only when
    /// the entry does not exist or the underlying update fails.
    pub async fn update_status(
        &self,
        id: &EntryId,
        status: EntryStatus,
    ) -> Result<Entry, DomainError> {
        info!(id = %id, status = %status, "Updating entry status");

        let mut entry = self
            .entries
            .get(id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("entry '{id}' not found")))?;

        entry.set_status(status);

        self.entries.update(&entry).await
    }
}

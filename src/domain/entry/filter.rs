//! Query-by-example filtering for entries

use rust_decimal::Decimal;

use super::entity::{Entry, EntryStatus, EntryType};
use crate::domain::user::UserId;

/// Equality criteria over stored entries.
///
/// An entry matches when every set field equals the stored value; unset
/// fields impose no constraint. The owner is not optional: listing another
/// user's entries by omission is not expressible.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryFilter {
    user_id: UserId,
    pub description: Option<String>,
    pub month: Option<u32>,
    pub year: Option<i32>,
    pub amount: Option<Decimal>,
    pub entry_type: Option<EntryType>,
    pub status: Option<EntryStatus>,
}

impl EntryFilter {
    /// Criteria matching every entry owned by `user_id`.
    pub fn for_user(user_id: UserId) -> Self {
        Self {
            user_id,
            description: None,
            month: None,
            year: None,
            amount: None,
            entry_type: None,
            status: None,
        }
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_month(mut self, month: u32) -> Self {
        self.month = Some(month);
        self
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn with_amount(mut self, amount: Decimal) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn with_entry_type(mut self, entry_type: EntryType) -> Self {
        self.entry_type = Some(entry_type);
        self
    }

    pub fn with_status(mut self, status: EntryStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Exact-equality match over every set field.
    pub fn matches(&self, entry: &Entry) -> bool {
        if entry.user_id() != self.user_id {
            return false;
        }

        if let Some(description) = &self.description {
            if entry.description() != description {
                return false;
            }
        }

        if let Some(month) = self.month {
            if entry.month() != month {
                return false;
            }
        }

        if let Some(year) = self.year {
            if entry.year() != year {
                return false;
            }
        }

        if let Some(amount) = self.amount {
            if entry.amount() != amount {
                return false;
            }
        }

        if let Some(entry_type) = self.entry_type {
            if entry.entry_type() != entry_type {
                return false;
            }
        }

        if let Some(status) = self.status {
            if entry.status() != status {
                return false;
            }
        }

        true
    }
}

//! Financial entry entity and related types

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::user::UserId;
use crate::domain::DomainError;

/// Entry identifier, assigned by the persistence collaborator on first save
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(Uuid);

impl EntryId {
    /// Generate a fresh identifier
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for EntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for EntryId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Classification of an entry as income or expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryType {
    Income,
    Expense,
}

impl std::fmt::Display for EntryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Income => write!(f, "income"),
            Self::Expense => write!(f, "expense"),
        }
    }
}

impl FromStr for EntryType {
    type Err = DomainError;

    /// Unknown strings are a validation error, never a panic.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            _ => Err(DomainError::validation(format!(
                "unknown entry type '{s}'"
            ))),
        }
    }
}

/// Lifecycle status of an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum EntryStatus {
    /// Recorded but not yet settled; every entry starts here
    #[default]
    Pending,
    Settled,
    Cancelled,
}

impl std::fmt::Display for EntryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Settled => write!(f, "settled"),
            Self::Cancelled => write!(f, "cancelled"),
        }
    }
}

impl FromStr for EntryStatus {
    type Err = DomainError;

    /// Unknown strings are a validation error, never a panic.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "settled" => Ok(Self::Settled),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(DomainError::validation(format!(
                "unknown entry status '{s}'"
            ))),
        }
    }
}

/// A persisted financial entry.
///
/// Only constructed from a candidate that passed validation, so every field
/// holds a value the business rules allow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    /// Unique identifier for the entry
    id: EntryId,
    description: String,
    /// Accounting month, 1-12
    month: u32,
    year: i32,
    /// Owner of the entry
    user_id: UserId,
    amount: Decimal,
    /// Set at creation time, immutable thereafter
    registration_date: NaiveDate,
    entry_type: EntryType,
    status: EntryStatus,
}

impl Entry {
    /// Assemble a persisted entry from a candidate and its assigned id.
    /// Called by repository implementations on first save.
    pub fn new(id: EntryId, candidate: NewEntry) -> Self {
        Self {
            id,
            description: candidate.description,
            month: candidate.month,
            year: candidate.year,
            user_id: candidate.user_id,
            amount: candidate.amount,
            registration_date: candidate.registration_date,
            entry_type: candidate.entry_type,
            status: candidate.status,
        }
    }

    pub fn id(&self) -> EntryId {
        self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn registration_date(&self) -> NaiveDate {
        self.registration_date
    }

    pub fn entry_type(&self) -> EntryType {
        self.entry_type
    }

    pub fn status(&self) -> EntryStatus {
        self.status
    }

    /// Apply a new lifecycle status. Any status may follow any other.
    pub fn set_status(&mut self, status: EntryStatus) {
        self.status = status;
    }
}

/// An entry candidate that passed validation but has not been persisted yet
#[derive(Debug, Clone)]
pub struct NewEntry {
    pub description: String,
    pub month: u32,
    pub year: i32,
    pub user_id: UserId,
    pub amount: Decimal,
    pub registration_date: NaiveDate,
    pub entry_type: EntryType,
    pub status: EntryStatus,
}

/// A partially specified entry, as submitted by a caller.
///
/// Every field is explicitly optional; validation decides whether the draft
/// is complete enough to persist.
#[derive(Debug, Clone, Default)]
pub struct EntryDraft {
    pub description: Option<String>,
    pub month: Option<u32>,
    pub year: Option<i32>,
    pub user_id: Option<UserId>,
    pub amount: Option<Decimal>,
    pub entry_type: Option<EntryType>,
    pub status: Option<EntryStatus>,
}

impl EntryDraft {
    pub fn new() -> Self {
        Self::default()
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

    pub fn with_user(mut self, user_id: UserId) -> Self {
        self.user_id = Some(user_id);
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
}

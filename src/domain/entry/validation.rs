//! Entry validation rules
//!
//! Checks run in a fixed order and stop at the first failure; callers get a
//! single reason, not an aggregate.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

use super::entity::{EntryDraft, EntryStatus, EntryType, NewEntry};
use crate::domain::user::UserId;

/// Errors that can occur during entry validation
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EntryValidationError {
    #[error("invalid description")]
    InvalidDescription,

    #[error("invalid month")]
    InvalidMonth,

    #[error("invalid year")]
    InvalidYear,

    #[error("missing user")]
    MissingUser,

    #[error("invalid amount")]
    InvalidAmount,

    #[error("missing entry type")]
    MissingEntryType,
}

/// The fields of a draft that passed validation, unwrapped.
///
/// Lifecycle status is not part of validation; the caller decides it.
#[derive(Debug, Clone)]
pub struct ValidEntry {
    pub description: String,
    pub month: u32,
    pub year: i32,
    pub user_id: UserId,
    pub amount: Decimal,
    pub entry_type: EntryType,
}

impl ValidEntry {
    /// Turn the validated fields into a persistable candidate.
    pub fn into_new_entry(self, registration_date: NaiveDate, status: EntryStatus) -> NewEntry {
        NewEntry {
            description: self.description,
            month: self.month,
            year: self.year,
            user_id: self.user_id,
            amount: self.amount,
            registration_date,
            entry_type: self.entry_type,
            status,
        }
    }
}

/// Validate a draft entry against the business rules, in order:
/// description, month, year, owner, amount, type.
///
/// # Errors
///
/// Returns the first rule the draft violates:
/// - `InvalidDescription` when the description is unset or blank
/// - `InvalidMonth` when the month is unset or outside 1-12
/// - `InvalidYear` when the year is unset or not a four-digit value
/// - `MissingUser` when no owner is set
/// - `InvalidAmount` when the amount is unset or not greater than zero
/// - `MissingEntryType` when no type is set
pub fn validate_entry(draft: &EntryDraft) -> Result<ValidEntry, EntryValidationError> {
    let description = draft
        .description
        .as_deref()
        .filter(|d| !d.trim().is_empty())
        .ok_or(EntryValidationError::InvalidDescription)?;

    let month = draft
        .month
        .filter(|m| (1..=12).contains(m))
        .ok_or(EntryValidationError::InvalidMonth)?;

    let year = draft
        .year
        .filter(|y| (1000..=9999).contains(y))
        .ok_or(EntryValidationError::InvalidYear)?;

    let user_id = draft.user_id.ok_or(EntryValidationError::MissingUser)?;

    let amount = draft
        .amount
        .filter(|a| *a > Decimal::ZERO)
        .ok_or(EntryValidationError::InvalidAmount)?;

    let entry_type = draft
        .entry_type
        .ok_or(EntryValidationError::MissingEntryType)?;

    Ok(ValidEntry {
        description: description.to_string(),
        month,
        year,
        user_id,
        amount,
        entry_type,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn complete_draft() -> EntryDraft {
        EntryDraft::new()
            .with_description("Lancamento")
            .with_month(2)
            .with_year(2023)
            .with_user(UserId::new())
            .with_amount(dec!(10.5))
            .with_entry_type(EntryType::Income)
    }

    #[test]
    fn test_complete_draft_validates() {
        let valid = validate_entry(&complete_draft()).unwrap();
        assert_eq!(valid.description, "Lancamento");
        assert_eq!(valid.month, 2);
        assert_eq!(valid.year, 2023);
        assert_eq!(valid.amount, dec!(10.5));
        assert_eq!(valid.entry_type, EntryType::Income);
    }

    #[test]
    fn test_checks_stop_at_first_failure_in_order() {
        // Start empty and fix one field at a time; each step must surface the
        // next rule in the fixed order.
        let mut draft = EntryDraft::new();
        assert_eq!(
            validate_entry(&draft).unwrap_err(),
            EntryValidationError::InvalidDescription
        );

        draft.description = Some("Lancamento".to_string());
        assert_eq!(
            validate_entry(&draft).unwrap_err(),
            EntryValidationError::InvalidMonth
        );

        draft.month = Some(1);
        assert_eq!(
            validate_entry(&draft).unwrap_err(),
            EntryValidationError::InvalidYear
        );

        draft.year = Some(2023);
        assert_eq!(
            validate_entry(&draft).unwrap_err(),
            EntryValidationError::MissingUser
        );

        draft.user_id = Some(UserId::new());
        assert_eq!(
            validate_entry(&draft).unwrap_err(),
            EntryValidationError::InvalidAmount
        );

        draft.amount = Some(dec!(1));
        assert_eq!(
            validate_entry(&draft).unwrap_err(),
            EntryValidationError::MissingEntryType
        );

        draft.entry_type = Some(EntryType::Expense);
        assert!(validate_entry(&draft).is_ok());
    }

    #[test]
    fn test_blank_description_is_rejected() {
        for description in ["", "   "] {
            let draft = complete_draft().with_description(description);
            assert_eq!(
                validate_entry(&draft).unwrap_err(),
                EntryValidationError::InvalidDescription
            );
        }
    }

    #[test]
    fn test_month_out_of_range_is_rejected() {
        for month in [0, 13] {
            let draft = complete_draft().with_month(month);
            assert_eq!(
                validate_entry(&draft).unwrap_err(),
                EntryValidationError::InvalidMonth
            );
        }
    }

    #[test]
    fn test_year_must_have_four_digits() {
        for year in [0, 999, 10000] {
            let draft = complete_draft().with_year(year);
            assert_eq!(
                validate_entry(&draft).unwrap_err(),
                EntryValidationError::InvalidYear
            );
        }
        assert!(validate_entry(&complete_draft().with_year(1000)).is_ok());
        assert!(validate_entry(&complete_draft().with_year(9999)).is_ok());
    }

    #[test]
    fn test_amount_must_be_strictly_positive() {
        for amount in [dec!(0), dec!(-10.5)] {
            let draft = complete_draft().with_amount(amount);
            assert_eq!(
                validate_entry(&draft).unwrap_err(),
                EntryValidationError::InvalidAmount
            );
        }
        assert!(validate_entry(&complete_draft().with_amount(dec!(0.01))).is_ok());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            EntryValidationError::InvalidDescription.to_string(),
            "invalid description"
        );
        assert_eq!(EntryValidationError::InvalidMonth.to_string(), "invalid month");
        assert_eq!(EntryValidationError::InvalidYear.to_string(), "invalid year");
        assert_eq!(EntryValidationError::MissingUser.to_string(), "missing user");
        assert_eq!(EntryValidationError::InvalidAmount.to_string(), "invalid amount");
        assert_eq!(
            EntryValidationError::MissingEntryType.to_string(),
            "missing entry type"
        );
    }
}

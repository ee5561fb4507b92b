//! Domain layer - Core business logic and entities

pub mod entry;
pub mod error;
pub mod user;

pub use entry::{
    validate_entry, Entry, EntryDraft, EntryFilter, EntryId, EntryRepository, EntryStatus,
    EntryType, EntryValidationError, NewEntry, ValidEntry,
};
pub use error::{AuthenticationError, DomainError};
pub use user::{
    validate_email, validate_name, validate_password, NewUser, User, UserId, UserRepository,
    UserValidationError,
};

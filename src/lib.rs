//! Finledger
//!
//! Core of a personal finance ledger: per-user income/expense entries with a
//! lifecycle status, and email/password user accounts. The crate gatekeeps
//! what reaches persistence - field validation, status changes,
//! query-by-example filtering, credential verification, and email uniqueness -
//! while persistence itself stays behind injected repository traits.
//!
//! HTTP shaping and storage backends are deliberately out of scope; callers
//! wire the services in [`infrastructure`] to their own repository
//! implementations (or the bundled in-memory ones).

pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;
pub use domain::{
    AuthenticationError, DomainError, Entry, EntryDraft, EntryFilter, EntryId, EntryRepository,
    EntryStatus, EntryType, NewEntry, NewUser, User, UserId, UserRepository,
};
pub use infrastructure::{
    Argon2Hasher, EntryService, InMemoryEntryRepository, InMemoryUserRepository, PasswordHasher,
    RegisterUserRequest, UserService,
};

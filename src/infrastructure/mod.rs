//! Infrastructure layer - Services and collaborator implementations

pub mod entry;
pub mod logging;
pub mod user;

pub use entry::{EntryService, InMemoryEntryRepository};
pub use user::{
    Argon2Hasher, InMemoryUserRepository, PasswordHasher, RegisterUserRequest, UserService,
};

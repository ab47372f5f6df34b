//! Port abstraction for user identity stores and their errors.

use async_trait::async_trait;

use crate::domain::{User, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by user repository adapters.
    pub enum UserRepositoryError {
        /// A user with the same identifier is already stored.
        Duplicate { user_id: String } => "user {user_id} already exists",
        /// The store failed to read or write.
        Storage { message: String } => "user store failed: {message}",
    }
}

/// Identity store.
///
/// `exists` is the gate the timeline aggregator checks before any fan-out.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Store a new user.
    ///
    /// Fails with [`UserRepositoryError::Duplicate`] when the identifier is
    /// taken; the existing record is left untouched.
    async fn insert(&self, user: &User) -> Result<(), UserRepositoryError>;

    /// Report whether a user with this identifier exists.
    async fn exists(&self, id: &UserId) -> Result<bool, UserRepositoryError>;
}

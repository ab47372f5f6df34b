//! Port abstraction for the directed follow graph.

use async_trait::async_trait;

use crate::domain::UserId;

use super::define_port_error;

define_port_error! {
    /// Errors raised by follow repository adapters.
    pub enum FollowRepositoryError {
        /// The store failed to read or write.
        Storage { message: String } => "follow store failed: {message}",
    }
}

/// Social graph store holding `(follower, followee)` edges.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FollowRepository: Send + Sync {
    /// Record that `follower` follows `followee`.
    ///
    /// Recording an existing edge is a no-op.
    async fn follow(&self, follower: &UserId, followee: &UserId)
    -> Result<(), FollowRepositoryError>;

    /// Return the accounts `user` follows, each exactly once.
    ///
    /// A user who follows nobody yields an empty list, not an error.
    async fn followees(&self, user: &UserId) -> Result<Vec<UserId>, FollowRepositoryError>;
}

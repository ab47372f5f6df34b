//! Driving port for editing the follow graph.

use async_trait::async_trait;

use crate::domain::{Error, UserId};

/// Write side of the social graph.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FollowCommand: Send + Sync {
    /// Make `follower` follow `followee`. Following twice is a no-op.
    ///
    /// # Errors
    ///
    /// - `forbidden` when a user tries to follow themselves.
    /// - `not_found` when either user is unknown.
    async fn follow(&self, follower: &UserId, followee: &UserId) -> Result<(), Error>;
}

//! Port abstraction for like records.

use async_trait::async_trait;

use crate::domain::{TweetId, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by like repository adapters.
    pub enum LikeRepositoryError {
        /// The store failed to read or write.
        Storage { message: String } => "like store failed: {message}",
    }
}

/// Set of `(user, tweet)` like records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LikeRepository: Send + Sync {
    /// Report whether `user` already liked `tweet`.
    async fn has_liked(&self, user: &UserId, tweet: &TweetId) -> Result<bool, LikeRepositoryError>;

    /// Insert the like record.
    ///
    /// Returns `true` when the record is new and `false` when it already
    /// existed; the check and insert happen atomically.
    async fn record(&self, user: &UserId, tweet: &TweetId) -> Result<bool, LikeRepositoryError>;
}

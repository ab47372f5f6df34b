//! Port abstraction for the tweet content store.

use async_trait::async_trait;

use crate::domain::{Tweet, TweetId, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by tweet repository adapters.
    pub enum TweetRepositoryError {
        /// The store holds no tweets for this author.
        ///
        /// Authors who never posted and authors the store has never heard of
        /// both report this variant.
        AuthorNotFound { author_id: String } => "no tweets found for author {author_id}",
        /// No tweet has this identifier.
        TweetNotFound { tweet_id: String } => "tweet {tweet_id} not found",
        /// The store failed to read or write.
        Storage { message: String } => "tweet store failed: {message}",
    }
}

/// Content store owning the tweet lifecycle.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TweetRepository: Send + Sync {
    /// Append a newly posted tweet.
    async fn save(&self, tweet: &Tweet) -> Result<(), TweetRepositoryError>;

    /// Fetch a tweet by identifier, or [`TweetRepositoryError::TweetNotFound`].
    async fn find_by_id(&self, id: &TweetId) -> Result<Tweet, TweetRepositoryError>;

    /// Fetch every tweet written by `author`, or
    /// [`TweetRepositoryError::AuthorNotFound`] when there are none.
    async fn find_by_author(&self, author: &UserId) -> Result<Vec<Tweet>, TweetRepositoryError>;

    /// Add one to the like counter of a tweet.
    async fn increment_likes(&self, id: &TweetId) -> Result<(), TweetRepositoryError>;
}

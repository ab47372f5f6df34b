//! Driving port for posting and liking tweets.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{Error, TweetId, UserId};

/// Request to post a tweet on behalf of an author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostTweetRequest {
    /// Authenticated author.
    pub author_id: UserId,
    /// Raw content, validated by the service.
    pub content: String,
}

/// Write side of the tweet lifecycle.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TweetCommand: Send + Sync {
    /// Post a tweet and return its identifier.
    ///
    /// # Errors
    ///
    /// Returns `invalid_param` for blank or oversized content.
    async fn post_tweet(&self, request: PostTweetRequest) -> Result<TweetId, Error>;

    /// Record `user`'s like on `tweet`.
    ///
    /// # Errors
    ///
    /// - `not_found` when the tweet does not exist.
    /// - `forbidden` when `user` already liked it.
    async fn like_tweet(&self, user: &UserId, tweet: &TweetId) -> Result<(), Error>;
}

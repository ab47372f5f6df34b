//! Tweet posting and liking services.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::{info, warn};

use crate::domain::ports::{
    LikeRepository, LikeRepositoryError, PostTweetRequest, TweetCommand, TweetRepository,
    TweetRepositoryError, UserRepository, UserRepositoryError,
};
use crate::domain::{Error, Tweet, TweetContent, TweetId, UserId};

/// Tweet service implementing [`TweetCommand`].
#[derive(Clone)]
pub struct TweetService<U, T, L> {
    users: Arc<U>,
    tweets: Arc<T>,
    likes: Arc<L>,
    clock: Arc<dyn Clock>,
}

impl<U, T, L> TweetService<U, T, L> {
    /// Create a service that stamps new tweets with `clock`.
    pub fn new(users: Arc<U>, tweets: Arc<T>, likes: Arc<L>, clock: Arc<dyn Clock>) -> Self {
        Self {
            users,
            tweets,
            likes,
            clock,
        }
    }
}

impl<U, T, L> TweetService<U, T, L>
where
    U: UserRepository,
    T: TweetRepository,
    L: LikeRepository,
{
    fn map_user_error(error: UserRepositoryError) -> Error {
        Error::internal(format!("user store error: {error}"))
    }

    fn map_like_error(error: LikeRepositoryError) -> Error {
        Error::internal(format!("like store error: {error}"))
    }

    fn map_tweet_error(error: TweetRepositoryError) -> Error {
        match error {
            TweetRepositoryError::TweetNotFound { .. } => Error::not_found("tweet not found"),
            other => Error::internal(format!("tweet store error: {other}")),
        }
    }

    fn already_liked() -> Error {
        Error::forbidden("user has already liked this tweet")
    }
}

#[async_trait]
impl<U, T, L> TweetCommand for TweetService<U, T, L>
where
    U: UserRepository,
    T: TweetRepository,
    L: LikeRepository,
{
    async fn post_tweet(&self, request: PostTweetRequest) -> Result<TweetId, Error> {
        let PostTweetRequest { author_id, content } = request;
        let exists = self
            .users
            .exists(&author_id)
            .await
            .map_err(Self::map_user_error)?;
        if !exists {
            return Err(Error::not_found(format!("user {author_id} not found")));
        }

        let content = TweetContent::new(content)
            .map_err(|err| Error::invalid_param(format!("invalid tweet content: {err}")))?;
        let tweet = Tweet::new(TweetId::random(), author_id, content, self.clock.utc());
        self.tweets
            .save(&tweet)
            .await
            .map_err(Self::map_tweet_error)?;

        info!(tweet_id = %tweet.id(), author_id = %tweet.author_id(), "tweet posted");
        Ok(tweet.id())
    }

    async fn like_tweet(&self, user: &UserId, tweet: &TweetId) -> Result<(), Error> {
        self.tweets
            .find_by_id(tweet)
            .await
            .map_err(Self::map_tweet_error)?;

        let already_liked = self
            .likes
            .has_liked(user, tweet)
            .await
            .map_err(Self::map_like_error)?;
        if already_liked {
            warn!(user_id = %user, tweet_id = %tweet, "duplicate like attempt");
            return Err(Self::already_liked());
        }

        // Two concurrent likes can both pass `has_liked`; only one insert wins.
        let inserted = self
            .likes
            .record(user, tweet)
            .await
            .map_err(Self::map_like_error)?;
        if !inserted {
            warn!(user_id = %user, tweet_id = %tweet, "duplicate like lost the race");
            return Err(Self::already_liked());
        }

        self.tweets
            .increment_likes(tweet)
            .await
            .map_err(Self::map_tweet_error)?;
        info!(user_id = %user, tweet_id = %tweet, "tweet liked");
        Ok(())
    }
}

#[cfg(test)]
#[path = "tweet_service_tests.rs"]
mod tests;

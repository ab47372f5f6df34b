//! In-memory content store.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::ports::{TweetRepository, TweetRepositoryError};
use crate::domain::{Tweet, TweetId, UserId};

use super::lock;

#[derive(Debug, Default)]
struct TweetIndex {
    by_id: HashMap<TweetId, Tweet>,
    by_author: HashMap<UserId, Vec<TweetId>>,
}

/// Tweets indexed by identifier and by author.
#[derive(Debug, Default)]
pub struct InMemoryTweetRepository {
    index: RwLock<TweetIndex>,
}

impl InMemoryTweetRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TweetRepository for InMemoryTweetRepository {
    async fn save(&self, tweet: &Tweet) -> Result<(), TweetRepositoryError> {
        let mut guard = lock::write(&self.index, TweetRepositoryError::storage)?;
        let index = &mut *guard;
        match index.by_id.entry(tweet.id()) {
            Entry::Occupied(mut existing) => {
                existing.insert(tweet.clone());
            }
            Entry::Vacant(slot) => {
                slot.insert(tweet.clone());
                index
                    .by_author
                    .entry(tweet.author_id().clone())
                    .or_default()
                    .push(tweet.id());
            }
        }
        Ok(())
    }

    async fn find_by_id(&self, id: &TweetId) -> Result<Tweet, TweetRepositoryError> {
        let index = lock::read(&self.index, TweetRepositoryError::storage)?;
        index
            .by_id
            .get(id)
            .cloned()
            .ok_or_else(|| TweetRepositoryError::tweet_not_found(id.to_string()))
    }

    async fn find_by_author(&self, author: &UserId) -> Result<Vec<Tweet>, TweetRepositoryError> {
        let index = lock::read(&self.index, TweetRepositoryError::storage)?;
        let tweets: Vec<Tweet> = index
            .by_author
            .get(author)
            .into_iter()
            .flatten()
            .filter_map(|id| index.by_id.get(id).cloned())
            .collect();
        if tweets.is_empty() {
            return Err(TweetRepositoryError::author_not_found(author.as_ref()));
        }
        Ok(tweets)
    }

    async fn increment_likes(&self, id: &TweetId) -> Result<(), TweetRepositoryError> {
        let mut index = lock::write(&self.index, TweetRepositoryError::storage)?;
        let tweet = index
            .by_id
            .get_mut(id)
            .ok_or_else(|| TweetRepositoryError::tweet_not_found(id.to_string()))?;
        tweet.record_like();
        Ok(())
    }
}

//! In-memory like records.

use std::collections::{HashMap, HashSet};
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::ports::{LikeRepository, LikeRepositoryError};
use crate::domain::{TweetId, UserId};

use super::lock;

/// Like records grouped by tweet for O(1) membership checks.
#[derive(Debug, Default)]
pub struct InMemoryLikeRepository {
    likes: RwLock<HashMap<TweetId, HashSet<UserId>>>,
}

impl InMemoryLikeRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LikeRepository for InMemoryLikeRepository {
    async fn has_liked(&self, user: &UserId, tweet: &TweetId) -> Result<bool, LikeRepositoryError> {
        let likes = lock::read(&self.likes, LikeRepositoryError::storage)?;
        Ok(likes.get(tweet).is_some_and(|users| users.contains(user)))
    }

    async fn record(&self, user: &UserId, tweet: &TweetId) -> Result<bool, LikeRepositoryError> {
        let mut likes = lock::write(&self.likes, LikeRepositoryError::storage)?;
        Ok(likes.entry(*tweet).or_default().insert(user.clone()))
    }
}

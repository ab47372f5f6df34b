//! In-memory social graph.

use std::collections::{BTreeSet, HashMap};
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::UserId;
use crate::domain::ports::{FollowRepository, FollowRepositoryError};

use super::lock;

/// Directed follow edges, stored as follower -> followees.
#[derive(Debug, Default)]
pub struct InMemoryFollowRepository {
    edges: RwLock<HashMap<UserId, BTreeSet<UserId>>>,
}

impl InMemoryFollowRepository {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FollowRepository for InMemoryFollowRepository {
    async fn follow(
        &self,
        follower: &UserId,
        followee: &UserId,
    ) -> Result<(), FollowRepositoryError> {
        let mut edges = lock::write(&self.edges, FollowRepositoryError::storage)?;
        edges
            .entry(follower.clone())
            .or_default()
            .insert(followee.clone());
        Ok(())
    }

    async fn followees(&self, user: &UserId) -> Result<Vec<UserId>, FollowRepositoryError> {
        let edges = lock::read(&self.edges, FollowRepositoryError::storage)?;
        Ok(edges
            .get(user)
            .map(|followees| followees.iter().cloned().collect())
            .unwrap_or_default())
    }
}

//! Follow graph service.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::domain::ports::{
    FollowCommand, FollowRepository, FollowRepositoryError, UserRepository, UserRepositoryError,
};
use crate::domain::{Error, UserId};

/// Follow service implementing [`FollowCommand`].
#[derive(Clone)]
pub struct FollowService<U, F> {
    users: Arc<U>,
    follows: Arc<F>,
}

impl<U, F> FollowService<U, F> {
    /// Create a new service with the given repositories.
    pub fn new(users: Arc<U>, follows: Arc<F>) -> Self {
        Self { users, follows }
    }
}

impl<U, F> FollowService<U, F>
where
    U: UserRepository,
    F: FollowRepository,
{
    fn map_user_error(error: UserRepositoryError) -> Error {
        Error::internal(format!("user store error: {error}"))
    }

    fn map_follow_error(error: FollowRepositoryError) -> Error {
        Error::internal(format!("follow store error: {error}"))
    }

    async fn require_user(&self, id: &UserId, role: &str) -> Result<(), Error> {
        let exists = self
            .users
            .exists(id)
            .await
            .map_err(Self::map_user_error)?;
        if exists {
            Ok(())
        } else {
            Err(Error::not_found(format!("{role} not found")))
        }
    }
}

#[async_trait]
impl<U, F> FollowCommand for FollowService<U, F>
where
    U: UserRepository,
    F: FollowRepository,
{
    async fn follow(&self, follower: &UserId, followee: &UserId) -> Result<(), Error> {
        if follower == followee {
            return Err(Error::forbidden("cannot follow yourself"));
        }
        self.require_user(follower, "follower").await?;
        self.require_user(followee, "followee").await?;

        self.follows
            .follow(follower, followee)
            .await
            .map_err(Self::map_follow_error)?;
        info!(follower = %follower, followee = %followee, "follow recorded");
        Ok(())
    }
}

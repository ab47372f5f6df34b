//! User registration service.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::domain::ports::{CreateUserRequest, UserCommand, UserRepository, UserRepositoryError};
use crate::domain::{Error, User, UserId};

/// Registration service implementing [`UserCommand`].
#[derive(Clone)]
pub struct UserService<U> {
    users: Arc<U>,
}

impl<U> UserService<U> {
    /// Create a new service backed by `users`.
    pub fn new(users: Arc<U>) -> Self {
        Self { users }
    }
}

impl<U> UserService<U>
where
    U: UserRepository,
{
    fn map_user_error(error: UserRepositoryError) -> Error {
        match error {
            UserRepositoryError::Duplicate { .. } => Error::conflict("user already exists"),
            UserRepositoryError::Storage { message } => {
                Error::internal(format!("user store error: {message}"))
            }
        }
    }
}

#[async_trait]
impl<U> UserCommand for UserService<U>
where
    U: UserRepository,
{
    async fn create_user(&self, request: CreateUserRequest) -> Result<UserId, Error> {
        let user = User::try_from_strings(&request.name, request.document)
            .map_err(|err| Error::invalid_param(err.to_string()))?;

        // The store enforces uniqueness; a concurrent registration of the
        // same document surfaces as `Duplicate` here.
        self.users.insert(&user).await.map_err(|err| {
            if matches!(err, UserRepositoryError::Duplicate { .. }) {
                info!(user_id = %user.id(), "user already exists");
            }
            Self::map_user_error(err)
        })?;

        info!(user_id = %user.id(), "user created");
        Ok(user.id().clone())
    }
}

//! In-memory identity store.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::ports::{UserRepository, UserRepositoryError};
use crate::domain::{User, UserId};

use super::lock;

/// Identity store keyed by [`UserId`].
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<UserId, User>>,
}

impl InMemoryUserRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, user: &User) -> Result<(), UserRepositoryError> {
        let mut users = lock::write(&self.users, UserRepositoryError::storage)?;
        match users.entry(user.id().clone()) {
            Entry::Occupied(_) => Err(UserRepositoryError::duplicate(user.id().as_ref())),
            Entry::Vacant(slot) => {
                slot.insert(user.clone());
                Ok(())
            }
        }
    }

    async fn exists(&self, id: &UserId) -> Result<bool, UserRepositoryError> {
        let users = lock::read(&self.users, UserRepositoryError::storage)?;
        Ok(users.contains_key(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    fn stored(repo: &InMemoryUserRepository, id: &UserId) -> Option<User> {
        repo.users.read().expect("users lock").get(id).cloned()
    }

    #[fixture]
    fn ada() -> User {
        User::try_from_strings("Ada", "1234567").expect("valid user")
    }

    #[rstest]
    #[tokio::test]
    async fn stores_and_finds_users(ada: User) {
        let repo = InMemoryUserRepository::new();
        repo.insert(&ada).await.expect("insert");

        assert!(repo.exists(ada.id()).await.expect("exists"));
        assert_eq!(
            stored(&repo, ada.id()),
            Some(ada.clone())
        );
    }

    #[rstest]
    #[tokio::test]
    async fn unknown_users_do_not_exist() {
        let repo = InMemoryUserRepository::new();
        let id = UserId::new("usr_7654321").expect("valid id");

        assert!(!repo.exists(&id).await.expect("exists"));
        assert_eq!(stored(&repo, &id), None);
    }

    #[rstest]
    #[tokio::test]
    async fn duplicate_insert_keeps_first_record(ada: User) {
        let repo = InMemoryUserRepository::new();
        repo.insert(&ada).await.expect("first insert");
        let impostor = User::try_from_strings("Not Ada", "1234567").expect("valid user");

        let error = repo.insert(&impostor).await.expect_err("duplicate");

        assert_eq!(error, UserRepositoryError::duplicate("usr_1234567"));
        let kept = stored(&repo, ada.id());
        assert_eq!(kept.map(|user| user.name().to_string()), Some("Ada".to_owned()));
    }

    #[rstest]
    #[tokio::test]
    async fn poisoned_store_reports_storage_error(ada: User) {
        let repo = InMemoryUserRepository::new();
        lock::test_support::poison(&repo.users);

        let error = repo.exists(ada.id()).await.expect_err("poisoned");

        assert!(matches!(error, UserRepositoryError::Storage { .. }));
    }
}

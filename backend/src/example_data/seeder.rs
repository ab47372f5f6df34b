//! Writes a generated example graph into the stores through the driven
//! ports.

use std::sync::Arc;

use chrono::TimeDelta;
use example_data::{ExampleFollowSeed, ExampleGraph, ExampleTweetSeed, ExampleUserSeed};
use mockable::Clock;
use tracing::{debug, warn};

use crate::domain::ports::{
    FollowRepository, TweetRepository, UserRepository, UserRepositoryError,
};
use crate::domain::{Document, Tweet, TweetContent, TweetId, User, UserId};
use crate::example_data::StartupSeedingError;

/// Stores that receive seeded data.
#[derive(Clone)]
pub struct SeedTargets {
    /// Identity store.
    pub users: Arc<dyn UserRepository>,
    /// Follow graph store.
    pub follows: Arc<dyn FollowRepository>,
    /// Content store.
    pub tweets: Arc<dyn TweetRepository>,
}

/// Counts of records written by one seeding run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedOutcome {
    /// Seed name that produced the graph.
    pub seed_name: String,
    /// Users inserted.
    pub users: usize,
    /// Users already present and left untouched.
    pub existing_users: usize,
    /// Tweets inserted.
    pub tweets: usize,
    /// Follow edges recorded.
    pub follows: usize,
}

/// Applies example graphs, dating tweets relative to `clock`.
pub struct ExampleDataSeeder {
    targets: SeedTargets,
    clock: Arc<dyn Clock>,
}

fn invalid(what: &str, err: impl std::fmt::Display) -> StartupSeedingError {
    StartupSeedingError::InvalidSeed {
        message: format!("{what}: {err}"),
    }
}

fn store(what: &str, err: impl std::fmt::Display) -> StartupSeedingError {
    StartupSeedingError::Store {
        message: format!("{what}: {err}"),
    }
}

fn user_id_for(document: &str) -> Result<UserId, StartupSeedingError> {
    Document::new(document)
        .map(|doc| UserId::from_document(&doc))
        .map_err(|err| invalid("seed document", err))
}

impl ExampleDataSeeder {
    /// Create a seeder writing into `targets`.
    pub fn new(targets: SeedTargets, clock: Arc<dyn Clock>) -> Self {
        Self { targets, clock }
    }

    /// Write users, then tweets, then follow edges.
    ///
    /// Users that already exist are skipped so a repeated run does not fail,
    /// but their tweets are still added.
    ///
    /// # Errors
    /// Returns [`StartupSeedingError::InvalidSeed`] when a generated value
    /// fails domain validation and [`StartupSeedingError::Store`] when a
    /// store rejects a write.
    pub async fn apply(
        &self,
        seed_name: &str,
        graph: &ExampleGraph,
    ) -> Result<SeedOutcome, StartupSeedingError> {
        let mut outcome = SeedOutcome {
            seed_name: seed_name.to_owned(),
            ..SeedOutcome::default()
        };

        for seed in &graph.users {
            if self.insert_user(seed).await? {
                outcome.users += 1;
            } else {
                outcome.existing_users += 1;
            }
        }

        let now = self.clock.utc();
        for seed in &graph.tweets {
            self.insert_tweet(seed, now).await?;
            outcome.tweets += 1;
        }

        for seed in &graph.follows {
            self.insert_follow(seed).await?;
            outcome.follows += 1;
        }

        Ok(outcome)
    }

    async fn insert_user(&self, seed: &ExampleUserSeed) -> Result<bool, StartupSeedingError> {
        let user = User::try_from_strings(&seed.name, seed.document.clone())
            .map_err(|err| invalid("seed user", err))?;
        match self.targets.users.insert(&user).await {
            Ok(()) => Ok(true),
            Err(UserRepositoryError::Duplicate { user_id }) => {
                warn!(user_id = %user_id, "seed user already exists; skipping");
                Ok(false)
            }
            Err(err) => Err(store("inserting seed user", err)),
        }
    }

    async fn insert_tweet(
        &self,
        seed: &ExampleTweetSeed,
        now: chrono::DateTime<chrono::Utc>,
    ) -> Result<(), StartupSeedingError> {
        let author = user_id_for(&seed.author_document)?;
        let content =
            TweetContent::new(&seed.content).map_err(|err| invalid("seed tweet", err))?;
        let created_at = now - TimeDelta::minutes(i64::from(seed.minutes_ago));
        let tweet = Tweet::new(TweetId::random(), author, content, created_at);
        self.targets
            .tweets
            .save(&tweet)
            .await
            .map_err(|err| store("saving seed tweet", err))?;
        debug!(tweet_id = %tweet.id(), author_id = %tweet.author_id(), "seeded tweet");
        Ok(())
    }

    async fn insert_follow(&self, seed: &ExampleFollowSeed) -> Result<(), StartupSeedingError> {
        let follower = user_id_for(&seed.follower_document)?;
        let followee = user_id_for(&seed.followee_document)?;
        self.targets
            .follows
            .follow(&follower, &followee)
            .await
            .map_err(|err| store("recording seed follow", err))
    }
}

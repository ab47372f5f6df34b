//! Timeline aggregation service.
//!
//! The aggregator checks that the viewer exists, resolves their followees,
//! then runs one fetch task per followee on a [`JoinSet`]. Results are merged
//! on the calling task as each fetch settles, so nothing is shared between
//! the fetch tasks. The first hard failure aborts every
//! outstanding fetch and fails the whole request.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use pagination::PageRequest;
use tokio::sync::Semaphore;
use tokio::task::{JoinError, JoinSet};
use tracing::{debug, error, warn};

use crate::domain::ports::{
    FollowRepository, FollowRepositoryError, TimelineQuery, TweetRepository,
    TweetRepositoryError, UserRepository, UserRepositoryError,
};
use crate::domain::{
    Error, FanOutLimit, TimelineEntry, TimelineOptions, TimelinePage, TraceId, Tweet, UserId,
};

/// Read-time orchestrator over the identity, graph and content stores.
///
/// The service owns no state of its own; every call works on the snapshots
/// the stores return.
pub struct TimelineService<U, F, T> {
    users: Arc<U>,
    follows: Arc<F>,
    tweets: Arc<T>,
    options: TimelineOptions,
}

impl<U, F, T> Clone for TimelineService<U, F, T> {
    fn clone(&self) -> Self {
        Self {
            users: Arc::clone(&self.users),
            follows: Arc::clone(&self.follows),
            tweets: Arc::clone(&self.tweets),
            options: self.options,
        }
    }
}

impl<U, F, T> TimelineService<U, F, T> {
    /// Create a service with one concurrent fetch per followee and no
    /// per-fetch deadline.
    pub fn new(users: Arc<U>, follows: Arc<F>, tweets: Arc<T>) -> Self {
        Self {
            users,
            follows,
            tweets,
            options: TimelineOptions::default(),
        }
    }

    /// Replace the fan-out tuning.
    pub fn with_options(mut self, options: TimelineOptions) -> Self {
        self.options = options;
        self
    }
}

impl<U, F, T> TimelineService<U, F, T>
where
    U: UserRepository,
    F: FollowRepository,
    T: TweetRepository + 'static,
{
    fn map_user_error(error: UserRepositoryError) -> Error {
        Error::internal(format!("user store error: {error}"))
    }

    fn map_follow_error(error: FollowRepositoryError) -> Error {
        Error::internal(format!("follow store error: {error}"))
    }

    fn map_join_error(error: JoinError) -> Error {
        if error.is_panic() {
            Error::internal("timeline fetch task panicked")
        } else {
            Error::internal("timeline fetch task was cancelled")
        }
    }

    async fn ensure_viewer_exists(&self, viewer: &UserId) -> Result<(), Error> {
        let exists = self
            .users
            .exists(viewer)
            .await
            .map_err(Self::map_user_error)?;
        if exists {
            Ok(())
        } else {
            Err(Error::not_found(format!("user {viewer} not found")))
        }
    }

    fn limiter(&self) -> Option<Arc<Semaphore>> {
        match self.options.fan_out {
            FanOutLimit::Unbounded => None,
            FanOutLimit::Capped(permits) => Some(Arc::new(Semaphore::new(permits.get()))),
        }
    }

    /// Fetch every followee's tweets concurrently and concatenate them.
    async fn collect(&self, followees: Vec<UserId>) -> Result<Vec<Tweet>, Error> {
        let limiter = self.limiter();
        let deadline = self.options.fetch_timeout;
        let mut tasks = JoinSet::new();

        for followee in followees {
            let tweets = Arc::clone(&self.tweets);
            let limiter = limiter.clone();
            tasks.spawn(TraceId::propagate(async move {
                let _permit = match limiter {
                    Some(semaphore) => Some(
                        semaphore
                            .acquire_owned()
                            .await
                            .map_err(|_| Error::internal("fan-out limiter closed"))?,
                    ),
                    None => None,
                };
                fetch_authored(tweets.as_ref(), &followee, deadline).await
            }));
        }

        let mut merged = Vec::new();
        while let Some(joined) = tasks.join_next().await {
            match joined.map_err(Self::map_join_error).and_then(|outcome| outcome) {
                Ok(items) => merged.extend(items),
                Err(err) => {
                    tasks.abort_all();
                    error!(error = %err, "timeline fan-out failed; remaining fetches aborted");
                    return Err(err);
                }
            }
        }
        Ok(merged)
    }
}

/// Fetch one followee's tweets, treating "no tweets for this author" as an
/// empty list.
async fn fetch_authored<T>(
    tweets: &T,
    followee: &UserId,
    deadline: Option<Duration>,
) -> Result<Vec<Tweet>, Error>
where
    T: TweetRepository + ?Sized,
{
    let fetch = tweets.find_by_author(followee);
    let outcome = match deadline {
        Some(limit) => tokio::time::timeout(limit, fetch).await.map_err(|_| {
            warn!(followee = %followee, timeout = ?limit, "followee fetch timed out");
            Error::internal(format!(
                "fetching tweets for {followee} timed out after {}ms",
                limit.as_millis()
            ))
        })?,
        None => fetch.await,
    };

    match outcome {
        Ok(items) => Ok(items),
        Err(TweetRepositoryError::AuthorNotFound { .. }) => {
            debug!(followee = %followee, "followee has no tweets");
            Ok(Vec::new())
        }
        Err(err) => Err(Error::internal(format!(
            "tweet store error for {followee}: {err}"
        ))),
    }
}

/// Order tweets newest first.
///
/// Tweets sharing a timestamp end up adjacent in no particular order.
fn sort_newest_first(tweets: &mut [Tweet]) {
    tweets.sort_unstable_by(|a, b| b.created_at().cmp(&a.created_at()));
}

#[async_trait]
impl<U, F, T> TimelineQuery for TimelineService<U, F, T>
where
    U: UserRepository,
    F: FollowRepository,
    T: TweetRepository + 'static,
{
    async fn timeline(
        &self,
        viewer: &UserId,
        offset: i64,
        limit: i64,
    ) -> Result<TimelinePage, Error> {
        let page = PageRequest::normalize(offset, limit);
        self.ensure_viewer_exists(viewer).await?;

        let followees = self
            .follows
            .followees(viewer)
            .await
            .map_err(Self::map_follow_error)?;
        if followees.is_empty() {
            return Ok(TimelinePage::empty(page));
        }

        debug!(viewer = %viewer, followees = followees.len(), "fanning out timeline fetches");
        let mut merged = self.collect(followees).await?;
        sort_newest_first(&mut merged);

        let total = merged.len();
        let entries = page
            .slice(&merged)
            .iter()
            .map(TimelineEntry::from)
            .collect();
        Ok(TimelinePage {
            entries,
            page,
            total,
        })
    }
}

#[cfg(test)]
#[path = "timeline_service_tests.rs"]
mod tests;

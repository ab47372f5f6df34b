//! Timeline read models and fan-out tuning.

use std::num::NonZeroUsize;
use std::time::Duration;

use chrono::{DateTime, Utc};
use pagination::PageRequest;
use serde::Serialize;

use super::{Tweet, TweetId, UserId};

/// Read-only projection of a tweet, built fresh for every timeline request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineEntry {
    /// Tweet identifier.
    pub id: TweetId,
    /// Author of the tweet.
    pub user_id: UserId,
    /// Tweet text.
    pub content: String,
    /// Like count at read time.
    pub likes: u64,
    /// Posting time.
    pub created_at: DateTime<Utc>,
}

impl From<&Tweet> for TimelineEntry {
    fn from(tweet: &Tweet) -> Self {
        Self {
            id: tweet.id(),
            user_id: tweet.author_id().clone(),
            content: tweet.content().as_ref().to_owned(),
            likes: tweet.likes(),
            created_at: tweet.created_at(),
        }
    }
}

/// One page of a viewer's timeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelinePage {
    /// Entries, most recent first.
    pub entries: Vec<TimelineEntry>,
    /// The normalised page that produced `entries`.
    pub page: PageRequest,
    /// Number of items across all followees before pagination.
    pub total: usize,
}

impl TimelinePage {
    /// An empty page, used when the viewer follows nobody.
    pub fn empty(page: PageRequest) -> Self {
        Self {
            entries: Vec::new(),
            page,
            total: 0,
        }
    }
}

/// Concurrency bound for the per-followee fetches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FanOutLimit {
    /// One concurrent fetch per followee.
    #[default]
    Unbounded,
    /// At most `n` fetches in flight at once.
    Capped(NonZeroUsize),
}

impl FanOutLimit {
    /// Build a limit from an optional cap; zero and `None` mean unbounded.
    pub fn from_cap(cap: Option<usize>) -> Self {
        cap.and_then(NonZeroUsize::new)
            .map_or(Self::Unbounded, Self::Capped)
    }
}

/// Tuning knobs for the timeline aggregator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimelineOptions {
    /// Concurrency bound for followee fetches.
    pub fan_out: FanOutLimit,
    /// Deadline for each followee fetch; an elapsed deadline is a hard failure.
    pub fetch_timeout: Option<Duration>,
}

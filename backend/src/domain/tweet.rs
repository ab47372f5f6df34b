//! Tweet data model.
//!
//! Tweets are immutable once posted apart from their like counter, which only
//! ever grows.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use super::UserId;

/// Maximum number of characters in tweet content after trimming.
pub const TWEET_CONTENT_MAX: usize = 280;

/// Validation errors returned by the tweet value objects.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TweetValidationError {
    /// Content was empty once trimmed.
    #[error("content must not be empty")]
    EmptyContent,
    /// Content exceeded [`TWEET_CONTENT_MAX`] characters.
    #[error("content must be at most {max} characters")]
    ContentTooLong {
        /// Maximum accepted length.
        max: usize,
    },
    /// Identifier was not a UUID.
    #[error("tweet id must be a valid UUID")]
    InvalidId,
}

/// Globally unique tweet identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TweetId(Uuid);

impl TweetId {
    /// Generate a fresh random identifier.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an identifier from its string form.
    pub fn new(id: impl AsRef<str>) -> Result<Self, TweetValidationError> {
        Uuid::parse_str(id.as_ref())
            .map(Self)
            .map_err(|_| TweetValidationError::InvalidId)
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl From<Uuid> for TweetId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl fmt::Display for TweetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Tweet text, stored trimmed.
///
/// # Examples
/// ```
/// use chirp::domain::TweetContent;
///
/// let content = TweetContent::new("  hello world ").expect("valid content");
/// assert_eq!(content.as_ref(), "hello world");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TweetContent(String);

impl TweetContent {
    /// Validate and construct tweet content.
    pub fn new(content: impl AsRef<str>) -> Result<Self, TweetValidationError> {
        let trimmed = content.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TweetValidationError::EmptyContent);
        }
        if trimmed.chars().count() > TWEET_CONTENT_MAX {
            return Err(TweetValidationError::ContentTooLong {
                max: TWEET_CONTENT_MAX,
            });
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for TweetContent {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl From<TweetContent> for String {
    fn from(value: TweetContent) -> Self {
        value.0
    }
}

impl TryFrom<String> for TweetContent {
    type Error = TweetValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// A posted tweet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tweet {
    id: TweetId,
    author_id: UserId,
    content: TweetContent,
    likes: u64,
    created_at: DateTime<Utc>,
}

impl Tweet {
    /// Build a freshly posted tweet with no likes.
    pub fn new(
        id: TweetId,
        author_id: UserId,
        content: TweetContent,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            author_id,
            content,
            likes: 0,
            created_at,
        }
    }

    /// Tweet identifier.
    pub fn id(&self) -> TweetId {
        self.id
    }

    /// Author of the tweet.
    pub fn author_id(&self) -> &UserId {
        &self.author_id
    }

    /// Tweet text.
    pub fn content(&self) -> &TweetContent {
        &self.content
    }

    /// Number of likes recorded so far.
    pub fn likes(&self) -> u64 {
        self.likes
    }

    /// Posting time.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Count one more like.
    pub fn record_like(&mut self) {
        self.likes = self.likes.saturating_add(1);
    }
}

//! Driving port for reading a viewer's timeline.
//!
//! Inbound adapters pass the raw pagination parameters straight through; the
//! implementation clamps them, so callers never have to validate offsets.

use async_trait::async_trait;

use crate::domain::{Error, TimelinePage, UserId};

/// Read side of the timeline.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TimelineQuery: Send + Sync {
    /// Build one page of `viewer`'s timeline, most recent first.
    ///
    /// # Errors
    ///
    /// - [`crate::domain::ErrorCode::NotFound`] when `viewer` is unknown.
    /// - [`crate::domain::ErrorCode::InternalFault`] when any followee fetch
    ///   fails with anything other than "no tweets".
    async fn timeline(&self, viewer: &UserId, offset: i64, limit: i64)
    -> Result<TimelinePage, Error>;
}

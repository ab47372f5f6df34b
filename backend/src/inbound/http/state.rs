//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on driving ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{FollowCommand, TimelineQuery, TweetCommand, UserCommand};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub users: Arc<dyn UserCommand>,
    pub follows: Arc<dyn FollowCommand>,
    pub tweets: Arc<dyn TweetCommand>,
    pub timeline: Arc<dyn TimelineQuery>,
}

impl HttpState {
    /// Bundle the driving ports used by the HTTP handlers.
    pub fn new(
        users: Arc<dyn UserCommand>,
        follows: Arc<dyn FollowCommand>,
        tweets: Arc<dyn TweetCommand>,
        timeline: Arc<dyn TimelineQuery>,
    ) -> Self {
        Self {
            users,
            follows,
            tweets,
            timeline,
        }
    }
}

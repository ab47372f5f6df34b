//! Domain primitives, ports and services.
//!
//! Purpose: define the strongly typed social-feed model and the services that
//! orchestrate it. Nothing in here knows about HTTP; inbound adapters call the
//! driving ports and map [`Error`] onto their transport.
//!
//! Public surface:
//! - [`User`], [`Tweet`] and their value objects.
//! - [`TimelineEntry`] and [`TimelinePage`], the read model of a timeline.
//! - [`Error`] and [`ErrorCode`], the transport-agnostic failure payload.
//! - [`TimelineService`], [`TweetService`], [`FollowService`] and
//!   [`UserService`], the driving-port implementations.

pub mod error;
pub mod ports;
pub mod timeline;
pub mod trace_id;
pub mod tweet;
pub mod user;

mod follow_service;
mod timeline_service;
mod tweet_service;
mod user_service;

pub use self::error::{Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use self::follow_service::FollowService;
pub use self::timeline::{FanOutLimit, TimelineEntry, TimelineOptions, TimelinePage};
pub use self::timeline_service::TimelineService;
pub use self::trace_id::TraceId;
pub use self::tweet::{TWEET_CONTENT_MAX, Tweet, TweetContent, TweetId, TweetValidationError};
pub use self::tweet_service::TweetService;
pub use self::user::{
    DOCUMENT_LENGTHS, Document, USER_ID_PREFIX, USER_NAME_MAX, User, UserId, UserName,
    UserValidationError,
};
pub use self::user_service::UserService;

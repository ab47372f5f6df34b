//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (`*Repository`) are implemented by outbound adapters; driving
//! ports (`*Command`, `*Query`) are implemented by the domain services and
//! consumed by inbound adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod follow_command;
mod follow_repository;
mod like_repository;
mod timeline_query;
mod tweet_command;
mod tweet_repository;
mod user_command;
mod user_repository;

pub use follow_command::FollowCommand;
#[cfg(test)]
pub use follow_command::MockFollowCommand;
#[cfg(test)]
pub use follow_repository::MockFollowRepository;
pub use follow_repository::{FollowRepository, FollowRepositoryError};
#[cfg(test)]
pub use like_repository::MockLikeRepository;
pub use like_repository::{LikeRepository, LikeRepositoryError};
#[cfg(test)]
pub use timeline_query::MockTimelineQuery;
pub use timeline_query::TimelineQuery;
#[cfg(test)]
pub use tweet_command::MockTweetCommand;
pub use tweet_command::{PostTweetRequest, TweetCommand};
#[cfg(test)]
pub use tweet_repository::MockTweetRepository;
pub use tweet_repository::{TweetRepository, TweetRepositoryError};
#[cfg(test)]
pub use user_command::MockUserCommand;
pub use user_command::{CreateUserRequest, UserCommand};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserRepository, UserRepositoryError};

//! In-memory adapters for the driven ports.
//!
//! Each store guards its state with one [`std::sync::RwLock`]: readers run
//! concurrently, writers are exclusive. Guards are never held across an
//! `.await`. A poisoned lock is reported as the port's `Storage` error rather
//! than propagated as a panic.

mod follow_repository;
mod like_repository;
mod lock;
mod tweet_repository;
mod user_repository;

pub use follow_repository::InMemoryFollowRepository;
pub use like_repository::InMemoryLikeRepository;
pub use tweet_repository::InMemoryTweetRepository;
pub use user_repository::InMemoryUserRepository;

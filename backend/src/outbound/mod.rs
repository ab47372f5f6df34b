//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **memory**: lock-guarded in-process stores for users, follows, tweets
//!   and likes.
//!
//! Adapters are thin translators between domain types and storage. They
//! contain no business logic.

pub mod memory;

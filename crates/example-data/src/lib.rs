//! Deterministic example social graph generation for demonstration purposes.
//!
//! This crate generates believable, reproducible users, tweets and follow
//! edges from a JSON seed registry. It is deliberately independent of the
//! backend domain types; the backend converts the generated seeds into its
//! own value objects when seeding the in-memory stores.
//!
//! # Example
//!
//! ```
//! use example_data::{SeedRegistry, generate_example_graph};
//!
//! let json = r#"{
//!     "version": 1,
//!     "seeds": [{
//!         "name": "test-seed",
//!         "seed": 42,
//!         "userCount": 3,
//!         "tweetsPerUser": 2,
//!         "followsPerUser": 1
//!     }]
//! }"#;
//!
//! let registry = SeedRegistry::from_json(json).expect("valid registry");
//! let seed_def = registry.find_seed("test-seed").expect("seed exists");
//! let graph = generate_example_graph(seed_def).expect("generation succeeds");
//!
//! assert_eq!(graph.users.len(), 3);
//! assert_eq!(graph.tweets.len(), 6);
//! assert_eq!(graph.follows.len(), 3);
//! ```

mod error;
mod generator;
mod registry;
mod seed;
mod validation;

pub use error::{GenerationError, RegistryError};
pub use generator::generate_example_graph;
pub use registry::{SeedDefinition, SeedRegistry};
pub use seed::{ExampleFollowSeed, ExampleGraph, ExampleTweetSeed, ExampleUserSeed};
pub use validation::{
    DOCUMENT_LENGTH, NAME_MAX, TWEET_CONTENT_MAX, is_valid_document, is_valid_name,
    is_valid_tweet_content,
};

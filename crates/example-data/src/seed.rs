//! Generated seed types.
//!
//! These types are independent of backend domain types; the backend converts
//! them at the point of use. Users are referenced by their document number
//! because the backend derives user identifiers from it.

use serde::{Deserialize, Serialize};

/// A generated example user.
///
/// # Example
///
/// ```
/// use example_data::ExampleUserSeed;
///
/// let user = ExampleUserSeed {
///     name: "Ada Lovelace".to_owned(),
///     document: "12345678".to_owned(),
/// };
///
/// assert_eq!(user.name, "Ada Lovelace");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExampleUserSeed {
    /// Human-readable name.
    pub name: String,
    /// Identity document number, unique within a graph.
    pub document: String,
}

/// A generated example tweet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExampleTweetSeed {
    /// Document number of the authoring user.
    pub author_document: String,
    /// Tweet text.
    pub content: String,
    /// How long before seeding time the tweet was posted.
    pub minutes_ago: u32,
}

/// A generated follow edge.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExampleFollowSeed {
    /// Document number of the following user.
    pub follower_document: String,
    /// Document number of the followed user.
    pub followee_document: String,
}

/// A complete generated social graph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExampleGraph {
    /// Generated users.
    pub users: Vec<ExampleUserSeed>,
    /// Generated tweets, grouped by author in generation order.
    pub tweets: Vec<ExampleTweetSeed>,
    /// Generated follow edges.
    pub follows: Vec<ExampleFollowSeed>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tweet_seed_serializes_to_camel_case() {
        let tweet = ExampleTweetSeed {
            author_document: "12345678".to_owned(),
            content: "hello".to_owned(),
            minutes_ago: 3,
        };
        let json = serde_json::to_string(&tweet).expect("serialize");
        assert!(json.contains("authorDocument"));
        assert!(json.contains("minutesAgo"));
    }

    #[test]
    fn follow_seed_serializes_to_camel_case() {
        let follow = ExampleFollowSeed {
            follower_document: "12345678".to_owned(),
            followee_document: "87654321".to_owned(),
        };
        let json = serde_json::to_string(&follow).expect("serialize");
        assert!(json.contains("followerDocument"));
        assert!(json.contains("followeeDocument"));
    }
}

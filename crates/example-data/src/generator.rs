//! Deterministic social graph generation from seed definitions.
//!
//! The same seed definition always produces identical users, tweets and
//! follow edges, so demo environments can be rebuilt on every start.

use std::collections::HashSet;

use fake::Fake;
use fake::faker::lorem::raw::Sentence;
use fake::faker::name::raw::{FirstName, LastName};
use fake::locales::EN;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::GenerationError;
use crate::registry::SeedDefinition;
use crate::seed::{ExampleFollowSeed, ExampleGraph, ExampleTweetSeed, ExampleUserSeed};
use crate::validation::{NAME_MAX, TWEET_CONTENT_MAX, is_valid_name, is_valid_tweet_content};

/// Maximum number of attempts to generate any single valid value.
const MAX_ATTEMPTS: usize = 100;

/// Lowest eight-digit document number.
const DOCUMENT_MIN: u32 = 10_000_000;

/// One past the highest eight-digit document number.
const DOCUMENT_END: u32 = 100_000_000;

/// Oldest generated tweet, one week before seeding.
const MAX_MINUTES_AGO: u32 = 7 * 24 * 60;

/// Generates an example social graph from a seed definition.
///
/// Every user gets a unique eight-digit document, exactly
/// [`SeedDefinition::tweets_per_user`] tweets and exactly
/// [`SeedDefinition::follows_per_user`] distinct follow edges, none of which
/// point back at the user.
///
/// # Errors
///
/// Returns [`GenerationError`] when a valid name, document or tweet cannot be
/// produced within the retry budget.
///
/// # Example
///
/// ```
/// use example_data::{SeedRegistry, generate_example_graph};
///
/// let json = r#"{"version": 1, "seeds": [{"name": "s", "seed": 7, "userCount": 4}]}"#;
/// let registry = SeedRegistry::from_json(json).expect("valid");
/// let seed_def = registry.find_seed("s").expect("found");
///
/// let first = generate_example_graph(seed_def).expect("generated");
/// let second = generate_example_graph(seed_def).expect("generated");
/// assert_eq!(first, second);
/// ```
pub fn generate_example_graph(seed_def: &SeedDefinition) -> Result<ExampleGraph, GenerationError> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed_def.seed());

    let users = generate_users(&mut rng, seed_def.user_count())?;

    let mut tweets = Vec::with_capacity(users.len().saturating_mul(seed_def.tweets_per_user()));
    for user in &users {
        for _ in 0..seed_def.tweets_per_user() {
            tweets.push(ExampleTweetSeed {
                author_document: user.document.clone(),
                content: generate_content(&mut rng)?,
                minutes_ago: rng.random_range(1..=MAX_MINUTES_AGO),
            });
        }
    }

    let follows = generate_follows(&mut rng, &users, seed_def.follows_per_user());

    Ok(ExampleGraph {
        users,
        tweets,
        follows,
    })
}

fn generate_users(
    rng: &mut ChaCha8Rng,
    count: usize,
) -> Result<Vec<ExampleUserSeed>, GenerationError> {
    let mut documents = HashSet::with_capacity(count);
    let mut users = Vec::with_capacity(count);
    for _ in 0..count {
        let name = generate_name(rng)?;
        let document = generate_document(rng, &mut documents)?;
        users.push(ExampleUserSeed { name, document });
    }
    Ok(users)
}

/// Builds "First Last", truncated to the name limit.
fn generate_name(rng: &mut ChaCha8Rng) -> Result<String, GenerationError> {
    for _ in 0..MAX_ATTEMPTS {
        let first: String = FirstName(EN).fake_with_rng(rng);
        let last: String = LastName(EN).fake_with_rng(rng);
        let candidate: String = format!("{first} {last}").chars().take(NAME_MAX).collect();
        if is_valid_name(&candidate) {
            return Ok(candidate.trim().to_owned());
        }
    }

    Err(GenerationError::NameGenerationFailed {
        max_attempts: MAX_ATTEMPTS,
    })
}

fn generate_document(
    rng: &mut ChaCha8Rng,
    taken: &mut HashSet<String>,
) -> Result<String, GenerationError> {
    for _ in 0..MAX_ATTEMPTS {
        let candidate = rng.random_range(DOCUMENT_MIN..DOCUMENT_END).to_string();
        if taken.insert(candidate.clone()) {
            return Ok(candidate);
        }
    }

    Err(GenerationError::DocumentGenerationFailed {
        max_attempts: MAX_ATTEMPTS,
    })
}

fn generate_content(rng: &mut ChaCha8Rng) -> Result<String, GenerationError> {
    for _ in 0..MAX_ATTEMPTS {
        let sentence: String = Sentence(EN, 3..12).fake_with_rng(rng);
        let candidate: String = sentence.chars().take(TWEET_CONTENT_MAX).collect();
        if is_valid_tweet_content(&candidate) {
            return Ok(candidate.trim().to_owned());
        }
    }

    Err(GenerationError::ContentGenerationFailed {
        max_attempts: MAX_ATTEMPTS,
    })
}

fn generate_follows(
    rng: &mut ChaCha8Rng,
    users: &[ExampleUserSeed],
    per_user: usize,
) -> Vec<ExampleFollowSeed> {
    let mut follows = Vec::with_capacity(users.len().saturating_mul(per_user));
    for follower in users {
        let mut candidates: Vec<&ExampleUserSeed> = users
            .iter()
            .filter(|other| other.document != follower.document)
            .collect();
        candidates.shuffle(rng);
        follows.extend(
            candidates
                .into_iter()
                .take(per_user)
                .map(|followee| ExampleFollowSeed {
                    follower_document: follower.document.clone(),
                    followee_document: followee.document.clone(),
                }),
        );
    }
    follows
}

//! Startup seeding orchestration.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use cap_std::{ambient_authority, fs::Dir};
use example_data::{GenerationError, RegistryError, SeedRegistry, generate_example_graph};
use mockable::Clock;
use thiserror::Error;
use tracing::info;

use crate::example_data::config::ExampleDataSettings;
use crate::example_data::seeder::{ExampleDataSeeder, SeedOutcome, SeedTargets};

/// Errors returned while executing startup seeding.
#[derive(Debug, Error)]
pub enum StartupSeedingError {
    /// Registry file could not be read.
    #[error("failed to read registry at {path}: {source}")]
    RegistryRead {
        /// Path to the registry file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Registry parsing or lookup failed.
    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),
    /// The graph could not be generated from the seed.
    #[error("example graph generation failed: {0}")]
    Generation(#[from] GenerationError),
    /// A generated value failed domain validation.
    #[error("invalid example data: {message}")]
    InvalidSeed {
        /// Validation failure.
        message: String,
    },
    /// A store rejected a seeded record.
    #[error("example data store error: {message}")]
    Store {
        /// Store failure.
        message: String,
    },
    /// Seed name must not be empty.
    #[error("seed name must not be empty")]
    EmptySeedName,
}

/// Apply example data on startup when enabled.
///
/// Returns `Ok(None)` when seeding is disabled.
///
/// # Examples
///
/// ```rust,no_run
/// use std::path::PathBuf;
/// use std::sync::Arc;
///
/// use chirp::example_data::{ExampleDataSettings, SeedTargets, seed_example_data_on_startup};
/// use chirp::outbound::memory::{
///     InMemoryFollowRepository, InMemoryTweetRepository, InMemoryUserRepository,
/// };
/// use mockable::DefaultClock;
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let settings = ExampleDataSettings {
///     enabled: true,
///     seed_name: Some("chatty-wren".to_owned()),
///     registry_path: Some(PathBuf::from("fixtures/example-data/seeds.json")),
/// };
/// let targets = SeedTargets {
///     users: Arc::new(InMemoryUserRepository::new()),
///     follows: Arc::new(InMemoryFollowRepository::new()),
///     tweets: Arc::new(InMemoryTweetRepository::new()),
/// };
/// let outcome = seed_example_data_on_startup(&settings, targets, Arc::new(DefaultClock)).await?;
/// assert!(outcome.is_some());
/// # Ok(())
/// # }
/// ```
pub async fn seed_example_data_on_startup(
    settings: &ExampleDataSettings,
    targets: SeedTargets,
    clock: Arc<dyn Clock>,
) -> Result<Option<SeedOutcome>, StartupSeedingError> {
    if !settings.enabled {
        info!(reason = "disabled", "example data seeding skipped");
        return Ok(None);
    }

    let seed_name = settings.seed_name().trim();
    if seed_name.is_empty() {
        return Err(StartupSeedingError::EmptySeedName);
    }

    let registry = load_registry(&settings.registry_path())?;
    let seed_def = registry.find_seed(seed_name)?;
    let graph = generate_example_graph(seed_def)?;

    let outcome = ExampleDataSeeder::new(targets, clock)
        .apply(seed_name, &graph)
        .await?;
    info!(
        seed_key = %outcome.seed_name,
        user_count = outcome.users,
        existing_users = outcome.existing_users,
        tweet_count = outcome.tweets,
        follow_count = outcome.follows,
        "example data seeding applied"
    );
    Ok(Some(outcome))
}

fn load_registry(path: &Path) -> Result<SeedRegistry, StartupSeedingError> {
    let read_error = |source| StartupSeedingError::RegistryRead {
        path: path.to_path_buf(),
        source,
    };
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name = path.file_name().ok_or_else(|| {
        read_error(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "registry path must be a file",
        ))
    })?;
    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(read_error)?;
    let contents = dir.read_to_string(Path::new(file_name)).map_err(read_error)?;
    Ok(SeedRegistry::from_json(&contents)?)
}

//! Error types for the example-data crate.
//!
//! Registry loading and graph generation fail in different ways, so each has
//! its own `thiserror` enum.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when parsing or querying a seed registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The registry file could not be read.
    #[error("failed to read registry file at '{path}': {message}")]
    IoError {
        /// Path to the registry file.
        path: PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// The registry JSON is malformed or missing required fields.
    #[error("invalid registry JSON: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
    },

    /// The registry version is not supported.
    #[error("unsupported registry version: expected {expected}, found {actual}")]
    UnsupportedVersion {
        /// Expected version number.
        expected: u32,
        /// Actual version found in the registry.
        actual: u32,
    },

    /// The registry contains no seed definitions.
    #[error("registry contains no seed definitions")]
    EmptySeeds,

    /// Two seed definitions share a name.
    #[error("seed name '{name}' is defined more than once")]
    DuplicateSeedName {
        /// The repeated seed name.
        name: String,
    },

    /// A seed definition requests an empty user population.
    #[error("seed '{name}' must generate at least one user")]
    EmptyUserCount {
        /// Name of the offending seed.
        name: String,
    },

    /// The requested seed name was not found in the registry.
    #[error("seed '{name}' not found in registry")]
    SeedNotFound {
        /// The seed name that was not found.
        name: String,
    },
}

/// Errors that can occur while generating an example graph.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// Failed to generate a valid user name after maximum retries.
    #[error("failed to generate valid user name after {max_attempts} attempts")]
    NameGenerationFailed {
        /// Number of attempts made before giving up.
        max_attempts: usize,
    },

    /// Failed to generate a unique document number after maximum retries.
    #[error("failed to generate a unique document after {max_attempts} attempts")]
    DocumentGenerationFailed {
        /// Number of attempts made before giving up.
        max_attempts: usize,
    },

    /// Failed to generate valid tweet content after maximum retries.
    #[error("failed to generate valid tweet content after {max_attempts} attempts")]
    ContentGenerationFailed {
        /// Number of attempts made before giving up.
        max_attempts: usize,
    },
}

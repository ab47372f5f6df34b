//! Startup wiring for example data seeding.

mod config;
mod seeder;
mod startup;

pub use config::ExampleDataSettings;
pub use seeder::{ExampleDataSeeder, SeedOutcome, SeedTargets};
pub use startup::{StartupSeedingError, seed_example_data_on_startup};

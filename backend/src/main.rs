//! Chirp entry-point: loads settings, wires the in-memory stores into the
//! HTTP server and optionally seeds example data.

mod server;

use std::ffi::OsString;
use std::sync::Arc;

use actix_web::web;
use mockable::{Clock, DefaultClock};
use ortho_config::OrthoConfig;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use chirp::inbound::http::health::HealthState;
#[cfg(feature = "example-data")]
use chirp::example_data::{ExampleDataSettings, SeedTargets, seed_example_data_on_startup};

use server::{ServerConfig, ServerSettings, Stores, create_server};

/// Settings come from `CHIRP_*` variables and configuration files only, so
/// command-line flags of the two settings groups cannot collide.
fn config_args() -> [OsString; 1] {
    [OsString::from("chirp")]
}

fn load_settings() -> std::io::Result<ServerSettings> {
    ServerSettings::load_from_iter(config_args())
        .map_err(|err| std::io::Error::other(format!("failed to load server settings: {err}")))
}

#[cfg(feature = "example-data")]
async fn seed_stores(stores: &Stores, clock: Arc<dyn Clock>) -> std::io::Result<()> {
    let settings = ExampleDataSettings::load_from_iter(config_args()).map_err(|err| {
        std::io::Error::other(format!("failed to load example data settings: {err}"))
    })?;
    let targets = SeedTargets {
        users: stores.users.clone(),
        follows: stores.follows.clone(),
        tweets: stores.tweets.clone(),
    };
    seed_example_data_on_startup(&settings, targets, clock)
        .await
        .map(|_| ())
        .map_err(std::io::Error::other)
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = load_settings()?;
    let health_state = web::Data::new(HealthState::new(settings.service_info()));
    let stores = Stores::default();
    let clock: Arc<dyn Clock> = Arc::new(DefaultClock);

    #[cfg(feature = "example-data")]
    seed_stores(&stores, Arc::clone(&clock)).await?;

    let server = create_server(
        health_state.clone(),
        &stores,
        ServerConfig::from_settings(&settings),
        clock,
    )?;
    health_state.mark_ready();
    server.await
}

//! HTTP server settings loaded via OrthoConfig, and the resolved
//! configuration used to build the server.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use chirp::domain::{FanOutLimit, TimelineOptions};
use chirp::inbound::http::health::ServiceInfo;

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_APP_ENV: &str = "local";
const DEFAULT_APP_NAME: &str = "chirp";

/// Raw server settings. Every field may come from `CHIRP_*` environment
/// variables or a configuration file.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "CHIRP")]
pub struct ServerSettings {
    /// Interface to bind. Defaults to `0.0.0.0`.
    pub host: Option<IpAddr>,
    /// Port to bind.
    #[ortho_config(default = 8080)]
    pub port: u16,
    /// Deployment environment reported by `GET /health`.
    pub app_env: Option<String>,
    /// Service name reported by `GET /health`.
    pub app_name: Option<String>,
    /// Maximum concurrent followee fetches per timeline request.
    pub timeline_fanout_cap: Option<usize>,
    /// Deadline for each followee fetch, in milliseconds.
    pub timeline_fetch_timeout_ms: Option<u64>,
}

impl ServerSettings {
    /// Socket address to bind, with defaults applied.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(
            self.host.unwrap_or(DEFAULT_HOST),
            self.port,
        )
    }

    /// Identity reported by the health endpoint.
    pub fn service_info(&self) -> ServiceInfo {
        ServiceInfo::new(
            self.app_env.as_deref().unwrap_or(DEFAULT_APP_ENV),
            self.app_name.as_deref().unwrap_or(DEFAULT_APP_NAME),
        )
    }

    /// Fan-out tuning for the timeline aggregator. A zero cap or timeout is
    /// treated as unset.
    pub fn timeline_options(&self) -> TimelineOptions {
        TimelineOptions {
            fan_out: FanOutLimit::from_cap(self.timeline_fanout_cap),
            fetch_timeout: self
                .timeline_fetch_timeout_ms
                .filter(|ms| *ms > 0)
                .map(Duration::from_millis),
        }
    }
}

/// Resolved configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) timeline: TimelineOptions,
    #[cfg(feature = "metrics")]
    pub(crate) app_name: String,
}

impl ServerConfig {
    /// Resolve loaded settings into a server configuration.
    pub fn from_settings(settings: &ServerSettings) -> Self {
        Self {
            bind_addr: settings.bind_addr(),
            timeline: settings.timeline_options(),
            #[cfg(feature = "metrics")]
            app_name: settings.service_info().name,
        }
    }

    /// Return the socket address the server will bind to.
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}

#[cfg(test)]
mod tests {
    //! Settings parsing and default resolution.

    use super::*;
    use std::ffi::OsString;
    use std::num::NonZeroUsize;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARS: [&str; 6] = [
        "CHIRP_HOST",
        "CHIRP_PORT",
        "CHIRP_APP_ENV",
        "CHIRP_APP_NAME",
        "CHIRP_TIMELINE_FANOUT_CAP",
        "CHIRP_TIMELINE_FETCH_TIMEOUT_MS",
    ];

    fn load_from_empty_args() -> ServerSettings {
        ServerSettings::load_from_iter([OsString::from("chirp")]).expect("config should load")
    }

    #[rstest]
    fn defaults_apply_when_unset() {
        let _guard = lock_env(VARS.map(|name| (name, None::<String>)));

        let settings = load_from_empty_args();
        let config = ServerConfig::from_settings(&settings);

        assert_eq!(config.bind_addr(), SocketAddr::from(([0, 0, 0, 0], 8080)));
        let info = settings.service_info();
        assert_eq!(info.env, "local");
        assert_eq!(info.name, "chirp");
        assert_eq!(config.timeline, TimelineOptions::default());
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("CHIRP_HOST", Some("127.0.0.1".to_owned())),
            ("CHIRP_PORT", Some("9090".to_owned())),
            ("CHIRP_APP_ENV", Some("stg".to_owned())),
            ("CHIRP_APP_NAME", Some("chirp-api".to_owned())),
            ("CHIRP_TIMELINE_FANOUT_CAP", Some("8".to_owned())),
            ("CHIRP_TIMELINE_FETCH_TIMEOUT_MS", Some("250".to_owned())),
        ]);

        let settings = load_from_empty_args();

        assert_eq!(settings.bind_addr(), SocketAddr::from(([127, 0, 0, 1], 9090)));
        let info = settings.service_info();
        assert_eq!(info.env, "stg");
        assert_eq!(info.name, "chirp-api");
        assert_eq!(
            settings.timeline_options(),
            TimelineOptions {
                fan_out: FanOutLimit::Capped(NonZeroUsize::new(8).expect("non-zero")),
                fetch_timeout: Some(Duration::from_millis(250)),
            }
        );
    }

    #[rstest]
    #[case(Some(0), Some(0))]
    #[case(None, None)]
    fn zero_tuning_means_unset(#[case] cap: Option<usize>, #[case] timeout: Option<u64>) {
        let settings = ServerSettings {
            host: None,
            port: 8080,
            app_env: None,
            app_name: None,
            timeline_fanout_cap: cap,
            timeline_fetch_timeout_ms: timeout,
        };
        assert_eq!(settings.timeline_options(), TimelineOptions::default());
    }
}

//! Prometheus request metrics served at `/metrics`.

use actix_web_prom::{PrometheusMetrics, PrometheusMetricsBuilder};
use prometheus::Registry;

/// Path of the scrape endpoint.
pub(crate) const METRICS_PATH: &str = "/metrics";

/// Metric names only allow `[a-zA-Z0-9_]`.
fn namespace_for(app_name: &str) -> String {
    app_name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

/// Build the request metrics middleware for `app_name` on a fresh registry.
///
/// # Errors
/// Returns [`std::io::Error`] when the collectors cannot be registered.
pub(crate) fn build_metrics(app_name: &str) -> std::io::Result<PrometheusMetrics> {
    PrometheusMetricsBuilder::new(&namespace_for(app_name))
        .registry(Registry::new())
        .endpoint(METRICS_PATH)
        .build()
        .map_err(|err| std::io::Error::other(format!("metrics registration failed: {err}")))
}

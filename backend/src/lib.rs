//! Chirp backend library: a small social feed with a concurrent timeline
//! aggregator.
//!
//! The crate follows a hexagonal layout. [`domain`] holds the model, ports and
//! services; [`outbound`] provides in-memory stores; [`inbound`] exposes the
//! HTTP API.

pub mod doc;
pub mod domain;
#[cfg(feature = "example-data")]
pub mod example_data;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;

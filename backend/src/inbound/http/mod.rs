//! HTTP inbound adapter exposing REST endpoints.
//!
//! ```text
//! POST /api/v1/users               register a user
//! POST /api/v1/follow              follow another user
//! POST /api/v1/tweets              post a tweet
//! POST /api/v1/tweets/{id}/like    like a tweet
//! GET  /api/v1/timeline            read the caller's timeline
//! ```

use actix_web::web;
use tracing::debug;

use crate::domain::Error;

pub mod actor;
pub mod error;
pub mod follows;
pub mod health;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod timeline;
pub mod tweets;
pub mod users;

pub use error::ApiResult;

/// Largest JSON request body accepted by the API, in bytes.
pub const JSON_BODY_LIMIT: usize = 4 * 1024;

/// JSON extractor configuration shared by every API route.
///
/// Oversized or malformed bodies, and bodies with unknown fields, are
/// rejected with `invalid_param` instead of actix's plain-text errors.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(JSON_BODY_LIMIT)
        .error_handler(|err, _req| {
            debug!(error = %err, "rejecting JSON body");
            Error::invalid_param(format!("invalid request body: {err}")).into()
        })
}

/// Register the `/api/v1` handlers on `cfg`.
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(users::create_user)
        .service(follows::follow_user)
        .service(tweets::post_tweet)
        .service(tweets::like_tweet)
        .service(timeline::get_timeline);
}

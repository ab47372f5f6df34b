//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::{App, web};

use crate::domain::ports::{MockFollowCommand, MockTimelineQuery, MockTweetCommand, MockUserCommand};
use crate::inbound::http::configure_api;
use crate::inbound::http::state::HttpState;

/// Driving-port mocks for handler tests; unconfigured mocks panic if called.
#[derive(Default)]
pub struct MockPorts {
    pub users: MockUserCommand,
    pub follows: MockFollowCommand,
    pub tweets: MockTweetCommand,
    pub timeline: MockTimelineQuery,
}

impl MockPorts {
    /// Wrap the mocks in an [`HttpState`].
    pub fn into_state(self) -> HttpState {
        HttpState::new(
            Arc::new(self.users),
            Arc::new(self.follows),
            Arc::new(self.tweets),
            Arc::new(self.timeline),
        )
    }
}

/// Build an app serving the API under `/api/v1` backed by `ports`.
pub fn api_app(
    ports: MockPorts,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(ports.into_state()))
        .service(web::scope("/api/v1").configure(configure_api))
}

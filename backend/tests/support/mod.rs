//! Shared helpers for HTTP integration tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};
use chirp::Trace;
use chirp::domain::{
    FollowService, TimelineOptions, TimelineService, TweetService, UserService,
};
use chirp::inbound::http::configure_api;
use chirp::inbound::http::state::HttpState;
use chirp::outbound::memory::{
    InMemoryFollowRepository, InMemoryLikeRepository, InMemoryTweetRepository,
    InMemoryUserRepository,
};
use chrono::{DateTime, Local, TimeDelta, TimeZone, Utc};
use mockable::Clock;

/// Clock that moves one second forward on every read, so tweets posted in
/// sequence get strictly increasing timestamps.
pub struct SteppingClock {
    start: DateTime<Utc>,
    ticks: AtomicI64,
}

impl SteppingClock {
    pub fn new() -> Self {
        Self {
            start: Utc
                .with_ymd_and_hms(2024, 5, 1, 9, 0, 0)
                .single()
                .expect("valid timestamp"),
            ticks: AtomicI64::new(0),
        }
    }
}

impl Clock for SteppingClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        let tick = self.ticks.fetch_add(1, Ordering::SeqCst);
        self.start + TimeDelta::seconds(tick)
    }
}

/// In-memory stores shared by every service of one test app.
#[derive(Clone, Default)]
pub struct Stores {
    pub users: Arc<InMemoryUserRepository>,
    pub follows: Arc<InMemoryFollowRepository>,
    pub tweets: Arc<InMemoryTweetRepository>,
    pub likes: Arc<InMemoryLikeRepository>,
}

impl Stores {
    pub fn http_state(&self, options: TimelineOptions) -> HttpState {
        HttpState::new(
            Arc::new(UserService::new(self.users.clone())),
            Arc::new(FollowService::new(self.users.clone(), self.follows.clone())),
            Arc::new(TweetService::new(
                self.users.clone(),
                self.tweets.clone(),
                self.likes.clone(),
                Arc::new(SteppingClock::new()),
            )),
            Arc::new(
                TimelineService::new(
                    self.users.clone(),
                    self.follows.clone(),
                    self.tweets.clone(),
                )
                .with_options(options),
            ),
        )
    }
}

/// Build the API app over `state`, wrapped in the trace middleware.
pub fn app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .wrap(Trace)
        .service(web::scope("/api/v1").configure(configure_api))
}

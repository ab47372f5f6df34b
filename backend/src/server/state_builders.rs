//! Wiring of the in-memory stores into the domain services and HTTP state.

use std::sync::Arc;

use mockable::Clock;

use chirp::domain::{FollowService, TimelineOptions, TimelineService, TweetService, UserService};
use chirp::inbound::http::state::HttpState;
use chirp::outbound::memory::{
    InMemoryFollowRepository, InMemoryLikeRepository, InMemoryTweetRepository,
    InMemoryUserRepository,
};

/// The process-wide stores. Every service shares the same instances.
#[derive(Clone, Default)]
pub(crate) struct Stores {
    pub(crate) users: Arc<InMemoryUserRepository>,
    pub(crate) follows: Arc<InMemoryFollowRepository>,
    pub(crate) tweets: Arc<InMemoryTweetRepository>,
    pub(crate) likes: Arc<InMemoryLikeRepository>,
}

/// Build the HTTP state over `stores`, stamping new tweets with `clock`.
pub(crate) fn build_http_state(
    stores: &Stores,
    timeline: TimelineOptions,
    clock: Arc<dyn Clock>,
) -> HttpState {
    let users = UserService::new(Arc::clone(&stores.users));
    let follows = FollowService::new(Arc::clone(&stores.users), Arc::clone(&stores.follows));
    let tweets = TweetService::new(
        Arc::clone(&stores.users),
        Arc::clone(&stores.tweets),
        Arc::clone(&stores.likes),
        clock,
    );
    let timeline = TimelineService::new(
        Arc::clone(&stores.users),
        Arc::clone(&stores.follows),
        Arc::clone(&stores.tweets),
    )
    .with_options(timeline);

    HttpState::new(
        Arc::new(users),
        Arc::new(follows),
        Arc::new(tweets),
        Arc::new(timeline),
    )
}

#[cfg(test)]
mod tests {
    //! The wired state shares one set of stores across services.

    use super::*;
    use chirp::domain::ports::{CreateUserRequest, PostTweetRequest};
    use mockable::DefaultClock;

    #[tokio::test]
    async fn services_share_stores() {
        let stores = Stores::default();
        let state = build_http_state(&stores, TimelineOptions::default(), Arc::new(DefaultClock));

        let ada = state
            .users
            .create_user(CreateUserRequest {
                name: "Ada".to_owned(),
                document: "12345678".to_owned(),
            })
            .await
            .expect("ada created");
        let bob = state
            .users
            .create_user(CreateUserRequest {
                name: "Bob".to_owned(),
                document: "7654321".to_owned(),
            })
            .await
            .expect("bob created");
        state.follows.follow(&ada, &bob).await.expect("follow");
        state
            .tweets
            .post_tweet(PostTweetRequest {
                author_id: bob.clone(),
                content: "hello".to_owned(),
            })
            .await
            .expect("posted");

        let page = state.timeline.timeline(&ada, 0, 10).await.expect("timeline");

        assert_eq!(page.total, 1);
        assert_eq!(page.entries.first().map(|entry| &entry.user_id), Some(&bob));
    }
}

//! Tests for the timeline aggregation service.

use std::collections::HashMap;
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use super::*;
use crate::domain::ports::{MockFollowRepository, MockTweetRepository, MockUserRepository};
use crate::domain::{ErrorCode, TweetContent, TweetId};
use chrono::{DateTime, TimeDelta, Utc};
use rstest::{fixture, rstest};

/// What the scripted store does when asked for one author's tweets.
#[derive(Clone)]
enum Script {
    Tweets(Vec<Tweet>),
    AuthorNotFound,
    Fault,
    Hang,
    Panic,
    Slow(Vec<Tweet>, Duration),
}

/// Tweet store double driven by a per-author script.
///
/// Records how many fetches ran at once and the trace id each fetch saw.
#[derive(Default)]
struct ScriptedTweets {
    scripts: HashMap<UserId, Script>,
    calls: AtomicUsize,
    in_flight: AtomicUsize,
    peak_in_flight: AtomicUsize,
    observed_traces: Mutex<Vec<Option<TraceId>>>,
}

impl ScriptedTweets {
    fn with(mut self, author: &UserId, script: Script) -> Self {
        self.scripts.insert(author.clone(), script);
        self
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn peak_in_flight(&self) -> usize {
        self.peak_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TweetRepository for ScriptedTweets {
    async fn save(&self, _tweet: &Tweet) -> Result<(), TweetRepositoryError> {
        unreachable!("timeline reads never save")
    }

    async fn find_by_id(&self, _id: &TweetId) -> Result<Tweet, TweetRepositoryError> {
        unreachable!("timeline reads never look up single tweets")
    }

    async fn find_by_author(&self, author: &UserId) -> Result<Vec<Tweet>, TweetRepositoryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.observed_traces
            .lock()
            .expect("trace log poisoned")
            .push(TraceId::current());

        let script = self
            .scripts
            .get(author)
            .cloned()
            .unwrap_or(Script::AuthorNotFound);
        match script {
            Script::Tweets(tweets) => Ok(tweets),
            Script::AuthorNotFound => Err(TweetRepositoryError::author_not_found(author.as_ref())),
            Script::Fault => Err(TweetRepositoryError::storage("disk on fire")),
            Script::Hang => {
                std::future::pending::<()>().await;
                unreachable!("pending never resolves")
            }
            Script::Panic => panic!("scripted fetch panic"),
            Script::Slow(tweets, delay) => {
                let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
                self.peak_in_flight.fetch_max(now, Ordering::SeqCst);
                tokio::time::sleep(delay).await;
                self.in_flight.fetch_sub(1, Ordering::SeqCst);
                Ok(tweets)
            }
        }
    }

    async fn increment_likes(&self, _id: &TweetId) -> Result<(), TweetRepositoryError> {
        unreachable!("timeline reads never like")
    }
}

type Service = TimelineService<MockUserRepository, MockFollowRepository, ScriptedTweets>;

#[fixture]
fn now() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2024-05-01T12:00:00Z")
        .expect("valid timestamp")
        .with_timezone(&Utc)
}

#[fixture]
fn viewer() -> UserId {
    user("usr_1000000")
}

fn user(id: &str) -> UserId {
    UserId::new(id).expect("valid user id")
}

fn tweet(author: &UserId, text: &str, created_at: DateTime<Utc>) -> Tweet {
    Tweet::new(
        TweetId::random(),
        author.clone(),
        TweetContent::new(text).expect("valid content"),
        created_at,
    )
}

fn known_users() -> MockUserRepository {
    let mut users = MockUserRepository::new();
    users.expect_exists().returning(|_| Ok(true));
    users
}

fn following(followees: Vec<UserId>) -> MockFollowRepository {
    let mut follows = MockFollowRepository::new();
    follows
        .expect_followees()
        .returning(move |_| Ok(followees.clone()));
    follows
}

fn service(
    followees: Vec<UserId>,
    tweets: ScriptedTweets,
    options: TimelineOptions,
) -> (Service, Arc<ScriptedTweets>) {
    let tweets = Arc::new(tweets);
    let service = TimelineService::new(
        Arc::new(known_users()),
        Arc::new(following(followees)),
        Arc::clone(&tweets),
    )
    .with_options(options);
    (service, tweets)
}

fn followees(count: usize) -> Vec<UserId> {
    (0..count)
        .map(|index| user(&format!("usr_{:07}", 2_000_000 + index)))
        .collect()
}

#[rstest]
#[tokio::test]
async fn merges_followees_newest_first(viewer: UserId, now: DateTime<Utc>) {
    let alice = user("usr_2000001");
    let bob = user("usr_2000002");
    let scripted = ScriptedTweets::default()
        .with(
            &alice,
            Script::Tweets(vec![
                tweet(&alice, "two minutes ago", now - TimeDelta::minutes(2)),
                tweet(&alice, "one minute ago", now - TimeDelta::minutes(1)),
            ]),
        )
        .with(
            &bob,
            Script::Tweets(vec![tweet(&bob, "three minutes ago", now - TimeDelta::minutes(3))]),
        );
    let (service, _) = service(vec![alice, bob], scripted, TimelineOptions::default());

    let page = service.timeline(&viewer, 0, 10).await.expect("timeline");

    let contents: Vec<&str> = page.entries.iter().map(|e| e.content.as_str()).collect();
    assert_eq!(
        contents,
        ["one minute ago", "two minutes ago", "three minutes ago"]
    );
    assert_eq!(page.total, 3);
}

#[rstest]
#[tokio::test]
async fn viewer_without_followees_gets_empty_page(viewer: UserId) {
    let (service, tweets) = service(Vec::new(), ScriptedTweets::default(), TimelineOptions::default());

    let page = service.timeline(&viewer, 0, 10).await.expect("timeline");

    assert!(page.entries.is_empty());
    assert_eq!(page.total, 0);
    assert_eq!(tweets.calls(), 0);
}

#[rstest]
#[tokio::test]
async fn unknown_viewer_is_not_found_and_skips_fan_out(viewer: UserId) {
    let mut users = MockUserRepository::new();
    users.expect_exists().times(1).returning(|_| Ok(false));
    let mut follows = MockFollowRepository::new();
    follows.expect_followees().times(0);
    let mut tweets = MockTweetRepository::new();
    tweets.expect_find_by_author().times(0);
    let service = TimelineService::new(Arc::new(users), Arc::new(follows), Arc::new(tweets));

    let error = service
        .timeline(&viewer, 0, 10)
        .await
        .expect_err("unknown viewer");

    assert_eq!(error.code(), ErrorCode::NotFound);
}

#[rstest]
#[tokio::test]
async fn identity_store_fault_is_internal(viewer: UserId) {
    let mut users = MockUserRepository::new();
    users
        .expect_exists()
        .returning(|_| Err(UserRepositoryError::storage("lock poisoned")));
    let mut follows = MockFollowRepository::new();
    follows.expect_followees().times(0);
    let service = TimelineService::new(
        Arc::new(users),
        Arc::new(follows),
        Arc::new(MockTweetRepository::new()),
    );

    let error = service.timeline(&viewer, 0, 10).await.expect_err("fault");

    assert_eq!(error.code(), ErrorCode::InternalFault);
}

#[rstest]
#[tokio::test]
async fn graph_fault_is_internal(viewer: UserId) {
    let mut follows = MockFollowRepository::new();
    follows
        .expect_followees()
        .returning(|_| Err(FollowRepositoryError::storage("lock poisoned")));
    let service = TimelineService::new(
        Arc::new(known_users()),
        Arc::new(follows),
        Arc::new(MockTweetRepository::new()),
    );

    let error = service.timeline(&viewer, 0, 10).await.expect_err("fault");

    assert_eq!(error.code(), ErrorCode::InternalFault);
}

#[rstest]
#[tokio::test]
async fn author_not_found_counts_as_no_tweets(viewer: UserId, now: DateTime<Utc>) {
    let quiet = user("usr_2000001");
    let chatty = user("usr_2000002");
    let scripted = ScriptedTweets::default()
        .with(&quiet, Script::AuthorNotFound)
        .with(&chatty, Script::Tweets(vec![tweet(&chatty, "hello", now)]));
    let (service, tweets) = service(vec![quiet, chatty], scripted, TimelineOptions::default());

    let page = service.timeline(&viewer, 0, 10).await.expect("timeline");

    assert_eq!(page.entries.len(), 1);
    assert_eq!(tweets.calls(), 2);
}

#[rstest]
#[tokio::test]
async fn hard_fault_fails_whole_timeline(viewer: UserId, now: DateTime<Utc>) {
    let broken = user("usr_2000001");
    let healthy = user("usr_2000002");
    let scripted = ScriptedTweets::default()
        .with(&broken, Script::Fault)
        .with(&healthy, Script::Tweets(vec![tweet(&healthy, "hello", now)]));
    let (service, _) = service(vec![broken, healthy], scripted, TimelineOptions::default());

    let error = service.timeline(&viewer, 0, 10).await.expect_err("fault");

    assert_eq!(error.code(), ErrorCode::InternalFault);
}

#[rstest]
#[tokio::test]
async fn hard_fault_aborts_outstanding_fetches(viewer: UserId) {
    let broken = user("usr_2000001");
    let stuck = user("usr_2000002");
    let scripted = ScriptedTweets::default()
        .with(&broken, Script::Fault)
        .with(&stuck, Script::Hang);
    let (service, _) = service(vec![stuck, broken], scripted, TimelineOptions::default());

    let outcome = tokio::time::timeout(Duration::from_secs(5), service.timeline(&viewer, 0, 10))
        .await
        .expect("fault short-circuits the hanging fetch");

    assert_eq!(
        outcome.expect_err("fault").code(),
        ErrorCode::InternalFault
    );
}

#[rstest]
#[tokio::test]
async fn panicking_fetch_is_internal(viewer: UserId) {
    let exploding = user("usr_2000001");
    let scripted = ScriptedTweets::default().with(&exploding, Script::Panic);
    let (service, _) = service(vec![exploding], scripted, TimelineOptions::default());

    let error = service.timeline(&viewer, 0, 10).await.expect_err("panic");

    assert_eq!(error.code(), ErrorCode::InternalFault);
}

#[rstest]
#[tokio::test]
async fn elapsed_fetch_deadline_is_internal(viewer: UserId) {
    let stuck = user("usr_2000001");
    let scripted = ScriptedTweets::default().with(&stuck, Script::Hang);
    let options = TimelineOptions {
        fetch_timeout: Some(Duration::from_millis(20)),
        ..TimelineOptions::default()
    };
    let (service, _) = service(vec![stuck], scripted, options);

    let error = service.timeline(&viewer, 0, 10).await.expect_err("timeout");

    assert_eq!(error.code(), ErrorCode::InternalFault);
    assert!(error.message().contains("timed out"));
}

#[rstest]
#[case::capped(FanOutLimit::Capped(NonZeroUsize::MIN.saturating_add(1)), 2)]
#[case::unbounded(FanOutLimit::Unbounded, 6)]
#[tokio::test]
async fn fan_out_respects_concurrency_limit(
    viewer: UserId,
    now: DateTime<Utc>,
    #[case] fan_out: FanOutLimit,
    #[case] expected_peak: usize,
) {
    let authors = followees(6);
    let scripted = authors.iter().fold(ScriptedTweets::default(), |acc, author| {
        acc.with(
            author,
            Script::Slow(vec![tweet(author, "hi", now)], Duration::from_millis(50)),
        )
    });
    let options = TimelineOptions {
        fan_out,
        ..TimelineOptions::default()
    };
    let (service, tweets) = service(authors, scripted, options);

    let page = service.timeline(&viewer, 0, 10).await.expect("timeline");

    assert_eq!(page.total, 6);
    assert_eq!(tweets.peak_in_flight(), expected_peak);
}

#[rstest]
#[case::defaults(0, 10, 0, 10)]
#[case::negative_offset(-5, 3, 0, 3)]
#[case::non_positive_limit(0, -1, 0, 10)]
#[case::limit_above_max(0, 500, 0, 15)]
#[case::offset_past_end(15, 10, 15, 0)]
#[case::offset_above_cap(5_000, 10, 1_000, 0)]
#[case::tail(12, 10, 12, 3)]
#[tokio::test]
async fn pagination_is_normalised(
    viewer: UserId,
    now: DateTime<Utc>,
    #[case] offset: i64,
    #[case] limit: i64,
    #[case] expected_offset: usize,
    #[case] expected_len: usize,
) {
    let author = user("usr_2000001");
    let history: Vec<Tweet> = (0..15)
        .map(|minutes| tweet(&author, "tick", now - TimeDelta::minutes(minutes)))
        .collect();
    let scripted = ScriptedTweets::default().with(&author, Script::Tweets(history));
    let (service, _) = service(vec![author], scripted, TimelineOptions::default());

    let page = service
        .timeline(&viewer, offset, limit)
        .await
        .expect("pagination never fails");

    assert_eq!(page.page.offset(), expected_offset);
    assert_eq!(page.entries.len(), expected_len);
    assert_eq!(page.total, 15);
}

#[rstest]
#[tokio::test]
async fn output_is_sorted_and_repeatable(viewer: UserId, now: DateTime<Utc>) {
    let authors = followees(4);
    let scripted = authors
        .iter()
        .enumerate()
        .fold(ScriptedTweets::default(), |acc, (index, author)| {
            let offset = i64::try_from(index).expect("small index");
            acc.with(
                author,
                Script::Tweets(vec![
                    tweet(author, "a", now - TimeDelta::minutes(offset * 7)),
                    tweet(author, "b", now - TimeDelta::minutes(offset * 3 + 1)),
                ]),
            )
        });
    let (service, _) = service(authors, scripted, TimelineOptions::default());

    let first = service.timeline(&viewer, 0, 100).await.expect("timeline");
    let second = service.timeline(&viewer, 0, 100).await.expect("timeline");

    assert_eq!(first.entries.len(), 8);
    assert!(
        first
            .entries
            .windows(2)
            .all(|pair| pair[0].created_at >= pair[1].created_at)
    );
    let timestamps = |page: &TimelinePage| {
        page.entries
            .iter()
            .map(|entry| entry.created_at)
            .collect::<Vec<_>>()
    };
    assert_eq!(timestamps(&first), timestamps(&second));
    let mut first_ids: Vec<_> = first.entries.iter().map(|e| e.id.to_string()).collect();
    let mut second_ids: Vec<_> = second.entries.iter().map(|e| e.id.to_string()).collect();
    first_ids.sort();
    second_ids.sort();
    assert_eq!(first_ids, second_ids);
}

#[rstest]
#[tokio::test]
async fn fetch_tasks_inherit_trace_id(viewer: UserId, now: DateTime<Utc>) {
    let authors = followees(3);
    let scripted = authors.iter().fold(ScriptedTweets::default(), |acc, author| {
        acc.with(author, Script::Tweets(vec![tweet(author, "hi", now)]))
    });
    let (service, tweets) = service(authors, scripted, TimelineOptions::default());
    let trace_id = TraceId::generate();

    TraceId::scope(trace_id, service.timeline(&viewer, 0, 10))
        .await
        .expect("timeline");

    let observed = tweets.observed_traces.lock().expect("trace log poisoned");
    assert_eq!(observed.len(), 3);
    assert!(observed.iter().all(|seen| *seen == Some(trace_id)));
}

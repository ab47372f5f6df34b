//! Tweet handlers.
//!
//! ```text
//! POST /api/v1/tweets {"content":"hello"}   (X-User-ID: usr_1234567)
//! POST /api/v1/tweets/{id}/like              (X-User-ID: usr_1234567)
//! ```

use actix_web::{HttpResponse, post, web};
use serde::{Deserialize, Serialize};

use crate::domain::ports::PostTweetRequest;
use crate::domain::{Error, TweetId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::actor::Actor;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::users::CreatedResponse;

/// Request body for `POST /api/v1/tweets`.
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(deny_unknown_fields)]
pub struct PostTweetBody {
    /// Tweet text, 1 to 280 characters once trimmed.
    #[schema(example = "hello world")]
    pub content: String,
}

/// Post a tweet as the acting user.
#[utoipa::path(
    post,
    path = "/api/v1/tweets",
    request_body = PostTweetBody,
    params(("X-User-ID" = String, Header, description = "Acting user")),
    responses(
        (status = 201, description = "Tweet posted", body = CreatedResponse),
        (status = 400, description = "Empty or oversized content", body = ErrorSchema),
        (status = 404, description = "Author not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["tweets"],
    operation_id = "postTweet"
)]
#[post("/tweets")]
pub async fn post_tweet(
    state: web::Data<HttpState>,
    actor: Actor,
    payload: web::Json<PostTweetBody>,
) -> ApiResult<HttpResponse> {
    let request = PostTweetRequest {
        author_id: actor.into_inner(),
        content: payload.into_inner().content,
    };
    let id = state.tweets.post_tweet(request).await?;
    Ok(HttpResponse::Created().json(CreatedResponse { id: id.to_string() }))
}

/// Like a tweet as the acting user. Each user may like a tweet once.
#[utoipa::path(
    post,
    path = "/api/v1/tweets/{id}/like",
    params(
        ("id" = String, Path, description = "Tweet identifier"),
        ("X-User-ID" = String, Header, description = "Acting user")
    ),
    responses(
        (status = 204, description = "Like recorded"),
        (status = 400, description = "Malformed tweet id or missing user", body = ErrorSchema),
        (status = 403, description = "Tweet already liked", body = ErrorSchema),
        (status = 404, description = "Tweet not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["tweets"],
    operation_id = "likeTweet"
)]
#[post("/tweets/{id}/like")]
pub async fn like_tweet(
    state: web::Data<HttpState>,
    actor: Actor,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let tweet_id = TweetId::new(path.into_inner().trim())
        .map_err(|err| Error::invalid_param(format!("id: {err}")))?;
    state.tweets.like_tweet(actor.id(), &tweet_id).await?;
    Ok(HttpResponse::NoContent().finish())
}

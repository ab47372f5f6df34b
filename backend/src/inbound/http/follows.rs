//! Follow handler.
//!
//! ```text
//! POST /api/v1/follow {"followee_id":"usr_7654321"}   (X-User-ID: usr_1234567)
//! ```

use actix_web::{HttpResponse, post, web};
use serde::{Deserialize, Serialize};

use crate::domain::{Error, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::actor::Actor;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// Request body for `POST /api/v1/follow`.
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(deny_unknown_fields)]
pub struct FollowBody {
    /// User to follow.
    #[schema(example = "usr_7654321")]
    pub followee_id: String,
}

/// Make the acting user follow another user. Repeating a follow is a no-op.
#[utoipa::path(
    post,
    path = "/api/v1/follow",
    request_body = FollowBody,
    params(("X-User-ID" = String, Header, description = "Acting user")),
    responses(
        (status = 204, description = "Follow recorded"),
        (status = 400, description = "Missing user or followee id", body = ErrorSchema),
        (status = 403, description = "Users cannot follow themselves", body = ErrorSchema),
        (status = 404, description = "Follower or followee not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["follows"],
    operation_id = "followUser"
)]
#[post("/follow")]
pub async fn follow_user(
    state: web::Data<HttpState>,
    actor: Actor,
    payload: web::Json<FollowBody>,
) -> ApiResult<HttpResponse> {
    let followee = UserId::new(payload.into_inner().followee_id.trim())
        .map_err(|err| Error::invalid_param(format!("followee_id: {err}")))?;
    state.follows.follow(actor.id(), &followee).await?;
    Ok(HttpResponse::NoContent().finish())
}

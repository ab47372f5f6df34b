//! User registration handler.
//!
//! ```text
//! POST /api/v1/users {"name":"Ada Lovelace","document":"12345678"}
//! ```

use actix_web::{HttpResponse, post, web};
use serde::{Deserialize, Serialize};

use crate::domain::ports::CreateUserRequest;
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// Registration request body for `POST /api/v1/users`.
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateUserBody {
    /// Display name, 1 to 100 characters once trimmed.
    #[schema(example = "Ada Lovelace")]
    pub name: String,
    /// Identity document, 7 or 8 digits.
    #[schema(example = "12345678")]
    pub document: String,
}

/// Identifier of a newly created resource.
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
pub struct CreatedResponse {
    /// Resource identifier.
    pub id: String,
}

/// Register a user.
///
/// The user id is derived from the document, so registering the same
/// document twice is a conflict.
#[utoipa::path(
    post,
    path = "/api/v1/users",
    request_body = CreateUserBody,
    responses(
        (status = 201, description = "User created", body = CreatedResponse),
        (status = 400, description = "Invalid name or document", body = ErrorSchema),
        (status = 409, description = "User already exists", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<CreateUserBody>,
) -> ApiResult<HttpResponse> {
    let CreateUserBody { name, document } = payload.into_inner();
    let id = state
        .users
        .create_user(CreateUserRequest { name, document })
        .await?;
    Ok(HttpResponse::Created().json(CreatedResponse { id: id.into() }))
}

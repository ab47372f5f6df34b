//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay framework-agnostic by not deriving `ToSchema`. The
//! wrappers below mirror their serialised shape and are registered with
//! utoipa under the domain type's name.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_param")]
    InvalidParam,
    /// The user or tweet does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// The user being registered already exists.
    #[schema(rename = "conflict")]
    Conflict,
    /// The action is not allowed, such as liking a tweet twice.
    #[schema(rename = "forbidden")]
    Forbidden,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_fault")]
    InternalFault,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "not_found")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "tweet not found")]
    message: String,
    /// Correlation identifier echoed in the `Trace-Id` header.
    #[schema(example = "6f1c1d5e-3b1a-4c55-9d4e-2a7f5f0b9c11")]
    trace_id: Option<String>,
    /// Supplementary error details for clients.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::TimelineEntry`].
#[derive(ToSchema)]
#[schema(as = crate::domain::TimelineEntry)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct TimelineEntrySchema {
    /// Tweet identifier.
    #[schema(format = "uuid", example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    id: String,
    /// Author of the tweet.
    #[schema(example = "usr_12345678")]
    user_id: String,
    /// Tweet text.
    #[schema(example = "hello world")]
    content: String,
    /// Number of likes at read time.
    likes: u64,
    /// Posting time, RFC 3339.
    #[schema(format = "date-time", example = "2024-05-01T12:00:00Z")]
    created_at: String,
}

//! Timeline handler.
//!
//! ```text
//! GET /api/v1/timeline?offset=0&limit=20   (X-User-ID: usr_1234567)
//! ```

use actix_web::{HttpRequest, HttpResponse, get, web};
use pagination::PageLinks;
use serde::Deserialize;
use tracing::debug;
use url::Url;
use utoipa::IntoParams;

use crate::inbound::http::ApiResult;
use crate::inbound::http::actor::Actor;
use crate::inbound::http::schemas::{ErrorSchema, TimelineEntrySchema};
use crate::inbound::http::state::HttpState;

/// Offset used when the query omits or garbles `offset`.
pub const DEFAULT_OFFSET: i64 = 0;
/// Limit used when the query omits or garbles `limit`.
pub const DEFAULT_LIMIT: i64 = 50;
/// Header carrying the number of entries across all pages.
pub const TOTAL_COUNT_HEADER: &str = "X-Total-Count";

/// Raw pagination parameters. Values are kept as text so a bad number
/// falls back to the default instead of failing the request.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TimelineParams {
    /// Number of entries to skip. Defaults to 0.
    #[param(example = "0")]
    pub offset: Option<String>,
    /// Maximum number of entries to return. Defaults to 50, capped at 100.
    #[param(example = "20")]
    pub limit: Option<String>,
}

impl TimelineParams {
    /// Resolve `(offset, limit)` with handler defaults applied.
    pub fn resolve(&self) -> (i64, i64) {
        (
            lenient(self.offset.as_deref(), DEFAULT_OFFSET),
            lenient(self.limit.as_deref(), DEFAULT_LIMIT),
        )
    }
}

fn lenient(raw: Option<&str>, fallback: i64) -> i64 {
    raw.and_then(|value| value.trim().parse::<i64>().ok())
        .filter(|value| *value >= 0)
        .unwrap_or(fallback)
}

fn request_url(req: &HttpRequest) -> Option<Url> {
    let info = req.connection_info();
    let raw = format!("{}://{}{}", info.scheme(), info.host(), req.uri());
    Url::parse(&raw)
        .inspect_err(|err| debug!(error = %err, url = %raw, "skipping Link header"))
        .ok()
}

/// Read the acting user's timeline, newest first.
///
/// A `Link` header points at the served page and, when more entries exist,
/// the next one.
#[utoipa::path(
    get,
    path = "/api/v1/timeline",
    params(
        TimelineParams,
        ("X-User-ID" = String, Header, description = "Viewing user")
    ),
    responses(
        (status = 200, description = "Timeline page", body = [TimelineEntrySchema],
            headers(
                ("Link" = String, description = "Self and next page links"),
                ("X-Total-Count" = u64, description = "Entries across all pages")
            )),
        (status = 400, description = "Missing user id", body = ErrorSchema),
        (status = 404, description = "Viewer not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["timeline"],
    operation_id = "getTimeline"
)]
#[get("/timeline")]
pub async fn get_timeline(
    req: HttpRequest,
    state: web::Data<HttpState>,
    actor: Actor,
    query: web::Query<TimelineParams>,
) -> ApiResult<HttpResponse> {
    let (offset, limit) = query.resolve();
    let page = state.timeline.timeline(actor.id(), offset, limit).await?;

    let mut response = HttpResponse::Ok();
    response.insert_header((TOTAL_COUNT_HEADER, page.total.to_string()));
    if let Some(base) = request_url(&req) {
        let links = PageLinks::new(&base, page.page, page.total);
        response.insert_header(("Link", links.to_header_value()));
    }
    Ok(response.json(page.entries))
}

#[cfg(test)]
#[path = "timeline_tests.rs"]
mod tests;

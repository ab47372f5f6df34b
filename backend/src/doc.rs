//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] collects every handler under `/api/v1`, the health probes and
//! the schema wrappers for domain types. Callers identify themselves with the
//! `X-User-ID` header, registered here as an API key scheme so Swagger UI can
//! send it.

use crate::inbound::http::actor::USER_ID_HEADER;
use crate::inbound::http::follows::FollowBody;
use crate::inbound::http::health::ServiceInfo;
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema, TimelineEntrySchema};
use crate::inbound::http::tweets::PostTweetBody;
use crate::inbound::http::users::{CreateUserBody, CreatedResponse};
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// Security scheme name referenced by the document.
const ACTOR_SCHEME: &str = "ActingUser";

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            ACTOR_SCHEME,
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::with_description(
                USER_ID_HEADER,
                "Identifier of the acting user. Not authenticated.",
            ))),
        );
    }
}

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only and used by tooling.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Chirp API",
        description = "Post tweets, follow users, like tweets and read a merged timeline."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("ActingUser" = [])),
    paths(
        crate::inbound::http::users::create_user,
        crate::inbound::http::follows::follow_user,
        crate::inbound::http::tweets::post_tweet,
        crate::inbound::http::tweets::like_tweet,
        crate::inbound::http::timeline::get_timeline,
        crate::inbound::http::health::service_info,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        TimelineEntrySchema,
        CreateUserBody,
        CreatedResponse,
        FollowBody,
        PostTweetBody,
        ServiceInfo
    )),
    tags(
        (name = "users", description = "User registration"),
        (name = "follows", description = "Follow graph"),
        (name = "tweets", description = "Posting and liking tweets"),
        (name = "timeline", description = "Merged timeline of followed users"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Tests verifying the generated OpenAPI document.

    use super::*;
    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    // utoipa replaces :: with . in schema names
    const ERROR_SCHEMA_NAME: &str = "crate.domain.Error";
    const ENTRY_SCHEMA_NAME: &str = "crate.domain.TimelineEntry";

    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[rstest]
    #[case(ERROR_SCHEMA_NAME, "code")]
    #[case(ERROR_SCHEMA_NAME, "message")]
    #[case(ERROR_SCHEMA_NAME, "traceId")]
    #[case(ENTRY_SCHEMA_NAME, "user_id")]
    #[case(ENTRY_SCHEMA_NAME, "created_at")]
    fn schemas_expose_serialised_fields(#[case] schema: &str, #[case] field: &str) {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let found = schemas.get(schema).expect("registered schema");

        assert_object_schema_has_field(found, field);
    }

    #[rstest]
    #[case("/api/v1/users")]
    #[case("/api/v1/follow")]
    #[case("/api/v1/tweets")]
    #[case("/api/v1/tweets/{id}/like")]
    #[case("/api/v1/timeline")]
    #[case("/health")]
    #[case("/health/ready")]
    #[case("/health/live")]
    fn document_lists_every_route(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key(path), "missing path {path}");
    }

    #[test]
    fn actor_header_scheme_is_registered() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components");
        assert!(components.security_schemes.contains_key(ACTOR_SCHEME));
    }
}

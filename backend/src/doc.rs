//! OpenAPI documentation configuration.
//!
//! Defines the [`ApiDoc`] struct which generates the OpenAPI specification
//! for the REST API: the campaign application and bookmark endpoints, the
//! health probes, the shared error envelope and the session cookie security
//! scheme. The generated document is served at `/api/v1/openapi.json`.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::inbound::http::applications::{
    ApplicationBody, ApplyResponseBody, ListApplicationsResponseBody,
};
use crate::inbound::http::bookmarks::BookmarkResponseBody;
use crate::inbound::http::schemas::ErrorSchema;

/// Enrich the generated document with the session cookie security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "session",
                "Session cookie carrying the authenticated user id.",
            ))),
        );
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Campaign backend API",
        description = "HTTP interface for campaign applications, bookmarks and health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("SessionCookie" = [])),
    paths(
        crate::inbound::http::applications::apply_to_campaign,
        crate::inbound::http::applications::list_campaign_applications,
        crate::inbound::http::bookmarks::toggle_campaign_bookmark,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ApplyResponseBody,
        ApplicationBody,
        ListApplicationsResponseBody,
        BookmarkResponseBody,
        ErrorSchema
    )),
    tags(
        (name = "applications", description = "Campaign application lifecycle"),
        (name = "bookmarks", description = "Per-user campaign bookmarks"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

//! Campaign application HTTP handlers.
//!
//! ```text
//! POST /api/v1/campaigns/{id}/apply
//! GET  /api/v1/campaigns/{id}/applications
//! ```

use actix_web::{get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::Application;
use crate::domain::ports::{
    ApplicationCommand as _, ApplicationListFilter, ApplicationQuery as _, ApplyOutcome,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{parse_campaign_id, parse_page, parse_status_filter};

/// Response payload for a successful application.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApplyResponseBody {
    /// Identity of the recorded application.
    pub application_id: i64,
    /// Participant count after this application.
    pub current_participants: i32,
}

impl From<ApplyOutcome> for ApplyResponseBody {
    fn from(outcome: ApplyOutcome) -> Self {
        Self {
            application_id: outcome.application_id.get(),
            current_participants: outcome.current_participants,
        }
    }
}

/// One application row in the admin listing.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationBody {
    /// Application identity.
    pub id: i64,
    /// Applicant user id.
    pub user_id: i64,
    /// Target campaign id.
    pub campaign_id: i64,
    /// Lifecycle status.
    pub status: String,
    /// RFC 3339 submission timestamp.
    #[schema(format = "date-time")]
    pub applied_at: String,
}

impl From<Application> for ApplicationBody {
    fn from(application: Application) -> Self {
        Self {
            id: application.id.get(),
            user_id: application.user_id.get(),
            campaign_id: application.campaign_id.get(),
            status: application.status.to_string(),
            applied_at: application.applied_at.to_rfc3339(),
        }
    }
}

/// Query parameters accepted by the listing endpoint.
#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ListApplicationsQuery {
    /// Restrict to one status (PENDING, APPROVED, REJECTED).
    pub status: Option<String>,
    /// Page size, 1..=100, default 20.
    pub limit: Option<i64>,
    /// Rows skipped before the page starts.
    pub offset: Option<i64>,
}

/// Response payload for the admin listing.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListApplicationsResponseBody {
    /// Applications within the requested window, newest first.
    pub applications: Vec<ApplicationBody>,
    /// Total rows matching the filter.
    pub total: i64,
    /// Echo of the effective page size.
    pub limit: i64,
    /// Echo of the effective offset.
    pub offset: i64,
}

/// Apply the authenticated user to a campaign.
#[utoipa::path(
    post,
    path = "/api/v1/campaigns/{id}/apply",
    params(("id" = i64, Path, description = "Campaign id")),
    responses(
        (status = 200, description = "Application recorded", body = ApplyResponseBody),
        (status = 400, description = "Invalid campaign id", body = ErrorSchema),
        (status = 401, description = "Unauthorized", body = ErrorSchema),
        (status = 404, description = "Campaign does not exist", body = ErrorSchema),
        (status = 409, description = "Full or already applied", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["applications"],
    operation_id = "applyToCampaign",
    security(("SessionCookie" = []))
)]
#[post("/campaigns/{id}/apply")]
pub async fn apply_to_campaign(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<i64>,
) -> ApiResult<web::Json<ApplyResponseBody>> {
    let user_id = session.require_user_id()?;
    let campaign_id = parse_campaign_id(path.into_inner())?;

    let outcome = state.applications.apply(user_id, campaign_id).await?;

    Ok(web::Json(ApplyResponseBody::from(outcome)))
}

/// List a campaign's applications, newest first.
#[utoipa::path(
    get,
    path = "/api/v1/campaigns/{id}/applications",
    params(
        ("id" = i64, Path, description = "Campaign id"),
        ListApplicationsQuery
    ),
    responses(
        (status = 200, description = "One page of applications", body = ListApplicationsResponseBody),
        (status = 400, description = "Invalid filter", body = ErrorSchema),
        (status = 401, description = "Unauthorized", body = ErrorSchema),
        (status = 404, description = "Campaign does not exist", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["applications"],
    operation_id = "listCampaignApplications",
    security(("SessionCookie" = []))
)]
#[get("/campaigns/{id}/applications")]
pub async fn list_campaign_applications(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<i64>,
    query: web::Query<ListApplicationsQuery>,
) -> ApiResult<web::Json<ListApplicationsResponseBody>> {
    session.require_user_id()?;
    let campaign_id = parse_campaign_id(path.into_inner())?;
    let query = query.into_inner();

    let filter = ApplicationListFilter {
        status: parse_status_filter(query.status.as_deref())?,
        page: parse_page(query.limit, query.offset)?,
    };

    let page = state
        .applications_query
        .list_for_campaign(campaign_id, filter)
        .await?;

    Ok(web::Json(ListApplicationsResponseBody {
        applications: page
            .applications
            .into_iter()
            .map(ApplicationBody::from)
            .collect(),
        total: page.total,
        limit: filter.page.limit(),
        offset: filter.page.offset(),
    }))
}

#[cfg(test)]
#[path = "applications_tests.rs"]
mod tests;

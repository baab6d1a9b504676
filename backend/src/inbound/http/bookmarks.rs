//! Bookmark HTTP handlers.
//!
//! ```text
//! POST /api/v1/campaigns/{id}/bookmark
//! ```

use actix_web::{post, web};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::ports::{BookmarkCommand as _, BookmarkState};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::parse_campaign_id;

/// Response payload for a bookmark toggle.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookmarkResponseBody {
    /// Stored state after the toggle.
    pub is_bookmarked: bool,
}

impl From<BookmarkState> for BookmarkResponseBody {
    fn from(state: BookmarkState) -> Self {
        Self {
            is_bookmarked: state.is_bookmarked,
        }
    }
}

/// Flip the authenticated user's bookmark for a campaign.
#[utoipa::path(
    post,
    path = "/api/v1/campaigns/{id}/bookmark",
    params(("id" = i64, Path, description = "Campaign id")),
    responses(
        (status = 200, description = "Bookmark toggled", body = BookmarkResponseBody),
        (status = 400, description = "Invalid campaign id", body = ErrorSchema),
        (status = 401, description = "Unauthorized", body = ErrorSchema),
        (status = 409, description = "Concurrent toggle lost", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["bookmarks"],
    operation_id = "toggleCampaignBookmark",
    security(("SessionCookie" = []))
)]
#[post("/campaigns/{id}/bookmark")]
pub async fn toggle_campaign_bookmark(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<i64>,
) -> ApiResult<web::Json<BookmarkResponseBody>> {
    let user_id = session.require_user_id()?;
    let campaign_id = parse_campaign_id(path.into_inner())?;

    let bookmark_state = state.bookmarks.toggle(user_id, campaign_id).await?;

    Ok(web::Json(BookmarkResponseBody::from(bookmark_state)))
}

#[cfg(test)]
#[path = "bookmarks_tests.rs"]
mod tests;

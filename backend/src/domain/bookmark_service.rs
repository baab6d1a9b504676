//! Bookmark toggle domain service.
//!
//! Each call flips the (user, campaign) bookmark; the call is deliberately
//! not idempotent. When two toggles race, the store's unique index rejects
//! the losing insert and this service re-derives the intended state with a
//! single delete, so the pair never holds more than one row.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::Error;
use crate::domain::ports::{
    BookmarkCommand, BookmarkRepository, BookmarkRepositoryError, BookmarkState,
};
use crate::domain::{CampaignId, UserId};

fn map_repository_error(error: BookmarkRepositoryError) -> Error {
    match error {
        BookmarkRepositoryError::Raced {
            user_id: _,
            campaign_id,
        } => Error::conflict(format!(
            "bookmark for campaign {campaign_id} changed concurrently"
        )),
        BookmarkRepositoryError::Connection { message }
        | BookmarkRepositoryError::Transient { message } => {
            Error::service_unavailable(format!("bookmark store unavailable: {message}"))
        }
        BookmarkRepositoryError::Query { message } => {
            Error::internal(format!("bookmark store error: {message}"))
        }
    }
}

/// Bookmark service implementing the toggle driving port.
#[derive(Clone)]
pub struct BookmarkToggleService<R> {
    bookmarks: Arc<R>,
}

impl<R> BookmarkToggleService<R> {
    /// Create a new service over the bookmark repository.
    pub fn new(bookmarks: Arc<R>) -> Self {
        Self { bookmarks }
    }
}

#[async_trait]
impl<R> BookmarkCommand for BookmarkToggleService<R>
where
    R: BookmarkRepository,
{
    async fn toggle(
        &self,
        user_id: UserId,
        campaign_id: CampaignId,
    ) -> Result<BookmarkState, Error> {
        match self.bookmarks.toggle(user_id, campaign_id).await {
            Ok(is_bookmarked) => Ok(BookmarkState { is_bookmarked }),
            Err(BookmarkRepositoryError::Raced { .. }) => {
                // A concurrent toggle inserted the row first, so the state
                // this call intends is "not bookmarked". Retry exactly once
                // as a delete.
                debug!(%user_id, %campaign_id, "bookmark toggle lost insert race, re-deriving as delete");
                self.bookmarks
                    .remove(user_id, campaign_id)
                    .await
                    .map(|_| BookmarkState {
                        is_bookmarked: false,
                    })
                    .map_err(map_repository_error)
            }
            Err(err) => Err(map_repository_error(err)),
        }
    }
}

#[cfg(test)]
#[path = "bookmark_service_tests.rs"]
mod tests;

//! Driving port for toggling bookmarks.

use async_trait::async_trait;

use crate::domain::{CampaignId, Error, UserId};

/// Stored bookmark state after a toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookmarkState {
    /// Whether the pair holds a bookmark row after the call.
    pub is_bookmarked: bool,
}

/// Use-case port: flip the bookmark relationship for a (user, campaign) pair.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookmarkCommand: Send + Sync {
    /// Toggle the bookmark for the authenticated user.
    async fn toggle(
        &self,
        user_id: UserId,
        campaign_id: CampaignId,
    ) -> Result<BookmarkState, Error>;
}

/// Fixture implementation for wiring without a backing store.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureBookmarkCommand;

#[async_trait]
impl BookmarkCommand for FixtureBookmarkCommand {
    async fn toggle(
        &self,
        _user_id: UserId,
        _campaign_id: CampaignId,
    ) -> Result<BookmarkState, Error> {
        Ok(BookmarkState {
            is_bookmarked: false,
        })
    }
}

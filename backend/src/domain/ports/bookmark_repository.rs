//! Port for bookmark persistence.
//!
//! The unique index on (user, campaign) is the final backstop: the adapter's
//! toggle transaction serialises the existence check and the write, and a
//! racing insert surfaces as [`BookmarkRepositoryError::Raced`] so the
//! service can re-derive the intended state.

use async_trait::async_trait;

use crate::domain::{CampaignId, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by bookmark repository adapters.
    pub enum BookmarkRepositoryError {
        /// A concurrent toggle inserted the row first; the losing insert was
        /// rolled back and the pair still holds exactly one row.
        Raced { user_id: i64, campaign_id: i64 } =>
            "concurrent bookmark toggle for user {user_id} on campaign {campaign_id}",
        /// Repository connection could not be established.
        Connection { message: String } =>
            "bookmark repository connection failed: {message}",
        /// The store aborted the transaction for a retryable reason.
        Transient { message: String } =>
            "bookmark repository transaction aborted: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "bookmark repository query failed: {message}",
    }
}

/// Port for flipping and clearing bookmark rows.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookmarkRepository: Send + Sync {
    /// Atomically flip the bookmark for the pair.
    ///
    /// Returns the stored state after the call: `true` when the row was
    /// inserted, `false` when it was deleted.
    async fn toggle(
        &self,
        user_id: UserId,
        campaign_id: CampaignId,
    ) -> Result<bool, BookmarkRepositoryError>;

    /// Delete the bookmark row for the pair if present.
    ///
    /// Returns whether a row was deleted. Used to re-derive state after a
    /// lost toggle race.
    async fn remove(
        &self,
        user_id: UserId,
        campaign_id: CampaignId,
    ) -> Result<bool, BookmarkRepositoryError>;
}

//! Port for the application record store and its capacity transaction.
//!
//! The adapter behind this port owns the transaction boundary: every check
//! and write in `record_application` happens inside one atomic unit, so a
//! failure at any step leaves neither an application row nor a consumed slot.

use async_trait::async_trait;

use crate::domain::{Application, ApplicationId, ApplicationStatus, CampaignId, UserId};
use crate::domain::pagination::PageRequest;

use super::define_port_error;

define_port_error! {
    /// Errors raised by application repository adapters.
    pub enum ApplicationRepositoryError {
        /// The referenced campaign does not exist.
        CampaignMissing { campaign_id: i64 } =>
            "campaign {campaign_id} does not exist",
        /// No slots remained when the guarded increment ran.
        CapacityExhausted { campaign_id: i64 } =>
            "campaign {campaign_id} has no remaining slots",
        /// The (user, campaign) pair already holds an application, detected
        /// by the pre-check or by the unique index under a race.
        DuplicateApplication { user_id: i64, campaign_id: i64 } =>
            "user {user_id} already applied to campaign {campaign_id}",
        /// Repository connection could not be established.
        Connection { message: String } =>
            "application repository connection failed: {message}",
        /// The store aborted the transaction for a retryable reason, such as
        /// a serialization failure or deadlock victim.
        Transient { message: String } =>
            "application repository transaction aborted: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "application repository query failed: {message}",
        /// A stored row violated the capacity invariant. Indicates a writer
        /// bypassed the apply transaction; must fail loudly.
        Corrupted { message: String } =>
            "application repository state corrupted: {message}",
    }
}

/// Proof of a committed application: the new row's identity plus the
/// post-increment participant count for immediate caller feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApplicationReceipt {
    /// Identity of the inserted application row.
    pub application_id: ApplicationId,
    /// Counter value after the paired increment.
    pub current_participants: i32,
}

/// Filter for admin listings of a campaign's applications.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApplicationListFilter {
    /// Restrict to a single status when present.
    pub status: Option<ApplicationStatus>,
    /// Window over the result set, newest first.
    pub page: PageRequest,
}

/// One page of applications plus the filtered total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationPage {
    /// Applications within the requested window.
    pub applications: Vec<Application>,
    /// Total rows matching the filter, ignoring the window.
    pub total: i64,
}

/// Port for recording applications and reading them back for admin listings.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ApplicationRepository: Send + Sync {
    /// Atomically record an application and consume one capacity unit.
    ///
    /// Either both the row insert and the counter increment commit, or
    /// neither does.
    async fn record_application(
        &self,
        user_id: UserId,
        campaign_id: CampaignId,
    ) -> Result<ApplicationReceipt, ApplicationRepositoryError>;

    /// Read a page of applications for a campaign, newest first.
    async fn list_for_campaign(
        &self,
        campaign_id: CampaignId,
        filter: ApplicationListFilter,
    ) -> Result<ApplicationPage, ApplicationRepositoryError>;
}

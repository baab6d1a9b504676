//! Driving port for submitting campaign applications.

use async_trait::async_trait;

use crate::domain::{ApplicationId, CampaignId, Error, UserId};

/// Result of a successful apply call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApplyOutcome {
    /// Identity of the recorded application.
    pub application_id: ApplicationId,
    /// Participant count after the paired increment, for immediate UI
    /// feedback.
    pub current_participants: i32,
}

/// Use-case port: record an application and consume one capacity unit.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ApplicationCommand: Send + Sync {
    /// Apply the authenticated user to the campaign.
    async fn apply(&self, user_id: UserId, campaign_id: CampaignId) -> Result<ApplyOutcome, Error>;
}

/// Fixture implementation for wiring without a backing store.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureApplicationCommand;

#[async_trait]
impl ApplicationCommand for FixtureApplicationCommand {
    async fn apply(
        &self,
        _user_id: UserId,
        campaign_id: CampaignId,
    ) -> Result<ApplyOutcome, Error> {
        Err(Error::not_found(format!(
            "campaign {campaign_id} does not exist"
        )))
    }
}

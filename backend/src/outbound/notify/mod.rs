//! Notification adapter.
//!
//! The real dispatch channel (email or push) is an external collaborator;
//! this adapter records the hand-off in the structured log so deployments
//! without a configured channel still leave an audit trail.

use async_trait::async_trait;
use tracing::info;

use crate::domain::ports::{ApplicationNotifier, NotifierError};
use crate::domain::{ApplicationId, CampaignId, UserId};

/// Notifier that emits a structured log line per submitted application.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

#[async_trait]
impl ApplicationNotifier for LogNotifier {
    async fn application_submitted(
        &self,
        user_id: UserId,
        campaign_id: CampaignId,
        application_id: ApplicationId,
    ) -> Result<(), NotifierError> {
        info!(
            %user_id,
            %campaign_id,
            %application_id,
            "application submitted notification"
        );
        Ok(())
    }
}

//! Port for post-commit application notifications.
//!
//! Dispatch is fire-and-forget: the service spawns it after the apply
//! transaction commits, so it can never block the response or roll the
//! transaction back.

use async_trait::async_trait;

use crate::domain::{ApplicationId, CampaignId, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by notifier adapters. Logged, never surfaced to callers.
    pub enum NotifierError {
        /// The downstream dispatch channel rejected the notification.
        Dispatch { message: String } =>
            "application notification dispatch failed: {message}",
    }
}

/// Port for telling the notification collaborator about a new application.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ApplicationNotifier: Send + Sync {
    /// Announce a freshly committed application.
    async fn application_submitted(
        &self,
        user_id: UserId,
        campaign_id: CampaignId,
        application_id: ApplicationId,
    ) -> Result<(), NotifierError>;
}

/// Fixture implementation for wiring paths that do not exercise dispatch.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureApplicationNotifier;

#[async_trait]
impl ApplicationNotifier for FixtureApplicationNotifier {
    async fn application_submitted(
        &self,
        _user_id: UserId,
        _campaign_id: CampaignId,
        _application_id: ApplicationId,
    ) -> Result<(), NotifierError> {
        Ok(())
    }
}

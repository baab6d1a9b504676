//! Application domain service.
//!
//! Implements the apply use case: decide, atomically, whether a user may be
//! recorded as an applicant, and if so record the application and consume
//! one capacity unit. The atomicity itself lives behind the repository port;
//! this service maps port failures to caller-facing errors and dispatches
//! the post-commit notification without blocking the response.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info, warn};

use crate::domain::Error;
use crate::domain::ports::{
    ApplicationCommand, ApplicationListFilter, ApplicationNotifier, ApplicationPage,
    ApplicationQuery, ApplicationRepository, ApplicationRepositoryError, ApplyOutcome,
};
use crate::domain::{CampaignId, UserId};

fn map_repository_error(error: ApplicationRepositoryError) -> Error {
    match error {
        ApplicationRepositoryError::CampaignMissing { campaign_id } => {
            Error::not_found(format!("campaign {campaign_id} does not exist"))
        }
        ApplicationRepositoryError::CapacityExhausted { campaign_id } => {
            Error::capacity_exceeded(format!("campaign {campaign_id} is fully booked"))
        }
        ApplicationRepositoryError::DuplicateApplication {
            user_id: _,
            campaign_id,
        } => Error::already_applied(format!("already applied to campaign {campaign_id}")),
        ApplicationRepositoryError::Connection { message }
        | ApplicationRepositoryError::Transient { message } => {
            Error::service_unavailable(format!("application store unavailable: {message}"))
        }
        ApplicationRepositoryError::Query { message } => {
            Error::internal(format!("application store error: {message}"))
        }
        ApplicationRepositoryError::Corrupted { message } => {
            // A counter outside its bounds means some writer bypassed the
            // apply transaction. Fail loudly rather than serving from it.
            error!(message = %message, "capacity invariant violated in application store");
            Error::internal(format!("capacity invariant violated: {message}"))
        }
    }
}

/// Application service implementing the apply and listing driving ports.
#[derive(Clone)]
pub struct ApplicationService<R> {
    applications: Arc<R>,
    notifier: Arc<dyn ApplicationNotifier>,
}

impl<R> ApplicationService<R> {
    /// Create a new service over the application repository and notifier.
    pub fn new(applications: Arc<R>, notifier: Arc<dyn ApplicationNotifier>) -> Self {
        Self {
            applications,
            notifier,
        }
    }
}

#[async_trait]
impl<R> ApplicationCommand for ApplicationService<R>
where
    R: ApplicationRepository,
{
    async fn apply(&self, user_id: UserId, campaign_id: CampaignId) -> Result<ApplyOutcome, Error> {
        let receipt = self
            .applications
            .record_application(user_id, campaign_id)
            .await
            .map_err(map_repository_error)?;

        info!(
            %user_id,
            %campaign_id,
            application_id = %receipt.application_id,
            current_participants = receipt.current_participants,
            "application recorded"
        );

        // Post-commit, fire-and-forget: dispatch failures are logged and
        // never affect the already-committed application.
        let notifier = Arc::clone(&self.notifier);
        let application_id = receipt.application_id;
        tokio::spawn(async move {
            if let Err(err) = notifier
                .application_submitted(user_id, campaign_id, application_id)
                .await
            {
                warn!(%user_id, %campaign_id, error = %err, "application notification dropped");
            }
        });

        Ok(ApplyOutcome {
            application_id: receipt.application_id,
            current_participants: receipt.current_participants,
        })
    }
}

#[async_trait]
impl<R> ApplicationQuery for ApplicationService<R>
where
    R: ApplicationRepository,
{
    async fn list_for_campaign(
        &self,
        campaign_id: CampaignId,
        filter: ApplicationListFilter,
    ) -> Result<ApplicationPage, Error> {
        self.applications
            .list_for_campaign(campaign_id, filter)
            .await
            .map_err(map_repository_error)
    }
}

#[cfg(test)]
#[path = "application_service_tests.rs"]
mod tests;

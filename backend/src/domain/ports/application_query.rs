//! Driving port for reading a campaign's applications.

use async_trait::async_trait;

use crate::domain::{CampaignId, Error};

use super::{ApplicationListFilter, ApplicationPage};

/// Use-case port: admin listing of applications for a campaign.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ApplicationQuery: Send + Sync {
    /// Read one page of applications, newest first.
    async fn list_for_campaign(
        &self,
        campaign_id: CampaignId,
        filter: ApplicationListFilter,
    ) -> Result<ApplicationPage, Error>;
}

/// Fixture implementation for wiring without a backing store.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureApplicationQuery;

#[async_trait]
impl ApplicationQuery for FixtureApplicationQuery {
    async fn list_for_campaign(
        &self,
        _campaign_id: CampaignId,
        _filter: ApplicationListFilter,
    ) -> Result<ApplicationPage, Error> {
        Ok(ApplicationPage {
            applications: Vec::new(),
            total: 0,
        })
    }
}

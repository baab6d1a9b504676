//! Application data model.
//!
//! One row per (user, campaign) pair, in any status. Rows are created only
//! by the apply transaction and never deleted by this service; approval and
//! rejection are administrative transitions performed elsewhere and do not
//! touch the campaign's capacity counter.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{ApplicationId, CampaignId, UserId};

/// Lifecycle state of an application. Created as [`ApplicationStatus::Pending`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicationStatus {
    /// Submitted, awaiting an administrative decision.
    Pending,
    /// Accepted by an administrator.
    Approved,
    /// Declined by an administrator. The consumed slot is not released.
    Rejected,
}

impl ApplicationStatus {
    /// Stable storage representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error raised when decoding an unknown status string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown application status {value:?}")]
pub struct UnknownApplicationStatus {
    /// The rejected value.
    pub value: String,
}

impl FromStr for ApplicationStatus {
    type Err = UnknownApplicationStatus;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "PENDING" => Ok(Self::Pending),
            "APPROVED" => Ok(Self::Approved),
            "REJECTED" => Ok(Self::Rejected),
            _ => Err(UnknownApplicationStatus {
                value: raw.to_owned(),
            }),
        }
    }
}

/// A user's recorded request to participate in a campaign.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Application {
    /// Store-generated identity.
    pub id: ApplicationId,
    /// Applicant.
    pub user_id: UserId,
    /// Target campaign.
    pub campaign_id: CampaignId,
    /// Current lifecycle state.
    pub status: ApplicationStatus,
    /// When the application was recorded.
    pub applied_at: DateTime<Utc>,
}

//! Campaign capacity model.
//!
//! The capacity ledger lives on the campaign row itself: `max_participants`
//! is fixed at creation and `current_participants` moves only through the
//! apply transaction's guarded increment. This module gives that ledger a
//! validated in-memory shape so adapters can surface a corrupted row instead
//! of propagating it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::CampaignId;

/// Display state of a campaign. Informational only: the apply path gates on
/// remaining capacity, not on the status column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CampaignStatus {
    /// Accepting applications.
    Ongoing,
    /// Finished; retained for history.
    Completed,
    /// Created but not yet opened.
    Pending,
}

impl CampaignStatus {
    /// Stable storage representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ongoing => "ONGOING",
            Self::Completed => "COMPLETED",
            Self::Pending => "PENDING",
        }
    }
}

impl fmt::Display for CampaignStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CampaignStatus {
    type Err = CampaignValidationError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "ONGOING" => Ok(Self::Ongoing),
            "COMPLETED" => Ok(Self::Completed),
            "PENDING" => Ok(Self::Pending),
            _ => Err(CampaignValidationError::UnknownStatus {
                value: raw.to_owned(),
            }),
        }
    }
}

/// Validation errors for campaign capacity state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CampaignValidationError {
    /// `max_participants` must be a positive integer.
    #[error("max_participants must be positive, got {value}")]
    NonPositiveMax {
        /// The rejected value.
        value: i32,
    },
    /// `current_participants` fell outside `0..=max_participants`. Seeing
    /// this on a stored row means a writer bypassed the apply transaction.
    #[error("current_participants {current} outside 0..={max}")]
    CounterOutOfBounds {
        /// Observed counter value.
        current: i32,
        /// Configured maximum.
        max: i32,
    },
    /// Unrecognised status string on a stored row.
    #[error("unknown campaign status {value:?}")]
    UnknownStatus {
        /// The rejected value.
        value: String,
    },
}

/// Validated snapshot of a campaign's capacity ledger.
///
/// ## Invariants
/// - `max_participants > 0`
/// - `0 <= current_participants <= max_participants`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CampaignCapacity {
    campaign_id: CampaignId,
    max_participants: i32,
    current_participants: i32,
}

impl CampaignCapacity {
    /// Validate and construct a capacity snapshot.
    pub fn new(
        campaign_id: CampaignId,
        max_participants: i32,
        current_participants: i32,
    ) -> Result<Self, CampaignValidationError> {
        if max_participants <= 0 {
            return Err(CampaignValidationError::NonPositiveMax {
                value: max_participants,
            });
        }
        if current_participants < 0 || current_participants > max_participants {
            return Err(CampaignValidationError::CounterOutOfBounds {
                current: current_participants,
                max: max_participants,
            });
        }
        Ok(Self {
            campaign_id,
            max_participants,
            current_participants,
        })
    }

    /// Identifier of the campaign this snapshot belongs to.
    pub fn campaign_id(&self) -> CampaignId {
        self.campaign_id
    }

    /// Fixed participant ceiling.
    pub fn max_participants(&self) -> i32 {
        self.max_participants
    }

    /// Slots consumed so far.
    pub fn current_participants(&self) -> i32 {
        self.current_participants
    }

    /// Slots still available at the time of the snapshot.
    pub fn remaining(&self) -> i32 {
        self.max_participants - self.current_participants
    }

    /// Whether the campaign has no remaining slots.
    pub fn is_full(&self) -> bool {
        self.current_participants >= self.max_participants
    }
}

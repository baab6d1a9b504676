//! Numeric identifier newtypes.
//!
//! Campaigns, users, and applications are keyed by positive 64-bit integers,
//! matching the identity columns in the PostgreSQL schema. The newtypes stop
//! a campaign id from being passed where a user id belongs.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Validation error shared by the id newtypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IdValidationError {
    /// Identifiers are generated as positive integers; zero and negatives
    /// never refer to a row.
    #[error("identifier must be a positive integer")]
    NotPositive,
}

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(try_from = "i64", into = "i64")]
        pub struct $name(i64);

        impl $name {
            /// Validate and construct from a raw integer.
            pub fn new(raw: i64) -> Result<Self, IdValidationError> {
                if raw <= 0 {
                    return Err(IdValidationError::NotPositive);
                }
                Ok(Self(raw))
            }

            /// Access the raw integer value.
            pub fn get(self) -> i64 {
                self.0
            }
        }

        impl TryFrom<i64> for $name {
            type Error = IdValidationError;

            fn try_from(raw: i64) -> Result<Self, Self::Error> {
                Self::new(raw)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

define_id! {
    /// Stable identifier of a user account, supplied by the authentication
    /// collaborator and trusted as-is.
    UserId
}

define_id! {
    /// Stable identifier of a campaign.
    CampaignId
}

define_id! {
    /// Stable identifier of an application row, generated by the store.
    ApplicationId
}

//! Shared validation helpers for inbound HTTP adapters.

use std::str::FromStr;

use serde_json::json;

use crate::domain::pagination::PageRequest;
use crate::domain::{ApplicationStatus, CampaignId, Error};

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    InvalidId,
    InvalidStatus,
    InvalidPage,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            Self::InvalidId => "invalid_id",
            Self::InvalidStatus => "invalid_status",
            Self::InvalidPage => "invalid_page",
        }
    }
}

fn validation_error(
    field: &'static str,
    message: String,
    code: ErrorCode,
    value: impl Into<serde_json::Value>,
) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field,
        "value": value.into(),
        "code": code.as_str(),
    }))
}

/// Parse the campaign id path segment.
pub(crate) fn parse_campaign_id(raw: i64) -> Result<CampaignId, Error> {
    CampaignId::new(raw).map_err(|_| {
        validation_error(
            "id",
            "campaign id must be a positive integer".to_owned(),
            ErrorCode::InvalidId,
            raw,
        )
    })
}

/// Parse an optional status query parameter (case insensitive).
pub(crate) fn parse_status_filter(
    raw: Option<&str>,
) -> Result<Option<ApplicationStatus>, Error> {
    match raw {
        None => Ok(None),
        Some(value) => ApplicationStatus::from_str(value.to_uppercase().as_str())
            .map(Some)
            .map_err(|_| {
                validation_error(
                    "status",
                    "status must be one of PENDING, APPROVED, REJECTED".to_owned(),
                    ErrorCode::InvalidStatus,
                    value,
                )
            }),
    }
}

/// Parse optional limit/offset query parameters into a page window.
pub(crate) fn parse_page(limit: Option<i64>, offset: Option<i64>) -> Result<PageRequest, Error> {
    match (limit, offset) {
        (None, None) => Ok(PageRequest::default()),
        (limit, offset) => {
            let default = PageRequest::default();
            PageRequest::new(
                limit.unwrap_or_else(|| default.limit()),
                offset.unwrap_or(0),
            )
            .map_err(|err| {
                validation_error(
                    "limit",
                    err.to_string(),
                    ErrorCode::InvalidPage,
                    json!({ "limit": limit, "offset": offset }),
                )
            })
        }
    }
}

//! Shared OpenAPI schema payloads for error responses.

use serde::Serialize;
use utoipa::ToSchema;

/// Error envelope returned by every failing endpoint.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorSchema {
    /// Stable snake_case error code.
    #[schema(example = "capacity_exceeded")]
    pub code: String,
    /// Human-readable description.
    #[schema(example = "campaign 7 is fully booked")]
    pub message: String,
    /// Optional structured context, such as the offending field.
    #[schema(value_type = Option<Object>)]
    pub details: Option<serde_json::Value>,
}

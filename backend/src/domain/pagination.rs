//! Limit/offset pagination primitives for record-store reads.

/// Largest page an admin listing will serve in one response.
pub const MAX_PAGE_LIMIT: i64 = 100;
/// Page size used when the caller does not specify one.
pub const DEFAULT_PAGE_LIMIT: i64 = 20;

/// Validation errors for pagination parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PageValidationError {
    /// Limit must be in `1..=MAX_PAGE_LIMIT`.
    #[error("limit must be between 1 and {MAX_PAGE_LIMIT}")]
    LimitOutOfRange,
    /// Offset must not be negative.
    #[error("offset must not be negative")]
    NegativeOffset,
}

/// A validated limit/offset window over a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    limit: i64,
    offset: i64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            limit: DEFAULT_PAGE_LIMIT,
            offset: 0,
        }
    }
}

impl PageRequest {
    /// Validate and construct a page window.
    pub fn new(limit: i64, offset: i64) -> Result<Self, PageValidationError> {
        if !(1..=MAX_PAGE_LIMIT).contains(&limit) {
            return Err(PageValidationError::LimitOutOfRange);
        }
        if offset < 0 {
            return Err(PageValidationError::NegativeOffset);
        }
        Ok(Self { limit, offset })
    }

    /// Page size.
    pub fn limit(&self) -> i64 {
        self.limit
    }

    /// Rows skipped before the page starts.
    pub fn offset(&self) -> i64 {
        self.offset
    }
}

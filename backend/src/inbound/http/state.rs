//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    ApplicationCommand, ApplicationQuery, BookmarkCommand, FixtureApplicationCommand,
    FixtureApplicationQuery, FixtureBookmarkCommand,
};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Apply use case.
    pub applications: Arc<dyn ApplicationCommand>,
    /// Admin listing use case.
    pub applications_query: Arc<dyn ApplicationQuery>,
    /// Bookmark toggle use case.
    pub bookmarks: Arc<dyn BookmarkCommand>,
}

impl HttpState {
    /// Construct state from the three use-case ports.
    pub fn new(
        applications: Arc<dyn ApplicationCommand>,
        applications_query: Arc<dyn ApplicationQuery>,
        bookmarks: Arc<dyn BookmarkCommand>,
    ) -> Self {
        Self {
            applications,
            applications_query,
            bookmarks,
        }
    }

    /// State backed entirely by fixtures, for wiring without a store.
    pub fn fixtures() -> Self {
        Self::new(
            Arc::new(FixtureApplicationCommand),
            Arc::new(FixtureApplicationQuery),
            Arc::new(FixtureBookmarkCommand),
        )
    }
}

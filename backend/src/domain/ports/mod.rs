//! Domain ports: driving use-case traits and driven repository traits.
//!
//! Services implement the driving ports and depend on the driven ports;
//! adapters on either side only ever see these traits.

mod application_command;
mod application_notifier;
mod application_query;
mod application_repository;
mod bookmark_command;
mod bookmark_repository;
mod macros;

pub(crate) use macros::define_port_error;

pub use application_command::{ApplicationCommand, ApplyOutcome, FixtureApplicationCommand};
pub use application_notifier::{ApplicationNotifier, FixtureApplicationNotifier, NotifierError};
pub use application_query::{ApplicationQuery, FixtureApplicationQuery};
pub use application_repository::{
    ApplicationListFilter, ApplicationPage, ApplicationReceipt, ApplicationRepository,
    ApplicationRepositoryError,
};
pub use bookmark_command::{BookmarkCommand, BookmarkState, FixtureBookmarkCommand};
pub use bookmark_repository::{BookmarkRepository, BookmarkRepositoryError};

#[cfg(test)]
pub use application_command::MockApplicationCommand;
#[cfg(test)]
pub use application_notifier::MockApplicationNotifier;
#[cfg(test)]
pub use application_query::MockApplicationQuery;
#[cfg(test)]
pub use application_repository::MockApplicationRepository;
#[cfg(test)]
pub use bookmark_command::MockBookmarkCommand;
#[cfg(test)]
pub use bookmark_repository::MockBookmarkRepository;

//! Domain primitives, services, and ports.
//!
//! Purpose: define the strongly typed entities and the two use cases of the
//! campaign application core, independent of any transport or storage
//! technology. Adapters depend on the port traits in [`ports`]; nothing in
//! this module knows about HTTP or SQL.

pub mod application;
pub mod application_service;
pub mod bookmark_service;
pub mod campaign;
pub mod error;
pub mod ids;
pub mod pagination;
pub mod ports;

pub use self::application::{Application, ApplicationStatus, UnknownApplicationStatus};
pub use self::application_service::ApplicationService;
pub use self::bookmark_service::BookmarkToggleService;
pub use self::campaign::{CampaignCapacity, CampaignStatus, CampaignValidationError};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::ids::{ApplicationId, CampaignId, IdValidationError, UserId};

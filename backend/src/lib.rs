//! Campaign backend library modules.
//!
//! The crate is organised hexagonally: `domain` holds the use cases and the
//! ports they speak through, `inbound` adapts HTTP onto the driving ports and
//! `outbound` implements the driven ports against PostgreSQL.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod outbound;

/// Public OpenAPI surface used by tooling.
pub use doc::ApiDoc;

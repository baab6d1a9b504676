//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Concrete implementations of the driven repository ports, backed by
//! PostgreSQL through `diesel-async` with `bb8` connection pooling.
//!
//! # Architecture
//!
//! - **Thin adapters**: repositories only translate between Diesel rows and
//!   domain types; the only logic here is the transaction choreography the
//!   port contracts demand.
//! - **Internal models**: row structs (`models.rs`) and schema definitions
//!   (`schema.rs`) never leak to the domain layer.
//! - **Strongly typed errors**: all database failures map to the port error
//!   enums, with transient failures kept distinct so callers can retry.

mod diesel_application_repository;
mod diesel_bookmark_repository;
mod diesel_error_mapping;
mod models;
mod pool;
mod schema;

pub use diesel_application_repository::DieselApplicationRepository;
pub use diesel_bookmark_repository::DieselBookmarkRepository;
pub use pool::{DbPool, PoolConfig, PoolError};

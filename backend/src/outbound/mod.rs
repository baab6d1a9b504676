//! Driven adapters: persistence and notification.

pub mod notify;
pub mod persistence;

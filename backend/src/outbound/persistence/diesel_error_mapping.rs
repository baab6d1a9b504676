//! Shared Diesel error mapping for the persistence adapters.

use tracing::debug;

use super::pool::PoolError;

/// Map pool errors into a repository-specific connection error constructor.
pub fn map_pool_error<E, C>(error: PoolError, connection: C) -> E
where
    C: FnOnce(String) -> E,
{
    let message = match error {
        PoolError::Checkout { message } | PoolError::Build { message } => message,
    };
    connection(message)
}

/// Classification of a Diesel failure, decided once here so every adapter
/// maps store failures the same way.
pub enum DieselFailure {
    /// Unique index rejected a write; the caller knows which constraint.
    UniqueViolation,
    /// The connection dropped mid-operation.
    Connection(String),
    /// The store aborted the transaction for a retryable reason
    /// (serialization failure or deadlock victim).
    Transient(String),
    /// Anything else: malformed query, decode failure, missing row where
    /// one was demanded.
    Query(String),
}

/// Classify a Diesel error for repository-level mapping.
pub fn classify_diesel_error(error: &diesel::result::Error) -> DieselFailure {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    if let DieselError::DatabaseError(kind, info) = error {
        debug!(?kind, message = info.message(), "diesel operation failed");
    } else {
        debug!(
            error_type = %std::any::type_name_of_val(error),
            "diesel operation failed"
        );
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            DieselFailure::UniqueViolation
        }
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            DieselFailure::Connection("database connection error".to_owned())
        }
        DieselError::DatabaseError(DatabaseErrorKind::SerializationFailure, _) => {
            DieselFailure::Transient("serialization failure".to_owned())
        }
        DieselError::DatabaseError(_, info) => DieselFailure::Query(info.message().to_owned()),
        DieselError::NotFound => DieselFailure::Query("record not found".to_owned()),
        other => DieselFailure::Query(other.to_string()),
    }
}

//! Translation of pool and Diesel failures into [`SchoolRepositoryError`].
//!
//! The raw database error is logged at `debug` and replaced by a short,
//! sanitised message before it crosses into the domain.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use crate::domain::ports::SchoolRepositoryError;

use super::pool::PoolError;

pub(crate) fn map_pool_error(error: PoolError) -> SchoolRepositoryError {
    debug!(%error, "school repository could not obtain a connection");
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            SchoolRepositoryError::connection(message)
        }
    }
}

fn log_diesel_error(error: &DieselError) {
    match error {
        DieselError::DatabaseError(kind, info) => {
            debug!(
                ?kind,
                message = info.message(),
                constraint = info.constraint_name(),
                "diesel operation failed"
            );
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(error),
            "diesel operation failed"
        ),
    }
}

/// Map failures of read-only statements.
pub(crate) fn map_diesel_error(error: DieselError) -> SchoolRepositoryError {
    log_diesel_error(&error);
    match error {
        DieselError::QueryBuilderError(_) => SchoolRepositoryError::query("database query error"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            SchoolRepositoryError::connection("database connection error")
        }
        _ => SchoolRepositoryError::query("database error"),
    }
}

/// Map failures of statements writing `email`, turning unique violations
/// into [`SchoolRepositoryError::DuplicateEmail`].
pub(crate) fn map_write_error(email: &str) -> impl FnOnce(DieselError) -> SchoolRepositoryError {
    move |error| match error {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, ref info) => {
            debug!(
                constraint = info.constraint_name(),
                "school write rejected by unique constraint"
            );
            SchoolRepositoryError::duplicate_email(email)
        }
        other => map_diesel_error(other),
    }
}

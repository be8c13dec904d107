//! Port for school persistence.
//!
//! [`SchoolRepository`] exposes storage primitives only. Validation, e-mail
//! uniqueness checks and the image fallback on update are the
//! [`SchoolService`](crate::domain::SchoolService)'s job; adapters just run
//! the statements and report what the database said.

use async_trait::async_trait;

use crate::domain::{School, SchoolError, SchoolId, SchoolRecord, StorageFailure};

use super::define_port_error;

define_port_error! {
    /// Errors raised by school repository adapters.
    pub enum SchoolRepositoryError {
        /// No connection could be checked out of the pool.
        Connection { message: String } =>
            "school repository connection failed: {message}",
        /// A statement failed during execution.
        Query { message: String } =>
            "school repository query failed: {message}",
        /// The unique index on `email_id` rejected the write.
        DuplicateEmail { email: String } =>
            "school email {email} is already registered",
    }
}

impl From<SchoolRepositoryError> for SchoolError {
    fn from(value: SchoolRepositoryError) -> Self {
        match value {
            SchoolRepositoryError::Connection { message } => {
                SchoolError::storage(StorageFailure::Connection, message)
            }
            SchoolRepositoryError::Query { message } => {
                SchoolError::storage(StorageFailure::Query, message)
            }
            SchoolRepositoryError::DuplicateEmail { email } => SchoolError::DuplicateEmail { email },
        }
    }
}

/// Storage primitives over the `schools` table.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SchoolRepository: Send + Sync {
    /// Insert a new school and return the stored row with its assigned id
    /// and timestamps.
    async fn insert(&self, record: &SchoolRecord) -> Result<School, SchoolRepositoryError>;

    /// Every school, newest first (`created_at DESC, id DESC`).
    async fn list_recent(&self) -> Result<Vec<School>, SchoolRepositoryError>;

    async fn find_by_id(&self, id: SchoolId) -> Result<Option<School>, SchoolRepositoryError>;

    /// Id of the school registered under `email`, ignoring `exclude`.
    ///
    /// `email` is compared as stored, so callers pass the normalised form.
    async fn find_id_by_email(
        &self,
        email: &str,
        exclude: Option<SchoolId>,
    ) -> Result<Option<SchoolId>, SchoolRepositoryError>;

    /// Overwrite every mutable column and refresh `updated_at`.
    ///
    /// Returns `None` when no row with `id` exists.
    async fn update(
        &self,
        id: SchoolId,
        record: &SchoolRecord,
    ) -> Result<Option<School>, SchoolRepositoryError>;

    /// Remove the row, reporting whether one was deleted.
    async fn delete(&self, id: SchoolId) -> Result<bool, SchoolRepositoryError>;

    /// Exact, case-sensitive match ordered by `name ASC, id ASC`.
    async fn find_by_city(&self, city: &str) -> Result<Vec<School>, SchoolRepositoryError>;

    /// Exact, case-sensitive match ordered by `name ASC, id ASC`.
    async fn find_by_state(&self, state: &str) -> Result<Vec<School>, SchoolRepositoryError>;
}

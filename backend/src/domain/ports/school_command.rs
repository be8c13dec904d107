//! Driving port for school mutations.
//!
//! Inbound adapters call this port with raw identifiers and unvalidated
//! candidates; implementations own validation and uniqueness rules.

use async_trait::async_trait;

use crate::domain::{School, SchoolCandidate, SchoolError};

/// Domain use-case port for creating, updating and deleting schools.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SchoolCommand: Send + Sync {
    /// Validate and store a new school.
    async fn create(&self, candidate: SchoolCandidate) -> Result<School, SchoolError>;

    /// Replace the mutable fields of school `id`.
    ///
    /// An absent image keeps the stored one.
    async fn update_by_id(
        &self,
        id: i64,
        candidate: SchoolCandidate,
    ) -> Result<School, SchoolError>;

    /// Hard-delete school `id`; a missing school is [`SchoolError::NotFound`].
    async fn delete_by_id(&self, id: i64) -> Result<bool, SchoolError>;
}

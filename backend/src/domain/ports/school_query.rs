//! Driving port for school lookups.

use async_trait::async_trait;

use crate::domain::{School, SchoolError};

/// Domain use-case port for reading schools.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SchoolQuery: Send + Sync {
    /// All schools, newest first.
    async fn find_all(&self) -> Result<Vec<School>, SchoolError>;

    /// `Ok(None)` when no school has this id.
    async fn find_by_id(&self, id: i64) -> Result<Option<School>, SchoolError>;

    async fn find_by_city(&self, city: &str) -> Result<Vec<School>, SchoolError>;

    async fn find_by_state(&self, state: &str) -> Result<Vec<School>, SchoolError>;
}

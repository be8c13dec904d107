//! School domain service.
//!
//! Implements [`SchoolCommand`] and [`SchoolQuery`] over any
//! [`SchoolRepository`]. Check-then-write sequences are not transactional;
//! the unique index on `email_id` is the final word on duplicates and its
//! violation surfaces as [`SchoolError::DuplicateEmail`] too.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{SchoolCommand, SchoolQuery, SchoolRepository};
use crate::domain::{School, SchoolCandidate, SchoolDraft, SchoolError, SchoolId, validate};

/// School service implementing the driving ports.
#[derive(Clone)]
pub struct SchoolService<R> {
    repo: Arc<R>,
}

impl<R> SchoolService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

impl<R> SchoolService<R>
where
    R: SchoolRepository,
{
    fn validated(candidate: SchoolCandidate) -> Result<SchoolDraft, SchoolError> {
        validate(candidate).map_err(|errors| SchoolError::Validation { errors })
    }

    async fn ensure_email_free(
        &self,
        email: &str,
        exclude: Option<SchoolId>,
    ) -> Result<(), SchoolError> {
        match self.repo.find_id_by_email(email, exclude).await? {
            Some(_) => Err(SchoolError::DuplicateEmail {
                email: email.to_owned(),
            }),
            None => Ok(()),
        }
    }

    async fn load_existing(&self, id: SchoolId) -> Result<School, SchoolError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(SchoolError::NotFound { id })
    }
}

#[async_trait]
impl<R> SchoolCommand for SchoolService<R>
where
    R: SchoolRepository,
{
    async fn create(&self, candidate: SchoolCandidate) -> Result<School, SchoolError> {
        let draft = Self::validated(candidate)?;
        self.ensure_email_free(draft.email_id(), None).await?;
        let record = draft.into_record();
        Ok(self.repo.insert(&record).await?)
    }

    async fn update_by_id(
        &self,
        id: i64,
        candidate: SchoolCandidate,
    ) -> Result<School, SchoolError> {
        let id = SchoolId::new(id)?;
        let draft = Self::validated(candidate)?;
        let existing = self.load_existing(id).await?;

        if draft.email_id() != existing.email_id {
            self.ensure_email_free(draft.email_id(), Some(id)).await?;
        }

        let record = draft.into_record_with_fallback(existing.image);
        self.repo
            .update(id, &record)
            .await?
            .ok_or(SchoolError::NotFound { id })
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, SchoolError> {
        let id = SchoolId::new(id)?;
        self.load_existing(id).await?;
        Ok(self.repo.delete(id).await?)
    }
}

#[async_trait]
impl<R> SchoolQuery for SchoolService<R>
where
    R: SchoolRepository,
{
    async fn find_all(&self) -> Result<Vec<School>, SchoolError> {
        Ok(self.repo.list_recent().await?)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<School>, SchoolError> {
        let id = SchoolId::new(id)?;
        Ok(self.repo.find_by_id(id).await?)
    }

    async fn find_by_city(&self, city: &str) -> Result<Vec<School>, SchoolError> {
        Ok(self.repo.find_by_city(city).await?)
    }

    async fn find_by_state(&self, state: &str) -> Result<Vec<School>, SchoolError> {
        Ok(self.repo.find_by_state(state).await?)
    }
}

#[cfg(test)]
#[path = "school_service_tests.rs"]
mod tests;

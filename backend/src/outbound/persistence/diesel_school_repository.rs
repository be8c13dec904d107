//! PostgreSQL-backed `SchoolRepository` implementation using Diesel ORM.
//!
//! Each method checks out one pooled connection, runs a single statement and
//! converts the rows into domain values. Business rules live in
//! [`SchoolService`](crate::domain::SchoolService).

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::warn;

use crate::domain::ports::{SchoolRepository, SchoolRepositoryError};
use crate::domain::{School, SchoolId, SchoolRecord};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error, map_write_error};
use super::models::{NewSchoolRow, SchoolRow, SchoolUpdate};
use super::pool::DbPool;
use super::schema::schools;

/// Diesel-backed implementation of the [`SchoolRepository`] port.
#[derive(Clone)]
pub struct DieselSchoolRepository {
    pool: DbPool,
}

impl DieselSchoolRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn row_to_school(row: SchoolRow) -> Result<School, SchoolRepositoryError> {
    row.into_school().map_err(|id| {
        warn!(id, "schools row carries a non-positive id");
        SchoolRepositoryError::query("stored school id is not positive")
    })
}

fn rows_to_schools(rows: Vec<SchoolRow>) -> Result<Vec<School>, SchoolRepositoryError> {
    rows.into_iter().map(row_to_school).collect()
}

#[async_trait]
impl SchoolRepository for DieselSchoolRepository {
    async fn insert(&self, record: &SchoolRecord) -> Result<School, SchoolRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = diesel::insert_into(schools::table)
            .values(NewSchoolRow::from(record))
            .returning(SchoolRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_write_error(&record.email_id))?;

        row_to_school(row)
    }

    async fn list_recent(&self) -> Result<Vec<School>, SchoolRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows = schools::table
            .order((schools::created_at.desc(), schools::id.desc()))
            .select(SchoolRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows_to_schools(rows)
    }

    async fn find_by_id(&self, id: SchoolId) -> Result<Option<School>, SchoolRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = schools::table
            .find(id.get())
            .select(SchoolRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_school).transpose()
    }

    async fn find_id_by_email(
        &self,
        email: &str,
        exclude: Option<SchoolId>,
    ) -> Result<Option<SchoolId>, SchoolRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let mut query = schools::table
            .filter(schools::email_id.eq(email))
            .select(schools::id)
            .into_boxed();
        if let Some(excluded) = exclude {
            query = query.filter(schools::id.ne(excluded.get()));
        }

        let id: Option<i64> = query
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(id.and_then(|raw| SchoolId::new(raw).ok()))
    }

    async fn update(
        &self,
        id: SchoolId,
        record: &SchoolRecord,
    ) -> Result<Option<School>, SchoolRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = diesel::update(schools::table.find(id.get()))
            .set((
                SchoolUpdate::from(record),
                schools::updated_at.eq(diesel::dsl::now),
            ))
            .returning(SchoolRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_write_error(&record.email_id))?;

        row.map(row_to_school).transpose()
    }

    async fn delete(&self, id: SchoolId) -> Result<bool, SchoolRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let removed = diesel::delete(schools::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(removed > 0)
    }

    async fn find_by_city(&self, city: &str) -> Result<Vec<School>, SchoolRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows = schools::table
            .filter(schools::city.eq(city))
            .order((schools::name.asc(), schools::id.asc()))
            .select(SchoolRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows_to_schools(rows)
    }

    async fn find_by_state(&self, state: &str) -> Result<Vec<School>, SchoolRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows = schools::table
            .filter(schools::state.eq(state))
            .order((schools::name.asc(), schools::id.asc()))
            .select(SchoolRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows_to_schools(rows)
    }
}

//! Internal Diesel row structs for the `schools` table.
//!
//! These types never leave the persistence layer; adapters convert them to
//! and from the domain model.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::domain::{School, SchoolId, SchoolRecord};

use super::schema::schools;

/// Row struct for reading from the schools table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = schools)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct SchoolRow {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub contact: String,
    pub email_id: String,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SchoolRow {
    /// Convert into the domain model.
    ///
    /// Fails only if the stored id is not positive, which the `BIGSERIAL`
    /// column never produces.
    pub(crate) fn into_school(self) -> Result<School, i64> {
        let id = SchoolId::new(self.id).map_err(|_| self.id)?;
        Ok(School {
            id,
            name: self.name,
            address: self.address,
            city: self.city,
            state: self.state,
            contact: self.contact,
            email_id: self.email_id,
            image: self.image,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

/// Insertable struct for new school records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = schools)]
pub(crate) struct NewSchoolRow<'a> {
    pub name: &'a str,
    pub address: &'a str,
    pub city: &'a str,
    pub state: &'a str,
    pub contact: &'a str,
    pub email_id: &'a str,
    pub image: Option<&'a str>,
}

impl<'a> From<&'a SchoolRecord> for NewSchoolRow<'a> {
    fn from(record: &'a SchoolRecord) -> Self {
        Self {
            name: &record.name,
            address: &record.address,
            city: &record.city,
            state: &record.state,
            contact: &record.contact,
            email_id: &record.email_id,
            image: record.image.as_deref(),
        }
    }
}

/// Changeset overwriting every mutable column.
///
/// `image: None` clears the column rather than skipping it.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = schools)]
#[diesel(treat_none_as_null = true)]
pub(crate) struct SchoolUpdate<'a> {
    pub name: &'a str,
    pub address: &'a str,
    pub city: &'a str,
    pub state: &'a str,
    pub contact: &'a str,
    pub email_id: &'a str,
    pub image: Option<&'a str>,
}

impl<'a> From<&'a SchoolRecord> for SchoolUpdate<'a> {
    fn from(record: &'a SchoolRecord) -> Self {
        Self {
            name: &record.name,
            address: &record.address,
            city: &record.city,
            state: &record.state,
            contact: &record.contact,
            email_id: &record.email_id,
            image: record.image.as_deref(),
        }
    }
}

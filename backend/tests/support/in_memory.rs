//! In-memory `SchoolRepository` double.
//!
//! Mirrors the PostgreSQL adapter: ids come from a sequence, `email_id` is
//! unique, lists are newest first and region lookups are exact matches
//! ordered by name.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, TimeDelta, Utc};
use school_directory::domain::ports::{SchoolRepository, SchoolRepositoryError};
use school_directory::domain::{School, SchoolId, SchoolRecord};

#[derive(Default)]
struct Table {
    next_id: i64,
    rows: Vec<School>,
}

#[derive(Default)]
pub struct InMemorySchoolRepository {
    table: Mutex<Table>,
    offline: Mutex<bool>,
}

impl InMemorySchoolRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every later call fail with a connection error.
    pub fn go_offline(&self) {
        *self.offline.lock().expect("offline flag") = true;
    }

    pub fn len(&self) -> usize {
        self.table.lock().expect("table lock").rows.len()
    }

    fn check_online(&self) -> Result<(), SchoolRepositoryError> {
        if *self.offline.lock().expect("offline flag") {
            return Err(SchoolRepositoryError::connection("database offline"));
        }
        Ok(())
    }
}

fn email_taken(rows: &[School], email: &str, exclude: Option<SchoolId>) -> bool {
    rows.iter()
        .any(|row| row.email_id == email && Some(row.id) != exclude)
}

fn sorted_by_name(mut rows: Vec<School>) -> Vec<School> {
    rows.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.get().cmp(&b.id.get())));
    rows
}

/// Timestamps strictly increase so ordering by creation time is stable.
fn tick(after: DateTime<Utc>) -> DateTime<Utc> {
    Utc::now().max(after + TimeDelta::microseconds(1))
}

#[async_trait]
impl SchoolRepository for InMemorySchoolRepository {
    async fn insert(&self, record: &SchoolRecord) -> Result<School, SchoolRepositoryError> {
        self.check_online()?;
        let mut table = self.table.lock().expect("table lock");
        if email_taken(&table.rows, &record.email_id, None) {
            return Err(SchoolRepositoryError::duplicate_email(
                record.email_id.clone(),
            ));
        }
        table.next_id += 1;
        let id = SchoolId::new(table.next_id).expect("sequence is positive");
        let latest = table
            .rows
            .iter()
            .map(|row| row.created_at)
            .max()
            .unwrap_or(DateTime::<Utc>::MIN_UTC);
        let now = tick(latest);
        let school = School {
            id,
            name: record.name.clone(),
            address: record.address.clone(),
            city: record.city.clone(),
            state: record.state.clone(),
            contact: record.contact.clone(),
            email_id: record.email_id.clone(),
            image: record.image.clone(),
            created_at: now,
            updated_at: now,
        };
        table.rows.push(school.clone());
        Ok(school)
    }

    async fn list_recent(&self) -> Result<Vec<School>, SchoolRepositoryError> {
        self.check_online()?;
        let mut rows = self.table.lock().expect("table lock").rows.clone();
        rows.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then(b.id.get().cmp(&a.id.get()))
        });
        Ok(rows)
    }

    async fn find_by_id(&self, id: SchoolId) -> Result<Option<School>, SchoolRepositoryError> {
        self.check_online()?;
        let table = self.table.lock().expect("table lock");
        Ok(table.rows.iter().find(|row| row.id == id).cloned())
    }

    async fn find_id_by_email(
        &self,
        email: &str,
        exclude: Option<SchoolId>,
    ) -> Result<Option<SchoolId>, SchoolRepositoryError> {
        self.check_online()?;
        let table = self.table.lock().expect("table lock");
        Ok(table
            .rows
            .iter()
            .find(|row| row.email_id == email && Some(row.id) != exclude)
            .map(|row| row.id))
    }

    async fn update(
        &self,
        id: SchoolId,
        record: &SchoolRecord,
    ) -> Result<Option<School>, SchoolRepositoryError> {
        self.check_online()?;
        let mut table = self.table.lock().expect("table lock");
        if email_taken(&table.rows, &record.email_id, Some(id)) {
            return Err(SchoolRepositoryError::duplicate_email(
                record.email_id.clone(),
            ));
        }
        let Some(row) = table.rows.iter_mut().find(|row| row.id == id) else {
            return Ok(None);
        };
        row.name = record.name.clone();
        row.address = record.address.clone();
        row.city = record.city.clone();
        row.state = record.state.clone();
        row.contact = record.contact.clone();
        row.email_id = record.email_id.clone();
        row.image = record.image.clone();
        row.updated_at = tick(row.updated_at);
        Ok(Some(row.clone()))
    }

    async fn delete(&self, id: SchoolId) -> Result<bool, SchoolRepositoryError> {
        self.check_online()?;
        let mut table = self.table.lock().expect("table lock");
        let before = table.rows.len();
        table.rows.retain(|row| row.id != id);
        Ok(table.rows.len() < before)
    }

    async fn find_by_city(&self, city: &str) -> Result<Vec<School>, SchoolRepositoryError> {
        self.check_online()?;
        let table = self.table.lock().expect("table lock");
        let rows = table.rows.iter().filter(|row| row.city == city).cloned().collect();
        Ok(sorted_by_name(rows))
    }

    async fn find_by_state(&self, state: &str) -> Result<Vec<School>, SchoolRepositoryError> {
        self.check_online()?;
        let table = self.table.lock().expect("table lock");
        let rows = table
            .rows
            .iter()
            .filter(|row| row.state == state)
            .cloned()
            .collect();
        Ok(sorted_by_name(rows))
    }
}

//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Adapters are thin: they translate between Diesel rows and domain types
//! and map database failures to port errors. Row structs (`models.rs`) and
//! table definitions (`schema.rs`) stay private to this module.
//!
//! # Example
//!
//! ```no_run
//! use school_directory::outbound::persistence::{DbPool, DieselSchoolRepository, PoolConfig};
//!
//! # async fn wire() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/schools")).await?;
//! let repo = DieselSchoolRepository::new(pool);
//! # let _ = repo;
//! # Ok(())
//! # }
//! ```

mod diesel_error_mapping;
mod diesel_school_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_school_repository::DieselSchoolRepository;
pub use migrations::{MIGRATIONS, MigrationError, run_pending_migrations};
pub use pool::{
    DEFAULT_CONNECTION_TIMEOUT, DEFAULT_MAX_SIZE, DEFAULT_MIN_IDLE, DbPool, PoolConfig, PoolError,
};

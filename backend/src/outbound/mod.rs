//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: PostgreSQL-backed school repository using Diesel ORM.

pub mod persistence;

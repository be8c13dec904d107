//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod school_command;
mod school_query;
mod school_repository;

#[cfg(test)]
pub use school_command::MockSchoolCommand;
pub use school_command::SchoolCommand;
#[cfg(test)]
pub use school_query::MockSchoolQuery;
pub use school_query::SchoolQuery;
#[cfg(test)]
pub use school_repository::MockSchoolRepository;
pub use school_repository::{SchoolRepository, SchoolRepositoryError};

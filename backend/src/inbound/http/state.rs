//! Shared HTTP adapter state.
//!
//! Handlers receive this via `actix_web::web::Data` and only see domain
//! ports, so they stay testable without a database.

use std::sync::Arc;

use crate::domain::ports::{SchoolCommand, SchoolQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub schools: Arc<dyn SchoolCommand>,
    pub schools_query: Arc<dyn SchoolQuery>,
}

impl HttpState {
    /// Construct state from the school ports.
    ///
    /// One service usually implements both ports:
    ///
    /// ```no_run
    /// use std::sync::Arc;
    ///
    /// use school_directory::domain::SchoolService;
    /// use school_directory::inbound::http::state::HttpState;
    /// use school_directory::outbound::persistence::{DbPool, DieselSchoolRepository};
    ///
    /// fn wire(pool: DbPool) -> HttpState {
    ///     let service = Arc::new(SchoolService::new(Arc::new(DieselSchoolRepository::new(pool))));
    ///     HttpState::new(service.clone(), service)
    /// }
    /// ```
    pub fn new(schools: Arc<dyn SchoolCommand>, schools_query: Arc<dyn SchoolQuery>) -> Self {
        Self {
            schools,
            schools_query,
        }
    }
}

//! HTTP inbound adapter exposing REST endpoints.

use actix_web::web;

use crate::domain::Error;

pub mod error;
pub mod health;
pub mod schemas;
pub mod schools;
pub mod state;
pub mod validation;

pub use error::ApiResult;

/// Largest accepted JSON request body.
pub const JSON_BODY_LIMIT: usize = 10 * 1024 * 1024;

/// JSON extractor configuration shared by every route.
///
/// Malformed or oversized bodies become [`Error`] responses so clients see
/// the same error shape everywhere.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(JSON_BODY_LIMIT)
        .error_handler(|err, _req| Error::invalid_request(format!("invalid JSON body: {err}")).into())
}

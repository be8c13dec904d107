//! Domain primitives, ports and services.
//!
//! Purpose: hold the school model and its rules independent of HTTP and
//! PostgreSQL. Adapters depend on this module, never the other way round.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic error payload.
//! - TraceId: request correlation identifier.
//! - School, SchoolId, SchoolDraft, SchoolRecord, ImageRef: the school model.
//! - SchoolCandidate, validate, FieldError: validation rules.
//! - SchoolError: typed failures of the school use cases.
//! - SchoolService: implementation of the school driving ports.

pub mod error;
pub mod ports;
pub mod school;
pub mod school_error;
pub mod school_service;
pub mod school_validation;
pub mod trace_id;

pub use self::error::{Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use self::school::{ImageRef, InvalidSchoolId, School, SchoolDraft, SchoolId, SchoolRecord};
pub use self::school_error::{SchoolError, StorageFailure};
pub use self::school_service::SchoolService;
pub use self::school_validation::{
    FieldError, FieldErrorKind, SchoolCandidate, SchoolField, validate,
};
pub use self::trace_id::TraceId;

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use school_directory::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::not_found("nope"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;

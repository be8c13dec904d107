//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay framework agnostic and do not derive `ToSchema`. The
//! wrappers here mirror their wire shape for utoipa.

use utoipa::ToSchema;

use super::schools::SchoolResponse;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The requested school does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// The e-mail address is already registered.
    #[schema(rename = "conflict")]
    Conflict,
    /// The database is unreachable.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error)]
#[schema(rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "invalid_request")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "Validation failed")]
    message: String,
    /// Correlation identifier for tracing this error across systems.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Field errors for validation failures, offending values otherwise.
    details: Option<serde_json::Value>,
}

/// Success envelope carrying one school.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct SchoolEnvelopeSchema {
    #[schema(example = true)]
    success: bool,
    #[schema(example = "School retrieved successfully")]
    message: String,
    data: SchoolResponse,
}

/// Success envelope carrying a list of schools.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct SchoolListEnvelopeSchema {
    #[schema(example = true)]
    success: bool,
    #[schema(example = "Schools retrieved successfully")]
    message: String,
    data: Vec<SchoolResponse>,
    /// Number of schools in `data`.
    count: usize,
}

/// Identifier of a deleted school.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct DeletedSchoolSchema {
    #[schema(example = 7)]
    id: i64,
}

/// Success envelope for deletions.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct DeletedEnvelopeSchema {
    #[schema(example = true)]
    success: bool,
    #[schema(example = "School deleted successfully")]
    message: String,
    data: DeletedSchoolSchema,
}

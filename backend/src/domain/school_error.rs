//! Failures of the school use cases.

use serde_json::json;

use super::school::{InvalidSchoolId, SchoolId};
use super::school_validation::FieldError;
use super::Error;

/// Storage failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageFailure {
    /// The pool could not hand out a connection.
    Connection,
    /// A statement failed while executing.
    Query,
}

/// Outcome of a failed school operation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SchoolError {
    #[error("school failed validation with {} error(s)", errors.len())]
    Validation { errors: Vec<FieldError> },
    #[error("a school with email {email} already exists")]
    DuplicateEmail { email: String },
    #[error("school {id} not found")]
    NotFound { id: SchoolId },
    #[error("invalid school id: {value}")]
    InvalidId { value: String },
    #[error("school storage failed: {message}")]
    Storage {
        kind: StorageFailure,
        message: String,
    },
}

impl SchoolError {
    pub fn storage(kind: StorageFailure, message: impl Into<String>) -> Self {
        Self::Storage {
            kind,
            message: message.into(),
        }
    }
}

impl From<InvalidSchoolId> for SchoolError {
    fn from(value: InvalidSchoolId) -> Self {
        Self::InvalidId { value: value.value }
    }
}

impl From<SchoolError> for Error {
    fn from(value: SchoolError) -> Self {
        match value {
            SchoolError::Validation { errors } => {
                let details: Vec<_> = errors
                    .iter()
                    .map(|error| {
                        json!({
                            "field": error.field.as_str(),
                            "code": error.kind.code(),
                            "message": error.to_string(),
                        })
                    })
                    .collect();
                Error::invalid_request("Validation failed")
                    .with_details(json!({ "errors": details }))
            }
            SchoolError::DuplicateEmail { email } => {
                Error::conflict("A school with this email already exists")
                    .with_details(json!({ "field": "email_id", "value": email }))
            }
            SchoolError::NotFound { id } => {
                Error::not_found("School not found").with_details(json!({ "id": id.get() }))
            }
            SchoolError::InvalidId { value } => Error::invalid_request("Invalid school ID")
                .with_details(json!({ "field": "id", "value": value })),
            SchoolError::Storage {
                kind: StorageFailure::Connection,
                ..
            } => Error::service_unavailable("school storage is unavailable"),
            SchoolError::Storage {
                kind: StorageFailure::Query,
                message,
            } => Error::internal(format!("school storage query failed: {message}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ErrorCode, FieldErrorKind, SchoolField};
    use rstest::rstest;

    fn id(value: i64) -> SchoolId {
        SchoolId::new(value).expect("positive id")
    }

    #[rstest]
    #[case(SchoolError::DuplicateEmail { email: "a@b.edu".into() }, ErrorCode::Conflict)]
    #[case(SchoolError::NotFound { id: id(4) }, ErrorCode::NotFound)]
    #[case(SchoolError::InvalidId { value: "x".into() }, ErrorCode::InvalidRequest)]
    #[case(SchoolError::storage(StorageFailure::Connection, "refused"), ErrorCode::ServiceUnavailable)]
    #[case(SchoolError::storage(StorageFailure::Query, "syntax"), ErrorCode::InternalError)]
    fn variants_map_to_error_codes(#[case] error: SchoolError, #[case] code: ErrorCode) {
        assert_eq!(Error::from(error).code(), code);
    }

    #[rstest]
    fn validation_errors_are_listed_in_details() {
        let error = Error::from(SchoolError::Validation {
            errors: vec![
                FieldError::new(SchoolField::Name, FieldErrorKind::Required),
                FieldError::new(SchoolField::Contact, FieldErrorKind::InvalidContact),
            ],
        });

        assert_eq!(error.code(), ErrorCode::InvalidRequest);
        assert_eq!(
            error.details(),
            Some(&json!({
                "errors": [
                    { "field": "name", "code": "required", "message": "School name is required" },
                    {
                        "field": "contact",
                        "code": "invalid_contact",
                        "message": "Contact number must be exactly 10 digits",
                    },
                ]
            }))
        );
    }

    #[rstest]
    fn invalid_id_conversion_keeps_raw_input() {
        let error = SchoolId::new(-2).map_err(SchoolError::from);
        assert_eq!(
            error,
            Err(SchoolError::InvalidId {
                value: "-2".into()
            })
        );
    }
}

//! Shared validation helpers for inbound HTTP adapters.
//!
//! Path segments are checked here before they reach the domain; body
//! validation belongs to [`crate::domain::validate`].

use serde_json::json;

use crate::domain::{Error, SchoolError};

/// Minimum length of a city or state path segment.
pub(crate) const REGION_SEGMENT_MIN: usize = 2;

/// Newtype wrapper for HTTP field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName {
    name: &'static str,
    label: &'static str,
}

impl FieldName {
    pub(crate) const fn new(name: &'static str, label: &'static str) -> Self {
        Self { name, label }
    }
}

pub(crate) const CITY: FieldName = FieldName::new("city", "City");
pub(crate) const STATE: FieldName = FieldName::new("state", "State");

fn region_too_short_error(field: FieldName, value: &str) -> Error {
    Error::invalid_request(format!(
        "{} name must be at least {REGION_SEGMENT_MIN} characters long",
        field.label
    ))
    .with_details(json!({
        "field": field.name,
        "value": value,
        "code": "too_short",
    }))
}

/// Trim a city or state segment and enforce its minimum length.
pub(crate) fn parse_region_segment(raw: &str, field: FieldName) -> Result<String, Error> {
    let trimmed = raw.trim();
    if trimmed.chars().count() < REGION_SEGMENT_MIN {
        return Err(region_too_short_error(field, raw));
    }
    Ok(trimmed.to_owned())
}

/// Parse a school id segment.
///
/// Only the integer syntax is checked here; positivity is a domain rule.
pub(crate) fn parse_id_segment(raw: &str) -> Result<i64, Error> {
    raw.trim().parse::<i64>().map_err(|_| {
        Error::from(SchoolError::InvalidId {
            value: raw.to_owned(),
        })
    })
}

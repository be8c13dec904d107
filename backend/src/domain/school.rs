//! School data model.
//!
//! [`School`] is the stored read model returned by every query. Writes go
//! through [`SchoolDraft`], which can only be obtained from
//! [`validate`](crate::domain::validate), so an unvalidated record never
//! reaches a repository.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Rejected school identifier, carrying the offending input verbatim.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid school id: {value}")]
pub struct InvalidSchoolId {
    pub value: String,
}

/// Server-assigned primary key of a school.
///
/// ## Invariants
/// - Always strictly positive.
///
/// # Examples
/// ```
/// use school_directory::domain::SchoolId;
///
/// assert!(SchoolId::new(0).is_err());
/// assert_eq!(SchoolId::new(7).map(SchoolId::get), Ok(7));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct SchoolId(i64);

impl SchoolId {
    /// Wrap a raw key, rejecting zero and negative values.
    pub fn new(value: i64) -> Result<Self, InvalidSchoolId> {
        if value > 0 {
            Ok(Self(value))
        } else {
            Err(InvalidSchoolId {
                value: value.to_string(),
            })
        }
    }

    /// Raw database key.
    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for SchoolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<SchoolId> for i64 {
    fn from(value: SchoolId) -> Self {
        value.0
    }
}

impl TryFrom<i64> for SchoolId {
    type Error = InvalidSchoolId;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Image attached to a school candidate.
///
/// Uploaded images arrive either as a hosted URL or as the metadata object
/// produced by the upload pipeline; both are passed through to storage.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ImageRef {
    /// No image supplied. On update this keeps the stored image.
    #[default]
    None,
    /// Hosted image URL.
    Url(String),
    /// Structured metadata stored as compact JSON text.
    Opaque(Value),
}

impl ImageRef {
    /// Classify raw request input.
    ///
    /// `null`, a missing value and blank strings all become [`ImageRef::None`].
    pub fn from_json(value: Option<Value>) -> Self {
        match value {
            None | Some(Value::Null) => Self::None,
            Some(Value::String(raw)) => {
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    Self::None
                } else {
                    Self::Url(trimmed.to_owned())
                }
            }
            Some(other) => Self::Opaque(other),
        }
    }

    /// Column value for this image, `None` when nothing was supplied.
    pub fn to_stored(&self) -> Option<String> {
        match self {
            Self::None => None,
            Self::Url(url) => Some(url.clone()),
            Self::Opaque(value) => Some(value.to_string()),
        }
    }
}

/// Validated, normalised school candidate.
///
/// ## Invariants
/// - Every text field is trimmed and within its length bounds.
/// - `email_id` is lower-case.
#[derive(Debug, Clone, PartialEq)]
pub struct SchoolDraft {
    pub(super) name: String,
    pub(super) address: String,
    pub(super) city: String,
    pub(super) state: String,
    pub(super) contact: String,
    pub(super) email_id: String,
    pub(super) image: ImageRef,
}

impl SchoolDraft {
    /// Trimmed school name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Trimmed street address.
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Trimmed city.
    pub fn city(&self) -> &str {
        &self.city
    }

    /// Trimmed state.
    pub fn state(&self) -> &str {
        &self.state
    }

    /// Ten-digit contact number.
    pub fn contact(&self) -> &str {
        &self.contact
    }

    /// Lower-cased e-mail address.
    pub fn email_id(&self) -> &str {
        &self.email_id
    }

    /// Image supplied with the submission.
    pub fn image(&self) -> &ImageRef {
        &self.image
    }

    /// Storage record for an insert.
    pub fn into_record(self) -> SchoolRecord {
        self.into_record_with_fallback(None)
    }

    /// Storage record for an update, keeping `existing_image` when the
    /// draft carries no image of its own.
    pub fn into_record_with_fallback(self, existing_image: Option<String>) -> SchoolRecord {
        let image = self.image.to_stored().or(existing_image);
        SchoolRecord {
            name: self.name,
            address: self.address,
            city: self.city,
            state: self.state,
            contact: self.contact,
            email_id: self.email_id,
            image,
        }
    }
}

/// Mutable columns of a school as handed to a repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchoolRecord {
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub contact: String,
    pub email_id: String,
    pub image: Option<String>,
}

/// Stored school.
///
/// ## Invariants
/// - `updated_at >= created_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct School {
    pub id: SchoolId,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub contact: String,
    pub email_id: String,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

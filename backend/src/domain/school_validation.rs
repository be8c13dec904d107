//! Validation rules for school candidates.
//!
//! Every field is checked and every violation reported, so callers can show
//! all problems with a submission at once. Text is trimmed before length and
//! pattern checks; lengths count Unicode scalar values.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::Deserialize;
use serde_json::Value;

use super::school::{ImageRef, SchoolDraft};

/// Minimum allowed length for a school name.
pub const NAME_MIN: usize = 2;
/// Maximum allowed length for a school name.
pub const NAME_MAX: usize = 255;
/// Minimum allowed length for an address.
pub const ADDRESS_MIN: usize = 5;
/// Maximum allowed length for an address.
pub const ADDRESS_MAX: usize = 500;
/// Minimum allowed length for a city or state.
pub const REGION_MIN: usize = 2;
/// Maximum allowed length for a city or state.
pub const REGION_MAX: usize = 100;
/// Maximum allowed length for an e-mail address.
pub const EMAIL_MAX: usize = 255;
/// Maximum allowed length for an image URL.
pub const IMAGE_MAX: usize = 500;

/// Unvalidated school input as submitted by a client.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SchoolCandidate {
    pub name: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub contact: Option<String>,
    pub email_id: Option<String>,
    pub image: Option<Value>,
}

/// Field of a school that a rule applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchoolField {
    Name,
    Address,
    City,
    State,
    Contact,
    EmailId,
    Image,
}

impl SchoolField {
    /// Wire name of the field.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Address => "address",
            Self::City => "city",
            Self::State => "state",
            Self::Contact => "contact",
            Self::EmailId => "email_id",
            Self::Image => "image",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Name => "School name",
            Self::Address => "Address",
            Self::City => "City",
            Self::State => "State",
            Self::Contact => "Contact number",
            Self::EmailId => "Email",
            Self::Image => "Image URL",
        }
    }
}

impl fmt::Display for SchoolField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rule a field value violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldErrorKind {
    Required,
    TooShort { min: usize },
    TooLong { max: usize },
    InvalidCharacters,
    InvalidContact,
    InvalidEmail,
}

impl FieldErrorKind {
    /// Stable machine-readable rule identifier.
    pub fn code(self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::TooShort { .. } => "too_short",
            Self::TooLong { .. } => "too_long",
            Self::InvalidCharacters => "invalid_characters",
            Self::InvalidContact => "invalid_contact",
            Self::InvalidEmail => "invalid_email",
        }
    }
}

/// Single rule violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub field: SchoolField,
    pub kind: FieldErrorKind,
}

impl FieldError {
    pub fn new(field: SchoolField, kind: FieldErrorKind) -> Self {
        Self { field, kind }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = self.field.label();
        match self.kind {
            FieldErrorKind::Required => write!(f, "{label} is required"),
            FieldErrorKind::TooShort { min } => {
                write!(f, "{label} must be at least {min} characters long")
            }
            FieldErrorKind::TooLong { max } => write!(f, "{label} cannot exceed {max} characters"),
            FieldErrorKind::InvalidCharacters => {
                write!(f, "{label} should only contain letters and spaces")
            }
            FieldErrorKind::InvalidContact => {
                write!(f, "{label} must be exactly 10 digits")
            }
            FieldErrorKind::InvalidEmail => f.write_str("Please enter a valid email address"),
        }
    }
}

impl std::error::Error for FieldError {}

static REGION_RE: OnceLock<Regex> = OnceLock::new();
static CONTACT_RE: OnceLock<Regex> = OnceLock::new();
static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern)
        .unwrap_or_else(|error| panic!("validation regex {pattern:?} failed to compile: {error}"))
}

fn region_regex() -> &'static Regex {
    REGION_RE.get_or_init(|| compile(r"^[A-Za-z\s]+$"))
}

fn contact_regex() -> &'static Regex {
    CONTACT_RE.get_or_init(|| compile(r"^[0-9]{10}$"))
}

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        compile(concat!(
            r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*",
            r"@(?:[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?\.)+[A-Za-z]{2,}$",
        ))
    })
}

struct Checker {
    errors: Vec<FieldError>,
}

impl Checker {
    fn fail(&mut self, field: SchoolField, kind: FieldErrorKind) {
        self.errors.push(FieldError::new(field, kind));
    }

    /// Trimmed value, or `None` after recording `Required`.
    fn required(&mut self, field: SchoolField, raw: Option<String>) -> Option<String> {
        let value = raw.map(|value| value.trim().to_owned()).unwrap_or_default();
        if value.is_empty() {
            self.fail(field, FieldErrorKind::Required);
            return None;
        }
        Some(value)
    }

    fn bounded(&mut self, field: SchoolField, value: &str, min: Option<usize>, max: usize) {
        let length = value.chars().count();
        if let Some(min) = min.filter(|min| length < *min) {
            self.fail(field, FieldErrorKind::TooShort { min });
        }
        if length > max {
            self.fail(field, FieldErrorKind::TooLong { max });
        }
    }

    fn text(&mut self, field: SchoolField, raw: Option<String>, min: usize, max: usize) -> String {
        let Some(value) = self.required(field, raw) else {
            return String::new();
        };
        self.bounded(field, &value, Some(min), max);
        value
    }

    fn region(&mut self, field: SchoolField, raw: Option<String>) -> String {
        let Some(value) = self.required(field, raw) else {
            return String::new();
        };
        self.bounded(field, &value, Some(REGION_MIN), REGION_MAX);
        if !region_regex().is_match(&value) {
            self.fail(field, FieldErrorKind::InvalidCharacters);
        }
        value
    }

    fn contact(&mut self, raw: Option<String>) -> String {
        let Some(value) = self.required(SchoolField::Contact, raw) else {
            return String::new();
        };
        if !contact_regex().is_match(&value) {
            self.fail(SchoolField::Contact, FieldErrorKind::InvalidContact);
        }
        value
    }

    fn email(&mut self, raw: Option<String>) -> String {
        let Some(value) = self.required(SchoolField::EmailId, raw) else {
            return String::new();
        };
        if !email_regex().is_match(&value) {
            self.fail(SchoolField::EmailId, FieldErrorKind::InvalidEmail);
        }
        self.bounded(SchoolField::EmailId, &value, None, EMAIL_MAX);
        value.to_lowercase()
    }

    fn image(&mut self, raw: Option<Value>) -> ImageRef {
        let image = ImageRef::from_json(raw);
        if let ImageRef::Url(url) = &image {
            self.bounded(SchoolField::Image, url, None, IMAGE_MAX);
        }
        image
    }
}

/// Validate and normalise a candidate.
///
/// # Examples
/// ```
/// use school_directory::domain::{SchoolCandidate, validate};
///
/// let candidate = SchoolCandidate {
///     name: Some("Oak Hill".into()),
///     address: Some("1 Oak Way".into()),
///     city: Some("Springfield".into()),
///     state: Some("Illinois".into()),
///     contact: Some("5551234567".into()),
///     email_id: Some("Admin@Oak.edu".into()),
///     image: None,
/// };
/// let draft = validate(candidate).expect("candidate is valid");
/// assert_eq!(draft.email_id(), "admin@oak.edu");
/// ```
pub fn validate(candidate: SchoolCandidate) -> Result<SchoolDraft, Vec<FieldError>> {
    let SchoolCandidate {
        name,
        address,
        city,
        state,
        contact,
        email_id,
        image,
    } = candidate;

    let mut checker = Checker { errors: Vec::new() };
    let draft = SchoolDraft {
        name: checker.text(SchoolField::Name, name, NAME_MIN, NAME_MAX),
        address: checker.text(SchoolField::Address, address, ADDRESS_MIN, ADDRESS_MAX),
        city: checker.region(SchoolField::City, city),
        state: checker.region(SchoolField::State, state),
        contact: checker.contact(contact),
        email_id: checker.email(email_id),
        image: checker.image(image),
    };

    if checker.errors.is_empty() {
        Ok(draft)
    } else {
        Err(checker.errors)
    }
}

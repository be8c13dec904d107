//! Sample schools shared by the integration suites.

use school_directory::domain::{SchoolCandidate, SchoolRecord};

/// A valid record whose name and e-mail are distinguished by `tag`.
pub fn school_record(tag: &str, city: &str) -> SchoolRecord {
    SchoolRecord {
        name: format!("{tag} Academy"),
        address: format!("{tag} Main Street"),
        city: city.to_owned(),
        state: "Illinois".to_owned(),
        contact: "5551234567".to_owned(),
        email_id: format!("{}@schools.test", tag.to_lowercase()),
        image: None,
    }
}

/// A valid candidate as it would arrive from a client.
pub fn school_candidate(name: &str, email: &str) -> SchoolCandidate {
    SchoolCandidate {
        name: Some(name.to_owned()),
        address: Some("1 Oak Way".to_owned()),
        city: Some("Springfield".to_owned()),
        state: Some("Illinois".to_owned()),
        contact: Some("5551234567".to_owned()),
        email_id: Some(email.to_owned()),
        image: None,
    }
}

//! Diesel table definitions for the PostgreSQL schema.
//!
//! Must match `backend/migrations` exactly. Regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Registered schools.
    ///
    /// `email_id` carries a unique constraint (`schools_email_id_key`) and is
    /// always stored lower-case. `city` and `state` are indexed for the
    /// region lookups.
    schools (id) {
        /// Primary key assigned by `BIGSERIAL`.
        id -> Int8,
        #[max_length = 255]
        name -> Varchar,
        #[max_length = 500]
        address -> Varchar,
        #[max_length = 100]
        city -> Varchar,
        #[max_length = 100]
        state -> Varchar,
        /// Ten-digit contact number.
        #[max_length = 10]
        contact -> Varchar,
        #[max_length = 255]
        email_id -> Varchar,
        /// Image URL or compact JSON image metadata.
        image -> Nullable<Text>,
        created_at -> Timestamptz,
        /// Refreshed by the adapter on every update.
        updated_at -> Timestamptz,
    }
}

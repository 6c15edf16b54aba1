//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `migrations/` exactly. Regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Registered users. Usernames are not unique.
    users (id) {
        /// Primary key, defaulted by the database.
        id -> Uuid,
        /// Username as submitted.
        username -> Text,
        /// Insertion timestamp; orders the user listing.
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Logged exercises keyed to their owner by username.
    exercises (id) {
        /// Primary key, defaulted by the database.
        id -> Uuid,
        /// Owner's username copied at creation.
        username -> Text,
        /// Free-text description.
        description -> Text,
        /// Duration in minutes.
        duration -> Float8,
        /// When the exercise took place.
        date -> Timestamptz,
        /// Insertion timestamp; orders the log.
        created_at -> Timestamptz,
    }
}

diesel::allow_tables_to_appear_in_same_query!(users, exercises);

//! Diesel table definitions.

diesel::table! {
    /// Registered accounts. `email` carries a unique index.
    users (id) {
        id -> Integer,
        name -> Text,
        email -> Text,
        password_hash -> Text,
        role -> Text,
    }
}

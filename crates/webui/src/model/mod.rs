//! Typed views of the JSON documents exchanged with the backend.

pub mod hackathon;
pub mod hackathon_id;
pub mod team;
pub mod team_id;
pub mod user;

/// Treats `None` and the empty string alike, the way the backend sends unset text fields.
pub fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|s| !s.trim().is_empty())
}

/// First letter of `name`, uppercased, for avatar badges.
pub fn initial(name: &str) -> String {
    name.chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}

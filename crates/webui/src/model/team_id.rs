use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Backend `_id` of a team document.
#[derive(
    Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(transparent)]
#[display("{id}")]
pub struct TeamId {
    pub id: String,
}

impl TeamId {
    pub fn new(id: impl Into<String>) -> Self {
        TeamId { id: id.into() }
    }
}

impl FromStr for TeamId {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            Err("team id must not be empty")
        } else {
            Ok(TeamId::new(s))
        }
    }
}

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Backend `_id` of a hackathon document.
#[derive(
    Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(transparent)]
#[display("{id}")]
pub struct HackathonId {
    pub id: String,
}

impl HackathonId {
    pub fn new(id: impl Into<String>) -> Self {
        HackathonId { id: id.into() }
    }
}

impl FromStr for HackathonId {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            Err("hackathon id must not be empty")
        } else {
            Ok(HackathonId::new(s))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_bare_id() {
        assert_eq!("66f0c0ffee", HackathonId::new("66f0c0ffee").to_string());
    }

    #[test]
    fn parses_route_segment() {
        assert_eq!(Ok(HackathonId::new("66f0")), "66f0".parse());
        assert!("".parse::<HackathonId>().is_err());
    }

    #[test]
    fn deserializes_from_plain_string() {
        let id: HackathonId = serde_json::from_str(r#""66f0""#).unwrap();
        assert_eq!(HackathonId::new("66f0"), id);
    }
}

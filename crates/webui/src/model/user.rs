use super::{hackathon_id::HackathonId, non_empty};
use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnNull, serde_as};

#[serde_as]
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub institute: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub hackathons_participated: Vec<ParticipatedHackathon>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ParticipatedHackathon {
    #[serde(rename = "_id", default)]
    pub id: Option<HackathonId>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
}

impl ParticipatedHackathon {
    pub fn display_title(&self, index: usize) -> String {
        non_empty(self.title.as_ref())
            .map_or_else(|| format!("Hackathon {}", index + 1), str::to_string)
    }
}

impl User {
    /// Up to two uppercase letters taken from the first letters of the name's words.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .take(2)
            .collect()
    }

    pub fn institute(&self) -> Option<&str> {
        non_empty(self.institute.as_ref())
    }

    pub fn bio(&self) -> Option<&str> {
        non_empty(self.bio.as_ref())
    }

    pub fn linkedin(&self) -> Option<&str> {
        non_empty(self.linkedin.as_ref())
    }

    pub fn github(&self) -> Option<&str> {
        non_empty(self.github.as_ref())
    }
}

/// The signed-in user as reported alongside a hackathon, used as the team leader.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SessionUser {
    pub id: String,
    #[serde(default)]
    pub name: String,
}

/// Editable part of the profile, as typed into the edit form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub bio: String,
    pub skills: String,
    pub linkedin: String,
    pub github: String,
}

impl ProfileForm {
    pub fn from_user(user: &User) -> Self {
        ProfileForm {
            bio: user.bio.clone().unwrap_or_default(),
            skills: join_skills(&user.skills),
            linkedin: user.linkedin.clone().unwrap_or_default(),
            github: user.github.clone().unwrap_or_default(),
        }
    }

    pub fn to_update(&self) -> ProfileUpdate {
        ProfileUpdate {
            bio: self.bio.clone(),
            skills: parse_skills(&self.skills),
            linkedin: self.linkedin.clone(),
            github: self.github.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProfileUpdate {
    pub bio: String,
    pub skills: Vec<String>,
    pub linkedin: String,
    pub github: String,
}

pub fn parse_skills(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|skill| !skill.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn join_skills(skills: &[String]) -> String {
    skills.join(", ")
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SignupForm {
    pub name: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub institute: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn user(name: &str) -> User {
        serde_json::from_value(serde_json::json!({
            "_id": "u1",
            "name": name,
            "username": "ada",
            "email": "ada@example.com",
            "institute": "",
            "skills": ["rust", "wasm"],
            "github": "https://github.com/ada",
            "hackathonsParticipated": [
                { "_id": "h1", "title": "Rust Rumble", "date": "March 2025" },
                { "title": "" },
            ],
        }))
        .unwrap()
    }

    #[rstest]
    #[case("Ada Lovelace", "AL")]
    #[case("ada", "A")]
    #[case("Ada Augusta King Lovelace", "AA")]
    #[case("  ada   lovelace ", "AL")]
    #[case("", "")]
    fn initials(#[case] name: &str, #[case] expected: &str) {
        assert_eq!(expected, user(name).initials());
    }

    #[test]
    fn optional_profile_fields() {
        let user = user("Ada Lovelace");
        assert_eq!(None, user.institute());
        assert_eq!(None, user.bio());
        assert_eq!(None, user.linkedin());
        assert_eq!(Some("https://github.com/ada"), user.github());
    }

    #[test]
    fn participated_hackathon_titles_fall_back_to_position() {
        let user = user("Ada Lovelace");
        let titles: Vec<_> = user
            .hackathons_participated
            .iter()
            .enumerate()
            .map(|(idx, hackathon)| hackathon.display_title(idx))
            .collect();
        assert_eq!(vec!["Rust Rumble", "Hackathon 2"], titles);
        assert_eq!(
            Some(HackathonId::new("h1")),
            user.hackathons_participated[0].id
        );
    }

    #[test]
    fn skills_are_trimmed_and_blank_entries_dropped() {
        assert_eq!(vec!["rust", "wasm", "sql"], parse_skills(" rust,wasm , ,sql,"));
        assert!(parse_skills("").is_empty());
    }

    #[test]
    fn profile_form_round_trips_existing_profile() {
        let user = user("Ada Lovelace");
        let form = ProfileForm::from_user(&user);
        assert_eq!("rust, wasm", form.skills);
        assert_eq!(
            ProfileUpdate {
                bio: String::new(),
                skills: vec!["rust".to_string(), "wasm".to_string()],
                linkedin: String::new(),
                github: "https://github.com/ada".to_string(),
            },
            form.to_update()
        );
    }
}

use super::{hackathon::Hackathon, hackathon_id::HackathonId, initial, non_empty, team_id::TeamId};
use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnNull, serde_as};
use std::ops::RangeInclusive;

#[serde_as]
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Team {
    #[serde(rename = "_id", default)]
    pub id: Option<TeamId>,
    pub name: String,
    #[serde(default)]
    pub idea: Option<String>,
    #[serde(default)]
    pub leader: Option<TeamPerson>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub members: Vec<TeamPerson>,
}

/// A member as embedded in team documents. Which fields are populated depends on the endpoint.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TeamPerson {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
}

impl TeamPerson {
    pub fn initial(&self) -> String {
        initial(&self.name)
    }

    /// `name (username)`, or just the name when the username is unknown.
    pub fn name_with_username(&self) -> String {
        match non_empty(self.username.as_ref()) {
            Some(username) => format!("{} ({username})", self.name),
            None => self.name.clone(),
        }
    }
}

impl Team {
    pub fn idea(&self) -> Option<&str> {
        non_empty(self.idea.as_ref())
    }

    /// The team details endpoint lists the leader first.
    pub fn leader_and_rest(&self) -> (Option<&TeamPerson>, &[TeamPerson]) {
        match self.members.split_first() {
            Some((leader, rest)) => (Some(leader), rest),
            None => (None, &[]),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct MemberDraft {
    pub name: String,
    pub email: String,
}

impl MemberDraft {
    fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && !self.email.trim().is_empty()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MemberField {
    Name,
    Email,
}

/// Grows or shrinks the member list, keeping what was already typed in.
pub fn resize_members(members: &[MemberDraft], count: usize) -> Vec<MemberDraft> {
    let mut resized: Vec<_> = members.iter().take(count).cloned().collect();
    resized.resize_with(count, MemberDraft::default);
    resized
}

/// Bounds of the "additional members" slider: team size minus the leader.
pub fn member_range(hackathon: &Hackathon) -> RangeInclusive<usize> {
    let to_additional = |size: u32| usize::try_from(size.saturating_sub(1)).unwrap_or(usize::MAX);
    let min = to_additional(hackathon.min_team_size);
    let max = to_additional(hackathon.max_team_size).max(min);
    min..=max
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TeamValidationError {
    #[error("Your team needs at least {required} additional member{}.", if *required > 1 { "s" } else { "" })]
    TooFewMembers { required: usize },
    #[error("All member fields are required.")]
    IncompleteMember,
}

pub fn validate_new_team(
    member_count: usize,
    members: &[MemberDraft],
    min_team_size: u32,
) -> Result<(), TeamValidationError> {
    let required = usize::try_from(min_team_size.max(1) - 1).unwrap_or(usize::MAX);
    if member_count < required {
        return Err(TeamValidationError::TooFewMembers { required });
    }
    let filled = members
        .iter()
        .take(member_count)
        .filter(|m| m.is_complete())
        .count();
    if filled < member_count {
        return Err(TeamValidationError::IncompleteMember);
    }
    Ok(())
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTeam {
    pub name: String,
    pub hackathon_id: HackathonId,
    pub leader_id: String,
    pub idea: String,
    pub members: Vec<MemberDraft>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use rstest::rstest;

    fn draft(name: &str, email: &str) -> MemberDraft {
        MemberDraft {
            name: name.to_string(),
            email: email.to_string(),
        }
    }

    #[test]
    fn resize_keeps_typed_members() {
        let members = vec![draft("Ann", "ann@example.com")];
        let grown = resize_members(&members, 3);
        assert_eq!(
            vec![
                draft("Ann", "ann@example.com"),
                MemberDraft::default(),
                MemberDraft::default()
            ],
            grown
        );
        let shrunk = resize_members(&grown, 0);
        assert!(shrunk.is_empty());
    }

    #[rstest]
    #[case(3, 1, false)]
    #[case(3, 2, true)]
    #[case(2, 1, true)]
    #[case(4, 3, true)]
    fn member_count_against_minimum(
        #[case] min_team_size: u32,
        #[case] count: usize,
        #[case] accepted: bool,
    ) {
        let members = vec![draft("Ann", "a@x.io"); count];
        let result = validate_new_team(count, &members, min_team_size);
        if accepted {
            assert_eq!(Ok(()), result);
        } else {
            assert_matches!(result, Err(TeamValidationError::TooFewMembers { .. }));
        }
    }

    #[test]
    fn member_range_excludes_leader() {
        let mut hackathon: Hackathon = serde_json::from_value(serde_json::json!({
            "_id": "h1",
            "title": "Rust Rumble",
            "startDate": "2025-03-10T09:00:00Z",
            "endDate": "2025-03-12T18:00:00Z",
            "registrationDeadline": "2025-03-05T00:00:00Z",
            "minTeamSize": 2,
            "maxTeamSize": 4,
        }))
        .unwrap();
        assert_eq!(1..=3, member_range(&hackathon));
        hackathon.min_team_size = 0;
        hackathon.max_team_size = 0;
        assert_eq!(0..=0, member_range(&hackathon));
    }

    #[test]
    fn too_few_members_message_pluralizes() {
        assert_eq!(
            "Your team needs at least 2 additional members.",
            validate_new_team(0, &[], 3).unwrap_err().to_string()
        );
        assert_eq!(
            "Your team needs at least 1 additional member.",
            validate_new_team(0, &[], 2).unwrap_err().to_string()
        );
    }

    #[test]
    fn solo_teams_need_no_members() {
        assert_eq!(Ok(()), validate_new_team(0, &[], 1));
        assert_eq!(Ok(()), validate_new_team(0, &[], 0));
    }

    #[test]
    fn blank_member_fields_are_rejected() {
        let members = vec![draft("Ann", "ann@example.com"), draft("Bob", "  ")];
        assert_eq!(
            Err(TeamValidationError::IncompleteMember),
            validate_new_team(2, &members, 1)
        );
        assert_eq!(Ok(()), validate_new_team(1, &members, 1));
    }

    #[test]
    fn new_team_uses_backend_field_names() {
        let team = NewTeam {
            name: "Crabs".to_string(),
            hackathon_id: HackathonId::new("h1"),
            leader_id: "u1".to_string(),
            idea: "Faster builds".to_string(),
            members: vec![draft("Ann", "ann@example.com")],
        };
        assert_eq!(
            serde_json::json!({
                "name": "Crabs",
                "hackathonId": "h1",
                "leaderId": "u1",
                "idea": "Faster builds",
                "members": [{ "name": "Ann", "email": "ann@example.com" }],
            }),
            serde_json::to_value(&team).unwrap()
        );
    }

    #[test]
    fn leader_is_first_member() {
        let team: Team = serde_json::from_value(serde_json::json!({
            "_id": "t1",
            "name": "Crabs",
            "idea": null,
            "members": [
                { "name": "leader", "email": "l@x.io" },
                { "name": "ann", "email": "a@x.io" },
            ],
        }))
        .unwrap();
        let (leader, rest) = team.leader_and_rest();
        assert_eq!("leader", leader.unwrap().name);
        assert_eq!(1, rest.len());
        assert_eq!(None, team.idea());
        assert_eq!(Some(TeamId::new("t1")), team.id);
    }

    #[test]
    fn empty_team_has_no_leader() {
        let team: Team = serde_json::from_value(serde_json::json!({ "name": "Ghosts" })).unwrap();
        assert_eq!((None, &[][..]), team.leader_and_rest());
    }

    #[test]
    fn person_labels() {
        let person: TeamPerson = serde_json::from_value(serde_json::json!({
            "_id": "u1",
            "name": "ann",
            "username": "ann_dev",
        }))
        .unwrap();
        assert_eq!("ann (ann_dev)", person.name_with_username());
        assert_eq!("A", person.initial());
    }
}

use super::{ApiError, Credentials, decode, get_json, send_json};
use crate::model::{
    hackathon_id::HackathonId,
    team::{NewTeam, Team},
    team_id::TeamId,
};
use log::debug;
use reqwest::Method;
use serde::Deserialize;

#[derive(Deserialize)]
struct CreatedTeam {
    team: CreatedTeamId,
}

#[derive(Deserialize)]
struct CreatedTeamId {
    #[serde(rename = "_id")]
    id: TeamId,
}

#[derive(Deserialize)]
struct TeamList {
    #[serde(default)]
    teams: Vec<Team>,
}

/// Creates a team and returns its id.
pub async fn create_team(team: &NewTeam) -> Result<TeamId, ApiError> {
    let body = send_json(Method::POST, "/create-team", team, Credentials::Include).await?;
    let created: CreatedTeam = decode(&body)?;
    debug!("Created team {}", created.team.id);
    Ok(created.team.id)
}

/// Fetches the teams formed for a hackathon.
pub async fn list_teams(hackathon_id: &HackathonId) -> Result<Vec<Team>, ApiError> {
    let list: TeamList = get_json(
        &format!("/teams/hackathon/{hackathon_id}"),
        Credentials::Include,
    )
    .await?;
    Ok(list.teams)
}

pub async fn get_team(team_id: &TeamId) -> Result<Team, ApiError> {
    get_json(&format!("/team/{team_id}"), Credentials::Include).await
}

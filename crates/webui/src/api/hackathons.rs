use super::{ApiError, Credentials, get_json};
use crate::model::{hackathon::Hackathon, hackathon_id::HackathonId, user::SessionUser};
use log::debug;
use serde::Deserialize;

#[derive(Deserialize)]
struct HackathonList {
    data: Vec<Hackathon>,
}

/// A hackathon together with the signed-in user, who leads any team created from it.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct HackathonDetail {
    #[serde(rename = "data")]
    pub hackathon: Hackathon,
    #[serde(default)]
    pub leader: Option<SessionUser>,
}

/// Fetches every hackathon, without filtering.
pub async fn list_hackathons() -> Result<Vec<Hackathon>, ApiError> {
    let list: HackathonList = get_json("/allhackathons", Credentials::Omit).await?;
    debug!("Got {} hackathons", list.data.len());
    Ok(list.data)
}

pub async fn get_hackathon(id: &HackathonId) -> Result<HackathonDetail, ApiError> {
    get_json(&format!("/hackathon/{id}"), Credentials::Include).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::decode;

    const HACKATHON: &str = r#"{
        "_id": "66f0c0ffee",
        "title": "Rust Rumble",
        "description": "Build something fast",
        "location": "Online",
        "mode": "Online",
        "startDate": "2025-03-10T09:00:00.000Z",
        "endDate": "2025-03-12T18:00:00.000Z",
        "registrationDeadline": "2025-03-05T00:00:00.000Z",
        "tags": ["rust"],
        "minTeamSize": 1,
        "maxTeamSize": 4,
        "organizer": { "_id": "o1", "name": "Ferris" },
        "__v": 0
    }"#;

    #[test]
    fn detail_envelope_carries_leader() {
        let body = format!(r#"{{"success":true,"data":{HACKATHON},"leader":{{"id":"u1","name":"Ada"}}}}"#);
        let detail: HackathonDetail = decode(&body).unwrap();
        assert_eq!("Rust Rumble", detail.hackathon.title);
        assert_eq!(
            Some(SessionUser {
                id: "u1".to_string(),
                name: "Ada".to_string()
            }),
            detail.leader
        );
    }

    #[test]
    fn detail_envelope_without_leader() {
        let body = format!(r#"{{"data":{HACKATHON}}}"#);
        let detail: HackathonDetail = decode(&body).unwrap();
        assert_eq!(None, detail.leader);
    }

    #[test]
    fn list_envelope() {
        let body = format!(r#"{{"success":true,"data":[{HACKATHON},{HACKATHON}]}}"#);
        let list: HackathonList = decode(&body).unwrap();
        assert_eq!(2, list.data.len());
    }
}

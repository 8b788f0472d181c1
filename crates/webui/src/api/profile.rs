use super::{ApiError, Credentials, get_json, send_json};
use crate::model::user::{ProfileUpdate, User};
use reqwest::Method;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct ProfileEnvelope {
    user: User,
}

/// Fetches the signed-in user's profile.
pub async fn get_profile() -> Result<User, ApiError> {
    let envelope: ProfileEnvelope = get_json("/profile", Credentials::Include).await?;
    Ok(envelope.user)
}

pub async fn update_profile(update: &ProfileUpdate) -> Result<(), ApiError> {
    send_json(Method::PUT, "/profile/edit", update, Credentials::Include).await?;
    Ok(())
}

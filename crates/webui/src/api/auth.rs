use super::{ApiError, Credentials, send_json};
use crate::model::user::{LoginForm, SignupForm};
use reqwest::Method;

/// Registers a new account.
pub async fn signup(form: &SignupForm) -> Result<(), ApiError> {
    send_json(Method::POST, "/signup", form, Credentials::Omit).await?;
    Ok(())
}

/// Signs in; the server answers with an httpOnly session cookie.
pub async fn login(form: &LoginForm) -> Result<(), ApiError> {
    send_json(Method::POST, "/login", form, Credentials::Include).await?;
    Ok(())
}

pub async fn logout() -> Result<(), ApiError> {
    send_json(
        Method::POST,
        "/logout",
        &serde_json::json!({}),
        Credentials::Include,
    )
    .await?;
    Ok(())
}

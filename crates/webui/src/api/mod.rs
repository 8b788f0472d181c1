//! Calls against the HackMate REST backend.

mod auth;
mod hackathons;
mod profile;
mod teams;

pub use auth::{login, logout, signup};
pub use hackathons::{HackathonDetail, get_hackathon, list_hackathons};
pub use profile::{get_profile, update_profile};
pub use teams::{create_team, get_team, list_teams};

use crate::API_BASE_URL;
use log::debug;
use reqwest::{Method, RequestBuilder, StatusCode};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
    #[error("server responded with {status}: {}", message.as_deref().unwrap_or("no details"))]
    Status {
        status: StatusCode,
        message: Option<String>,
    },
    #[error("cannot decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// The message sent by the server, or `fallback` when there is none.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Status {
                message: Some(message),
                ..
            } if !message.is_empty() => message.clone(),
            _ => fallback.to_string(),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self,
            ApiError::Status {
                status: StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN,
                ..
            }
        )
    }
}

/// Whether the browser attaches the session cookie.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Credentials {
    Include,
    Omit,
}

fn endpoint(path: &str) -> String {
    format!("{API_BASE_URL}{path}")
}

fn request(method: Method, path: &str, credentials: Credentials) -> RequestBuilder {
    let url = endpoint(path);
    debug!("{method} {url}");
    let builder = reqwest::Client::new().request(method, url);
    match credentials {
        #[cfg(target_arch = "wasm32")]
        Credentials::Include => builder.fetch_credentials_include(),
        _ => builder,
    }
}

async fn send(builder: RequestBuilder) -> Result<String, ApiError> {
    let response = builder.send().await?;
    let status = response.status();
    let body = response.text().await?;
    check_status(status, body)
}

fn check_status(status: StatusCode, body: String) -> Result<String, ApiError> {
    if status.is_success() {
        Ok(body)
    } else {
        Err(ApiError::Status {
            status,
            message: error_message(&body),
        })
    }
}

fn error_message(body: &str) -> Option<String> {
    #[derive(Deserialize)]
    struct ErrorBody {
        message: Option<String>,
    }
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|body| body.message)
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    Ok(serde_json::from_str(body)?)
}

async fn get_json<T: DeserializeOwned>(path: &str, credentials: Credentials) -> Result<T, ApiError> {
    let body = send(request(Method::GET, path, credentials)).await?;
    decode(&body)
}

async fn send_json<B: Serialize + ?Sized>(
    method: Method,
    path: &str,
    payload: &B,
    credentials: Credentials,
) -> Result<String, ApiError> {
    send(request(method, path, credentials).json(payload)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use rstest::rstest;

    #[test]
    fn endpoints_are_rooted_at_base_url() {
        assert_eq!(
            format!("{API_BASE_URL}/allhackathons"),
            endpoint("/allhackathons")
        );
    }

    #[test]
    fn error_status_carries_server_message() {
        let err = check_status(
            StatusCode::BAD_REQUEST,
            r#"{"success":false,"message":"Email already registered"}"#.to_string(),
        )
        .unwrap_err();
        assert_eq!("Email already registered", err.user_message("Signup failed"));
        assert!(!err.is_unauthorized());
    }

    #[test]
    fn error_without_message_uses_fallback() {
        let err =
            check_status(StatusCode::UNAUTHORIZED, "<html>nope</html>".to_string()).unwrap_err();
        assert_matches!(
            &err,
            ApiError::Status {
                status: StatusCode::UNAUTHORIZED,
                message: None
            }
        );
        assert_eq!("Login failed", err.user_message("Login failed"));
        assert!(err.is_unauthorized());
    }

    #[rstest]
    #[case(StatusCode::UNAUTHORIZED, true)]
    #[case(StatusCode::FORBIDDEN, true)]
    #[case(StatusCode::NOT_FOUND, false)]
    #[case(StatusCode::INTERNAL_SERVER_ERROR, false)]
    fn session_errors_send_user_to_login(#[case] status: StatusCode, #[case] expected: bool) {
        let err = check_status(status, String::new()).unwrap_err();
        assert_eq!(expected, err.is_unauthorized());
    }

    #[test]
    fn success_passes_body_through() {
        assert_eq!(
            "{}",
            check_status(StatusCode::CREATED, "{}".to_string()).unwrap()
        );
    }

    #[test]
    fn decode_errors_are_reported() {
        let err = decode::<Vec<String>>("{").unwrap_err();
        assert_matches!(&err, ApiError::Decode(_));
        assert_eq!("Oops", err.user_message("Oops"));
    }
}

pub mod api;
pub mod app;
pub mod components;
pub mod model;
pub mod util;

/// Root of the HackMate REST API, overridable at build time with `HACKMATE_API_URL`.
pub const API_BASE_URL: &str = match option_env!("HACKMATE_API_URL") {
    Some(url) => url,
    None => "http://localhost:4000/api/v1",
};

/// Name of the httpOnly session cookie set by `/login`.
pub const SESSION_COOKIE: &str = "token";

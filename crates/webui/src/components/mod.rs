pub mod countdown;
pub mod create_team_page;
pub mod edit_profile_page;
pub mod footer;
pub mod form;
pub mod hackathon_detail_page;
pub mod home_page;
pub mod loading;
pub mod login_page;
pub mod navbar;
pub mod notification;
pub mod profile_page;
pub mod session_redirect;
pub mod signup_page;
pub mod tag_chips;
pub mod team_details_page;
pub mod view_teams_page;

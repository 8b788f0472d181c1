use crate::{
    components::{
        create_team_page::CreateTeamPage, edit_profile_page::EditProfilePage, footer::Footer,
        hackathon_detail_page::HackathonDetailPage, home_page::HomePage, login_page::LoginPage,
        navbar::Navbar, notification::NotificationProvider, profile_page::ProfilePage,
        session_redirect::SessionRedirect, signup_page::SignupPage,
        team_details_page::TeamDetailsPage, view_teams_page::ViewTeamsPage,
    },
    model::{hackathon_id::HackathonId, team_id::TeamId},
};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Root,
    #[at("/signup")]
    Signup,
    #[at("/login")]
    Login,
    #[at("/home")]
    Home,
    #[at("/hackathon/:id")]
    Hackathon { id: HackathonId },
    #[at("/hackathon/:id/create-team")]
    CreateTeam { id: HackathonId },
    #[at("/hackathon/:id/view-teams")]
    ViewTeams { id: HackathonId },
    #[at("/team-details/:team_id")]
    TeamDetails { team_id: TeamId },
    #[at("/profile")]
    Profile,
    #[at("/edit-profile")]
    EditProfile,
    // Unknown paths, `/organize` among them, land on the login form.
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    pub fn render(route: Route) -> Html {
        match route {
            Route::Root => html! { <SessionRedirect /> },
            Route::Signup => html! { <SignupPage /> },
            Route::Login | Route::NotFound => html! { <LoginPage /> },
            Route::Home => html! { <Layout><HomePage /></Layout> },
            Route::Hackathon { id } => {
                html! { <Layout><HackathonDetailPage {id} /></Layout> }
            }
            Route::CreateTeam { id } => html! { <Layout><CreateTeamPage {id} /></Layout> },
            Route::ViewTeams { id } => html! { <Layout><ViewTeamsPage {id} /></Layout> },
            Route::TeamDetails { team_id } => {
                html! { <Layout><TeamDetailsPage {team_id} /></Layout> }
            }
            Route::Profile => html! { <Layout><ProfilePage /></Layout> },
            Route::EditProfile => html! { <Layout><EditProfilePage /></Layout> },
        }
    }
}

#[derive(Properties, PartialEq)]
struct LayoutProps {
    children: Html,
}

/// Navbar and footer around the signed-in pages.
#[function_component(Layout)]
fn layout(LayoutProps { children }: &LayoutProps) -> Html {
    html! {
        <div class="layout">
            <Navbar />
            <main class="content">
                { children.clone() }
            </main>
            <Footer />
        </div>
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <NotificationProvider>
            <BrowserRouter>
                <Switch<Route> render={Route::render} />
            </BrowserRouter>
        </NotificationProvider>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("/", Route::Root)]
    #[case("/home", Route::Home)]
    #[case("/hackathon/66f0", Route::Hackathon { id: HackathonId::new("66f0") })]
    #[case("/hackathon/66f0/create-team", Route::CreateTeam { id: HackathonId::new("66f0") })]
    #[case("/hackathon/66f0/view-teams", Route::ViewTeams { id: HackathonId::new("66f0") })]
    #[case("/team-details/t42", Route::TeamDetails { team_id: TeamId::new("t42") })]
    #[case("/edit-profile", Route::EditProfile)]
    #[case("/organize", Route::NotFound)]
    fn paths_resolve_to_routes(#[case] path: &str, #[case] expected: Route) {
        assert_eq!(Some(expected), Route::recognize(path));
    }

    #[test]
    fn routes_render_back_to_paths() {
        assert_eq!(
            "/hackathon/66f0/view-teams",
            Route::ViewTeams {
                id: HackathonId::new("66f0")
            }
            .to_path()
        );
        assert_eq!(
            "/team-details/t42",
            Route::TeamDetails {
                team_id: TeamId::new("t42")
            }
            .to_path()
        );
    }
}

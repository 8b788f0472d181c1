use crate::{
    api,
    components::loading::Loading,
    model::{
        team::{Team, TeamPerson},
        team_id::TeamId,
    },
    util::color::avatar_color,
};
use log::error;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yewprint::Icon;

#[derive(Properties, PartialEq)]
pub struct TeamDetailsPageProps {
    pub team_id: TeamId,
}

#[derive(Clone, PartialEq)]
enum TeamState {
    Loading,
    Loaded(Rc<Team>),
    Failed,
}

#[function_component(TeamDetailsPage)]
pub fn team_details_page(TeamDetailsPageProps { team_id }: &TeamDetailsPageProps) -> Html {
    let team_state = use_state(|| TeamState::Loading);
    let refresh_counter_state = use_state(|| 0); // Bumped by "Try Again".

    {
        let team_state = team_state.clone();
        use_effect_with(
            (team_id.clone(), *refresh_counter_state),
            move |(team_id, _)| {
                let team_id = team_id.clone();
                team_state.set(TeamState::Loading);
                spawn_local(async move {
                    match api::get_team(&team_id).await {
                        Ok(team) => team_state.set(TeamState::Loaded(Rc::new(team))),
                        Err(err) => {
                            error!("Failed to load team {team_id}: {err:?}");
                            team_state.set(TeamState::Failed);
                        }
                    }
                });
            },
        );
    }

    let team = match &*team_state {
        TeamState::Loading => return html! { <Loading message="Loading team details..." /> },
        TeamState::Failed => {
            let on_retry = {
                let refresh_counter_state = refresh_counter_state.clone();
                Callback::from(move |_| refresh_counter_state.set(*refresh_counter_state + 1))
            };
            return html! {
                <div class="page centered">
                    <div class="error-panel">
                        <p>{"Failed to load team details. Please try again later."}</p>
                        <button class="primary-button" onclick={on_retry}>{"Try Again"}</button>
                    </div>
                </div>
            };
        }
        TeamState::Loaded(team) => team.clone(),
    };

    let (leader, others) = team.leader_and_rest();

    html! {
        <div class="page team-details-page">
            <div class="team-header">
                <div>
                    <h1>{ &team.name }</h1>
                    <span class="status-badge status-active">{"Active Team"}</span>
                </div>
                <p class="team-id">{ format!("Team ID: {team_id}") }</p>
            </div>

            <section class="team-section">
                <h2><Icon icon={Icon::Lightbulb} />{" Project Idea"}</h2>
                if let Some(idea) = team.idea() {
                    <p>{ idea }</p>
                } else {
                    <p class="placeholder"><em>{"No project idea has been shared yet."}</em></p>
                }
            </section>

            <section class="team-section">
                <h2>
                    <Icon icon={Icon::People} />
                    { format!(" Team Members ({})", team.members.len()) }
                </h2>
                if let Some(leader) = leader {
                    <div class="leader-card">
                        { member_avatar(leader) }
                        <div>
                            <p class="member-name">{ &leader.name }</p>
                            if let Some(email) = &leader.email {
                                <p class="member-email">{ email }</p>
                            }
                        </div>
                        <span class="leader-badge"><Icon icon={Icon::Star} />{" Team Leader"}</span>
                    </div>
                }
                if !others.is_empty() {
                    <div class="member-grid">
                        { for others.iter().enumerate().map(|(idx, member)| html! {
                            <div class="member-card" key={idx}>
                                { member_avatar(member) }
                                <div>
                                    <p class="member-name">{ &member.name }</p>
                                    if let Some(email) = &member.email {
                                        <p class="member-email">{ email }</p>
                                    }
                                </div>
                            </div>
                        })}
                    </div>
                }
            </section>
        </div>
    }
}

fn member_avatar(person: &TeamPerson) -> Html {
    let seed = person.email.as_deref().unwrap_or(&person.name);
    html! {
        <span class="avatar" style={format!("background-color: {};", avatar_color(seed))}>
            { person.initial() }
        </span>
    }
}

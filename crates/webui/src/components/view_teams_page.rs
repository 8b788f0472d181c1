use crate::{
    api,
    components::loading::Loading,
    model::{hackathon_id::HackathonId, team::Team},
};
use log::{debug, error};
use std::{ops::Deref, rc::Rc};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yewprint::Icon;

#[derive(Properties, PartialEq)]
pub struct ViewTeamsPageProps {
    pub id: HackathonId,
}

#[function_component(ViewTeamsPage)]
pub fn view_teams_page(ViewTeamsPageProps { id }: &ViewTeamsPageProps) -> Html {
    // `None` while the request is in flight.
    let teams_state = use_state(|| None::<Rc<Vec<Team>>>);

    use_effect_with(id.clone(), {
        let teams_state = teams_state.clone();
        move |id| {
            let id = id.clone();
            teams_state.set(None);
            spawn_local(async move {
                match api::list_teams(&id).await {
                    Ok(teams) => {
                        debug!("Got {} teams for {id}", teams.len());
                        teams_state.set(Some(Rc::new(teams)));
                    }
                    Err(err) => {
                        error!("Failed to fetch teams for {id}: {err:?}");
                        teams_state.set(Some(Rc::default()));
                    }
                }
            });
        }
    });

    let content = match teams_state.deref() {
        None => html! { <Loading message="Loading teams..." /> },
        Some(teams) if teams.is_empty() => html! {
            <div class="empty-state">
                <p>{"No teams created yet."}</p>
            </div>
        },
        Some(teams) => html! {
            <div class="team-list">
                { for teams.iter().enumerate().map(|(idx, team)| team_card(idx, team)) }
            </div>
        },
    };

    html! {
        <div class="page view-teams-page">
            <h1><Icon icon={Icon::People} />{" Teams"}</h1>
            { content }
        </div>
    }
}

fn team_card(idx: usize, team: &Team) -> Html {
    let key = team
        .id
        .as_ref()
        .map_or_else(|| idx.to_string(), ToString::to_string);
    html! {
        <div class="team-card" key={key}>
            <h2>{ &team.name }</h2>
            <p class="team-idea">
                <strong>{"Idea: "}</strong>{ team.idea().unwrap_or_default() }
            </p>
            if let Some(leader) = &team.leader {
                <p class="team-leader">
                    <strong>{"Leader: "}</strong>{ leader.name_with_username() }
                </p>
            }
            <div class="team-members">
                <strong>{"Members:"}</strong>
                <ul>
                    { for team.members.iter().map(|member| html! {
                        <li>{ member.name_with_username() }</li>
                    })}
                </ul>
            </div>
        </div>
    }
}

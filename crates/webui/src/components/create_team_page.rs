use crate::{
    api,
    app::Route,
    components::{
        form::{FormAlert, input_value, textarea_value},
        loading::Loading,
    },
    model::{
        hackathon::Hackathon,
        hackathon_id::HackathonId,
        initial,
        team::{MemberDraft, MemberField, NewTeam, member_range, resize_members, validate_new_team},
        user::SessionUser,
    },
};
use gloo::timers::callback::Timeout;
use log::{debug, error};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;
use yewprint::Icon;

/// Delay before opening the new team's page.
const REDIRECT_DELAY_MS: u32 = 1000;
const LOAD_ERROR: &str = "Failed to load hackathon information. Please try again later.";
const CREATE_ERROR: &str = "Error creating team. Please try again.";

#[derive(Properties, PartialEq)]
pub struct CreateTeamPageProps {
    pub id: HackathonId,
}

#[derive(Clone, PartialEq)]
enum LoadState {
    Loading,
    Loaded {
        hackathon: Rc<Hackathon>,
        leader: SessionUser,
    },
    Failed,
}

#[function_component(CreateTeamPage)]
pub fn create_team_page(CreateTeamPageProps { id }: &CreateTeamPageProps) -> Html {
    let load_state = use_state(|| LoadState::Loading);
    let team_name = use_state(String::new);
    let idea = use_state(String::new);
    let member_count = use_state(|| 0_usize);
    let members = use_state(Vec::<MemberDraft>::new);
    let alert = use_state(FormAlert::default);
    let submitting = use_state(|| false);
    let navigator = use_navigator().expect("should be called inside a router");

    use_effect_with(id.clone(), {
        let load_state = load_state.clone();
        let member_count = member_count.clone();
        let members = members.clone();
        move |id| {
            let id = id.clone();
            spawn_local(async move {
                match api::get_hackathon(&id).await {
                    Ok(api::HackathonDetail {
                        hackathon,
                        leader: Some(leader),
                    }) => {
                        let initial_count = *member_range(&hackathon).start();
                        member_count.set(initial_count);
                        members.set(resize_members(&[], initial_count));
                        load_state.set(LoadState::Loaded {
                            hackathon: Rc::new(hackathon),
                            leader,
                        });
                    }
                    Ok(_) => {
                        error!("Hackathon {id} came without the signed-in leader");
                        load_state.set(LoadState::Failed);
                    }
                    Err(err) => {
                        error!("Failed to load hackathon {id}: {err:?}");
                        load_state.set(LoadState::Failed);
                    }
                }
            });
        }
    });

    let (hackathon, leader) = match &*load_state {
        LoadState::Loading => return html! { <Loading message="Loading hackathon information..." /> },
        LoadState::Failed => {
            return html! {
                <div class="page narrow">
                    { FormAlert::Error(LOAD_ERROR.to_string()) }
                </div>
            };
        }
        LoadState::Loaded { hackathon, leader } => (hackathon.clone(), leader.clone()),
    };

    let on_name_input = {
        let team_name = team_name.clone();
        Callback::from(move |e: InputEvent| team_name.set(input_value(&e)))
    };

    let on_idea_input = {
        let idea = idea.clone();
        Callback::from(move |e: InputEvent| idea.set(textarea_value(&e)))
    };

    let on_count_input = {
        let member_count = member_count.clone();
        let members = members.clone();
        Callback::from(move |e: InputEvent| {
            if let Ok(count) = input_value(&e).parse::<usize>() {
                member_count.set(count);
                members.set(resize_members(&members, count));
            }
        })
    };

    let on_member_input = {
        let members = members.clone();
        move |index: usize, field: MemberField| {
            let members = members.clone();
            Callback::from(move |e: InputEvent| {
                let mut updated = (*members).clone();
                if let Some(member) = updated.get_mut(index) {
                    let value = input_value(&e);
                    match field {
                        MemberField::Name => member.name = value,
                        MemberField::Email => member.email = value,
                    }
                    members.set(updated);
                }
            })
        }
    };

    let on_submit = {
        let hackathon = hackathon.clone();
        let leader_id = leader.id.clone();
        let team_name = team_name.clone();
        let idea = idea.clone();
        let member_count = member_count.clone();
        let members = members.clone();
        let alert = alert.clone();
        let submitting = submitting.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            alert.set(FormAlert::None);

            if let Err(err) = validate_new_team(*member_count, &members, hackathon.min_team_size) {
                alert.set(FormAlert::Error(err.to_string()));
                return;
            }

            let team = NewTeam {
                name: (*team_name).clone(),
                hackathon_id: hackathon.id.clone(),
                leader_id: leader_id.clone(),
                idea: (*idea).clone(),
                members: members.iter().take(*member_count).cloned().collect(),
            };
            let alert = alert.clone();
            let submitting = submitting.clone();
            let navigator = navigator.clone();
            submitting.set(true);
            spawn_local(async move {
                let result = api::create_team(&team).await;
                submitting.set(false);
                match result {
                    Ok(team_id) => {
                        debug!("Team {team_id} created for {}", team.hackathon_id);
                        alert.set(FormAlert::Success("Team created successfully!".to_string()));
                        Timeout::new(REDIRECT_DELAY_MS, move || {
                            navigator.push(&Route::TeamDetails { team_id });
                        })
                        .forget();
                    }
                    Err(err) => {
                        error!("Failed to create team: {err:?}");
                        alert.set(FormAlert::Error(err.user_message(CREATE_ERROR)));
                    }
                }
            });
        })
    };

    let range = member_range(&hackathon);
    let member_rows = members
        .iter()
        .enumerate()
        .map(|(index, member)| {
            html! {
                <div class="member-row" key={index}>
                    <span class="member-number">{ format!("Member {}", index + 1) }</span>
                    <input
                        type="text"
                        placeholder="Full name"
                        value={member.name.clone()}
                        oninput={on_member_input(index, MemberField::Name)}
                        required=true
                    />
                    <input
                        type="email"
                        placeholder="Email address"
                        value={member.email.clone()}
                        oninput={on_member_input(index, MemberField::Email)}
                        required=true
                    />
                </div>
            }
        })
        .collect::<Html>();

    html! {
        <div class="page narrow create-team-page">
            <div class="form-card">
                <h1>{"Create Your Team"}</h1>
                <p class="subtitle">{ format!("for {}", hackathon.title) }</p>

                { (*alert).to_html() }

                <form onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="team-name">{"Team Name"}</label>
                        <input
                            id="team-name"
                            type="text"
                            placeholder="Enter a memorable team name"
                            value={(*team_name).clone()}
                            oninput={on_name_input}
                            required=true
                        />
                    </div>

                    <div class="form-group">
                        <label>{"Team Leader"}</label>
                        <div class="leader-display">
                            <span class="avatar">{ initial(&leader.name) }</span>
                            <span>{ format!("{} (You)", leader.name) }</span>
                        </div>
                    </div>

                    <div class="form-group">
                        <label for="team-idea">{"Project Idea"}</label>
                        <textarea
                            id="team-idea"
                            rows="4"
                            placeholder="Briefly describe what your team plans to build"
                            value={(*idea).clone()}
                            oninput={on_idea_input}
                        />
                    </div>

                    <div class="form-group">
                        <label for="member-count">
                            <Icon icon={Icon::People} />
                            { format!(" Additional Members: {}", *member_count) }
                        </label>
                        <input
                            id="member-count"
                            type="range"
                            min={range.start().to_string()}
                            max={range.end().to_string()}
                            value={member_count.to_string()}
                            oninput={on_count_input}
                        />
                        <p class="hint">
                            { format!("Team size: {} (including you)", hackathon.team_size_label()) }
                        </p>
                    </div>

                    if !members.is_empty() {
                        <div class="form-group members">
                            <label>{"Team Members"}</label>
                            { member_rows }
                        </div>
                    }

                    <button type="submit" class="primary-button" disabled={*submitting}>
                        if *submitting {
                            {"Creating Team..."}
                        } else {
                            {"Create Team"}
                        }
                    </button>
                </form>
            </div>
        </div>
    }
}

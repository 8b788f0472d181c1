use crate::{
    api,
    app::Route,
    components::loading::Loading,
    model::user::{ParticipatedHackathon, User},
};
use log::{debug, error};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;
use yewprint::Icon;

#[derive(Clone, PartialEq)]
enum ProfileState {
    Loading,
    Loaded(Rc<User>),
    NotFound,
}

#[function_component(ProfilePage)]
pub fn profile_page() -> Html {
    let profile_state = use_state(|| ProfileState::Loading);
    let refresh_counter_state = use_state(|| 0);
    let navigator = use_navigator().expect("should be called inside a router");

    {
        let profile_state = profile_state.clone();
        use_effect_with(*refresh_counter_state, move |_| {
            profile_state.set(ProfileState::Loading);
            spawn_local(async move {
                match api::get_profile().await {
                    Ok(user) => profile_state.set(ProfileState::Loaded(Rc::new(user))),
                    Err(err) if err.is_unauthorized() => {
                        debug!("Profile requires a session: {err}");
                        navigator.replace(&Route::Login);
                    }
                    Err(err) => {
                        error!("Failed to fetch profile: {err:?}");
                        profile_state.set(ProfileState::NotFound);
                    }
                }
            });
        });
    }

    let user = match &*profile_state {
        ProfileState::Loading => return html! { <Loading message="Loading profile..." /> },
        ProfileState::NotFound => {
            let on_retry = {
                let refresh_counter_state = refresh_counter_state.clone();
                Callback::from(move |_| refresh_counter_state.set(*refresh_counter_state + 1))
            };
            return html! {
                <div class="page centered">
                    <div class="not-found">
                        <h2>{"Profile Not Found"}</h2>
                        <p>{"We couldn't load your profile information."}</p>
                        <button class="primary-button" onclick={on_retry}>{"Try Again"}</button>
                    </div>
                </div>
            };
        }
        ProfileState::Loaded(user) => user.clone(),
    };

    html! {
        <div class="page profile-page">
            <div class="profile-header">
                <div class="avatar large">{ user.initials() }</div>
                <div class="profile-title">
                    <h1>{ &user.name }</h1>
                    <p class="username">{ format!("@{}", user.username) }</p>
                </div>
                <Link<Route> to={Route::EditProfile} classes="primary-button">
                    <Icon icon={Icon::Edit} />{" Edit Profile"}
                </Link<Route>>
            </div>

            <div class="profile-grid">
                <aside class="profile-sidebar">
                    <section class="profile-card">
                        <h2>{"Personal Info"}</h2>
                        <p><Icon icon={Icon::Envelope} />{" "}{ &user.email }</p>
                        if let Some(institute) = user.institute() {
                            <p><Icon icon={Icon::Office} />{" "}{ institute }</p>
                        }
                    </section>

                    if user.linkedin().is_some() || user.github().is_some() {
                        <section class="profile-card">
                            <h2>{"Connect"}</h2>
                            if let Some(linkedin) = user.linkedin() {
                                <a href={linkedin.to_string()} target="_blank" rel="noopener noreferrer">
                                    {"LinkedIn"}
                                </a>
                            }
                            if let Some(github) = user.github() {
                                <a href={github.to_string()} target="_blank" rel="noopener noreferrer">
                                    {"GitHub"}
                                </a>
                            }
                        </section>
                    }

                    <section class="profile-card stats">
                        <div class="stat">
                            <span class="stat-value">{ user.hackathons_participated.len() }</span>
                            <span class="stat-label">{"Hackathons"}</span>
                        </div>
                        <div class="stat">
                            <span class="stat-value">{ user.skills.len() }</span>
                            <span class="stat-label">{"Skills"}</span>
                        </div>
                    </section>
                </aside>

                <div class="profile-main">
                    if let Some(bio) = user.bio() {
                        <section class="profile-card">
                            <h2>{"About Me"}</h2>
                            <p>{ bio }</p>
                        </section>
                    }

                    if !user.skills.is_empty() {
                        <section class="profile-card">
                            <h2>{"Skills"}</h2>
                            <div class="tags">
                                { for user.skills.iter().map(|skill| html! {
                                    <span class="tag">{ skill }</span>
                                })}
                            </div>
                        </section>
                    }

                    if !user.hackathons_participated.is_empty() {
                        <section class="profile-card">
                            <h2>{"Hackathon History"}</h2>
                            <ul class="history">
                                { for user.hackathons_participated.iter().enumerate().map(|(idx, entry)| history_entry(idx, entry)) }
                            </ul>
                        </section>
                    }
                </div>
            </div>
        </div>
    }
}

fn history_entry(idx: usize, entry: &ParticipatedHackathon) -> Html {
    let title = entry.display_title(idx);
    html! {
        <li key={idx}>
            if let Some(id) = &entry.id {
                <Link<Route> to={Route::Hackathon { id: id.clone() }}>{ title }</Link<Route>>
            } else {
                <span>{ title }</span>
            }
            if let Some(date) = &entry.date {
                <span class="history-date">{ date }</span>
            }
        </li>
    }
}

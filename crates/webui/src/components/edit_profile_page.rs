use crate::{
    api,
    app::Route,
    components::{
        form::{input_value, textarea_value},
        loading::Loading,
        notification::{Notification, NotificationContext},
    },
    model::user::{ProfileForm, User},
};
use log::{debug, error};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(EditProfilePage)]
pub fn edit_profile_page() -> Html {
    let user_state = use_state(|| None::<Rc<User>>);
    let form_state = use_state(ProfileForm::default);
    let saving = use_state(|| false);
    let notifications =
        use_context::<NotificationContext>().expect("NotificationContext should be provided");
    let navigator = use_navigator().expect("should be called inside a router");

    {
        let user_state = user_state.clone();
        let form_state = form_state.clone();
        let notifications = notifications.clone();
        use_effect_with((), move |()| {
            spawn_local(async move {
                match api::get_profile().await {
                    Ok(user) => {
                        form_state.set(ProfileForm::from_user(&user));
                        user_state.set(Some(Rc::new(user)));
                    }
                    Err(err) if err.is_unauthorized() => {
                        debug!("Profile requires a session: {err}");
                        navigator.replace(&Route::Login);
                    }
                    Err(err) => {
                        error!("Failed to fetch profile: {err:?}");
                        notifications.push(Notification::error("Failed to load profile"));
                    }
                }
            });
        });
    }

    let Some(user) = (*user_state).clone() else {
        return html! { <Loading message="Loading profile..." /> };
    };

    // Builds an `oninput` handler that writes one field of the form.
    let bind = |read: fn(&InputEvent) -> String, write: fn(&mut ProfileForm, String)| {
        let form_state = form_state.clone();
        Callback::from(move |e: InputEvent| {
            let mut form = (*form_state).clone();
            write(&mut form, read(&e));
            form_state.set(form);
        })
    };

    let on_submit = {
        let form_state = form_state.clone();
        let saving = saving.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let update = form_state.to_update();
            let saving = saving.clone();
            let notifications = notifications.clone();
            saving.set(true);
            spawn_local(async move {
                let result = api::update_profile(&update).await;
                saving.set(false);
                match result {
                    Ok(()) => {
                        debug!("Profile updated");
                        notifications.push(Notification::success("Profile updated successfully!"));
                    }
                    Err(err) => {
                        error!("Failed to update profile: {err:?}");
                        notifications.push(Notification::error("Failed to update profile"));
                    }
                }
            });
        })
    };

    html! {
        <div class="page narrow edit-profile-page">
            <div class="form-card">
                <h1>{"Edit Profile"}</h1>

                <form onsubmit={on_submit}>
                    { read_only_field("Full Name", &user.name) }
                    { read_only_field("Email", &user.email) }
                    { read_only_field("Institute", user.institute().unwrap_or_default()) }

                    <div class="form-group">
                        <label for="bio">{"Bio"}</label>
                        <textarea
                            id="bio"
                            rows="4"
                            placeholder="Tell others about yourself"
                            value={form_state.bio.clone()}
                            oninput={bind(textarea_value, |form, value| form.bio = value)}
                        />
                    </div>

                    <div class="form-group">
                        <label for="skills">{"Skills (comma separated)"}</label>
                        <input
                            id="skills"
                            type="text"
                            placeholder="Rust, WebAssembly, Design"
                            value={form_state.skills.clone()}
                            oninput={bind(input_value, |form, value| form.skills = value)}
                        />
                    </div>

                    <div class="form-group">
                        <label for="linkedin">{"LinkedIn"}</label>
                        <input
                            id="linkedin"
                            type="url"
                            placeholder="https://linkedin.com/in/..."
                            value={form_state.linkedin.clone()}
                            oninput={bind(input_value, |form, value| form.linkedin = value)}
                        />
                    </div>

                    <div class="form-group">
                        <label for="github">{"GitHub"}</label>
                        <input
                            id="github"
                            type="url"
                            placeholder="https://github.com/..."
                            value={form_state.github.clone()}
                            oninput={bind(input_value, |form, value| form.github = value)}
                        />
                    </div>

                    <div class="form-actions">
                        <Link<Route> to={Route::Profile} classes="secondary-button">{"Back to Profile"}</Link<Route>>
                        <button type="submit" class="primary-button" disabled={*saving}>
                            if *saving { {"Saving..."} } else { {"Save Changes"} }
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

fn read_only_field(label: &'static str, value: &str) -> Html {
    html! {
        <div class="form-group">
            <label>{ label }</label>
            <input type="text" value={value.to_string()} readonly=true disabled=true />
        </div>
    }
}

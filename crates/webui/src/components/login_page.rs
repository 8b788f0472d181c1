use crate::{
    api,
    app::Route,
    components::form::{FormAlert, input_value},
    model::user::LoginForm,
};
use gloo::timers::callback::Timeout;
use log::{debug, error};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

/// Delay before leaving the page after a successful login.
const REDIRECT_DELAY_MS: u32 = 1500;

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let form_state = use_state(LoginForm::default);
    let alert = use_state(FormAlert::default);
    let navigator = use_navigator().expect("should be called inside a router");

    let bind = |write: fn(&mut LoginForm, String)| {
        let form_state = form_state.clone();
        Callback::from(move |e: InputEvent| {
            let mut form = (*form_state).clone();
            write(&mut form, input_value(&e));
            form_state.set(form);
        })
    };

    let on_submit = {
        let form_state = form_state.clone();
        let alert = alert.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let form = (*form_state).clone();
            let alert = alert.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                match api::login(&form).await {
                    Ok(()) => {
                        debug!("Logged in as {}", form.email);
                        alert.set(FormAlert::Success("Logged in successfully!".to_string()));
                        Timeout::new(REDIRECT_DELAY_MS, move || {
                            alert.set(FormAlert::None);
                            navigator.push(&Route::Home);
                        })
                        .forget();
                    }
                    Err(err) => {
                        error!("Login failed: {err:?}");
                        alert.set(FormAlert::Error(err.user_message("Login failed")));
                    }
                }
            });
        })
    };

    html! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="brand-name">{"HackMate"}</h1>
                <h2>{"Welcome back"}</h2>

                { (*alert).to_html() }

                <form onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="email">{"Email"}</label>
                        <input
                            id="email"
                            type="email"
                            placeholder="you@example.com"
                            value={form_state.email.clone()}
                            oninput={bind(|form, value| form.email = value)}
                            required=true
                        />
                    </div>
                    <div class="form-group">
                        <label for="password">{"Password"}</label>
                        <input
                            id="password"
                            type="password"
                            value={form_state.password.clone()}
                            oninput={bind(|form, value| form.password = value)}
                            required=true
                        />
                    </div>
                    <button type="submit" class="primary-button">{"Login"}</button>
                </form>

                <p class="auth-switch">
                    {"Don't have an account? "}
                    <Link<Route> to={Route::Signup}>{"Sign up"}</Link<Route>>
                </p>
            </div>
        </div>
    }
}

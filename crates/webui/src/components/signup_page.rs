use crate::{
    api,
    app::Route,
    components::form::{FormAlert, input_value},
    model::user::SignupForm,
};
use gloo::timers::callback::Timeout;
use log::{debug, error};
use strum::IntoEnumIterator;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

/// Delay before switching to the login page after registering.
const REDIRECT_DELAY_MS: u32 = 1500;

#[derive(Clone, Copy, strum::EnumIter)]
enum SignupField {
    Name,
    Username,
    Email,
    Password,
    Institute,
}

impl SignupField {
    fn id(self) -> &'static str {
        match self {
            SignupField::Name => "name",
            SignupField::Username => "username",
            SignupField::Email => "email",
            SignupField::Password => "password",
            SignupField::Institute => "institute",
        }
    }

    fn label(self) -> &'static str {
        match self {
            SignupField::Name => "Full Name",
            SignupField::Username => "Username",
            SignupField::Email => "Email",
            SignupField::Password => "Password",
            SignupField::Institute => "Institute",
        }
    }

    fn input_type(self) -> &'static str {
        match self {
            SignupField::Email => "email",
            SignupField::Password => "password",
            _ => "text",
        }
    }

    fn get(self, form: &SignupForm) -> &str {
        match self {
            SignupField::Name => &form.name,
            SignupField::Username => &form.username,
            SignupField::Email => &form.email,
            SignupField::Password => &form.password,
            SignupField::Institute => &form.institute,
        }
    }

    fn get_mut(self, form: &mut SignupForm) -> &mut String {
        match self {
            SignupField::Name => &mut form.name,
            SignupField::Username => &mut form.username,
            SignupField::Email => &mut form.email,
            SignupField::Password => &mut form.password,
            SignupField::Institute => &mut form.institute,
        }
    }
}

#[function_component(SignupPage)]
pub fn signup_page() -> Html {
    let form_state = use_state(SignupForm::default);
    let alert = use_state(FormAlert::default);
    let navigator = use_navigator().expect("should be called inside a router");

    let on_submit = {
        let form_state = form_state.clone();
        let alert = alert.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let form = (*form_state).clone();
            let form_state = form_state.clone();
            let alert = alert.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                match api::signup(&form).await {
                    Ok(()) => {
                        debug!("Registered {}", form.username);
                        alert.set(FormAlert::Success("User registered successfully!".to_string()));
                        form_state.set(SignupForm::default());
                        Timeout::new(REDIRECT_DELAY_MS, move || navigator.push(&Route::Login))
                            .forget();
                    }
                    Err(err) => {
                        error!("Signup failed: {err:?}");
                        alert.set(FormAlert::Error(err.user_message("Signup failed")));
                    }
                }
            });
        })
    };

    let fields = SignupField::iter()
        .map(|field| {
            let oninput = {
                let form_state = form_state.clone();
                Callback::from(move |e: InputEvent| {
                    let mut form = (*form_state).clone();
                    *field.get_mut(&mut form) = input_value(&e);
                    form_state.set(form);
                })
            };
            html! {
                <div class="form-group" key={field.id()}>
                    <label for={field.id()}>{ field.label() }</label>
                    <input
                        id={field.id()}
                        type={field.input_type()}
                        value={field.get(&form_state).to_string()}
                        {oninput}
                        required=true
                    />
                </div>
            }
        })
        .collect::<Html>();

    html! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="brand-name">{"HackMate"}</h1>
                <h2>{"Create your account"}</h2>

                { (*alert).to_html() }

                <form onsubmit={on_submit}>
                    { fields }
                    <button type="submit" class="primary-button">{"Sign Up"}</button>
                </form>

                <p class="auth-switch">
                    {"Already have an account? "}
                    <Link<Route> to={Route::Login}>{"Log in"}</Link<Route>>
                </p>
            </div>
        </div>
    }
}

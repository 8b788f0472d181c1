use crate::{SESSION_COOKIE, api, app::Route, util::cookie::read_cookie};
use log::debug;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

/// Sends `/` to the home page when signed in, otherwise to the login page.
///
/// The backend may mark the session cookie httpOnly, in which case it is invisible to
/// `document.cookie` and the profile endpoint decides instead.
#[function_component(SessionRedirect)]
pub fn session_redirect() -> Html {
    let navigator = use_navigator().expect("should be called inside a router");

    use_effect_with((), move |()| {
        if read_cookie(SESSION_COOKIE).is_some() {
            navigator.replace(&Route::Home);
        } else {
            spawn_local(async move {
                let target = match api::get_profile().await {
                    Ok(_) => Route::Home,
                    Err(err) => {
                        debug!("No active session: {err}");
                        Route::Login
                    }
                };
                navigator.replace(&target);
            });
        }
    });

    html! {}
}

use crate::{
    api,
    app::Route,
    components::notification::{Notification, NotificationContext},
};
use log::{debug, error};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;
use yewprint::Icon;

/// Has no page of its own, so the router falls back to the login page.
const ORGANIZE_PATH: &str = "/organize";

#[derive(Clone, PartialEq)]
enum NavTarget {
    Route(Route),
    External(&'static str),
}

struct NavLink {
    name: &'static str,
    icon: Icon,
    target: NavTarget,
}

fn nav_links() -> [NavLink; 3] {
    [
        NavLink {
            name: "Home",
            icon: Icon::Home,
            target: NavTarget::Route(Route::Home),
        },
        NavLink {
            name: "My Profile",
            icon: Icon::Person,
            target: NavTarget::Route(Route::Profile),
        },
        NavLink {
            name: "Organize a Hackathon",
            icon: Icon::Rocket,
            target: NavTarget::External(ORGANIZE_PATH),
        },
    ]
}

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let current_route = use_route::<Route>();
    let navigator = use_navigator().expect("should be called inside a router");
    let notifications =
        use_context::<NotificationContext>().expect("NotificationContext should be provided");
    let mobile_menu_open = use_state(|| false);

    let on_logout = {
        let mobile_menu_open = mobile_menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            mobile_menu_open.set(false);
            let navigator = navigator.clone();
            let notifications = notifications.clone();
            spawn_local(async move {
                match api::logout().await {
                    Ok(()) => {
                        debug!("Logged out");
                        navigator.push(&Route::Login);
                    }
                    Err(err) => {
                        error!("Logout failed: {err:?}");
                        notifications.push(Notification::error("Logout failed"));
                    }
                }
            });
        })
    };

    let on_toggle_menu = {
        let mobile_menu_open = mobile_menu_open.clone();
        Callback::from(move |_| mobile_menu_open.set(!*mobile_menu_open))
    };

    let render_links = |mobile: bool| {
        nav_links()
            .into_iter()
            .map(|NavLink { name, icon, target }| {
                let is_active = matches!(&target, NavTarget::Route(route) if current_route.as_ref() == Some(route));
                let class = classes!("nav-link", is_active.then_some("active"));
                let content = html! { <><Icon {icon} />{" "}{name}</> };
                match target {
                    NavTarget::Route(route) => {
                        let mobile_menu_open = mobile_menu_open.clone();
                        html! {
                            <span onclick={move |_| if mobile { mobile_menu_open.set(false) }}>
                                <Link<Route> to={route} classes={class}>{content}</Link<Route>>
                            </span>
                        }
                    }
                    NavTarget::External(href) => html! {
                        <a {href} {class}>{content}</a>
                    },
                }
            })
            .collect::<Html>()
    };

    html! {
        <nav class="navbar">
            <div class="navbar-inner">
                <Link<Route> to={Route::Home} classes="brand">
                    <span class="brand-mark">{"⚡"}</span>
                    <span class="brand-name">{"HackMate"}</span>
                </Link<Route>>

                <div class="nav-links desktop">
                    { render_links(false) }
                    <button class="logout-button" onclick={on_logout.clone()}>
                        <Icon icon={Icon::LogOut} />{" Logout"}
                    </button>
                </div>

                <button class="menu-toggle" onclick={on_toggle_menu} aria-label="Toggle menu">
                    if *mobile_menu_open { {"✕"} } else { {"☰"} }
                </button>
            </div>

            if *mobile_menu_open {
                <div class="nav-links mobile">
                    { render_links(true) }
                    <button class="logout-button" onclick={on_logout}>
                        <Icon icon={Icon::LogOut} />{" Logout"}
                    </button>
                </div>
            }
        </nav>
    }
}

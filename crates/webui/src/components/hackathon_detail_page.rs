use crate::{
    api,
    app::Route,
    components::{countdown::RegistrationCountdown, loading::Loading, tag_chips::TagChips},
    model::{
        hackathon::{Hackathon, RegistrationPanel},
        hackathon_id::HackathonId,
    },
    util::time::format_long_date,
};
use chrono::{DateTime, Local, Utc};
use log::error;
use std::rc::Rc;
use strum::IntoEnumIterator;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;
use yewprint::Icon;

/// Tags shown in the hero before collapsing.
const HERO_TAG_LIMIT: usize = 5;

#[derive(Properties, PartialEq)]
pub struct HackathonDetailPageProps {
    pub id: HackathonId,
}

#[derive(Clone, PartialEq)]
enum DetailState {
    Loading,
    Loaded(Rc<Hackathon>),
    NotFound,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, strum::EnumIter)]
enum DetailTab {
    #[default]
    Overview,
    Rules,
    Prizes,
}

impl DetailTab {
    fn label(self) -> &'static str {
        match self {
            DetailTab::Overview => "Overview",
            DetailTab::Rules => "Rules & Info",
            DetailTab::Prizes => "Prizes",
        }
    }

    fn icon(self) -> Icon {
        match self {
            DetailTab::Overview => Icon::Calendar,
            DetailTab::Rules => Icon::Help,
            DetailTab::Prizes => Icon::Badge,
        }
    }
}

#[function_component(HackathonDetailPage)]
pub fn hackathon_detail_page(HackathonDetailPageProps { id }: &HackathonDetailPageProps) -> Html {
    let navigator = use_navigator().expect("should be called inside a router");
    let detail_state = use_state(|| DetailState::Loading);
    let active_tab = use_state(DetailTab::default);
    let register_expanded = use_state(|| false);
    // Re-sampled when the countdown runs out so the registration panel flips to closed.
    let now_state = use_state(Utc::now);

    use_effect_with(id.clone(), {
        let detail_state = detail_state.clone();
        move |id| {
            let id = id.clone();
            detail_state.set(DetailState::Loading);
            spawn_local(async move {
                match api::get_hackathon(&id).await {
                    Ok(detail) => detail_state.set(DetailState::Loaded(Rc::new(detail.hackathon))),
                    Err(err) => {
                        error!("Failed to load hackathon {id}: {err:?}");
                        detail_state.set(DetailState::NotFound);
                    }
                }
            });
        }
    });

    let on_back = {
        let navigator = navigator.clone();
        Callback::from(move |_| navigator.push(&Route::Home))
    };

    let hackathon = match &*detail_state {
        DetailState::Loading => {
            return html! { <Loading message="Loading hackathon details..." /> };
        }
        DetailState::NotFound => {
            return html! {
                <div class="page centered">
                    <div class="not-found">
                        <div class="not-found-emoji">{"😕"}</div>
                        <h2>{"Hackathon Not Found"}</h2>
                        <p>{"We couldn't find the hackathon you're looking for"}</p>
                        <button class="primary-button" onclick={on_back}>{"Back to Home"}</button>
                    </div>
                </div>
            };
        }
        DetailState::Loaded(hackathon) => hackathon.clone(),
    };

    let now = *now_state;
    let status = hackathon.status(now);
    let registration_open = hackathon.is_registration_open(now);

    let on_countdown_expired = {
        let now_state = now_state.clone();
        Callback::from(move |()| now_state.set(Utc::now()))
    };

    let tabs = DetailTab::iter()
        .map(|tab| {
            let active_tab = active_tab.clone();
            let class = classes!("tab", (tab == *active_tab).then_some("active"));
            html! {
                <button key={tab.label()} {class} onclick={move |_| active_tab.set(tab)}>
                    <Icon icon={tab.icon()} />{" "}{ tab.label() }
                </button>
            }
        })
        .collect::<Html>();

    let tab_content = match *active_tab {
        DetailTab::Overview => render_overview(&hackathon, registration_open),
        DetailTab::Rules => render_text_tab(
            "Rules & Guidelines",
            hackathon.rules(),
            "No specific rules have been provided for this hackathon. Contact the organizer for more information.",
        ),
        DetailTab::Prizes => render_text_tab(
            "Prizes & Rewards",
            hackathon.prizes(),
            "Prize information hasn't been specified yet. Check back later or contact the organizer.",
        ),
    };

    html! {
        <div class="page hackathon-detail">
            <button class="back-link" onclick={on_back}>
                <Icon icon={Icon::ChevronLeft} />{"Back to Hackathons"}
            </button>

            <div class="detail-card">
                <div class="hero-banner">
                    <span class={classes!("status-badge", status.css_class())}>{ status.label() }</span>
                    <div class="hero-title">
                        <h1>{ &hackathon.title }</h1>
                        <TagChips tags={hackathon.tags.clone()} limit={HERO_TAG_LIMIT} />
                    </div>
                </div>

                <div class="detail-body">
                    if registration_open {
                        <RegistrationCountdown
                            deadline={hackathon.registration_deadline}
                            on_expired={on_countdown_expired}
                        />
                    }

                    <div class="tabs">{ tabs }</div>
                    <div class="tab-content">{ tab_content }</div>

                    <RegistrationSection
                        hackathon_id={hackathon.id.clone()}
                        panel={hackathon.registration_panel(now)}
                        expanded={*register_expanded}
                        on_toggle={
                            let register_expanded = register_expanded.clone();
                            Callback::from(move |()| register_expanded.set(!*register_expanded))
                        }
                    />
                </div>
            </div>
        </div>
    }
}

fn render_overview(hackathon: &Hackathon, registration_open: bool) -> Html {
    let local = |date: &DateTime<Utc>| date.with_timezone(&Local);
    let deadline_class = classes!("detail-value", (!registration_open).then_some("closed"));
    let organizer_name = hackathon
        .organizer
        .as_ref()
        .map(|organizer| organizer.name.clone())
        .unwrap_or_default();

    html! {
        <div class="overview">
            <p class="description">{ &hackathon.description }</p>

            <div class="overview-grid">
                <div class="info-panel">
                    <h3>{"Key Details"}</h3>
                    { detail_row(Icon::MapMarker, "Location", html! { { &hackathon.location } }) }
                    { detail_row(Icon::Desktop, "Mode", html! { { &hackathon.mode } }) }
                    { detail_row(Icon::Calendar, "Event Dates", html! {
                        { format!(
                            "{} - {}",
                            format_long_date(&local(&hackathon.start_date)),
                            format_long_date(&local(&hackathon.end_date)),
                        ) }
                    }) }
                    <div class="detail-row">
                        <div class="detail-icon"><Icon icon={Icon::Time} /></div>
                        <div>
                            <p class="detail-label">{"Registration Deadline"}</p>
                            <p class={deadline_class}>
                                { format_long_date(&local(&hackathon.registration_deadline)) }
                                if !registration_open {
                                    {" (Closed)"}
                                }
                            </p>
                        </div>
                    </div>
                </div>

                <div class="info-panel">
                    <h3>{"Team & Organizer"}</h3>
                    { detail_row(Icon::People, "Team Size", html! { { hackathon.team_size_label() } }) }
                    { detail_row(Icon::Office, "Organizer", html! {
                        <>
                            { organizer_name }
                            if let Some(email) = hackathon.organizer_email() {
                                <a class="organizer-email" href={format!("mailto:{email}")}>
                                    { email }{" "}<Icon icon={Icon::Share} />
                                </a>
                            }
                        </>
                    }) }
                </div>
            </div>
        </div>
    }
}

fn detail_row(icon: Icon, label: &'static str, value: Html) -> Html {
    html! {
        <div class="detail-row">
            <div class="detail-icon"><Icon {icon} /></div>
            <div>
                <p class="detail-label">{ label }</p>
                <div class="detail-value">{ value }</div>
            </div>
        </div>
    }
}

fn render_text_tab(title: &'static str, text: Option<&str>, placeholder: &'static str) -> Html {
    html! {
        <div>
            <h3>{ title }</h3>
            if let Some(text) = text {
                <div class="prose"><p>{ text }</p></div>
            } else {
                <div class="placeholder"><p>{ placeholder }</p></div>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct RegistrationSectionProps {
    hackathon_id: HackathonId,
    panel: RegistrationPanel,
    expanded: bool,
    on_toggle: Callback<()>,
}

#[function_component(RegistrationSection)]
fn registration_section(
    RegistrationSectionProps {
        hackathon_id,
        panel,
        expanded,
        on_toggle,
    }: &RegistrationSectionProps,
) -> Html {
    let body = match panel {
        RegistrationPanel::Ended => html! {
            <div class="registration-notice ended">
                <h3>{"This hackathon has ended"}</h3>
                <p>{"Check out other ongoing and upcoming hackathons"}</p>
            </div>
        },
        RegistrationPanel::Closed => html! {
            <div class="registration-notice closed">
                <h3>{"Registration is closed"}</h3>
                <p>{"The registration deadline has passed"}</p>
            </div>
        },
        RegistrationPanel::Open => html! {
            <>
                <button class="register-button" onclick={on_toggle.reform(|_| ())}>
                    <Icon icon={Icon::Rocket} />{" Register for this Hackathon"}
                </button>
                if *expanded {
                    <div class="register-options">
                        <Link<Route> to={Route::CreateTeam { id: hackathon_id.clone() }} classes="create-team-button">
                            <Icon icon={Icon::Plus} />{" Create a New Team"}
                        </Link<Route>>
                        <Link<Route> to={Route::ViewTeams { id: hackathon_id.clone() }} classes="find-team-button">
                            <Icon icon={Icon::Search} />{" Find a Team to Join"}
                        </Link<Route>>
                    </div>
                }
            </>
        },
    };

    html! {
        <div class={classes!("registration-section", (*panel == RegistrationPanel::Closed).then_some("dimmed"))}>
            { body }
        </div>
    }
}

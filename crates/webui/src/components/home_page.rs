use crate::{
    api,
    app::Route,
    components::{loading::Loading, tag_chips::TagChips},
    model::hackathon::{Hackathon, HackathonFilter},
    util::time::format_date_range,
};
use chrono::{DateTime, Local, Utc};
use log::error;
use std::{ops::Deref, rc::Rc};
use strum::IntoEnumIterator;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

/// Tags shown on a card before collapsing.
const CARD_TAG_LIMIT: usize = 4;

#[function_component(HomePage)]
pub fn home_page() -> Html {
    // `None` until the first response arrives.
    let hackathons_state = use_state(|| None::<Rc<Vec<Hackathon>>>);
    let filter_state = use_state(HackathonFilter::default);

    {
        let hackathons_state = hackathons_state.clone();
        use_effect_with((), move |()| {
            spawn_local(async move {
                match api::list_hackathons().await {
                    Ok(hackathons) => hackathons_state.set(Some(Rc::new(hackathons))),
                    Err(err) => {
                        error!("Failed to fetch hackathons: {err:?}");
                        hackathons_state.set(Some(Rc::default()));
                    }
                }
            });
        });
    }

    let filter_buttons = HackathonFilter::iter()
        .map(|option| {
            let filter_state = filter_state.clone();
            let class = classes!(
                "filter-button",
                (option == *filter_state).then_some("selected")
            );
            html! {
                <button key={option.to_string()} {class} onclick={move |_| filter_state.set(option)}>
                    { option.to_string() }
                </button>
            }
        })
        .collect::<Html>();

    let now = Utc::now();
    let content = match hackathons_state.deref() {
        None => html! { <Loading message="Loading hackathons..." /> },
        Some(hackathons) => {
            let filtered = filter_state.apply(hackathons, now);
            if filtered.is_empty() {
                html! {
                    <div class="empty-state">
                        <p>{"No hackathons found in this category."}</p>
                    </div>
                }
            } else {
                html! {
                    <div class="hackathon-grid">
                        { for filtered.into_iter().map(|hackathon| hackathon_card(hackathon, now)) }
                    </div>
                }
            }
        }
    };

    html! {
        <div class="page home-page">
            <div class="hero">
                <h1>{"Find Your Next Hackathon"}</h1>
                <p>
                    {"Discover exciting coding competitions, meet talented developers, and launch your next big project with HackMate."}
                </p>
            </div>

            <div class="filters">
                { filter_buttons }
            </div>

            { content }
        </div>
    }
}

fn hackathon_card(hackathon: &Hackathon, now: DateTime<Utc>) -> Html {
    let status = hackathon.status(now);
    let dates = format_date_range(
        &hackathon.start_date.with_timezone(&Local),
        &hackathon.end_date.with_timezone(&Local),
    );

    html! {
        <Link<Route> to={Route::Hackathon { id: hackathon.id.clone() }} classes="hackathon-card">
            <div class="card-accent"></div>
            <div class="card-body">
                <div class="card-header">
                    <h2>{ &hackathon.title }</h2>
                    <span class={classes!("status-badge", status.css_class())}>
                        { status.label() }
                    </span>
                </div>

                <p class="description">{ &hackathon.description }</p>

                <div class="card-details">
                    <div>
                        <span class="detail-icon">{"📍"}</span>
                        { format!("{} • {}", hackathon.location, hackathon.mode) }
                    </div>
                    <div>
                        <span class="detail-icon">{"🗓️"}</span>
                        { dates }
                    </div>
                    if let Some(hint) = hackathon.registration_hint(now) {
                        <div class="registration-hint">
                            <span class="detail-icon">{"⏰"}</span>
                            { hint }
                        </div>
                    }
                </div>

                <TagChips tags={hackathon.tags.clone()} limit={CARD_TAG_LIMIT} />
            </div>
        </Link<Route>>
    }
}

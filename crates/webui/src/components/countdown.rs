use crate::util::time::Countdown;
use chrono::{DateTime, Utc};
use gloo::timers::callback::{Interval, Timeout};
use std::{cell::RefCell, rc::Rc};
use yew::prelude::*;
use yewprint::Icon;

/// Interval in milliseconds between countdown refreshes.
const TICK_MS: u32 = 1000;

#[derive(Properties, PartialEq)]
pub struct RegistrationCountdownProps {
    pub deadline: DateTime<Utc>,
    /// Fired once when the deadline passes while the page is open.
    pub on_expired: Callback<()>,
}

#[function_component(RegistrationCountdown)]
pub fn registration_countdown(
    RegistrationCountdownProps {
        deadline,
        on_expired,
    }: &RegistrationCountdownProps,
) -> Html {
    let countdown = use_state_eq(|| Countdown::until(*deadline, Utc::now()));

    {
        let countdown = countdown.clone();
        let on_expired = on_expired.clone();
        use_effect_with(*deadline, move |deadline| {
            let deadline = *deadline;
            let handle: Rc<RefCell<Option<Interval>>> = Rc::default();
            let tick = {
                let handle = handle.clone();
                move || {
                    let next = Countdown::until(deadline, Utc::now());
                    countdown.set(next);
                    if next.is_expired() {
                        // Cannot drop the interval from inside its own callback.
                        let handle = handle.clone();
                        Timeout::new(0, move || drop(handle.borrow_mut().take())).forget();
                        on_expired.emit(());
                    }
                }
            };
            tick();
            if !Countdown::until(deadline, Utc::now()).is_expired() {
                *handle.borrow_mut() = Some(Interval::new(TICK_MS, tick));
            }
            move || drop(handle.borrow_mut().take())
        });
    }

    let Countdown::Running {
        days,
        hours,
        minutes,
        seconds,
    } = *countdown
    else {
        return html! {};
    };

    html! {
        <div class="countdown">
            <h3><Icon icon={Icon::Time} />{" Registration Deadline Countdown"}</h3>
            <div class="countdown-grid">
                { countdown_cell(days, "Days") }
                { countdown_cell(hours, "Hours") }
                { countdown_cell(minutes, "Minutes") }
                { countdown_cell(seconds, "Seconds") }
            </div>
        </div>
    }
}

fn countdown_cell(value: i64, unit: &'static str) -> Html {
    html! {
        <div class="countdown-cell">
            <div class="countdown-value">{ value }</div>
            <div class="countdown-unit">{ unit }</div>
        </div>
    }
}

//! Toast notifications shared by every page.
//!
//! ```rust,ignore
//! let notifications = use_context::<NotificationContext>().expect("NotificationContext should be provided");
//! notifications.push(Notification::success("Profile updated successfully!"));
//! ```

use gloo::timers::callback::Timeout;
use std::cell::Cell;
use std::rc::Rc;
use yew::prelude::*;

/// Time in milliseconds before a toast starts fading out on its own.
const AUTO_DISMISS_MS: u32 = 5000;
/// Length of the fade-out animation in `style.css`.
const FADE_OUT_MS: u32 = 300;

type NotificationId = u32;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Error,
}

impl NotificationLevel {
    fn css_class(self) -> &'static str {
        match self {
            NotificationLevel::Info => "notification-info",
            NotificationLevel::Success => "notification-success",
            NotificationLevel::Error => "notification-error",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            NotificationLevel::Info => "ℹ",
            NotificationLevel::Success => "✓",
            NotificationLevel::Error => "✕",
        }
    }
}

/// A message waiting to be shown.
#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Info, message)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Error, message)
    }

    fn new(level: NotificationLevel, message: impl Into<String>) -> Self {
        Notification {
            level,
            message: message.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
struct Toast {
    id: NotificationId,
    notification: Notification,
    fading_out: bool,
}

enum ToastAction {
    Push(Toast),
    FadeOut(NotificationId),
    Remove(NotificationId),
}

#[derive(Clone, Default, PartialEq)]
struct Toasts(Vec<Toast>);

impl Reducible for Toasts {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut toasts = self.0.clone();
        match action {
            ToastAction::Push(toast) => toasts.push(toast),
            ToastAction::FadeOut(id) => {
                if let Some(toast) = toasts.iter_mut().find(|t| t.id == id) {
                    toast.fading_out = true;
                }
            }
            ToastAction::Remove(id) => toasts.retain(|t| t.id != id),
        }
        Rc::new(Toasts(toasts))
    }
}

/// Handle for pushing toasts, available through `use_context`.
#[derive(Clone)]
pub struct NotificationContext {
    toasts: UseReducerDispatcher<Toasts>,
    next_id: Rc<Cell<NotificationId>>,
}

impl PartialEq for NotificationContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.next_id, &other.next_id)
    }
}

impl NotificationContext {
    pub fn push(&self, notification: Notification) {
        let id = self.next_id.get();
        self.next_id.set(id.wrapping_add(1));
        self.toasts.dispatch(ToastAction::Push(Toast {
            id,
            notification,
            fading_out: false,
        }));
        let toasts = self.toasts.clone();
        Timeout::new(AUTO_DISMISS_MS, move || dismiss(&toasts, id)).forget();
    }
}

/// Starts the fade-out and removes the toast once the animation is over.
fn dismiss(toasts: &UseReducerDispatcher<Toasts>, id: NotificationId) {
    toasts.dispatch(ToastAction::FadeOut(id));
    let toasts = toasts.clone();
    Timeout::new(FADE_OUT_MS, move || toasts.dispatch(ToastAction::Remove(id))).forget();
}

#[derive(Properties, PartialEq)]
pub struct NotificationProviderProps {
    pub children: Children,
}

#[function_component(NotificationProvider)]
pub fn notification_provider(props: &NotificationProviderProps) -> Html {
    let toasts = use_reducer_eq(Toasts::default);
    let next_id = use_memo((), |()| Cell::new(0));

    let context = NotificationContext {
        toasts: toasts.dispatcher(),
        next_id,
    };

    let on_dismiss = {
        let dispatcher = toasts.dispatcher();
        Callback::from(move |id: NotificationId| dismiss(&dispatcher, id))
    };

    html! {
        <ContextProvider<NotificationContext> context={context}>
            { props.children.clone() }
            <NotificationToasts toasts={toasts.0.clone()} {on_dismiss} />
        </ContextProvider<NotificationContext>>
    }
}

#[derive(Properties, PartialEq)]
struct NotificationToastsProps {
    toasts: Vec<Toast>,
    on_dismiss: Callback<NotificationId>,
}

#[function_component(NotificationToasts)]
fn notification_toasts(props: &NotificationToastsProps) -> Html {
    if props.toasts.is_empty() {
        return html! {};
    }

    html! {
        <div class="notification-container">
            { for props.toasts.iter().map(|toast| {
                let id = toast.id;
                let on_dismiss = props.on_dismiss.clone();
                let onclick = Callback::from(move |_| on_dismiss.emit(id));
                let level = toast.notification.level;

                let class = classes!(
                    "notification-toast",
                    level.css_class(),
                    toast.fading_out.then_some("notification-fading-out")
                );

                html! {
                    <div {class} key={id}>
                        <span class="notification-icon">{ level.icon() }</span>
                        <span class="notification-message">{ &toast.notification.message }</span>
                        <button
                            class="notification-dismiss"
                            {onclick}
                            aria-label="Dismiss notification"
                        >
                            {"×"}
                        </button>
                    </div>
                }
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toast(id: NotificationId) -> Toast {
        Toast {
            id,
            notification: Notification::info(format!("toast {id}")),
            fading_out: false,
        }
    }

    #[test]
    fn toasts_fade_then_disappear() {
        let toasts = Rc::new(Toasts::default())
            .reduce(ToastAction::Push(toast(1)))
            .reduce(ToastAction::Push(toast(2)))
            .reduce(ToastAction::FadeOut(1));
        assert!(toasts.0[0].fading_out);
        assert!(!toasts.0[1].fading_out);

        let toasts = toasts.reduce(ToastAction::Remove(1));
        assert_eq!(vec![toast(2)], toasts.0);
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let toasts = Rc::new(Toasts::default())
            .reduce(ToastAction::Push(toast(1)))
            .reduce(ToastAction::FadeOut(7))
            .reduce(ToastAction::Remove(7));
        assert_eq!(vec![toast(1)], toasts.0);
    }
}

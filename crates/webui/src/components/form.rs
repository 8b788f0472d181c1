//! Pieces shared by the pages that submit forms.

use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

/// Outcome banner shown above a form after it was submitted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FormAlert {
    #[default]
    None,
    Success(String),
    Error(String),
}

impl ToHtml for FormAlert {
    fn to_html(&self) -> Html {
        match self {
            FormAlert::None => html! {},
            FormAlert::Success(msg) => {
                html! { <div class="form-alert success" role="status">{ msg }</div> }
            }
            FormAlert::Error(msg) => {
                html! { <div class="form-alert error" role="alert">{ msg }</div> }
            }
        }
    }
}

/// Current text of the `<input>` that fired `e`.
pub fn input_value(e: &InputEvent) -> String {
    let input: HtmlInputElement = e.target_unchecked_into();
    input.value()
}

pub fn textarea_value(e: &InputEvent) -> String {
    let textarea: HtmlTextAreaElement = e.target_unchecked_into();
    textarea.value()
}

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoadingProps {
    #[prop_or_default]
    pub message: Option<AttrValue>,
}

#[function_component(Loading)]
pub fn loading(LoadingProps { message }: &LoadingProps) -> Html {
    html! {
        <div class="loading">
            <div class="spinner"></div>
            if let Some(message) = message {
                <p>{ message }</p>
            }
        </div>
    }
}

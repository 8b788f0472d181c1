use crate::model::hackathon::TagPreview;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TagChipsProps {
    pub tags: Vec<String>,
    /// How many tags to show before collapsing the rest into "+N more".
    pub limit: usize,
}

#[function_component(TagChips)]
pub fn tag_chips(TagChipsProps { tags, limit }: &TagChipsProps) -> Html {
    let preview = TagPreview::new(tags, *limit);
    html! {
        <div class="tags">
            { for preview.shown.iter().map(|tag| html! {
                <span class="tag">{ format!("#{tag}") }</span>
            })}
            if preview.hidden > 0 {
                <span class="tag more">{ format!("+{} more", preview.hidden) }</span>
            }
        </div>
    }
}

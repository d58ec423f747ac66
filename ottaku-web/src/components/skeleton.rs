use crate::i18n::t;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub count: usize,
    #[prop_or(AttrValue::Static("card"))]
    pub variant: AttrValue,
}

/// Shimmering placeholders shown while a collection loads.
#[function_component(Skeleton)]
pub fn skeleton(p: &Props) -> Html {
    let cards = (0..p.count).map(|_| {
        html! { <div class={classes!("skeleton", format!("skeleton-{}", p.variant), "shimmer")} aria-hidden="true"></div> }
    });
    html! {
        <div class="skeleton-grid" role="status" aria-busy="true">
            <span class="sr-only">{ t("ui.loading") }</span>
            { for cards }
        </div>
    }
}

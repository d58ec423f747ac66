pub mod ganhadores;
pub mod gaming;
pub mod home;
pub mod novidades;
pub mod parceiros;
pub mod quiz;

use crate::components::empty_state::EmptyState;
use crate::components::skeleton::Skeleton;
use crate::i18n::t;
use yew::prelude::*;

pub(crate) fn page_header(title_key: &str, subtitle_key: &str) -> Html {
    html! {
        <header class="page-header">
            <h1>{ t(title_key) }</h1>
            <p class="page-subtitle">{ t(subtitle_key) }</p>
        </header>
    }
}

/// Items when there are any; otherwise placeholders while loading and the
/// empty message once the collection is in.
pub(crate) fn collection_body<T>(
    items: &[T],
    loading: bool,
    placeholders: usize,
    empty_key: &str,
    render: impl Fn(usize, &T) -> Html,
) -> Html {
    if !items.is_empty() {
        return html! { { for items.iter().enumerate().map(|(idx, item)| render(idx, item)) } };
    }
    if loading {
        html! { <Skeleton count={placeholders} /> }
    } else {
        html! { <EmptyState message={t(empty_key)} /> }
    }
}

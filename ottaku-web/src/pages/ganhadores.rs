use crate::components::category_bar::{CategoryBar, category_options};
use crate::components::empty_state::EmptyState;
use crate::components::search_box::SearchBox;
use crate::components::winner_item::WinnerItem;
use crate::i18n::{count_label, t};
use crate::pages::{collection_body, page_header};
use ottaku_core::{CategoryFilter, Winner};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub winners: Vec<Winner>,
    pub loading: bool,
    pub filter: CategoryFilter,
    #[prop_or_default]
    pub search: AttrValue,
    pub on_category: Callback<Option<String>>,
    pub on_search: Callback<String>,
}

#[function_component(GanhadoresPage)]
pub fn ganhadores_page(p: &Props) -> Html {
    let options = category_options(
        p.winners
            .iter()
            .map(|winner| (winner, winner.category_label.as_str())),
        &p.filter.category,
    );
    let visibility = p.filter.visibility(&p.winners);
    let shown = visibility.iter().filter(|v| **v).count();
    let rows = collection_body(&p.winners, p.loading, 4, "empty.winners", |idx, winner| {
        let visible = visibility.get(idx).copied().unwrap_or(true);
        html! { <WinnerItem key={winner.id.clone()} winner={winner.clone()} {visible} /> }
    });
    html! {
        <>
            { page_header("winners.title", "winners.subtitle") }
            <div class="filter-tools">
                <CategoryBar options={options} active={p.filter.category.clone()} on_select={p.on_category.clone()} />
                <SearchBox
                    id="winnersSearch"
                    value={p.search.clone()}
                    label={t("winners.search_label")}
                    placeholder={t("filter.search_placeholder")}
                    on_search={p.on_search.clone()}
                />
            </div>
            if !p.filter.is_unfiltered() {
                <p class="results-count" aria-live="polite">{ count_label("filter.results", shown) }</p>
            }
            <ul id="winnersList" class="winners-list">{ rows }</ul>
            if !p.winners.is_empty() && shown == 0 {
                <EmptyState message={t("empty.filtered")} />
            }
        </>
    }
}

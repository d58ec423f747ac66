use crate::components::category_bar::{CategoryBar, category_options};
use crate::components::empty_state::EmptyState;
use crate::components::news_card::NewsCard;
use crate::components::search_box::SearchBox;
use crate::i18n::{count_label, t};
use crate::pages::{collection_body, page_header};
use ottaku_core::{CategoryFilter, NewsItem};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub news: Vec<NewsItem>,
    pub loading: bool,
    pub filter: CategoryFilter,
    /// Search text as typed.
    #[prop_or_default]
    pub search: AttrValue,
    pub on_category: Callback<Option<String>>,
    pub on_search: Callback<String>,
}

#[function_component(NovidadesPage)]
pub fn novidades_page(p: &Props) -> Html {
    let options = category_options(
        p.news.iter().map(|item| (item, item.category_label.as_str())),
        &p.filter.category,
    );
    let visibility = p.filter.visibility(&p.news);
    let shown = visibility.iter().filter(|v| **v).count();
    let cards = collection_body(&p.news, p.loading, 6, "empty.news", |idx, item| {
        let visible = visibility.get(idx).copied().unwrap_or(true);
        html! { <NewsCard key={item.id.clone()} item={item.clone()} {visible} /> }
    });
    html! {
        <>
            { page_header("news.title", "news.subtitle") }
            <div class="filter-tools">
                <CategoryBar options={options} active={p.filter.category.clone()} on_select={p.on_category.clone()} />
                <SearchBox
                    id="searchInput"
                    value={p.search.clone()}
                    label={t("news.title")}
                    placeholder={t("filter.search_placeholder")}
                    on_search={p.on_search.clone()}
                />
            </div>
            if !p.filter.is_unfiltered() {
                <p class="results-count" aria-live="polite">{ count_label("filter.results", shown) }</p>
            }
            <div id="newsGrid" class="news-grid">{ cards }</div>
            if !p.news.is_empty() && shown == 0 {
                <EmptyState message={t("empty.filtered")} />
            }
        </>
    }
}

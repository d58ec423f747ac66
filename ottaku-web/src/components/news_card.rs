use crate::i18n::t;
use ottaku_core::NewsItem;
use ottaku_core::constants::NEWS_FALLBACK_IMAGE_ALT;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub item: NewsItem,
    #[prop_or(true)]
    pub visible: bool,
}

#[function_component(NewsCard)]
pub fn news_card(p: &Props) -> Html {
    let item = &p.item;
    let color = item.color.clone();
    let alt = if item.title.is_empty() {
        NEWS_FALLBACK_IMAGE_ALT.to_string()
    } else {
        item.title.clone()
    };
    html! {
        <div
            class={classes!("news-card", (!p.visible).then_some("hidden"))}
            data-category={item.category_key.clone()}
            data-title={item.title.to_lowercase()}
        >
            <a
                href={item.target_url.clone()}
                target="_blank"
                rel="noopener noreferrer"
                class="news-link"
                style={format!("border-color: {color}50; box-shadow: 0 10px 15px -3px {color}10")}
            >
                <div class="news-media">
                    <img src={item.image_url.clone()} {alt} loading="lazy" />
                    <span class="news-badge" style={format!("background-color: {color}")}>
                        { item.category_label.clone() }
                    </span>
                </div>
                <div class="news-body">
                    <p class="news-date">
                        <i class="far fa-calendar" aria-hidden="true"></i>
                        <span>{ item.date_label.clone() }</span>
                    </p>
                    <h3 style={format!("color: {color}")}>{ item.title.clone() }</h3>
                    <p class="news-excerpt">{ item.excerpt.clone() }</p>
                    <p class="news-cta" style={format!("color: {color}")}>
                        <i class={item.target.icon()} aria-hidden="true"></i>
                        <span>{ t(item.target.cta_key()) }</span>
                    </p>
                </div>
            </a>
        </div>
    }
}

use crate::components::news_card::NewsCard;
use crate::components::quiz_winner_card::QuizWinnerCard;
use crate::i18n::t;
use crate::pages::collection_body;
use crate::paths::with_base;
use ottaku_core::{Anchor, NewsItem, QuizWinner, SiteSettings};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub news: Vec<NewsItem>,
    pub news_loading: bool,
    pub quiz_winners: Vec<QuizWinner>,
    pub quiz_loading: bool,
    pub settings: SiteSettings,
    #[prop_or(3)]
    pub placeholders: usize,
}

#[function_component(HomePage)]
pub fn home_page(p: &Props) -> Html {
    let news = collection_body(&p.news, p.news_loading, p.placeholders, "empty.news", |_, item| {
        html! { <NewsCard item={item.clone()} /> }
    });
    let winners = collection_body(
        &p.quiz_winners,
        p.quiz_loading,
        p.placeholders,
        "empty.quiz",
        |_, winner| html! { <QuizWinnerCard winner={winner.clone()} /> },
    );
    html! {
        <>
            <div class="hero">
                <h1>{ t("home.hero_title") }</h1>
                <p>{ t("home.hero_subtitle") }</p>
                <div class="hero-actions">
                    <a href={with_base("/novidades")} class="btn-primary">{ t("home.see_news") }</a>
                    <a href={with_base("/quiz")} class="btn-secondary">{ t("home.join_quiz") }</a>
                </div>
            </div>
            <div class="home-block">
                <h2>{ t("home.latest_news") }</h2>
                <div id="newsContainer" class="news-grid">{ news }</div>
            </div>
            <div class="home-block">
                <h2>{ t("home.latest_winners") }</h2>
                <div id="quizWinnersHome" class="winners-list">{ winners }</div>
            </div>
            <div id={Anchor::Doadores.element_id()} class="donors">
                <h2>{ t("home.donors_title") }</h2>
                <p>{ t("home.donors_text") }</p>
                if let Some(url) = p.settings.donation_url.clone() {
                    <a href={url} target="_blank" rel="noopener noreferrer" class="btn-primary">
                        { t("home.donate") }
                    </a>
                }
            </div>
        </>
    }
}

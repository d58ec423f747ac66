use crate::components::quiz_winner_card::QuizWinnerCard;
use crate::i18n::t;
use crate::pages::{collection_body, page_header};
use ottaku_core::QuizWinner;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub winners: Vec<QuizWinner>,
    pub loading: bool,
    /// Community group where the quiz runs.
    #[prop_or_default]
    pub join_url: Option<String>,
}

#[function_component(QuizPage)]
pub fn quiz_page(p: &Props) -> Html {
    let winners = collection_body(&p.winners, p.loading, 3, "empty.quiz", |_, winner| {
        html! { <QuizWinnerCard key={winner.id.clone()} winner={winner.clone()} /> }
    });
    html! {
        <>
            { page_header("quiz.title", "quiz.subtitle") }
            if let Some(url) = p.join_url.clone() {
                <a href={url} target="_blank" rel="noopener noreferrer" class="btn-primary quiz-join">
                    <i class="fab fa-whatsapp" aria-hidden="true"></i>
                    { t("home.join_quiz") }
                </a>
            }
            <h2>{ t("quiz.winners") }</h2>
            <div id="quizWinners" class="winners-list">{ winners }</div>
        </>
    }
}

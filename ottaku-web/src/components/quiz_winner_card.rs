use crate::i18n::t;
use ottaku_core::QuizWinner;
use ottaku_core::constants::WINNER_FALLBACK_ALT;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub winner: QuizWinner,
}

#[function_component(QuizWinnerCard)]
pub fn quiz_winner_card(p: &Props) -> Html {
    let winner = &p.winner;
    let alt = if winner.name.is_empty() {
        WINNER_FALLBACK_ALT.to_string()
    } else {
        winner.name.clone()
    };
    html! {
        <div class="winner-card">
            <img src={winner.photo_url.clone()} {alt} loading="lazy" />
            <div class="winner-info">
                <span class="winner-name">{ winner.name.clone() }</span>
                <span class="winner-prize">{ winner.prize.clone() }</span>
            </div>
            <a href={winner.link.clone()} target="_blank" rel="noopener noreferrer" class="winner-btn">
                { t("quiz.view") }
            </a>
        </div>
    }
}

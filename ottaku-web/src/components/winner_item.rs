use ottaku_core::Winner;
use ottaku_core::constants::WINNER_FALLBACK_ALT;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub winner: Winner,
    #[prop_or(true)]
    pub visible: bool,
}

/// Row on the winners page; hidden rather than removed when filtered out.
#[function_component(WinnerItem)]
pub fn winner_item(p: &Props) -> Html {
    let winner = &p.winner;
    html! {
        <li
            class={classes!("winner-item", (!p.visible).then_some("hidden"))}
            data-category={winner.category_key.clone()}
        >
            <img src={winner.photo_url.clone()} alt={WINNER_FALLBACK_ALT} loading="lazy" />
            <div class="winner-info">
                <a href={winner.link.clone()} target="_blank" rel="noopener noreferrer" class="winner-name">
                    { winner.name.clone() }
                </a>
                <span class="winner-prize">{ winner.prize.clone() }</span>
            </div>
            if !winner.category_label.is_empty() {
                <span class="winner-category">{ winner.category_label.clone() }</span>
            }
            <span class="winner-date">{ winner.date_label.clone() }</span>
        </li>
    }
}

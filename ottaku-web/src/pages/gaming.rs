use crate::components::gaming_card::GamingCard;
use crate::pages::{collection_body, page_header};
use ottaku_core::GamingCard as Card;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub cards: Vec<Card>,
    pub loading: bool,
}

#[function_component(GamingPage)]
pub fn gaming_page(p: &Props) -> Html {
    let cards = collection_body(&p.cards, p.loading, 2, "empty.gaming", |_, card| {
        html! { <GamingCard key={card.id.clone()} card={card.clone()} /> }
    });
    html! {
        <>
            { page_header("gaming.title", "gaming.subtitle") }
            <div id="gamingCards" class="gaming-list">{ cards }</div>
        </>
    }
}

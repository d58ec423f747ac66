use ottaku_core::{GamingCard as Card, GamingEvent};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub card: Card,
}

fn event_row(event: &GamingEvent) -> Html {
    html! {
        <div class="gaming-event">
            <div>
                <p class="gaming-event-title">{ event.title.clone() }</p>
                <p class="gaming-event-sub">{ event.subtitle.clone() }</p>
            </div>
            <span class="gaming-event-value" style={format!("background-color: {}", event.color)}>
                { event.value.clone() }
            </span>
        </div>
    }
}

#[function_component(GamingCard)]
pub fn gaming_card(p: &Props) -> Html {
    let card = &p.card;
    let (start, end) = &card.gradient;
    html! {
        <article class="gaming-card">
            <header class="gaming-head">
                <div class="gaming-icon" style={format!("background: linear-gradient(135deg, {start}, {end})")}>
                    <i class={card.icon.clone()} aria-hidden="true"></i>
                </div>
                <div>
                    <h3>{ card.title.clone() }</h3>
                    <p>{ card.subtitle.clone() }</p>
                </div>
            </header>
            <div class="gaming-body">
                <div>
                    <h4><i class="fas fa-crown" aria-hidden="true"></i>{ card.guild_heading.clone() }</h4>
                    <p>{ card.description.clone() }</p>
                </div>
                <div class="gaming-events">
                    <h4>{ card.events_title.clone() }</h4>
                    { for card.events.iter().map(event_row) }
                </div>
            </div>
            <footer class="gaming-foot">
                <a
                    href={card.button_link.clone()}
                    target="_blank"
                    rel="noopener noreferrer"
                    class="gaming-button"
                    style={format!("background-color: {}", card.button_color)}
                >
                    <i class={card.button_icon.clone()} aria-hidden="true"></i>
                    { card.button_text.clone() }
                </a>
                if !card.bottom_text.is_empty() {
                    <p class="gaming-bottom">{ card.bottom_text.clone() }</p>
                }
            </footer>
        </article>
    }
}

use ottaku_core::Partner;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub partner: Partner,
}

#[function_component(PartnerCard)]
pub fn partner_card(p: &Props) -> Html {
    let partner = &p.partner;
    let color = partner.color.clone();
    html! {
        <div class="partner-card" style={format!("border-color: {color}50")}>
            <div class="partner-head">
                <div class="partner-icon" style={format!("background: {color}")}>
                    <i class={partner.icon.clone()} aria-hidden="true"></i>
                </div>
                <div>
                    <h3>{ partner.name.clone() }</h3>
                    if !partner.subname.is_empty() {
                        <p class="partner-subname" style={format!("color: {color}")}>{ partner.subname.clone() }</p>
                    }
                    <span class="partner-category" style={format!("background-color: {color}20; color: {color}")}>
                        { partner.category.clone() }
                    </span>
                </div>
            </div>
            <p class="partner-description">{ partner.description.clone() }</p>
            <div class="partner-foot">
                <span class="partner-subdesc">{ partner.sub_description.clone() }</span>
                <a
                    href={partner.link.clone()}
                    target="_blank"
                    rel="noopener noreferrer"
                    style={format!("color: {color}")}
                    aria-label={partner.name.clone()}
                >
                    <i class={partner.link_symbol.clone()} aria-hidden="true"></i>
                </a>
            </div>
        </div>
    }
}

use crate::components::partner_card::PartnerCard;
use crate::pages::{collection_body, page_header};
use ottaku_core::Partner;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub partners: Vec<Partner>,
    pub loading: bool,
}

#[function_component(ParceirosPage)]
pub fn parceiros_page(p: &Props) -> Html {
    let cards = collection_body(&p.partners, p.loading, 6, "empty.partners", |_, partner| {
        html! { <PartnerCard key={partner.id.clone()} partner={partner.clone()} /> }
    });
    html! {
        <>
            { page_header("partners.title", "partners.subtitle") }
            <div id="partnersGrid" class="partners-grid">{ cards }</div>
        </>
    }
}

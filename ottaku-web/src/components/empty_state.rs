use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub message: AttrValue,
}

#[function_component(EmptyState)]
pub fn empty_state(p: &Props) -> Html {
    html! {
        <div class="empty-state" role="status">
            <p>{ p.message.clone() }</p>
        </div>
    }
}

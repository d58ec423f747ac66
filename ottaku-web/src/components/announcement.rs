use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub text: AttrValue,
}

#[function_component(AnnouncementBar)]
pub fn announcement_bar(p: &Props) -> Html {
    html! {
        <div class="announcement-bar" role="note">
            <p>{ p.text.clone() }</p>
        </div>
    }
}

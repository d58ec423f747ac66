use crate::components::header::nav_links;
use crate::i18n::t;
use ottaku_core::Section;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub open: bool,
    pub current: Section,
    pub on_close: Callback<()>,
}

/// Mobile navigation drawer and the overlay behind it.
#[function_component(SlideMenu)]
pub fn slide_menu(p: &Props) -> Html {
    let close = {
        let cb = p.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <>
            <aside
                id="slideMenu"
                class={classes!("slide-menu", p.open.then_some("active"))}
                aria-hidden={(!p.open).to_string()}
            >
                <button type="button" class="menu-close" aria-label={t("nav.close_menu")} onclick={close.clone()}>
                    { "×" }
                </button>
                <nav aria-label={t("nav.main")}>
                    { nav_links(p.current) }
                </nav>
            </aside>
            <div
                id="menuOverlay"
                class={classes!("menu-overlay", p.open.then_some("active"))}
                onclick={close}
            ></div>
        </>
    }
}

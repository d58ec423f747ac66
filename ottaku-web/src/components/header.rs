use crate::app::routing::section_title;
use crate::i18n::t;
use crate::paths::with_base;
use ottaku_core::{Anchor, Section};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub current: Section,
    pub menu_open: bool,
    pub on_toggle_menu: Callback<()>,
}

/// One link per section plus the donors alias. Shared with the slide menu.
pub fn nav_links(current: Section) -> Html {
    let links = Section::ALL.into_iter().map(|section| {
        let active = section == current;
        html! {
            <li>
                <a
                    href={with_base(section.base_path())}
                    class={classes!("nav-link", active.then_some("active"))}
                    aria-current={active.then(|| AttrValue::from("page"))}
                    data-page={section.slug()}
                >
                    { section_title(section) }
                </a>
            </li>
        }
    });
    html! {
        <ul class="nav-links">
            { for links }
            <li>
                <a href={with_base(Anchor::Doadores.alias_path())} class="nav-link nav-cta">
                    { t("nav.apoie") }
                </a>
            </li>
        </ul>
    }
}

#[function_component(Header)]
pub fn header(p: &Props) -> Html {
    let on_toggle = {
        let cb = p.on_toggle_menu.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let toggle_label = if p.menu_open {
        t("nav.close_menu")
    } else {
        t("nav.open_menu")
    };
    html! {
        <header role="banner" class="site-header">
            <a href="#main" class="sr-only">{ t("ui.skip_to_content") }</a>
            <div class="header-content">
                <a href={with_base("/")} class="logo" aria-label="Ottaku Brasil">
                    <span class="logo-mark">{ "OB" }</span>
                    <span class="logo-text">{ "Ottaku Brasil" }</span>
                </a>
                <nav aria-label={t("nav.main")} class="header-nav">
                    { nav_links(p.current) }
                </nav>
                <button
                    id="hamburger"
                    type="button"
                    class={classes!("hamburger", p.menu_open.then_some("active"))}
                    aria-controls="slideMenu"
                    aria-expanded={p.menu_open.to_string()}
                    aria-label={toggle_label}
                    onclick={on_toggle}
                >
                    <span></span><span></span><span></span>
                </button>
            </div>
        </header>
    }
}

//! `window` functions kept for inline `onclick` handlers in published markup.

use ottaku_core::Section;

/// Names installed on `window`.
pub const GLOBALS: [&str; 6] = [
    "showPage",
    "goHome",
    "toggleMenu",
    "closeMenu",
    "filterByCategory",
    "filterWinners",
];

/// Section targeted by a category filter global.
#[must_use]
pub fn filter_target(global: &str) -> Option<Section> {
    match global {
        "filterByCategory" => Some(Section::Novidades),
        "filterWinners" => Some(Section::Ganhadores),
        _ => None,
    }
}

/// Category argument of a filter global; non-strings mean "all".
#[must_use]
pub fn category_arg(raw: Option<String>) -> Option<String> {
    raw.filter(|s| !s.trim().is_empty())
}

#[cfg(target_arch = "wasm32")]
pub use bindings::{LegacyGlobals, install};

#[cfg(target_arch = "wasm32")]
mod bindings {
    use wasm_bindgen::prelude::*;

    use super::{GLOBALS, category_arg, filter_target};
    use crate::app::routing::Navigation;
    use crate::dom;

    /// Installed globals; removed from `window` when dropped.
    pub struct LegacyGlobals {
        _with_arg: Vec<Closure<dyn FnMut(JsValue)>>,
        _no_arg: Vec<Closure<dyn FnMut()>>,
    }

    impl Drop for LegacyGlobals {
        fn drop(&mut self) {
            let Some(win) = dom::window() else {
                return;
            };
            for name in GLOBALS {
                let _ = js_sys::Reflect::delete_property(&win, &JsValue::from_str(name));
            }
        }
    }

    fn set_global(win: &web_sys::Window, name: &str, func: &JsValue) {
        if js_sys::Reflect::set(win, &JsValue::from_str(name), func).is_err() {
            log::warn!("could not install window.{name}");
        }
    }

    pub fn install(nav: &Navigation) -> Option<LegacyGlobals> {
        let win = dom::window()?;

        let show_nav = nav.clone();
        let show_page = Closure::wrap(Box::new(move |value: JsValue| {
            show_nav.show_page(&value.as_string().unwrap_or_default());
        }) as Box<dyn FnMut(JsValue)>);

        let filter_closure = |global: &'static str| {
            let filter_nav = nav.clone();
            let section = filter_target(global);
            Closure::wrap(Box::new(move |value: JsValue| {
                if let Some(section) = section {
                    filter_nav.filter_section(section, category_arg(value.as_string()).as_deref());
                }
            }) as Box<dyn FnMut(JsValue)>)
        };
        let filter_news = filter_closure("filterByCategory");
        let filter_winners = filter_closure("filterWinners");

        let home_nav = nav.clone();
        let go_home = Closure::wrap(Box::new(move || {
            home_nav.navigate("/");
        }) as Box<dyn FnMut()>);
        let toggle_nav = nav.clone();
        let toggle_menu = Closure::wrap(Box::new(move || {
            toggle_nav.toggle_menu();
        }) as Box<dyn FnMut()>);
        let close_nav = nav.clone();
        let close_menu = Closure::wrap(Box::new(move || {
            close_nav.close_menu();
        }) as Box<dyn FnMut()>);

        set_global(&win, "showPage", show_page.as_ref());
        set_global(&win, "filterByCategory", filter_news.as_ref());
        set_global(&win, "filterWinners", filter_winners.as_ref());
        set_global(&win, "goHome", go_home.as_ref());
        set_global(&win, "toggleMenu", toggle_menu.as_ref());
        set_global(&win, "closeMenu", close_menu.as_ref());

        Some(LegacyGlobals {
            _with_arg: vec![show_page, filter_news, filter_winners],
            _no_arg: vec![go_home, toggle_menu, close_menu],
        })
    }
}

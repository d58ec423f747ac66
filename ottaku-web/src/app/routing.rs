use std::cell::RefCell;
use std::rc::Rc;

use ottaku_core::{
    Category, FilterChange, LinkIntent, NavigateOptions, RouteDescriptor, RouteState, Router,
    ScrollTarget, Section, Transition, classify_link,
};
use yew::prelude::*;

use crate::app::loading::spawn_loads;
use crate::app::state::{AppState, ContentState, MenuAction, MenuState};
use crate::history::WebHistory;

pub type SharedRouter = Rc<RefCell<Option<Router<WebHistory>>>>;

/// Drives the router and mirrors each transition into component state,
/// the document head and the content loads.
#[derive(Clone)]
pub struct Navigation {
    router: SharedRouter,
    route: UseStateHandle<RouteDescriptor>,
    content: UseReducerDispatcher<ContentState>,
    menu: UseReducerDispatcher<MenuState>,
}

#[hook]
pub fn use_navigation(state: &AppState) -> Navigation {
    let router = use_mut_ref(|| None::<Router<WebHistory>>);
    Navigation {
        router,
        route: state.route.clone(),
        content: state.content.dispatcher(),
        menu: state.menu.dispatcher(),
    }
}

impl Navigation {
    /// Resolve the startup URL and kick off its loads.
    pub fn start(&self) {
        let table = crate::config::site_config().route_table();
        let (router, transition) = Router::start(WebHistory::new(), table);
        *self.router.borrow_mut() = Some(router);
        self.apply(transition);
    }

    // The borrow ends before the result is applied; applying may re-enter.
    fn drive<T>(&self, step: impl FnOnce(&mut Router<WebHistory>) -> T) -> Option<T> {
        let mut slot = self.router.borrow_mut();
        slot.as_mut().map(step)
    }

    pub fn navigate(&self, target: &str) {
        if let Some(transition) = self.drive(|router| router.navigate(target, NavigateOptions::PUSH))
        {
            self.apply(transition);
        }
    }

    pub fn pop_state(&self) {
        if let Some(transition) = self.drive(|router| router.on_pop_state()) {
            self.apply(transition);
        }
    }

    pub fn show_page(&self, page_id: &str) {
        if let Some(transition) = self.drive(|router| router.show_page(page_id)) {
            self.apply(transition);
        }
    }

    pub fn select_category(&self, raw: Option<&str>) {
        if let Some(change) = self.drive(|router| router.select_category(raw)).flatten() {
            self.apply_filter(change);
        }
    }

    pub fn set_search(&self, term: &str) {
        if let Some(change) = self.drive(|router| router.set_search(term)).flatten() {
            self.apply_filter(change);
        }
    }

    /// Filter `section` by category, switching to it first when another
    /// section is showing.
    pub fn filter_section(&self, section: Section, raw: Option<&str>) {
        let current = self.drive(|router| router.route().section());
        if current == Some(section) {
            self.select_category(raw);
            return;
        }
        let target = RouteDescriptor::from_state(RouteState {
            section,
            category: Category::parse(raw),
            search: String::new(),
        });
        self.navigate(&target.to_url());
    }

    pub fn toggle_menu(&self) {
        self.menu.dispatch(MenuAction::Toggle);
    }

    pub fn close_menu(&self) {
        self.menu.dispatch(MenuAction::Close);
    }

    /// Route a clicked `href`. Returns `true` when the click was handled
    /// and the browser default should be suppressed.
    pub fn follow_link(&self, href: &str) -> bool {
        let current = self
            .drive(|router| router.current_url())
            .unwrap_or_else(|| "/".to_string());
        match classify_link(&crate::paths::strip_base(href), &current) {
            LinkIntent::Navigate(url) => {
                self.navigate(&url);
                true
            }
            LinkIntent::ScrollTo(id) => {
                self.close_menu();
                crate::dom::scroll_to_element(&id)
            }
            LinkIntent::External => false,
        }
    }

    fn apply(&self, transition: Transition) {
        let Transition {
            route,
            tickets,
            meta,
            close_overlay,
            scroll,
            ..
        } = transition;
        let section = route.section();
        self.route.set(route);
        if close_overlay {
            self.close_menu();
        }
        crate::meta::apply(&meta);
        crate::a11y::announce(&crate::a11y::page_announcement(&section_title(section)));
        match scroll {
            ScrollTarget::Top => crate::dom::scroll_to_top(),
            ScrollTarget::Anchor(id) => scroll_after_render(id),
        }
        spawn_loads(tickets, self.content.clone());
    }

    fn apply_filter(&self, change: FilterChange) {
        log::debug!("filter now {} ({:?})", change.url, change.history);
        self.route.set(change.route);
        crate::meta::apply(&change.meta);
    }
}

/// Localized name of a section, as shown in the navigation.
#[must_use]
pub fn section_title(section: Section) -> String {
    crate::i18n::t(&format!("nav.{}", section.slug()))
}

#[cfg(target_arch = "wasm32")]
fn scroll_after_render(id: &'static str) {
    // The target section may only exist after the next render.
    wasm_bindgen_futures::spawn_local(async move {
        if crate::dom::sleep_ms(300).await.is_ok() && !crate::dom::scroll_to_element(id) {
            log::warn!("scroll target #{id} not found");
        }
    });
}

#[cfg(not(target_arch = "wasm32"))]
fn scroll_after_render(id: &'static str) {
    log::debug!("no document to scroll to #{id}");
}

#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_browser_events(nav: &Navigation) {
    let nav = nav.clone();
    use_effect_with((), move |()| {
        nav.start();
        let listeners = listeners::attach(&nav);
        let globals = crate::legacy::install(&nav);
        crate::a11y::inject_focus_styles();
        move || {
            drop(globals);
            drop(listeners);
        }
    });
}

#[cfg(not(target_arch = "wasm32"))]
#[hook]
pub fn use_browser_events(nav: &Navigation) {
    let _ = nav;
}

#[cfg(target_arch = "wasm32")]
mod listeners {
    use wasm_bindgen::JsCast;
    use web_sys::{Event, KeyboardEvent, MouseEvent};

    use super::Navigation;
    use crate::dom::{self, Listener};

    pub fn attach(nav: &Navigation) -> Vec<Listener> {
        let Some(win) = dom::window() else {
            return Vec::new();
        };
        let Some(doc) = win.document() else {
            return Vec::new();
        };
        let mut attached = Vec::new();

        let pop_nav = nav.clone();
        attached.extend(Listener::new(&win, "popstate", move |_| pop_nav.pop_state()));

        let click_nav = nav.clone();
        attached.extend(Listener::new(&doc, "click", move |event| {
            on_click(&click_nav, &event);
        }));

        let key_nav = nav.clone();
        attached.extend(Listener::new(&doc, "keydown", move |event: Event| {
            if event
                .dyn_ref::<KeyboardEvent>()
                .is_some_and(|key| key.key() == "Escape")
            {
                key_nav.close_menu();
            }
        }));
        attached
    }

    fn on_click(nav: &Navigation, event: &Event) {
        let Some(mouse) = event.dyn_ref::<MouseEvent>() else {
            return;
        };
        if mouse.default_prevented()
            || mouse.button() != 0
            || mouse.ctrl_key()
            || mouse.meta_key()
            || mouse.shift_key()
            || mouse.alt_key()
        {
            return;
        }
        let Some(link) = dom::closest_link(event.target()) else {
            return;
        };
        if link.get_attribute("target").is_some_and(|t| t == "_blank")
            || link.has_attribute("download")
        {
            return;
        }
        let Some(href) = link.get_attribute("href") else {
            return;
        };
        if nav.follow_link(&href) {
            event.prevent_default();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::section_title;
    use ottaku_core::Section;

    #[test]
    fn section_titles_are_localized() {
        crate::i18n::set_lang("pt");
        assert_eq!(section_title(Section::Ganhadores), "Ganhadores");
        crate::i18n::set_lang("en");
        assert_eq!(section_title(Section::Parceiros), "Partners");
        crate::i18n::set_lang("pt");
    }
}

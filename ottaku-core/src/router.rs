//! The router: sole owner of the route state and sole writer of history.
//!
//! Every entry point (link click, history pop, programmatic call) ends in the
//! same activation step, which yields a [`Transition`] describing what the
//! shell has to do next: which section to show, what to fetch, which title to
//! set and where to scroll.

use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::collection::FetchTicket;
use crate::filter::CategoryFilter;
use crate::meta::PageMeta;
use crate::route::{RouteDescriptor, RouteState, RouteTable, match_route, resolve_route};
use crate::section::{Anchor, Section};

/// Session history the router writes to.
///
/// URLs are site-relative (`/novidades/anime?q=x`); adapters deal with any
/// deployment prefix.
pub trait History {
    /// Path, query and fragment of the current entry.
    fn current_url(&self) -> String;
    fn push(&mut self, url: &str);
    fn replace(&mut self, url: &str);
}

/// In-memory history stack with back/forward, used by tests and the tester.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryHistory {
    entries: Vec<String>,
    index: usize,
}

impl MemoryHistory {
    #[must_use]
    pub fn new(initial: &str) -> Self {
        Self {
            entries: vec![initial.to_string()],
            index: 0,
        }
    }

    /// Step back one entry. Returns `false` at the start of the stack.
    pub fn back(&mut self) -> bool {
        if self.index == 0 {
            return false;
        }
        self.index -= 1;
        true
    }

    pub fn forward(&mut self) -> bool {
        if self.index + 1 >= self.entries.len() {
            return false;
        }
        self.index += 1;
        true
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new("/")
    }
}

impl History for MemoryHistory {
    fn current_url(&self) -> String {
        self.entries[self.index].clone()
    }

    fn push(&mut self, url: &str) {
        self.entries.truncate(self.index + 1);
        self.entries.push(url.to_string());
        self.index = self.entries.len() - 1;
    }

    fn replace(&mut self, url: &str) {
        self.entries[self.index] = url.to_string();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NavigateOptions {
    pub push_history: bool,
}

impl NavigateOptions {
    pub const PUSH: Self = Self { push_history: true };
    pub const REPLACE: Self = Self {
        push_history: false,
    };
}

/// What happened to the history stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HistoryAction {
    Pushed,
    Replaced,
    Unchanged,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ScrollTarget {
    Top,
    Anchor(&'static str),
}

/// Result of activating a route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transition {
    pub route: RouteDescriptor,
    /// `None` for the startup activation.
    pub previous: Option<Section>,
    pub generation: u64,
    /// Loader requests for the activated section, stamped with `generation`.
    pub tickets: Vec<FetchTicket>,
    pub meta: PageMeta,
    pub close_overlay: bool,
    pub scroll: ScrollTarget,
    pub history: HistoryAction,
}

impl Transition {
    #[must_use]
    pub fn section(&self) -> Section {
        self.route.section()
    }

    #[must_use]
    pub fn filter(&self) -> CategoryFilter {
        CategoryFilter::from_state(&self.route.state)
    }
}

/// A filter change on the current section. Never triggers a fetch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterChange {
    pub route: RouteDescriptor,
    pub filter: CategoryFilter,
    pub url: String,
    pub meta: PageMeta,
    pub history: HistoryAction,
}

/// What a click on an `<a href>` should do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LinkIntent {
    /// Route internally to this canonical URL.
    Navigate(String),
    /// Scroll to an element on the current page.
    ScrollTo(String),
    /// Leave the click to the browser.
    External,
}

#[derive(Debug)]
pub struct Router<H: History> {
    history: H,
    route: RouteDescriptor,
    table: RouteTable,
    generation: u64,
}

impl<H: History> Router<H> {
    /// Derive the initial route from the current URL.
    ///
    /// A non-canonical startup URL is replaced, never pushed. The returned
    /// transition also carries the startup-only loads.
    pub fn start(history: H, table: RouteTable) -> (Self, Transition) {
        let mut router = Self {
            history,
            route: RouteDescriptor::home(),
            table,
            generation: 0,
        };
        let current = router.history.current_url();
        let route = router.lookup(&current);
        let action = router.sync_url(&route.to_url(), NavigateOptions::REPLACE);
        let mut transition = router.activate(route, action);
        transition.previous = None;
        let startup: Vec<FetchTicket> = router
            .table
            .startup_loads()
            .into_iter()
            .map(|request| FetchTicket::new(request, transition.generation))
            .collect();
        transition.tickets.splice(0..0, startup);
        log::info!("router started on {}", transition.route.to_url());
        (router, transition)
    }

    /// Route to `target`. Unknown targets resolve to the home section.
    pub fn navigate(&mut self, target: &str, options: NavigateOptions) -> Transition {
        let route = self.lookup(target);
        let action = self.sync_url(&route.to_url(), options);
        self.activate(route, action)
    }

    /// Handle a back/forward step: re-derive everything from the current URL.
    pub fn on_pop_state(&mut self) -> Transition {
        let current = self.history.current_url();
        let route = self.lookup(&current);
        let action = self.sync_url(&route.to_url(), NavigateOptions::REPLACE);
        self.activate(route, action)
    }

    /// Show a section by its element id, as the old `showPage(id)` calls did.
    pub fn show_page(&mut self, page_id: &str) -> Transition {
        let token = page_id.trim().trim_start_matches('#');
        let path = if token.eq_ignore_ascii_case(Anchor::Doadores.element_id()) {
            Anchor::Doadores.alias_path()
        } else {
            Section::from_slug(token).map_or(Section::Home.base_path(), Section::base_path)
        };
        self.navigate(path, NavigateOptions::PUSH)
    }

    /// Commit a category choice. Pushes history; `None` on sections without filters.
    pub fn select_category(&mut self, raw: Option<&str>) -> Option<FilterChange> {
        let state = RouteState {
            category: Category::parse(raw),
            ..self.route.state.clone()
        };
        self.change_filter(state, NavigateOptions::PUSH)
    }

    /// Update the search term while typing. Replaces history.
    pub fn set_search(&mut self, term: &str) -> Option<FilterChange> {
        let state = RouteState {
            search: term.to_string(),
            ..self.route.state.clone()
        };
        self.change_filter(state, NavigateOptions::REPLACE)
    }

    #[must_use]
    pub const fn route(&self) -> &RouteDescriptor {
        &self.route
    }

    #[must_use]
    pub const fn state(&self) -> &RouteState {
        &self.route.state
    }

    #[must_use]
    pub fn filter(&self) -> CategoryFilter {
        CategoryFilter::from_state(&self.route.state)
    }

    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn current_url(&self) -> String {
        self.history.current_url()
    }

    #[must_use]
    pub const fn history(&self) -> &H {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut H {
        &mut self.history
    }

    fn lookup(&self, url: &str) -> RouteDescriptor {
        match_route(url).unwrap_or_else(|| {
            log::warn!("route not found: {url}, showing home");
            RouteDescriptor::home()
        })
    }

    fn sync_url(&mut self, url: &str, options: NavigateOptions) -> HistoryAction {
        if self.history.current_url() == url {
            return HistoryAction::Unchanged;
        }
        if options.push_history {
            self.history.push(url);
            HistoryAction::Pushed
        } else {
            self.history.replace(url);
            HistoryAction::Replaced
        }
    }

    fn activate(&mut self, route: RouteDescriptor, history: HistoryAction) -> Transition {
        self.generation += 1;
        let previous = std::mem::replace(&mut self.route, route.clone()).section();
        let tickets = self
            .table
            .loads(route.section())
            .into_iter()
            .map(|request| FetchTicket::new(request, self.generation))
            .collect();
        let scroll = route
            .anchor
            .map_or(ScrollTarget::Top, |anchor| ScrollTarget::Anchor(anchor.element_id()));
        log::debug!(
            "activated {} (generation {}, {history:?})",
            route.section(),
            self.generation
        );
        Transition {
            meta: PageMeta::for_route(&route),
            route,
            previous: Some(previous),
            generation: self.generation,
            tickets,
            close_overlay: true,
            scroll,
            history,
        }
    }

    fn change_filter(
        &mut self,
        state: RouteState,
        options: NavigateOptions,
    ) -> Option<FilterChange> {
        if !self.route.section().is_filterable() {
            return None;
        }
        let route = RouteDescriptor::from_state(state);
        let url = route.to_url();
        let history = self.sync_url(&url, options);
        self.route = route.clone();
        Some(FilterChange {
            filter: CategoryFilter::from_state(&route.state),
            meta: PageMeta::for_route(&route),
            route,
            url,
            history,
        })
    }
}

/// Decide how a click on a link with this `href` is handled.
///
/// `current_path` is the path of the page the link sits on.
#[must_use]
pub fn classify_link(href: &str, current_path: &str) -> LinkIntent {
    let href = href.trim();
    if href.is_empty() || href.starts_with("//") || href.contains(':') {
        return LinkIntent::External;
    }
    if let Some(fragment) = href.strip_prefix('#') {
        return classify_fragment(fragment, current_path);
    }
    if !href.starts_with('/') {
        return LinkIntent::External;
    }
    match_route(href).map_or(LinkIntent::External, |route| {
        LinkIntent::Navigate(route.to_url())
    })
}

fn classify_fragment(fragment: &str, current_path: &str) -> LinkIntent {
    let token = fragment.trim().trim_start_matches('/');
    if token.is_empty() {
        return LinkIntent::External;
    }
    if let Some(section) = Section::from_slug(token) {
        return LinkIntent::Navigate(section.base_path().to_string());
    }
    let on_home = resolve_route(current_path).section() == Section::Home;
    if on_home {
        return LinkIntent::ScrollTo(token.to_string());
    }
    if token.eq_ignore_ascii_case(Anchor::Doadores.element_id()) {
        return LinkIntent::Navigate(Anchor::Doadores.alias_path().to_string());
    }
    LinkIntent::External
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::{ContentKind, LoadRequest};

    fn router_at(url: &str) -> (Router<MemoryHistory>, Transition) {
        Router::start(MemoryHistory::new(url), RouteTable::default())
    }

    #[test]
    fn start_replaces_non_canonical_url() {
        let (router, transition) = router_at("/Novidades?cat=Anime");
        assert_eq!(router.current_url(), "/novidades/anime");
        assert_eq!(router.history().len(), 1);
        assert_eq!(transition.history, HistoryAction::Replaced);
        assert_eq!(transition.previous, None);
        let kinds: Vec<_> = transition.tickets.iter().map(FetchTicket::kind).collect();
        assert_eq!(kinds, vec![ContentKind::Settings, ContentKind::News]);
    }

    #[test]
    fn navigate_pushes_only_when_url_changes() {
        let (mut router, _) = router_at("/");
        let t = router.navigate("/gaming", NavigateOptions::PUSH);
        assert_eq!(t.history, HistoryAction::Pushed);
        assert_eq!(t.previous, Some(Section::Home));
        let again = router.navigate("/gaming/", NavigateOptions::PUSH);
        assert_eq!(again.history, HistoryAction::Unchanged);
        assert_eq!(router.history().len(), 2);

        let replaced = router.navigate("/quiz", NavigateOptions::REPLACE);
        assert_eq!(replaced.history, HistoryAction::Replaced);
        assert_eq!(router.history().entries(), ["/", "/quiz"]);
    }

    #[test]
    fn every_activation_gets_a_fresh_generation() {
        let (mut router, first) = router_at("/");
        let second = router.navigate("/novidades", NavigateOptions::PUSH);
        assert!(second.generation > first.generation);
        assert!(
            second
                .tickets
                .iter()
                .all(|t| t.generation == second.generation)
        );
        assert_eq!(
            second.tickets[0].request,
            LoadRequest::all(ContentKind::News)
        );
    }

    #[test]
    fn unknown_route_goes_home() {
        let (mut router, _) = router_at("/gaming");
        let t = router.navigate("/nao-existe", NavigateOptions::PUSH);
        assert_eq!(t.section(), Section::Home);
        assert_eq!(router.current_url(), "/");
        assert!(t.close_overlay);
        assert_eq!(t.scroll, ScrollTarget::Top);
    }

    #[test]
    fn apoie_scrolls_to_donors() {
        let (mut router, _) = router_at("/");
        let t = router.navigate("/apoie", NavigateOptions::PUSH);
        assert_eq!(t.section(), Section::Home);
        assert_eq!(t.scroll, ScrollTarget::Anchor("doadores"));
        assert_eq!(t.meta.title, "Apoie | Ottaku Brasil");
    }

    #[test]
    fn pop_state_never_pushes() {
        let (mut router, _) = router_at("/");
        router.navigate("/novidades", NavigateOptions::PUSH);
        router.navigate("/novidades/anime", NavigateOptions::PUSH);
        assert!(router.history_mut().back());
        let t = router.on_pop_state();
        assert_eq!(t.history, HistoryAction::Unchanged);
        assert!(t.route.category().is_all());
        assert_eq!(router.history().len(), 3);
    }

    #[test]
    fn show_page_maps_ids_to_paths() {
        let (mut router, _) = router_at("/");
        assert_eq!(router.show_page("parceiros").section(), Section::Parceiros);
        assert_eq!(router.current_url(), "/parceiros");
        assert_eq!(
            router.show_page("doadores").scroll,
            ScrollTarget::Anchor("doadores")
        );
        assert_eq!(router.show_page("???").section(), Section::Home);
    }

    #[test]
    fn category_pushes_and_search_replaces() {
        let (mut router, _) = router_at("/novidades");
        let change = router.select_category(Some("Anime")).unwrap();
        assert_eq!(change.url, "/novidades/anime");
        assert_eq!(change.history, HistoryAction::Pushed);

        for typed in ["n", "na", "nar"] {
            let change = router.set_search(typed).unwrap();
            assert_eq!(change.history, HistoryAction::Replaced);
        }
        assert_eq!(router.current_url(), "/novidades/anime?q=nar");
        assert_eq!(router.history().len(), 2);
        assert_eq!(router.filter().search(), "nar");

        let cleared = router.select_category(Some("todos")).unwrap();
        assert_eq!(cleared.url, "/novidades?q=nar");
    }

    #[test]
    fn filters_are_ignored_outside_filterable_sections() {
        let (mut router, _) = router_at("/gaming");
        assert!(router.select_category(Some("anime")).is_none());
        assert!(router.set_search("x").is_none());
        assert_eq!(router.current_url(), "/gaming");
    }

    #[test]
    fn link_classification() {
        assert_eq!(
            classify_link("/novidades/Anime", "/"),
            LinkIntent::Navigate("/novidades/anime".to_string())
        );
        assert_eq!(
            classify_link("#novidades", "/quiz"),
            LinkIntent::Navigate("/novidades".to_string())
        );
        assert_eq!(
            classify_link("/#gaming", "/"),
            LinkIntent::Navigate("/gaming".to_string())
        );
        assert_eq!(
            classify_link("#doadores", "/"),
            LinkIntent::ScrollTo("doadores".to_string())
        );
        assert_eq!(
            classify_link("#doadores", "/gaming"),
            LinkIntent::Navigate("/apoie".to_string())
        );
        assert_eq!(classify_link("#topo", "/quiz"), LinkIntent::External);
        assert_eq!(
            classify_link("https://instagram.com/ottaku", "/"),
            LinkIntent::External
        );
        assert_eq!(classify_link("mailto:a@b.c", "/"), LinkIntent::External);
        assert_eq!(classify_link("/arquivo.pdf", "/"), LinkIntent::External);
        assert_eq!(classify_link("#", "/"), LinkIntent::External);
    }
}

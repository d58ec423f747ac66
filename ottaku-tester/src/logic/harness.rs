//! Headless site: the router over an in-memory history feeding a content
//! store, wired the same way the browser shell wires them.

use futures::executor::block_on;
use ottaku_core::{
    ContentStore, FetchTicket, FilterChange, MemoryHistory, NavigateOptions, NewsItem, PageMeta,
    RouteTable, Router, Section, Transition, Winner, load_concurrently,
};

use super::fixtures::FixtureSource;

pub struct SiteHarness {
    router: Router<MemoryHistory>,
    store: ContentStore,
    source: FixtureSource,
    meta: PageMeta,
    transitions: usize,
}

impl SiteHarness {
    /// Boot the site at `url` and settle its startup loads.
    pub fn open(url: &str, source: FixtureSource) -> Self {
        let (router, transition) = Router::start(MemoryHistory::new(url), RouteTable::default());
        let mut harness = Self {
            router,
            store: ContentStore::new(),
            source,
            meta: transition.meta.clone(),
            transitions: 0,
        };
        harness.settle(transition);
        harness
    }

    /// Follow a link to `target`.
    pub fn navigate(&mut self, target: &str) -> Transition {
        let transition = self.router.navigate(target, NavigateOptions::PUSH);
        self.settle(transition.clone());
        transition
    }

    pub fn show_page(&mut self, page_id: &str) -> Transition {
        let transition = self.router.show_page(page_id);
        self.settle(transition.clone());
        transition
    }

    /// Browser back button. `None` at the start of the history stack.
    pub fn back(&mut self) -> Option<Transition> {
        if !self.router.history_mut().back() {
            return None;
        }
        let transition = self.router.on_pop_state();
        self.settle(transition.clone());
        Some(transition)
    }

    pub fn forward(&mut self) -> Option<Transition> {
        if !self.router.history_mut().forward() {
            return None;
        }
        let transition = self.router.on_pop_state();
        self.settle(transition.clone());
        Some(transition)
    }

    pub fn select_category(&mut self, raw: Option<&str>) -> Option<FilterChange> {
        let change = self.router.select_category(raw)?;
        self.meta = change.meta.clone();
        Some(change)
    }

    pub fn set_search(&mut self, term: &str) -> Option<FilterChange> {
        let change = self.router.set_search(term)?;
        self.meta = change.meta.clone();
        Some(change)
    }

    /// Route without loading anything, leaving the tickets to the caller.
    pub fn navigate_deferred(&mut self, target: &str) -> Transition {
        let transition = self.router.navigate(target, NavigateOptions::PUSH);
        self.meta = transition.meta.clone();
        for ticket in &transition.tickets {
            self.store.begin(*ticket);
        }
        transition
    }

    /// Deliver fetched records for a ticket, as a late network response would.
    pub fn deliver(&mut self, ticket: FetchTicket) -> bool {
        let records = block_on(ottaku_core::fetch_content(&self.source, ticket.request));
        self.store.commit(ticket, records)
    }

    fn settle(&mut self, transition: Transition) {
        self.transitions += 1;
        self.meta = transition.meta;
        for ticket in &transition.tickets {
            self.store.begin(*ticket);
        }
        let store = &mut self.store;
        block_on(load_concurrently(&self.source, transition.tickets, |ticket, records| {
            store.commit(ticket, records);
        }));
    }

    #[must_use]
    pub fn section(&self) -> Section {
        self.router.route().section()
    }

    #[must_use]
    pub fn url(&self) -> String {
        self.router.current_url()
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.meta.title
    }

    #[must_use]
    pub const fn router(&self) -> &Router<MemoryHistory> {
        &self.router
    }

    #[must_use]
    pub const fn store(&self) -> &ContentStore {
        &self.store
    }

    #[must_use]
    pub const fn transitions(&self) -> usize {
        self.transitions
    }

    /// News cards the current filter leaves visible.
    #[must_use]
    pub fn visible_news(&self) -> Vec<NewsItem> {
        let news = self.store.news();
        self.router.filter().visible(&news).into_iter().cloned().collect()
    }

    #[must_use]
    pub fn visible_winners(&self) -> Vec<Winner> {
        let winners = self.store.winners();
        self.router
            .filter()
            .visible(&winners)
            .into_iter()
            .cloned()
            .collect()
    }
}

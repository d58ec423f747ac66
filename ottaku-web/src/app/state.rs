use std::rc::Rc;

use ottaku_core::{ContentRecord, ContentStore, FetchTicket, RouteDescriptor};
use yew::prelude::*;

/// Loaded collections, shared by every page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContentState {
    pub store: ContentStore,
}

pub enum ContentAction {
    Begin(Vec<FetchTicket>),
    Commit(FetchTicket, Vec<ContentRecord>),
}

impl Reducible for ContentState {
    type Action = ContentAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ContentAction::Begin(tickets) => {
                for ticket in tickets {
                    next.store.begin(ticket);
                }
            }
            ContentAction::Commit(ticket, records) => {
                if !next.store.commit(ticket, records) {
                    return self;
                }
            }
        }
        Rc::new(next)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
}

pub enum MenuAction {
    Toggle,
    Close,
}

impl Reducible for MenuState {
    type Action = MenuAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let open = match action {
            MenuAction::Toggle => !self.open,
            MenuAction::Close => false,
        };
        if open == self.open {
            self
        } else {
            Rc::new(Self { open })
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub route: UseStateHandle<RouteDescriptor>,
    pub content: UseReducerHandle<ContentState>,
    pub menu: UseReducerHandle<MenuState>,
}

#[hook]
pub fn use_app_state() -> AppState {
    AppState {
        route: use_state(RouteDescriptor::home),
        content: use_reducer(ContentState::default),
        menu: use_reducer(MenuState::default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ottaku_core::{ContentKind, LoadRequest};

    fn record(id: &str) -> ContentRecord {
        ContentRecord::new(id).with("name", id)
    }

    #[test]
    fn stale_commit_keeps_the_same_state() {
        let old = FetchTicket::new(LoadRequest::all(ContentKind::Partners), 1);
        let new = FetchTicket::new(LoadRequest::all(ContentKind::Partners), 2);
        let state = Rc::new(ContentState::default())
            .reduce(ContentAction::Begin(vec![old, new]))
            .reduce(ContentAction::Commit(new, vec![record("fresh")]));
        let after_stale = Rc::clone(&state).reduce(ContentAction::Commit(old, vec![record("old")]));
        assert!(Rc::ptr_eq(&state, &after_stale));
        assert_eq!(after_stale.store.partners()[0].id, "fresh");
    }

    #[test]
    fn menu_toggles_and_closes() {
        let menu = Rc::new(MenuState::default()).reduce(MenuAction::Toggle);
        assert!(menu.open);
        let closed = menu.reduce(MenuAction::Close);
        assert!(!closed.open);
        let still_closed = Rc::clone(&closed).reduce(MenuAction::Close);
        assert!(Rc::ptr_eq(&closed, &still_closed));
    }
}

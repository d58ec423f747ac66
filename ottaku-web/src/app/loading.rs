use ottaku_core::{ContentSource, FetchTicket, load_concurrently};
use yew::prelude::*;

use crate::app::state::{ContentAction, ContentState};

/// Mark `tickets` as loading, fetch them all at once and commit each
/// collection as it lands.
#[allow(clippy::future_not_send)]
pub async fn load_into<S, F>(source: &S, tickets: Vec<FetchTicket>, dispatch: F) -> usize
where
    S: ContentSource + ?Sized,
    F: Fn(ContentAction),
{
    if tickets.is_empty() {
        return 0;
    }
    dispatch(ContentAction::Begin(tickets.clone()));
    load_concurrently(source, tickets, |ticket, records| {
        dispatch(ContentAction::Commit(ticket, records));
    })
    .await
}

/// Spawn the Firestore loads for a transition.
pub fn spawn_loads(tickets: Vec<FetchTicket>, content: UseReducerDispatcher<ContentState>) {
    if tickets.is_empty() {
        return;
    }
    #[cfg(target_arch = "wasm32")]
    wasm_bindgen_futures::spawn_local(async move {
        let source = crate::source::FirestoreSource::new(crate::config::site_config());
        let done = load_into(&source, tickets, |action| content.dispatch(action)).await;
        log::debug!("{done} collections loaded");
    });
    #[cfg(not(target_arch = "wasm32"))]
    {
        log::debug!("skipping {} loads outside the browser", tickets.len());
        drop(content);
    }
}

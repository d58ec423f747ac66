//! Content fetching and the in-memory content store.

use async_trait::async_trait;
use futures::StreamExt;
use futures::stream::FuturesUnordered;
use std::collections::BTreeMap;

use crate::collection::{ContentKind, FetchTicket, LoadRequest};
use crate::content::{GamingCard, NewsItem, Partner, QuizWinner, SiteSettings, Winner};
use crate::recency::most_recent;
use crate::record::ContentRecord;

/// Trait for abstracting the remote document database.
/// Platform-specific implementations should provide this.
#[async_trait(?Send)]
pub trait ContentSource {
    type Error: std::error::Error + 'static;

    /// Fetch every document of a collection, in whatever order the backend returns.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be fetched or decoded.
    async fn fetch_collection(&self, kind: ContentKind)
    -> Result<Vec<ContentRecord>, Self::Error>;
}

/// Fetch one collection and shape it for display. Never fails.
///
/// Recency-ordered collections are sorted newest-first before the optional
/// cap is applied. A failing fetch is logged and yields an empty collection.
pub async fn fetch_content<S>(source: &S, request: LoadRequest) -> Vec<ContentRecord>
where
    S: ContentSource + ?Sized,
{
    match source.fetch_collection(request.kind).await {
        Ok(records) => {
            log::debug!("loaded {} {} records", records.len(), request.kind);
            arrange(records, request)
        }
        Err(err) => {
            log::error!("failed to load {}: {err}", request.kind);
            Vec::new()
        }
    }
}

fn arrange(mut records: Vec<ContentRecord>, request: LoadRequest) -> Vec<ContentRecord> {
    if request.kind.is_recency_ordered() {
        return most_recent(records, request.limit);
    }
    if let Some(limit) = request.limit {
        records.truncate(limit);
    }
    records
}

/// Issue every fetch at once and hand each result to `on_ready` as soon as it
/// completes. A slow or failing collection never holds back the others.
///
/// Returns the number of completed fetches once all of them are done.
pub async fn load_concurrently<S, F>(source: &S, tickets: Vec<FetchTicket>, mut on_ready: F) -> usize
where
    S: ContentSource + ?Sized,
    F: FnMut(FetchTicket, Vec<ContentRecord>),
{
    let mut pending: FuturesUnordered<_> = tickets
        .into_iter()
        .map(|ticket| async move { (ticket, fetch_content(source, ticket.request).await) })
        .collect();
    let mut completed = 0;
    while let Some((ticket, records)) = pending.next().await {
        on_ready(ticket, records);
        completed += 1;
    }
    completed
}

#[derive(Debug, Clone, Default, PartialEq)]
struct Slot {
    records: Vec<ContentRecord>,
    committed: Option<u64>,
    newest_pending: Option<u64>,
    loading: bool,
}

/// Last fetched records per collection.
///
/// Collections are replaced wholesale. Each write carries the generation of
/// the navigation that requested it; a result older than the last committed
/// one for the same collection is discarded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContentStore {
    slots: BTreeMap<ContentKind, Slot>,
}

impl ContentStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a collection as loading.
    pub fn begin(&mut self, ticket: FetchTicket) {
        let slot = self.slots.entry(ticket.kind()).or_default();
        slot.loading = true;
        slot.newest_pending = slot.newest_pending.max(Some(ticket.generation));
    }

    /// Replace a collection with fetched records.
    ///
    /// Returns `false` when the result is stale and was dropped.
    pub fn commit(&mut self, ticket: FetchTicket, records: Vec<ContentRecord>) -> bool {
        let slot = self.slots.entry(ticket.kind()).or_default();
        if slot.committed.is_some_and(|latest| ticket.generation < latest) {
            log::debug!(
                "dropping stale {} result from generation {}",
                ticket.kind(),
                ticket.generation
            );
            return false;
        }
        slot.records = records;
        slot.committed = Some(ticket.generation);
        if slot
            .newest_pending
            .is_none_or(|pending| pending <= ticket.generation)
        {
            slot.loading = false;
        }
        true
    }

    #[must_use]
    pub fn records(&self, kind: ContentKind) -> &[ContentRecord] {
        self.slots
            .get(&kind)
            .map_or(&[][..], |slot| slot.records.as_slice())
    }

    #[must_use]
    pub fn is_loading(&self, kind: ContentKind) -> bool {
        self.slots.get(&kind).is_some_and(|slot| slot.loading)
    }

    #[must_use]
    pub fn is_loaded(&self, kind: ContentKind) -> bool {
        self.slots
            .get(&kind)
            .is_some_and(|slot| slot.committed.is_some())
    }

    #[must_use]
    pub fn news(&self) -> Vec<NewsItem> {
        self.typed(ContentKind::News)
    }

    #[must_use]
    pub fn partners(&self) -> Vec<Partner> {
        self.typed(ContentKind::Partners)
    }

    #[must_use]
    pub fn gaming(&self) -> Vec<GamingCard> {
        self.typed(ContentKind::Gaming)
    }

    #[must_use]
    pub fn quiz_winners(&self) -> Vec<QuizWinner> {
        self.typed(ContentKind::QuizWinners)
    }

    #[must_use]
    pub fn winners(&self) -> Vec<Winner> {
        self.typed(ContentKind::Winners)
    }

    #[must_use]
    pub fn settings(&self) -> SiteSettings {
        SiteSettings::from_records(self.records(ContentKind::Settings))
    }

    fn typed<T>(&self, kind: ContentKind) -> Vec<T>
    where
        T: for<'a> From<&'a ContentRecord>,
    {
        self.records(kind).iter().map(T::from).collect()
    }
}

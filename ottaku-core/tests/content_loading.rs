use async_trait::async_trait;
use futures::executor::block_on;
use serde_json::{Value, json};
use std::cell::RefCell;
use std::collections::HashMap;

use ottaku_core::recency::sort_most_recent;
use ottaku_core::{
    ContentError, ContentKind, ContentRecord, ContentSource, ContentStore, FetchTicket,
    LoadRequest, MemoryHistory, NavigateOptions, RouteTable, Router, fetch_content,
    load_concurrently,
};

#[derive(Default)]
struct FixtureSource {
    collections: HashMap<ContentKind, Vec<ContentRecord>>,
    failing: Vec<ContentKind>,
    calls: RefCell<Vec<ContentKind>>,
}

impl FixtureSource {
    fn with(mut self, kind: ContentKind, records: Vec<ContentRecord>) -> Self {
        self.collections.insert(kind, records);
        self
    }

    fn failing(mut self, kind: ContentKind) -> Self {
        self.failing.push(kind);
        self
    }
}

#[async_trait(?Send)]
impl ContentSource for FixtureSource {
    type Error = ContentError;

    async fn fetch_collection(
        &self,
        kind: ContentKind,
    ) -> Result<Vec<ContentRecord>, Self::Error> {
        self.calls.borrow_mut().push(kind);
        if self.failing.contains(&kind) {
            return Err(ContentError::Status {
                collection: kind.default_collection().to_string(),
                status: 403,
            });
        }
        Ok(self.collections.get(&kind).cloned().unwrap_or_default())
    }
}

fn dated(id: &str, created_at: Value) -> ContentRecord {
    ContentRecord::new(id)
        .with("title", id)
        .with("createdAt", created_at)
}

fn ids(records: &[ContentRecord]) -> Vec<&str> {
    records.iter().map(|r| r.id.as_str()).collect()
}

#[test]
fn mixed_recency_formats_sort_newest_first() {
    let mut records = vec![
        dated("iso", json!("2024-01-01T00:00:00Z")),
        dated("millis", json!(1_700_000_000_000_i64)),
        dated("locale", json!("31/12/2023")),
        dated("missing", Value::Null),
    ];
    sort_most_recent(&mut records);
    assert_eq!(ids(&records), vec!["iso", "locale", "millis", "missing"]);
}

#[test]
fn limit_applies_after_sort() {
    // Upstream returns oldest first; the newest three must still win.
    let records: Vec<_> = (1..=10)
        .map(|day| dated(&format!("n{day}"), json!(format!("2024-03-{day:02}"))))
        .collect();
    let source = FixtureSource::default().with(ContentKind::News, records);
    let latest = block_on(fetch_content(
        &source,
        LoadRequest::latest(ContentKind::News, 3),
    ));
    assert_eq!(ids(&latest), vec!["n10", "n9", "n8"]);
}

#[test]
fn unordered_collections_keep_upstream_order() {
    let partners = vec![
        ContentRecord::new("b").with("name", "B"),
        ContentRecord::new("a").with("name", "A"),
    ];
    let source = FixtureSource::default().with(ContentKind::Partners, partners);
    let loaded = block_on(fetch_content(&source, LoadRequest::all(ContentKind::Partners)));
    assert_eq!(ids(&loaded), vec!["b", "a"]);
}

#[test]
fn one_failing_collection_does_not_block_the_others() {
    let source = FixtureSource::default()
        .with(
            ContentKind::News,
            vec![dated("news-1", json!("2024-02-02"))],
        )
        .with(
            ContentKind::Gaming,
            vec![ContentRecord::new("guild").with("title", "Genshin")],
        )
        .failing(ContentKind::Partners);

    let tickets = [ContentKind::News, ContentKind::Partners, ContentKind::Gaming]
        .into_iter()
        .map(|kind| FetchTicket::new(LoadRequest::all(kind), 1))
        .collect::<Vec<_>>();

    let mut store = ContentStore::new();
    for ticket in &tickets {
        store.begin(*ticket);
    }
    let completed = block_on(load_concurrently(&source, tickets, |ticket, records| {
        store.commit(ticket, records);
    }));

    assert_eq!(completed, 3);
    assert_eq!(source.calls.borrow().len(), 3);
    assert!(store.partners().is_empty());
    assert!(store.is_loaded(ContentKind::Partners));
    assert_eq!(store.news()[0].title, "news-1");
    assert_eq!(store.gaming()[0].title, "Genshin");
    assert!(!ContentKind::ALL.iter().any(|kind| store.is_loading(*kind)));
}

#[test]
fn fast_double_navigation_keeps_the_newest_content() {
    let (mut router, _) = Router::start(MemoryHistory::default(), RouteTable::default());
    let first = router.navigate("/novidades", NavigateOptions::PUSH);
    let second = router.navigate("/", NavigateOptions::PUSH);

    let mut store = ContentStore::new();
    for ticket in first.tickets.iter().chain(&second.tickets) {
        store.begin(*ticket);
    }
    let home_news = second.tickets[0];
    assert_eq!(home_news.request, LoadRequest::latest(ContentKind::News, 3));
    assert!(store.commit(home_news, vec![dated("fresh", json!(2))]));

    // The superseded full listing lands afterwards and is dropped.
    let stale = first.tickets[0];
    assert!(!store.commit(stale, vec![dated("old-a", json!(1)), dated("old-b", json!(0))]));
    assert_eq!(store.news().len(), 1);
    assert_eq!(store.news()[0].id, "fresh");
}

#[test]
fn settings_come_from_the_first_document() {
    let source = FixtureSource::default().with(
        ContentKind::Settings,
        vec![
            ContentRecord::new("site")
                .with("announcement", "Live hoje às 20h")
                .with("whatsappUrl", "https://chat.whatsapp.com/x"),
            ContentRecord::new("ignored").with("announcement", "não"),
        ],
    );
    let mut store = ContentStore::new();
    let ticket = FetchTicket::new(LoadRequest::all(ContentKind::Settings), 1);
    let records = block_on(fetch_content(&source, ticket.request));
    store.commit(ticket, records);
    let settings = store.settings();
    assert_eq!(settings.announcement.as_deref(), Some("Live hoje às 20h"));
    assert!(settings.discord_url.is_none());
}

//! Ottaku Brasil core
//!
//! Platform-agnostic logic for the Ottaku Brasil community site: URL routing,
//! the router state machine, category filtering, recency ordering and the
//! content store. No browser or network dependencies live here.

pub mod category;
pub mod collection;
pub mod config;
pub mod constants;
pub mod content;
pub mod error;
pub mod filter;
pub mod firestore;
pub mod meta;
pub mod recency;
pub mod record;
pub mod route;
pub mod router;
pub mod section;
pub mod store;

// Re-export commonly used types
pub use category::Category;
pub use collection::{ContentKind, FetchTicket, LoadRequest};
pub use config::{CollectionNames, FirestoreConfig, SiteConfig};
pub use content::{
    GamingCard, GamingEvent, NewsItem, NewsTarget, Partner, QuizWinner, SiteSettings, Winner,
    date_label,
};
pub use error::ContentError;
pub use filter::{CategoryFilter, Filterable};
pub use firestore::{FirestorePage, collection_url, decode_page};
pub use meta::PageMeta;
pub use record::ContentRecord;
pub use route::{QueryParams, RouteDescriptor, RouteState, RouteTable, match_route, resolve_route};
pub use router::{
    FilterChange, History, HistoryAction, LinkIntent, MemoryHistory, NavigateOptions, Router,
    ScrollTarget, Transition, classify_link,
};
pub use section::{Anchor, Section};
pub use store::{ContentSource, ContentStore, fetch_content, load_concurrently};

use serde::{Deserialize, Serialize};

use crate::collection::ContentKind;
use crate::route::RouteTable;

/// Firestore project the site reads from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FirestoreConfig {
    pub project_id: String,
    pub api_key: Option<String>,
    pub database: String,
    pub page_size: u32,
    pub base_url: String,
}

impl Default for FirestoreConfig {
    fn default() -> Self {
        Self {
            project_id: "ottaku-brasil".to_string(),
            api_key: None,
            database: "(default)".to_string(),
            page_size: 100,
            base_url: "https://firestore.googleapis.com/v1".to_string(),
        }
    }
}

/// Collection name overrides; unset entries use [`ContentKind::default_collection`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CollectionNames {
    pub news: Option<String>,
    pub partners: Option<String>,
    pub gaming: Option<String>,
    pub quiz_winners: Option<String>,
    pub winners: Option<String>,
    pub settings: Option<String>,
}

impl CollectionNames {
    #[must_use]
    pub fn name(&self, kind: ContentKind) -> &str {
        let custom = match kind {
            ContentKind::News => self.news.as_deref(),
            ContentKind::Partners => self.partners.as_deref(),
            ContentKind::Gaming => self.gaming.as_deref(),
            ContentKind::QuizWinners => self.quiz_winners.as_deref(),
            ContentKind::Winners => self.winners.as_deref(),
            ContentKind::Settings => self.settings.as_deref(),
        };
        custom.unwrap_or_else(|| kind.default_collection())
    }
}

/// Site configuration, shipped as `static/site.json` with the web bundle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    pub firestore: FirestoreConfig,
    pub collections: CollectionNames,
    pub home_news_limit: usize,
    pub home_quiz_limit: usize,
    /// `log` level filter name (`error`, `warn`, `info`, `debug`, `trace`).
    pub log_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        let table = RouteTable::default();
        Self {
            firestore: FirestoreConfig::default(),
            collections: CollectionNames::default(),
            home_news_limit: table.home_news_limit,
            home_quiz_limit: table.home_quiz_limit,
            log_level: "info".to_string(),
        }
    }
}

impl SiteConfig {
    /// Parse configuration JSON; missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or a field has the wrong type.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[must_use]
    pub const fn route_table(&self) -> RouteTable {
        RouteTable {
            home_news_limit: self.home_news_limit,
            home_quiz_limit: self.home_quiz_limit,
        }
    }

    #[must_use]
    pub fn log_level(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

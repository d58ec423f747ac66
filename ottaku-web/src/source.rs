//! Firestore REST content source.

use async_trait::async_trait;
use ottaku_core::{
    CollectionNames, ContentError, ContentKind, ContentRecord, ContentSource, FirestoreConfig,
    SiteConfig, collection_url, decode_page,
};
use serde_json::Value;

use crate::dom::{fetch_response, js_error_message, response_json};

/// Reads collections through the Firestore `documents.list` endpoint,
/// following page tokens until the listing is complete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FirestoreSource {
    firestore: FirestoreConfig,
    collections: CollectionNames,
}

#[derive(Debug, thiserror::Error)]
pub enum WebDataError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Response decoding error: {0}")]
    Body(String),
    #[error(transparent)]
    Content(#[from] ContentError),
}

impl FirestoreSource {
    #[must_use]
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            firestore: config.firestore.clone(),
            collections: config.collections.clone(),
        }
    }

    #[must_use]
    pub fn collection_name(&self, kind: ContentKind) -> &str {
        self.collections.name(kind)
    }

    #[must_use]
    pub fn page_url(&self, kind: ContentKind, page_token: Option<&str>) -> String {
        collection_url(&self.firestore, self.collection_name(kind), page_token)
    }

    #[allow(clippy::future_not_send)]
    async fn fetch_page(&self, url: &str, collection: &str) -> Result<Value, WebDataError> {
        let response = fetch_response(url)
            .await
            .map_err(|err| WebDataError::Network(js_error_message(&err)))?;
        if !response.ok() {
            return Err(ContentError::Status {
                collection: collection.to_string(),
                status: response.status(),
            }
            .into());
        }
        let body = response_json(&response)
            .await
            .map_err(|err| WebDataError::Body(js_error_message(&err)))?;
        serde_wasm_bindgen::from_value(body).map_err(|err| WebDataError::Body(err.to_string()))
    }
}

#[async_trait(?Send)]
impl ContentSource for FirestoreSource {
    type Error = WebDataError;

    async fn fetch_collection(
        &self,
        kind: ContentKind,
    ) -> Result<Vec<ContentRecord>, Self::Error> {
        let collection = self.collection_name(kind);
        let mut records = Vec::new();
        let mut page_token: Option<String> = None;
        loop {
            let url = self.page_url(kind, page_token.as_deref());
            let page = decode_page(self.fetch_page(&url, collection).await?)?;
            records.extend(page.records);
            match page.next_page_token {
                Some(next) => page_token = Some(next),
                None => break,
            }
        }
        log::debug!("fetched {} documents from {collection}", records.len());
        Ok(records)
    }
}

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::constants::RECENCY_FIELDS;

/// One document from a remote collection, kept as an opaque bag of fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ContentRecord {
    pub id: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl ContentRecord {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            fields: Map::new(),
        }
    }

    /// Builder-style field insert, mostly for fixtures.
    #[must_use]
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(key.to_string(), value.into());
        self
    }

    /// Parse a JSON array of records (`[{ "id": .., ...fields }]`).
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is not an array of objects.
    pub fn list_from_json(json: &str) -> Result<Vec<Self>, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[must_use]
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Non-blank string field. Numbers and booleans are rendered as text.
    #[must_use]
    pub fn str_field(&self, key: &str) -> Option<String> {
        match self.fields.get(key)? {
            Value::String(s) => {
                let trimmed = s.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            }
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    /// String field or the given fallback.
    #[must_use]
    pub fn str_or(&self, key: &str, fallback: &str) -> String {
        self.str_field(key).unwrap_or_else(|| fallback.to_string())
    }

    /// String field or an empty string.
    #[must_use]
    pub fn str_or_empty(&self, key: &str) -> String {
        self.str_field(key).unwrap_or_default()
    }

    /// Raw recency value: the first present field of `createdAt`, `date`, `timestamp`.
    #[must_use]
    pub fn recency_value(&self) -> Option<&Value> {
        RECENCY_FIELDS
            .iter()
            .filter_map(|key| self.fields.get(*key))
            .find(|v| !v.is_null())
    }

    /// Normalized recency in epoch milliseconds, `None` when missing or unparsable.
    #[must_use]
    pub fn recency(&self) -> Option<i64> {
        self.recency_value().and_then(crate::recency::normalize)
    }
}

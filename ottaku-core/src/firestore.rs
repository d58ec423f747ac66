//! Cloud Firestore REST decoding.
//!
//! The list endpoint returns documents whose fields are wrapped in typed
//! envelopes (`{"stringValue": "..."}`, `{"integerValue": "42"}`, ...). This
//! module unwraps them into plain JSON so the rest of the crate only sees
//! [`ContentRecord`]s.

use serde::Deserialize;
use serde_json::{Map, Number, Value};

use crate::config::FirestoreConfig;
use crate::error::ContentError;
use crate::record::ContentRecord;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListResponse {
    #[serde(default)]
    documents: Vec<Document>,
    #[serde(default)]
    next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Document {
    name: String,
    #[serde(default)]
    fields: Map<String, Value>,
}

/// One page of a collection listing.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FirestorePage {
    pub records: Vec<ContentRecord>,
    pub next_page_token: Option<String>,
}

/// Decode a `documents.list` response body.
///
/// A malformed field becomes `null` so the record falls back to its default
/// for that field; a document without an id is skipped. Both are logged.
///
/// # Errors
///
/// Returns [`ContentError::Decode`] when the body is not a list response.
pub fn decode_page(body: Value) -> Result<FirestorePage, ContentError> {
    let response: ListResponse = serde_json::from_value(body)?;
    let records = response
        .documents
        .into_iter()
        .filter_map(decode_document)
        .collect();
    Ok(FirestorePage {
        records,
        next_page_token: response.next_page_token.filter(|t| !t.is_empty()),
    })
}

fn decode_document(doc: Document) -> Option<ContentRecord> {
    let Some(id) = doc.name.rsplit('/').next().filter(|s| !s.is_empty()) else {
        log::warn!("skipping document without id: {:?}", doc.name);
        return None;
    };
    let id = id.to_string();
    let fields = decode_fields(&id, doc.fields);
    Some(ContentRecord { id, fields })
}

fn decode_fields(doc_id: &str, fields: Map<String, Value>) -> Map<String, Value> {
    fields
        .into_iter()
        .map(|(key, value)| {
            let decoded = match value {
                Value::Object(ref envelope) if envelope.contains_key("mapValue") => {
                    let inner = envelope
                        .get("mapValue")
                        .and_then(|m| m.get("fields"))
                        .and_then(Value::as_object)
                        .cloned()
                        .unwrap_or_default();
                    Value::Object(decode_fields(doc_id, inner))
                }
                _ => decode_value(&value).unwrap_or_else(|err| {
                    log::warn!("{doc_id}.{key}: {err}; using the default");
                    Value::Null
                }),
            };
            (key, decoded)
        })
        .collect()
}

/// Unwrap one typed Firestore value.
///
/// # Errors
///
/// Returns [`ContentError::Shape`] for envelopes with an unknown or malformed type.
pub fn decode_value(value: &Value) -> Result<Value, ContentError> {
    let Value::Object(envelope) = value else {
        return Err(ContentError::Shape(format!("expected typed value, got {value}")));
    };
    let Some((kind, inner)) = envelope.iter().next() else {
        return Err(ContentError::Shape("empty typed value".to_string()));
    };
    match kind.as_str() {
        "nullValue" => Ok(Value::Null),
        "booleanValue" => inner
            .as_bool()
            .map(Value::Bool)
            .ok_or_else(|| shape_error(kind, inner)),
        "integerValue" => match inner {
            Value::String(s) => s
                .parse::<i64>()
                .map(|n| Value::Number(n.into()))
                .map_err(|_| shape_error(kind, inner)),
            Value::Number(n) => Ok(Value::Number(n.clone())),
            _ => Err(shape_error(kind, inner)),
        },
        "doubleValue" => match inner {
            Value::Number(n) => Ok(Value::Number(n.clone())),
            // NaN and the infinities arrive as strings and have no JSON number form.
            Value::String(_) => Ok(Value::Null),
            _ => Err(shape_error(kind, inner)),
        },
        "stringValue" | "timestampValue" | "referenceValue" | "bytesValue" => inner
            .as_str()
            .map(|s| Value::String(s.to_string()))
            .ok_or_else(|| shape_error(kind, inner)),
        "geoPointValue" => {
            let coord = |axis: &str| {
                inner
                    .get(axis)
                    .and_then(Value::as_f64)
                    .and_then(Number::from_f64)
                    .map_or(Value::Null, Value::Number)
            };
            let mut point = Map::new();
            point.insert("latitude".to_string(), coord("latitude"));
            point.insert("longitude".to_string(), coord("longitude"));
            Ok(Value::Object(point))
        }
        "mapValue" => inner
            .get("fields")
            .and_then(Value::as_object)
            .map_or_else(Map::new, Clone::clone)
            .into_iter()
            .map(|(key, value)| decode_value(&value).map(|v| (key, v)))
            .collect::<Result<Map<_, _>, _>>()
            .map(Value::Object),
        "arrayValue" => inner
            .get("values")
            .and_then(Value::as_array)
            .map_or(&[][..], Vec::as_slice)
            .iter()
            .map(decode_value)
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        _ => Err(ContentError::Shape(format!("unknown value type {kind}"))),
    }
}

fn shape_error(kind: &str, inner: &Value) -> ContentError {
    ContentError::Shape(format!("malformed {kind}: {inner}"))
}

/// URL of one page of a collection listing.
#[must_use]
pub fn collection_url(
    config: &FirestoreConfig,
    collection: &str,
    page_token: Option<&str>,
) -> String {
    let mut url = format!(
        "{}/projects/{}/databases/{}/documents/{}?pageSize={}",
        config.base_url.trim_end_matches('/'),
        urlencoding::encode(&config.project_id),
        config.database,
        urlencoding::encode(collection),
        config.page_size
    );
    if let Some(token) = page_token {
        url.push_str("&pageToken=");
        url.push_str(&urlencoding::encode(token));
    }
    if let Some(key) = config.api_key.as_deref().filter(|k| !k.is_empty()) {
        url.push_str("&key=");
        url.push_str(&urlencoding::encode(key));
    }
    url
}

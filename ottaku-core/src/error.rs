use thiserror::Error;

/// Failures raised while fetching or decoding a content collection.
///
/// None of these ever reach the page: [`crate::store::fetch_content`] logs them
/// and degrades to an empty collection.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("unexpected HTTP status {status} for {collection}")]
    Status { collection: String, status: u16 },
    #[error("JSON parsing error: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("unexpected document shape: {0}")]
    Shape(String),
}

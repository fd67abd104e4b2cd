//! The tweet document model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::core::SearchBackend;
use crate::error::BackendResult;

/// Index used when none is configured.
pub const DEFAULT_INDEX: &str = "tweets";

/// Id of the document written at startup to force index creation.
pub const SENTINEL_ID: &str = "-1";

/// Author written into every placeholder tweet.
pub const PLACEHOLDER_AUTHOR: &str = "kimchy";

/// Text written into every placeholder tweet.
pub const PLACEHOLDER_TEXT: &str = "Elasticsearch: cool. bonsai cool.";

/// A tweet as stored in the backend's `_source`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tweet {
    /// Who wrote the tweet.
    pub author: String,
    /// The tweet body.
    pub text: String,
    /// When the tweet was written.
    pub timestamp: DateTime<Utc>,
}

impl Tweet {
    /// The fixed sample tweet, stamped with the current time.
    pub fn placeholder() -> Self {
        Self {
            author: PLACEHOLDER_AUTHOR.to_string(),
            text: PLACEHOLDER_TEXT.to_string(),
            timestamp: Utc::now(),
        }
    }

    /// Serializes the tweet into a backend document body.
    pub fn to_document(&self) -> Value {
        serde_json::json!({
            "author": self.author,
            "text": self.text,
            "timestamp": self.timestamp.to_rfc3339(),
        })
    }

    /// Reads a tweet back out of a get response (`{"_source": {...}}`).
    pub fn from_get_response(response: &Value) -> Option<Self> {
        response
            .get("_source")
            .and_then(|source| serde_json::from_value(source.clone()).ok())
    }
}

/// Creates a placeholder tweet at `id` and refreshes the index so the
/// document is immediately visible to reads.
pub async fn create_placeholder<B>(backend: &B, index: &str, id: &str) -> BackendResult<()>
where
    B: SearchBackend + ?Sized,
{
    let tweet = Tweet::placeholder();
    backend.create(index, id, tweet.to_document()).await?;
    backend.refresh(index).await?;
    debug!(index = %index, id = %id, "Placeholder tweet created");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_placeholder_content() {
        let tweet = Tweet::placeholder();
        assert_eq!(tweet.author, "kimchy");
        assert_eq!(tweet.text, "Elasticsearch: cool. bonsai cool.");
        assert!(Utc::now() >= tweet.timestamp);
    }

    #[test]
    fn test_to_document() {
        let tweet = Tweet::placeholder();
        let doc = tweet.to_document();
        assert_eq!(doc["author"], "kimchy");
        assert_eq!(doc["text"], PLACEHOLDER_TEXT);
        let timestamp = doc["timestamp"].as_str().unwrap();
        assert!(DateTime::parse_from_rfc3339(timestamp).is_ok());
    }

    #[test]
    fn test_from_get_response() {
        let response = json!({
            "_index": "tweets",
            "_id": "42",
            "found": true,
            "_source": {
                "author": "kimchy",
                "text": "Elasticsearch: cool. bonsai cool.",
                "timestamp": "2024-05-01T12:00:00+00:00"
            }
        });
        let tweet = Tweet::from_get_response(&response).unwrap();
        assert_eq!(tweet.author, "kimchy");
        assert_eq!(tweet.timestamp.to_rfc3339(), "2024-05-01T12:00:00+00:00");

        assert!(Tweet::from_get_response(&json!({"found": false})).is_none());
    }
}

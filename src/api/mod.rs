//! Remote collection API, consumed over HTTP.
//!
//! The UI never computes clusterings itself; it lists and regenerates them
//! through this seam. [`CollectionApi`] is the trait the server state
//! carries (and tests stub), [`client::HttpCollectionApi`] the reqwest
//! implementation.

pub mod client;

pub use client::HttpCollectionApi;

use async_trait::async_trait;

use crate::chat::ChatSubmission;
use crate::clustering::Clustering;

/// Errors from the remote collection API.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The upstream responded with a non-success status.
    #[error("upstream returned {status}")]
    Upstream { status: u16, body: String },

    /// Transport-level failure (connect, timeout, body read).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body did not decode as expected.
    #[error("invalid response payload: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// User-facing message extracted from the error payload's `detail`
    /// field when present and of string type.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        let Self::Upstream { body, .. } = self else {
            return None;
        };
        let value: serde_json::Value = serde_json::from_str(body).ok()?;
        value.get("detail")?.as_str().map(ToString::to_string)
    }
}

/// Client seam for the remote collection API.
#[async_trait]
pub trait CollectionApi: Send + Sync {
    /// List the clusterings available for a collection.
    async fn list_clusterings(&self, collection_id: &str) -> Result<Vec<Clustering>, ApiError>;

    /// Trigger asynchronous AI generation of a new clustering.
    ///
    /// `POST /agentic/cluster_topic?collection_id=<id>`, no body.
    async fn generate_clustering(&self, collection_id: &str) -> Result<(), ApiError>;

    /// Deliver a chat submission for a collection.
    async fn send_chat(
        &self,
        collection_id: &str,
        submission: &ChatSubmission,
    ) -> Result<(), ApiError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_extracted_from_string_field() {
        let err = ApiError::Upstream {
            status: 422,
            body: r#"{"detail":"Collection has too few documents"}"#.to_string(),
        };
        assert_eq!(err.detail().as_deref(), Some("Collection has too few documents"));
    }

    #[test]
    fn test_detail_ignores_non_string_payloads() {
        let err = ApiError::Upstream {
            status: 500,
            body: r#"{"detail":{"code":12}}"#.to_string(),
        };
        assert!(err.detail().is_none());

        let err = ApiError::Upstream {
            status: 500,
            body: "not json".to_string(),
        };
        assert!(err.detail().is_none());
    }
}

//! HTTP implementation of the collection API seam.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Response;
use url::Url;

use super::{ApiError, CollectionApi};
use crate::chat::ChatSubmission;
use crate::clustering::Clustering;

/// reqwest-backed [`CollectionApi`] client.
#[derive(Debug, Clone)]
pub struct HttpCollectionApi {
    http: reqwest::Client,
    base_url: Url,
}

impl HttpCollectionApi {
    /// Build a client for the given base URL with a per-request timeout.
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { http, base_url })
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Map a non-success response into [`ApiError::Upstream`], keeping the
    /// body for `detail` extraction.
    async fn check(resp: Response) -> Result<Response, ApiError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let body = resp.text().await.unwrap_or_default();
        Err(ApiError::Upstream {
            status: status.as_u16(),
            body,
        })
    }
}

#[async_trait]
impl CollectionApi for HttpCollectionApi {
    async fn list_clusterings(&self, collection_id: &str) -> Result<Vec<Clustering>, ApiError> {
        let url = self.endpoint(&format!("collection/{collection_id}/clusterings"));
        let resp = self.http.get(&url).send().await?;
        let resp = Self::check(resp).await?;
        Ok(resp.json().await?)
    }

    async fn generate_clustering(&self, collection_id: &str) -> Result<(), ApiError> {
        let url = self.endpoint("agentic/cluster_topic");
        let resp = self
            .http
            .post(&url)
            .query(&[("collection_id", collection_id)])
            .send()
            .await?;
        Self::check(resp).await?;
        Ok(())
    }

    async fn send_chat(
        &self,
        collection_id: &str,
        submission: &ChatSubmission,
    ) -> Result<(), ApiError> {
        let url = self.endpoint(&format!("collection/{collection_id}/chat"));
        let resp = self.http.post(&url).json(submission).send().await?;
        Self::check(resp).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> HttpCollectionApi {
        HttpCollectionApi::new(
            Url::parse("http://localhost:8000/api/").unwrap(),
            Duration::from_secs(5),
        )
        .unwrap()
    }

    #[test]
    fn test_endpoint_joins_without_double_slash() {
        let api = client();
        assert_eq!(
            api.endpoint("/agentic/cluster_topic"),
            "http://localhost:8000/api/agentic/cluster_topic"
        );
        assert_eq!(
            api.endpoint("collection/col-1/clusterings"),
            "http://localhost:8000/api/collection/col-1/clusterings"
        );
    }
}

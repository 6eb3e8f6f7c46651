//! Native feed transport over reqwest

use super::schema::{GenerateContentRequest, GenerateContentResponse};
use super::{FeedAccount, FeedBatch, FeedError, FeedSource};
use crate::utils::config::FeedConfig;
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, warn};

/// Calls `generateContent` with search grounding and a post-array schema
pub struct GeminiFeedSource {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    account: FeedAccount,
    post_count: u32,
    timeout: Duration,
}

impl GeminiFeedSource {
    pub fn new(config: &FeedConfig, api_key: String) -> Result<Self, FeedError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| FeedError::Transport(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: config.endpoint(),
            api_key,
            account: config.account(),
            post_count: config.post_count,
            timeout: config.timeout(),
        })
    }

    fn map_transport(&self, e: reqwest::Error) -> FeedError {
        if e.is_timeout() {
            FeedError::Timeout(self.timeout)
        } else {
            FeedError::Transport(e.to_string())
        }
    }
}

#[async_trait(?Send)]
impl FeedSource for GeminiFeedSource {
    async fn fetch_latest(&self) -> Result<FeedBatch, FeedError> {
        let request = GenerateContentRequest::for_feed(&self.account, self.post_count);
        debug!(endpoint = %self.endpoint, posts = self.post_count, "Requesting feed");

        let response = self
            .client
            .post(&self.endpoint)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| self.map_transport(e))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            warn!("Feed request failed ({}): {}", status, text);
            return Err(FeedError::Status(status.as_u16()));
        }

        let body = response.text().await.map_err(|e| self.map_transport(e))?;
        let parsed: GenerateContentResponse =
            serde_json::from_str(&body).map_err(|e| FeedError::Malformed(e.to_string()))?;

        parsed.into_batch()
    }
}

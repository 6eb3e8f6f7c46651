//! Browser transports for the feed and the contact form

use crate::settings::Settings;
use async_trait::async_trait;
use futures::future::{select, Either};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use rejuvana::feed::schema::{GenerateContentRequest, GenerateContentResponse};
use rejuvana::feed::{FeedAccount, FeedBatch, FeedError, FeedSource};
use rejuvana::lead::{CrmContact, LeadSink, SubmitError};
use std::future::Future;
use std::time::Duration;

/// Race `fut` against a timer; `None` means the timer won
async fn with_timeout<F: Future>(fut: F, limit: Duration) -> Option<F::Output> {
    let timer = TimeoutFuture::new(limit.as_millis().min(u32::MAX as u128) as u32);
    match select(Box::pin(fut), Box::pin(timer)).await {
        Either::Left((output, _)) => Some(output),
        Either::Right(_) => None,
    }
}

/// Directory feed straight from the generative API
pub struct BrowserFeedSource {
    endpoint: String,
    api_key: Option<&'static str>,
    account: FeedAccount,
    post_count: u32,
    timeout: Duration,
}

impl BrowserFeedSource {
    pub fn new(settings: &Settings) -> Self {
        Self {
            endpoint: settings.feed.endpoint(),
            api_key: settings.feed_api_key,
            account: settings.feed.account(),
            post_count: settings.feed.post_count,
            timeout: settings.feed.timeout(),
        }
    }

    async fn request(&self, api_key: &str) -> Result<FeedBatch, FeedError> {
        let body = GenerateContentRequest::for_feed(&self.account, self.post_count);
        let resp = Request::post(&self.endpoint)
            .header("x-goog-api-key", api_key)
            .json(&body)
            .map_err(|e| FeedError::Transport(format!("Failed to serialize request: {}", e)))?
            .send()
            .await
            .map_err(|e| FeedError::Transport(format!("Network error: {}", e)))?;

        if !resp.ok() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            tracing::warn!("Feed request failed ({}): {}", status, text);
            return Err(FeedError::Status(status));
        }

        let parsed: GenerateContentResponse = resp
            .json()
            .await
            .map_err(|e| FeedError::Malformed(e.to_string()))?;
        parsed.into_batch()
    }
}

#[async_trait(?Send)]
impl FeedSource for BrowserFeedSource {
    async fn fetch_latest(&self) -> Result<FeedBatch, FeedError> {
        let api_key = self
            .api_key
            .ok_or_else(|| FeedError::Transport("feed API key not configured".to_string()))?;

        with_timeout(self.request(api_key), self.timeout)
            .await
            .unwrap_or(Err(FeedError::Timeout(self.timeout)))
    }
}

/// CRM contacts endpoint
pub struct BrowserLeadSink {
    endpoint: String,
    token: Option<&'static str>,
    timeout: Duration,
}

impl BrowserLeadSink {
    pub fn new(settings: &Settings) -> Self {
        Self {
            endpoint: settings.lead.endpoint.clone(),
            token: settings.lead_token,
            timeout: settings.lead.timeout(),
        }
    }

    async fn post(&self, token: &str, contact: &CrmContact) -> Result<(), SubmitError> {
        let resp = Request::post(&self.endpoint)
            .header("Accept", "application/json")
            .header("Authorization", &format!("Bearer {}", token))
            .json(contact)
            .map_err(|e| SubmitError::Unavailable(format!("Failed to serialize request: {}", e)))?
            .send()
            .await
            .map_err(|e| SubmitError::Unavailable(format!("Network error: {}", e)))?;

        if resp.ok() {
            return Ok(());
        }

        let status = resp.status();
        let text = resp.text().await.unwrap_or_default();
        tracing::warn!("CRM request failed ({}): {}", status, text);
        Err(SubmitError::from_status(status))
    }
}

#[async_trait(?Send)]
impl LeadSink for BrowserLeadSink {
    async fn create_contact(&self, contact: &CrmContact) -> Result<(), SubmitError> {
        let token = self
            .token
            .ok_or_else(|| SubmitError::Unavailable("CRM token not configured".to_string()))?;

        with_timeout(self.post(token, contact), self.timeout)
            .await
            .unwrap_or_else(|| Err(SubmitError::Unavailable("request timed out".to_string())))
    }
}

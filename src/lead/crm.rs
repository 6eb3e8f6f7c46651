//! Native CRM transport over reqwest

use super::{CrmContact, LeadSink, SubmitError};
use crate::utils::config::LeadConfig;
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use tracing::{debug, warn};

pub struct CrmClient {
    client: reqwest::Client,
    endpoint: String,
    token: String,
}

impl CrmClient {
    pub fn new(config: &LeadConfig, token: String) -> Result<Self, SubmitError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| SubmitError::Unavailable(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            token,
        })
    }
}

#[async_trait(?Send)]
impl LeadSink for CrmClient {
    async fn create_contact(&self, contact: &CrmContact) -> Result<(), SubmitError> {
        debug!(endpoint = %self.endpoint, "Posting contact to CRM");

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.token)
            .header(ACCEPT, "application/json")
            .json(contact)
            .send()
            .await
            .map_err(|e| SubmitError::Unavailable(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let text = response.text().await.unwrap_or_default();
        warn!("CRM request failed ({}): {}", status, text);
        Err(SubmitError::from_status(status.as_u16()))
    }
}

//! Build-time settings
//!
//! The browser bundle has no config file. It starts from the same defaults as
//! `rejuvana.toml` and takes overrides and secrets from the environment at
//! compile time (`trunk build` inherits the shell's variables).

use rejuvana::utils::config::{FeedConfig, LeadConfig};

#[derive(Clone, Debug)]
pub struct Settings {
    pub feed: FeedConfig,
    pub lead: LeadConfig,
    pub feed_api_key: Option<&'static str>,
    pub lead_token: Option<&'static str>,
}

impl Settings {
    pub fn from_build_env() -> Self {
        let mut feed = FeedConfig::default();
        if let Some(model) = option_env!("REJUVANA_FEED_MODEL") {
            feed.model = model.to_string();
        }
        if let Some(base) = option_env!("REJUVANA_FEED_API_BASE") {
            feed.api_base = base.to_string();
        }

        let mut lead = LeadConfig::default();
        if let Some(endpoint) = option_env!("REJUVANA_LEAD_ENDPOINT") {
            lead.endpoint = endpoint.to_string();
        }

        Self {
            feed,
            lead,
            feed_api_key: option_env!("GEMINI_API_KEY").filter(|k| !k.is_empty()),
            lead_token: option_env!("REACH_API_TOKEN").filter(|t| !t.is_empty()),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_build_env()
    }
}

//! Command handlers for the operator CLI

use super::output::Output;
use crate::content::{guides, visible_guides};
use crate::feed::gemini::GeminiFeedSource;
use crate::feed::{FeedError, FeedSynchronizer};
use crate::lead::crm::CrmClient;
use crate::lead::{LeadForm, LeadSubmission, SubmissionState};
use crate::types::{AppError, Result};
use crate::utils::config::SiteConfig;
use chrono::Utc;

/// Run one sync. Without an API key the synchronizer still settles on the
/// fallback posts, the same as the page would.
pub async fn run_feed(config: &SiteConfig, output: &Output, json: bool) -> Result<()> {
    let mut feed = FeedSynchronizer::new(config.feed.account());

    match config.feed_api_key() {
        Ok(api_key) => {
            let source = GeminiFeedSource::new(&config.feed, api_key)?;
            if !json {
                output.step(1, 1, &format!("Syncing @{}", feed.account().handle));
            }
            feed.sync(&source, false).await;
        }
        Err(e) => {
            if !json {
                output.warning(&e.to_string());
                output.info("Showing cached posts, as the directory does when offline");
            }
            if let Some(ticket) = feed.begin(false) {
                feed.complete(
                    ticket,
                    Err(FeedError::Transport("no API key".to_string())),
                    Utc::now(),
                );
            }
        }
    }

    if json {
        let rendered = serde_json::to_string_pretty(feed.posts())
            .map_err(|e| AppError::Internal(e.to_string()))?;
        println!("{}", rendered);
        return Ok(());
    }

    match feed.last_error() {
        Some(notice) => output.warning(notice),
        None => output.success(&format!("{} posts synchronized", feed.posts().len())),
    }

    let now = Utc::now();
    for post in feed.posts() {
        output.post(post, now);
    }

    if !feed.sources().is_empty() {
        output.header("Verified Information Sources");
        for source in feed.sources() {
            output.source(source);
        }
    }
    output.newline();
    Ok(())
}

pub async fn run_lead(
    config: &SiteConfig,
    output: &Output,
    name: &str,
    email: &str,
    message: &str,
) -> Result<()> {
    let token = config.lead_token()?;
    let client = CrmClient::new(&config.lead, token)?;

    let mut submission = LeadSubmission::new(config.lead.clone());
    *submission.form_mut() = LeadForm::new(name, email, message);

    output.step(1, 1, &format!("Sending lead to {}", config.lead.endpoint));
    submission.submit(&client).await?;

    match submission.state() {
        SubmissionState::Success => {
            output.success("Lead accepted");
            Ok(())
        }
        SubmissionState::Error(message) => Err(AppError::InvalidInput(message.clone())),
        other => Err(AppError::Internal(format!(
            "submission ended in unexpected state {:?}",
            other
        ))),
    }
}

pub fn list_guides(output: &Output, all: bool) {
    let shown = visible_guides(all);
    output.header(&format!("Wellness Guides ({} of {})", shown.len(), guides().len()));
    output.table_header(&["Id", "Category", "Title"]);
    for card in shown {
        let id = card.id.to_string();
        output.table_row(&[id.as_str(), card.category, card.title]);
    }
    if !all {
        output.hint("Use --all to list every guide");
    }
}

pub fn show_config(config: &SiteConfig, output: &Output, validate: bool) -> Result<()> {
    output.header("Server");
    output.kv("host", &config.server.host);
    output.kv("port", &config.server.port.to_string());
    output.kv("log_level", &config.server.log_level);

    output.header("Feed");
    output.kv("endpoint", &config.feed.endpoint());
    output.kv("account", &format!("@{}", config.feed.account_handle));
    output.kv("post_count", &config.feed.post_count.to_string());
    output.kv("timeout", &format!("{}s", config.feed.timeout_secs));
    output.kv("api_key_env", &config.feed.api_key_env);

    output.header("Lead");
    output.kv("endpoint", &config.lead.endpoint);
    output.kv("routing_tag", &config.lead.routing_tag);
    output.kv("note_limit", &config.lead.note_limit.to_string());
    output.kv("timeout", &format!("{}s", config.lead.timeout_secs));
    output.kv("token_env", &config.lead.token_env);
    output.newline();

    if !validate {
        output.hint("Check that the referenced secrets are set with:");
        output.command("rejuvana-site config --validate");
        output.newline();
        return Ok(());
    }

    config.validate()?;
    config.validate_secrets()?;
    output.header("Secrets");
    for env_name in [&config.feed.api_key_env, &config.lead.token_env] {
        output.list_item(&format!("{} is set", env_name));
    }
    output.success("Configuration is valid");
    Ok(())
}

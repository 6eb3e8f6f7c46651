//! Social directory feed
//!
//! The directory page shows recent posts from the brand's Instagram account.
//! Posts come from a generative search API (see [`schema`]), are validated as
//! a whole batch and kept newest-first by the [`FeedSynchronizer`]. When the
//! API is unreachable the synchronizer keeps what it has, or falls back to a
//! small built-in list so the page is never empty.

pub mod schema;
pub mod sync;
pub mod time;

#[cfg(feature = "server")]
pub mod gemini;

pub use sync::{FeedSynchronizer, SyncMode, SyncTicket, FEED_UNAVAILABLE_NOTICE};
pub use time::{relative_label, CLOCK_TICK};

use async_trait::async_trait;
use chrono::{DateTime, Duration as ChronoDuration, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Source platform of a post. Only Instagram is synchronized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Instagram,
}

/// One directory card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SocialPost {
    pub id: String,
    pub platform: Platform,
    pub author_handle: String,
    pub permalink: String,
    pub image_url: String,
    pub caption: String,
    /// Human formatted, e.g. "1.4k"
    pub like_count_display: String,
    pub comment_count: u32,
    pub timestamp: DateTime<Utc>,
}

/// Web citation backing a generated answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroundingSource {
    pub uri: String,
    pub title: Option<String>,
}

impl GroundingSource {
    pub fn label(&self) -> &str {
        self.title.as_deref().unwrap_or("Instagram Source")
    }
}

/// A validated response: posts (newest first) and their citations
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedBatch {
    pub posts: Vec<SocialPost>,
    pub sources: Vec<GroundingSource>,
}

/// The account whose activity the directory mirrors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedAccount {
    pub handle: String,
    pub profile_url: String,
}

impl Default for FeedAccount {
    fn default() -> Self {
        Self {
            handle: "rejuvanaliving".to_string(),
            profile_url: "https://www.instagram.com/rejuvanaliving/".to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("Network error: {0}")]
    Transport(String),

    #[error("Feed request failed with status {0}")]
    Status(u16),

    #[error("Feed request timed out after {0:?}")]
    Timeout(Duration),

    #[error("Malformed feed response: {0}")]
    Malformed(String),

    #[error("Feed record {index} violates schema: {reason}")]
    Schema { index: usize, reason: String },

    #[error("Feed response contained no posts")]
    Empty,
}

impl FeedError {
    /// Notice shown on the directory page. Transport details stay in the logs.
    pub fn user_message(&self) -> &'static str {
        FEED_UNAVAILABLE_NOTICE
    }
}

/// Anything that can produce the latest batch of posts
#[async_trait(?Send)]
pub trait FeedSource {
    async fn fetch_latest(&self) -> Result<FeedBatch, FeedError>;
}

/// Built-in posts shown when the very first sync fails
pub fn fallback_posts(account: &FeedAccount, now: DateTime<Utc>) -> Vec<SocialPost> {
    vec![
        SocialPost {
            id: "cached-1".to_string(),
            platform: Platform::Instagram,
            author_handle: account.handle.clone(),
            permalink: account.profile_url.clone(),
            image_url: "https://images.unsplash.com/photo-1544367567-0f2fcb009e0b?auto=format&fit=crop&q=80&w=800".to_string(),
            caption: "The morning protocol: hydration, sunlight, and 10 minutes of mobility. Your longevity is built on these small, daily wins. 🌿 #RejuvanaLiving".to_string(),
            like_count_display: "2.8k".to_string(),
            comment_count: 142,
            timestamp: now - ChronoDuration::hours(2),
        },
        SocialPost {
            id: "cached-2".to_string(),
            platform: Platform::Instagram,
            author_handle: account.handle.clone(),
            permalink: account.profile_url.clone(),
            image_url: "https://images.unsplash.com/photo-1541480601022-2308c0f02487?auto=format&fit=crop&q=80&w=800".to_string(),
            caption: "Sleep is the ultimate reset button. Are you prioritizing your circadian rhythm? Our latest guide dives into the science of non-negotiable rest.".to_string(),
            like_count_display: "1.9k".to_string(),
            comment_count: 84,
            timestamp: now - ChronoDuration::days(1),
        },
    ]
}

/// Stable newest-first ordering; equal timestamps keep their input order
pub fn sort_newest_first(posts: &mut [SocialPost]) {
    posts.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_posts_are_sorted_and_non_empty() {
        let now = Utc::now();
        let posts = fallback_posts(&FeedAccount::default(), now);
        assert!(!posts.is_empty());
        assert!(posts.windows(2).all(|w| w[0].timestamp >= w[1].timestamp));
        assert!(posts.iter().all(|p| p.author_handle == "rejuvanaliving"));
    }

    #[test]
    fn test_grounding_label_default() {
        let source = GroundingSource {
            uri: "https://example.com".to_string(),
            title: None,
        };
        assert_eq!(source.label(), "Instagram Source");
    }
}

//! # Rejuvana Living
//!
//! Core of the Rejuvana Living marketing site: the bundled content, the
//! navigation view model, the social directory feed synchronizer and the
//! contact form's lead submission flow.
//!
//! The crate is platform neutral. The Leptos frontend in `ui/` links it with
//! default features off and supplies browser transports; native builds add
//! reqwest transports, TOML configuration and the `rejuvana-site` CLI.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use rejuvana::feed::{gemini::GeminiFeedSource, FeedSynchronizer};
//! use rejuvana::SiteConfig;
//!
//! let config = SiteConfig::load_or_default("rejuvana.toml")?;
//! let source = GeminiFeedSource::new(&config.feed, config.feed_api_key()?)?;
//!
//! let mut feed = FeedSynchronizer::new(config.feed.account());
//! feed.sync(&source, false).await;
//! for post in feed.posts() {
//!     println!("{} {}", post.timestamp, post.caption);
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `server` | Native transports, TOML loading and CLI (default) |
//! | `ui` | Embed and serve the built frontend from the binary |
//!
//! ## Modules
//!
//! - [`content`] - Wellness guides and hero tag-lines
//! - [`navigation`] - Active page and section scrolling
//! - [`feed`] - Directory feed synchronizer and API schema
//! - [`lead`] - Contact form and CRM submission flow
//! - [`types`] - Pages, sections and error handling
//! - [`utils`] - Configuration

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(rustdoc::missing_crate_level_docs)]

/// Static file server for the embedded frontend.
#[cfg(feature = "ui")]
pub mod api;
/// Command-line interface.
#[cfg(feature = "server")]
pub mod cli;
/// Bundled site content.
pub mod content;
/// Social directory feed.
pub mod feed;
/// Contact form leads.
pub mod lead;
/// View model for page and section navigation.
pub mod navigation;
/// Core types (pages, sections, errors).
pub mod types;
/// Configuration utilities.
pub mod utils;

// Re-export commonly used types
pub use feed::{FeedError, FeedSource, FeedSynchronizer, SocialPost};
pub use lead::{LeadForm, LeadSink, LeadSubmission, SubmissionState, SubmitError};
pub use navigation::{ScrollPlan, ViewModel, Viewport};
pub use types::{AppError, NavigationRequest, Page, Result, Section};
pub use utils::config::SiteConfig;

//! Directory feed state machine
//!
//! A sync is split into [`FeedSynchronizer::begin`] and
//! [`FeedSynchronizer::complete`] so the UI can hold the state in a signal
//! while the request runs. Each `begin` hands out a ticket; completing with a
//! ticket from an earlier generation (after [`FeedSynchronizer::cancel`] or a
//! newer sync) is ignored.

use super::{fallback_posts, FeedAccount, FeedBatch, FeedError, FeedSource, GroundingSource, SocialPost};
use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

/// Notice shown while cached or fallback posts are displayed
pub const FEED_UNAVAILABLE_NOTICE: &str =
    "Synchronizing with real-time sources... (Serving cached high-fidelity data)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncMode {
    /// First load, nothing to show yet
    InitialLoad,
    /// User asked for a refresh; existing posts stay visible
    Syncing,
    Settled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncTicket {
    generation: u64,
}

#[derive(Debug, Clone)]
pub struct FeedSynchronizer {
    account: FeedAccount,
    posts: Vec<SocialPost>,
    sources: Vec<GroundingSource>,
    mode: SyncMode,
    in_flight: Option<u64>,
    generation: u64,
    last_error: Option<String>,
    last_synced_at: Option<DateTime<Utc>>,
}

impl FeedSynchronizer {
    /// A synchronizer that has not fetched anything yet
    pub fn new(account: FeedAccount) -> Self {
        Self {
            account,
            posts: Vec::new(),
            sources: Vec::new(),
            mode: SyncMode::InitialLoad,
            in_flight: None,
            generation: 0,
            last_error: None,
            last_synced_at: None,
        }
    }

    pub fn account(&self) -> &FeedAccount {
        &self.account
    }

    pub fn posts(&self) -> &[SocialPost] {
        &self.posts
    }

    pub fn sources(&self) -> &[GroundingSource] {
        &self.sources
    }

    pub fn mode(&self) -> SyncMode {
        self.mode
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn last_synced_at(&self) -> Option<DateTime<Utc>> {
        self.last_synced_at
    }

    /// Skeletons are shown only during the initial load
    pub fn is_loading(&self) -> bool {
        self.mode == SyncMode::InitialLoad
    }

    pub fn is_background_syncing(&self) -> bool {
        self.mode == SyncMode::Syncing
    }

    pub fn can_refresh(&self) -> bool {
        self.in_flight.is_none()
    }

    /// Start a sync. Returns `None` while another one is in flight.
    ///
    /// `manual` marks a user-triggered refresh; otherwise the synchronizer
    /// goes back to the initial-load state.
    pub fn begin(&mut self, manual: bool) -> Option<SyncTicket> {
        if self.in_flight.is_some() {
            debug!("Feed sync already in flight, ignoring request");
            return None;
        }

        self.generation += 1;
        self.in_flight = Some(self.generation);
        self.mode = if manual {
            SyncMode::Syncing
        } else {
            SyncMode::InitialLoad
        };
        self.last_error = None;

        Some(SyncTicket {
            generation: self.generation,
        })
    }

    /// Apply the outcome of a sync. Returns `false` for stale tickets.
    pub fn complete(
        &mut self,
        ticket: SyncTicket,
        outcome: Result<FeedBatch, FeedError>,
        now: DateTime<Utc>,
    ) -> bool {
        if self.in_flight != Some(ticket.generation) {
            debug!(generation = ticket.generation, "Discarding stale feed result");
            return false;
        }

        match outcome {
            Ok(batch) => {
                info!(
                    posts = batch.posts.len(),
                    sources = batch.sources.len(),
                    "Feed synchronized"
                );
                self.posts = batch.posts;
                self.sources = batch.sources;
                self.last_synced_at = Some(now);
                self.last_error = None;
            }
            Err(e) => {
                warn!("Failed to fetch live feed: {}", e);
                if self.posts.is_empty() {
                    self.posts = fallback_posts(&self.account, now);
                }
                self.last_error = Some(e.user_message().to_string());
            }
        }

        self.in_flight = None;
        self.mode = SyncMode::Settled;
        true
    }

    /// Invalidate any outstanding ticket
    pub fn cancel(&mut self) {
        if self.in_flight.take().is_some() {
            debug!("Feed sync cancelled");
            self.mode = SyncMode::Settled;
        }
        self.generation += 1;
    }

    /// Run one full cycle against `source`
    pub async fn sync(&mut self, source: &dyn FeedSource, manual: bool) -> bool {
        let Some(ticket) = self.begin(manual) else {
            return false;
        };
        let outcome = source.fetch_latest().await;
        self.complete(ticket, outcome, Utc::now())
    }
}

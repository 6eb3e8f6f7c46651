//! Submission state machine for the contact form

use super::{CrmContact, LeadError, LeadForm, LeadSink, SubmitError};
use crate::utils::config::LeadConfig;
use chrono::{DateTime, Utc};
use std::time::Duration;
use tracing::{debug, info, warn};

/// How long an error stays on screen before the form resets to idle
pub const ERROR_RESET_DELAY: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Syncing,
    Success,
    Error(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionTicket {
    generation: u64,
}

#[derive(Debug, Clone)]
pub struct LeadSubmission {
    config: LeadConfig,
    form: LeadForm,
    state: SubmissionState,
    generation: u64,
    in_flight: Option<u64>,
    error_since: Option<DateTime<Utc>>,
}

impl LeadSubmission {
    pub fn new(config: LeadConfig) -> Self {
        Self {
            config,
            form: LeadForm::default(),
            state: SubmissionState::Idle,
            generation: 0,
            in_flight: None,
            error_since: None,
        }
    }

    pub fn form(&self) -> &LeadForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut LeadForm {
        &mut self.form
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn is_syncing(&self) -> bool {
        self.state == SubmissionState::Syncing
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.state {
            SubmissionState::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Validate the form and move to `Syncing`.
    ///
    /// On error nothing changes. The returned contact is what the sink should
    /// receive.
    pub fn begin(&mut self) -> Result<(SubmissionTicket, CrmContact), LeadError> {
        if self.in_flight.is_some() {
            return Err(LeadError::InFlight);
        }
        let contact = CrmContact::from_form(&self.form, &self.config)?;

        self.generation += 1;
        self.in_flight = Some(self.generation);
        self.state = SubmissionState::Syncing;
        self.error_since = None;
        debug!(generation = self.generation, "Lead submission started");

        Ok((
            SubmissionTicket {
                generation: self.generation,
            },
            contact,
        ))
    }

    /// Apply the transport outcome. Returns `false` for stale tickets.
    pub fn complete(
        &mut self,
        ticket: SubmissionTicket,
        outcome: Result<(), SubmitError>,
        now: DateTime<Utc>,
    ) -> bool {
        if self.in_flight != Some(ticket.generation) {
            debug!(generation = ticket.generation, "Discarding stale lead result");
            return false;
        }
        self.in_flight = None;

        match outcome {
            Ok(()) => {
                info!("Lead accepted by CRM");
                self.form.clear();
                self.state = SubmissionState::Success;
            }
            Err(e) => {
                warn!("Lead submission failed: {}", e);
                self.state = SubmissionState::Error(e.user_message().to_string());
                self.error_since = Some(now);
            }
        }
        true
    }

    /// Return to `Idle` once an error has been shown for [`ERROR_RESET_DELAY`]
    pub fn expire_error(&mut self, now: DateTime<Utc>) -> bool {
        let Some(since) = self.error_since else {
            return false;
        };
        let elapsed = (now - since).to_std().unwrap_or(Duration::ZERO);
        if elapsed < ERROR_RESET_DELAY {
            return false;
        }
        self.error_since = None;
        self.state = SubmissionState::Idle;
        true
    }

    /// Close the confirmation surface
    pub fn dismiss(&mut self) -> bool {
        if self.state != SubmissionState::Success {
            return false;
        }
        self.state = SubmissionState::Idle;
        true
    }

    /// Invalidate an outstanding submission
    pub fn cancel(&mut self) {
        if self.in_flight.take().is_some() {
            debug!("Lead submission cancelled");
            self.state = SubmissionState::Idle;
        }
        self.generation += 1;
    }

    /// Run one submission against `sink`. Returns whether the outcome was applied.
    pub async fn submit(&mut self, sink: &dyn LeadSink) -> Result<bool, LeadError> {
        let (ticket, contact) = self.begin()?;
        let outcome = sink.create_contact(&contact).await;
        Ok(self.complete(ticket, outcome, Utc::now()))
    }
}

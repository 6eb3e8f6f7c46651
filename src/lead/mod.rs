//! Contact form leads
//!
//! The join-community form collects a name, an email and a short message and
//! forwards them to the CRM as a contact. [`submission::LeadSubmission`]
//! tracks the request; this module holds the form, the CRM payload and the
//! transport seam.

pub mod submission;

#[cfg(feature = "server")]
pub mod crm;

pub use submission::{LeadSubmission, SubmissionState, SubmissionTicket, ERROR_RESET_DELAY};

use crate::utils::config::LeadConfig;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Longest message the form accepts
pub const MESSAGE_MAX_CHARS: usize = 150;

/// Surname sent when the visitor gives a single name
pub const SURNAME_PLACEHOLDER: &str = "-";

/// Contact form fields as typed by the visitor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadForm {
    name: String,
    email: String,
    message: String,
}

impl LeadForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        let mut form = Self::default();
        form.set_name(name);
        form.set_email(email);
        form.set_message(message);
        form
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    /// Input past [`MESSAGE_MAX_CHARS`] is dropped
    pub fn set_message(&mut self, message: impl Into<String>) {
        let message = message.into();
        self.message = if message.chars().count() > MESSAGE_MAX_CHARS {
            message.chars().take(MESSAGE_MAX_CHARS).collect()
        } else {
            message
        };
    }

    pub fn remaining_chars(&self) -> usize {
        MESSAGE_MAX_CHARS.saturating_sub(self.message.chars().count())
    }

    /// First empty field, if any
    pub fn missing_field(&self) -> Option<&'static str> {
        [
            ("name", &self.name),
            ("email", &self.email),
            ("message", &self.message),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
    }

    pub fn is_complete(&self) -> bool {
        self.missing_field().is_none()
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
    }
}

/// Contact record in the CRM's field names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrmContact {
    pub email: String,
    pub name: String,
    pub surname: String,
    pub note: String,
}

impl CrmContact {
    pub fn from_form(form: &LeadForm, config: &LeadConfig) -> Result<Self, LeadError> {
        if let Some(field) = form.missing_field() {
            return Err(LeadError::Incomplete(field));
        }

        let (name, surname) = split_name(form.name());
        Ok(Self {
            email: form.email().trim().to_string(),
            name,
            surname,
            note: compose_note(&config.routing_tag, form.message(), config.note_limit),
        })
    }
}

/// First whitespace token is the first name; the rest is the surname
pub fn split_name(full_name: &str) -> (String, String) {
    let mut tokens = full_name.split_whitespace();
    let first = tokens.next().unwrap_or_default().to_string();
    let rest = tokens.collect::<Vec<_>>().join(" ");
    let surname = if rest.is_empty() {
        SURNAME_PLACEHOLDER.to_string()
    } else {
        rest
    };
    (first, surname)
}

/// `[tag] message`, cut to `limit` characters
pub fn compose_note(routing_tag: &str, message: &str, limit: usize) -> String {
    let note = if routing_tag.is_empty() {
        message.trim().to_string()
    } else {
        format!("[{}] {}", routing_tag, message.trim())
    };
    note.chars().take(limit).collect()
}

/// Local precondition failures; the state machine is left untouched
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LeadError {
    #[error("Field '{0}' is required")]
    Incomplete(&'static str),

    #[error("A submission is already in progress")]
    InFlight,
}

/// Failures reported by the CRM transport
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// The CRM refused the contact (4xx)
    #[error("CRM rejected the contact with status {0}")]
    Rejected(u16),

    /// Server error, timeout or network failure
    #[error("CRM unavailable: {0}")]
    Unavailable(String),
}

impl SubmitError {
    /// Classify a non-2xx status. Timeouts and rate limits count as unavailable.
    pub fn from_status(status: u16) -> Self {
        match status {
            408 | 429 => SubmitError::Unavailable(format!("status {}", status)),
            400..=499 => SubmitError::Rejected(status),
            _ => SubmitError::Unavailable(format!("status {}", status)),
        }
    }

    pub fn user_message(&self) -> &'static str {
        match self {
            SubmitError::Rejected(_) => {
                "We couldn't accept those details. Please check your email address and try again."
            }
            SubmitError::Unavailable(_) => {
                "We encountered a temporary connection issue. Please try again."
            }
        }
    }
}

/// Anything that can deliver a contact to the CRM
#[async_trait(?Send)]
pub trait LeadSink {
    async fn create_contact(&self, contact: &CrmContact) -> Result<(), SubmitError>;
}

//! Contact form state: the draft being typed and the outcome of the last send.
//!
//! # Invariants
//! - Each edit replaces exactly one field of the draft.
//! - At most one delivery is in flight per channel; a submit while pending is
//!   suppressed, not queued.
//! - A failed send leaves the draft untouched so the user can retry.

use crate::config::DeliveryConfig;
use crate::delivery::{DeliveryError, DeliveryRequest, MessageDelivery};
use std::cell::RefCell;
use std::collections::BTreeMap;
use thiserror::Error;

pub const SUCCESS_BANNER: &str = "Message sent successfully! I'll get back to you soon.";
pub const ERROR_BANNER: &str =
    "Failed to send message. Please try again or contact me directly via email.";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 3] = [Self::Name, Self::Email, Self::Message];

    /// Form control `name` attribute for this field.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{} is required", .0.as_str())]
    Missing(ContactField),
    #[error("email address is malformed")]
    InvalidEmail,
}

impl ValidationError {
    /// The field the error should be reported on.
    pub fn field(self) -> ContactField {
        match self {
            Self::Missing(field) => field,
            Self::InvalidEmail => ContactField::Email,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Message => &mut self.message,
        };
        *slot = value.into();
    }

    /// Input-layer checks: all fields present, email shaped like an address.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for field in ContactField::ALL {
            if self.get(field).trim().is_empty() {
                return Err(ValidationError::Missing(field));
            }
        }
        if !is_valid_email(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }
        Ok(())
    }
}

/// Basic `local@domain.tld` shape; no attempt at full RFC 5322.
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !domain.contains("..")
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Pending,
    Success,
    Error,
}

impl SubmitStatus {
    pub fn is_pending(self) -> bool {
        self == Self::Pending
    }

    pub fn banner(self) -> Option<&'static str> {
        match self {
            Self::Success => Some(SUCCESS_BANNER),
            Self::Error => Some(ERROR_BANNER),
            Self::Idle | Self::Pending => None,
        }
    }

    pub fn button_label(self) -> &'static str {
        if self.is_pending() {
            "Sending..."
        } else {
            "Send Message"
        }
    }
}

pub struct ContactChannel {
    draft: ContactSubmission,
    status: SubmitStatus,
    config: DeliveryConfig,
    last_error: Option<DeliveryError>,
}

impl ContactChannel {
    pub fn new(config: DeliveryConfig) -> Self {
        Self {
            draft: ContactSubmission::default(),
            status: SubmitStatus::Idle,
            config,
            last_error: None,
        }
    }

    pub fn draft(&self) -> &ContactSubmission {
        &self.draft
    }

    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    pub fn last_error(&self) -> Option<&DeliveryError> {
        self.last_error.as_ref()
    }

    pub fn set_field(&mut self, field: ContactField, value: impl Into<String>) {
        self.draft.set(field, value);
    }

    /// Package the draft with the fixed recipient label.
    pub fn request(&self) -> DeliveryRequest {
        let mut params = BTreeMap::new();
        params.insert("from_name".to_string(), self.draft.name.clone());
        params.insert("from_email".to_string(), self.draft.email.clone());
        params.insert("message".to_string(), self.draft.message.clone());
        params.insert("to_name".to_string(), self.config.recipient_name.clone());
        DeliveryRequest::from_config(&self.config, params)
    }

    /// Enter the pending state and hand back the request to send.
    /// `None` while a previous send is still in flight.
    pub fn begin_submit(&mut self) -> Option<DeliveryRequest> {
        if self.status.is_pending() {
            log::debug!("[contact] submit suppressed; delivery already pending");
            return None;
        }
        self.status = SubmitStatus::Pending;
        self.last_error = None;
        Some(self.request())
    }

    /// Record the delivery outcome and leave the pending state.
    pub fn finish_submit(&mut self, outcome: Result<(), DeliveryError>) -> SubmitStatus {
        if !self.status.is_pending() {
            log::warn!("[contact] delivery outcome arrived with no send pending");
        }
        self.status = match outcome {
            Ok(()) => {
                self.draft = ContactSubmission::default();
                SubmitStatus::Success
            }
            Err(err) => {
                log::error!("[contact] message delivery failed: {err}");
                self.last_error = Some(err);
                SubmitStatus::Error
            }
        };
        self.status
    }
}

/// Run one submit cycle against `delivery`.
///
/// `on_change` sees the channel after it enters pending and again after the
/// outcome is recorded. No borrow of `channel` is held across the await, so
/// re-entrant submits observe the pending state and are suppressed. Returns
/// `None` when the submit was suppressed.
pub async fn submit<D: MessageDelivery>(
    channel: &RefCell<ContactChannel>,
    delivery: &D,
    mut on_change: impl FnMut(&ContactChannel),
) -> Option<SubmitStatus> {
    let request = {
        let mut ch = channel.borrow_mut();
        let request = ch.begin_submit()?;
        on_change(&ch);
        request
    };
    let outcome = delivery.deliver(&request).await;
    let mut ch = channel.borrow_mut();
    let status = ch.finish_submit(outcome);
    on_change(&ch);
    Some(status)
}

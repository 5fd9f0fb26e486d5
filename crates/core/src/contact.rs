//! # Contact Form
//!
//! Validation and delivery for contact submissions. Submissions are
//! transient: they exist for one submit cycle and are never persisted.
//! Delivery is simulated with a fixed delay; the `Result` signature is kept
//! so a real transport can slot in and fail.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::time::Duration;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// How long the simulated delivery step takes
pub const DELIVERY_DELAY: Duration = Duration::from_secs(2);

/// Raw contact form input, as posted
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// A submission that passed validation
#[derive(Debug, Clone)]
pub struct ValidatedSubmission(pub ContactSubmission);

/// Per-field validation messages. Every failing field is reported, not
/// just the first.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FieldErrors {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.subject.is_none()
            && self.message.is_none()
    }
}

/// Delivery failure surfaced to the user as a transient notice. The
/// simulated transport never produces one.
#[derive(Debug, thiserror::Error)]
#[error("message delivery failed: {0}")]
pub struct DeliveryError(pub String);

/// Validate the four fields. Lengths count characters, not bytes.
pub fn validate(form: &ContactSubmission) -> Result<ValidatedSubmission, FieldErrors> {
    let mut errors = FieldErrors::default();

    if form.name.chars().count() < 2 {
        errors.name = Some("Name must be at least 2 characters".to_string());
    }
    if !EMAIL_RE.is_match(&form.email) {
        errors.email = Some("Please enter a valid email address".to_string());
    }
    if form.subject.chars().count() < 5 {
        errors.subject = Some("Subject must be at least 5 characters".to_string());
    }
    if form.message.chars().count() < 10 {
        errors.message = Some("Message must be at least 10 characters".to_string());
    }

    if errors.is_empty() {
        Ok(ValidatedSubmission(form.clone()))
    } else {
        Err(errors)
    }
}

/// Deliver a validated submission. Waits out the fixed delay and succeeds;
/// a real mail transport replaces the sleep and may return `DeliveryError`.
pub async fn deliver(submission: &ValidatedSubmission) -> Result<(), DeliveryError> {
    tokio::time::sleep(DELIVERY_DELAY).await;
    tracing::info!(
        from = %submission.0.email,
        subject = %submission.0.subject,
        "contact message accepted"
    );
    Ok(())
}

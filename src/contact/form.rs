//! Contact form state kept in the browser.
//!
//! The form moves `Idle → Submitting → Success | Error`. While a submission
//! is in flight every further submit is refused, so one form never has two
//! requests racing. A success clears the fields and goes back to `Idle` after
//! [`SUCCESS_DISPLAY`]; an error keeps whatever the visitor typed.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Same-origin endpoint the form posts to.
pub const CONTACT_ENDPOINT: &str = "/api/contact";
/// How long the success confirmation stays up.
pub const SUCCESS_DISPLAY: Duration = Duration::from_secs(5);

pub const SERVICES: [&str; 5] = [
    "Web Development",
    "Mobile App",
    "UI/UX Design",
    "Consulting",
    "Other",
];
pub const BUDGETS: [&str; 4] = ["< $1k", "$1k - $5k", "$5k - $10k", "$10k+"];

const DEFAULT_SERVICE: &str = SERVICES[0];
const DEFAULT_BUDGET: &str = BUDGETS[1];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Service,
    Budget,
    Message,
}

/// Values sent to the contact endpoint. Field names go out verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFormValues {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub subject: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub service: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub budget: String,
    pub message: String,
}

impl Default for ContactFormValues {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            subject: String::new(),
            service: DEFAULT_SERVICE.to_string(),
            budget: DEFAULT_BUDGET.to_string(),
            message: String::new(),
        }
    }
}

impl ContactFormValues {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Service => &self.service,
            Field::Budget => &self.budget,
            Field::Message => &self.message,
        }
    }

    fn slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Service => &mut self.service,
            Field::Budget => &mut self.budget,
            Field::Message => &mut self.message,
        }
    }

    pub fn missing_required(&self) -> Vec<Field> {
        [Field::Name, Field::Email, Field::Message]
            .into_iter()
            .filter(|f| self.get(*f).trim().is_empty())
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("There was an issue sending your message. Please try again.")]
    Rejected(u16),
    #[error("Network error. Please try again later.")]
    Network(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    values: ContactFormValues,
    status: SubmissionStatus,
    validation: Option<String>,
    attempt: u64,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn values(&self) -> &ContactFormValues {
        &self.values
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    pub fn validation_error(&self) -> Option<&str> {
        self.validation.as_deref()
    }

    /// Number of submissions started so far.
    pub fn attempt(&self) -> u64 {
        self.attempt
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmissionStatus::Submitting
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        *self.values.slot(field) = value.into();
        self.validation = None;
    }

    /// Starts a submission and returns the values to send, or `None` when a
    /// submission is already in flight or a required field is blank.
    pub fn begin_submit(&mut self) -> Option<ContactFormValues> {
        if self.is_submitting() {
            return None;
        }
        if !self.values.missing_required().is_empty() {
            self.validation = Some("Please fill in your name, email and message.".to_string());
            return None;
        }
        self.validation = None;
        self.attempt += 1;
        self.status = SubmissionStatus::Submitting;
        Some(self.values.clone())
    }

    /// Records the outcome of the in-flight submission.
    pub fn finish(&mut self, outcome: Result<(), SubmitError>) {
        if !self.is_submitting() {
            return;
        }
        match outcome {
            Ok(()) => {
                self.values = ContactFormValues::default();
                self.status = SubmissionStatus::Success;
            }
            Err(e) => {
                log::error!("Submission error: {e:?}");
                self.status = SubmissionStatus::Error(e.to_string());
            }
        }
    }

    /// Hides the confirmation of submission `attempt`. A later submission's
    /// success is left alone.
    pub fn expire_success(&mut self, attempt: u64) {
        if self.status == SubmissionStatus::Success && self.attempt == attempt {
            self.status = SubmissionStatus::Idle;
        }
    }

    pub fn dismiss(&mut self) {
        if !self.is_submitting() {
            self.status = SubmissionStatus::Idle;
        }
    }
}

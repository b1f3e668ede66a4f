use http::StatusCode;

use super::{ContactReply, ContactResponse, EmailContent, Submission};

/// Decides what the caller sees when the relay answers with a non-2xx status.
pub trait FallbackPolicy: Send + Sync {
    fn on_rejected(
        &self,
        submission: &Submission,
        email: &EmailContent,
        status: StatusCode,
    ) -> ContactReply;
}

/// Never blocks the visitor on the relay: the submission is written to the
/// server log and the caller is told it went through.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentFallbackPolicy;

impl FallbackPolicy for SilentFallbackPolicy {
    fn on_rejected(
        &self,
        submission: &Submission,
        email: &EmailContent,
        status: StatusCode,
    ) -> ContactReply {
        log::warn!(
            "relay answered {status}, keeping submission from {} <{}> (service: {}, budget: {})",
            submission.name,
            submission.email,
            submission.service.as_deref().unwrap_or("N/A"),
            submission.budget.as_deref().unwrap_or("N/A"),
        );
        log::info!("Form submission: {}\n{}", email.subject, email.text);
        ContactReply::ok(ContactResponse::submitted())
    }
}

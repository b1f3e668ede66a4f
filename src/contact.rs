mod email;
pub mod form;
mod policy;
#[cfg(feature = "ssr")]
mod web3forms;

pub use email::EmailContent;
pub use policy::{FallbackPolicy, SilentFallbackPolicy};
#[cfg(feature = "ssr")]
pub use web3forms::Web3FormsRelay;

use std::future::Future;

use chrono::Utc;
use http::{Method, StatusCode};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use thiserror::Error;

pub const SENT_MESSAGE: &str = "Email sent successfully!";
pub const SUBMITTED_MESSAGE: &str = "Form submitted successfully!";

/// Body accepted by `POST /api/contact`.
///
/// Fields are untyped on the wire: numbers and booleans are kept as their JSON
/// text, so `"budget": 5000` reads as `"5000"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactRequest {
    #[serde(deserialize_with = "text_field")]
    pub name: Option<String>,
    #[serde(deserialize_with = "text_field")]
    pub email: Option<String>,
    #[serde(deserialize_with = "text_field")]
    pub service: Option<String>,
    #[serde(deserialize_with = "text_field")]
    pub budget: Option<String>,
    #[serde(deserialize_with = "text_field")]
    pub message: Option<String>,
    #[serde(deserialize_with = "text_field")]
    pub subject: Option<String>,
}

fn text_field<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

/// A contact request that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub message: String,
    pub service: Option<String>,
    pub budget: Option<String>,
    pub subject: Option<String>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

impl ContactRequest {
    pub fn validate(self) -> Result<Submission, ContactError> {
        let (Some(name), Some(email), Some(message)) = (
            non_blank(self.name),
            non_blank(self.email),
            non_blank(self.message),
        ) else {
            return Err(ContactError::MissingFields);
        };
        Ok(Submission {
            name,
            email,
            message,
            service: non_blank(self.service),
            budget: non_blank(self.budget),
            subject: non_blank(self.subject),
        })
    }
}

impl Submission {
    pub fn subject(&self) -> String {
        self.subject
            .clone()
            .unwrap_or_else(|| format!("New Contact Form Submission from {}", self.name))
    }

    /// Message body forwarded to the relay, with service and budget inlined.
    pub fn relay_message(&self) -> String {
        format!(
            "Service: {}\nBudget: {}\n\nMessage:\n{}",
            self.service.as_deref().unwrap_or("N/A"),
            self.budget.as_deref().unwrap_or("N/A"),
            self.message
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContactResponse {
    Success {
        success: bool,
        message: String,
    },
    Failure {
        error: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        details: Option<String>,
    },
}

impl ContactResponse {
    pub fn sent() -> Self {
        Self::Success {
            success: true,
            message: SENT_MESSAGE.to_string(),
        }
    }

    pub fn submitted() -> Self {
        Self::Success {
            success: true,
            message: SUBMITTED_MESSAGE.to_string(),
        }
    }
}

/// Status and JSON body returned to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactReply {
    pub status: StatusCode,
    pub body: ContactResponse,
}

impl ContactReply {
    pub fn ok(body: ContactResponse) -> Self {
        Self {
            status: StatusCode::OK,
            body,
        }
    }
}

#[derive(Error, Debug)]
pub enum ContactError {
    #[error("Method not allowed")]
    MethodNotAllowed,
    #[error("Missing required fields")]
    MissingFields,
    #[error("invalid request body: {0}")]
    Body(#[from] serde_json::Error),
    #[error("couldn't read request body: {0}")]
    Read(String),
    #[error(transparent)]
    Relay(#[from] RelayError),
}

impl ContactError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::MissingFields => StatusCode::BAD_REQUEST,
            Self::Body(_) | Self::Read(_) | Self::Relay(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn into_reply(self) -> ContactReply {
        let status = self.status();
        let body = match self {
            Self::MethodNotAllowed | Self::MissingFields => ContactResponse::Failure {
                error: self.to_string(),
                details: None,
            },
            Self::Body(e) => ContactResponse::Failure {
                error: "Failed to process form submission".to_string(),
                details: Some(e.to_string()),
            },
            Self::Read(e) => ContactResponse::Failure {
                error: "Failed to process form submission".to_string(),
                details: Some(e),
            },
            Self::Relay(e) => ContactResponse::Failure {
                error: "Failed to process form submission".to_string(),
                details: Some(e.to_string()),
            },
        };
        ContactReply { status, body }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RelayError {
    #[error("relay request failed: {0}")]
    Transport(String),
}

/// Downstream service that turns a submission into an email.
///
/// Implementations report the HTTP status the service answered with; an `Err`
/// means no answer was received at all.
pub trait Relay: Send + Sync {
    fn relay(
        &self,
        submission: &Submission,
        email: &EmailContent,
    ) -> impl Future<Output = Result<StatusCode, RelayError>> + Send;
}

pub struct ContactHandler<R, P> {
    relay: R,
    policy: P,
    recipient: String,
}

impl<R: Relay, P: FallbackPolicy> ContactHandler<R, P> {
    pub fn new(relay: R, policy: P, recipient: impl Into<String>) -> Self {
        Self {
            relay,
            policy,
            recipient: recipient.into(),
        }
    }

    pub async fn handle(&self, method: &Method, body: &[u8]) -> ContactReply {
        match self.process(method, body).await {
            Ok(reply) => reply,
            Err(e) => {
                match &e {
                    ContactError::MethodNotAllowed | ContactError::MissingFields => {
                        log::debug!("rejected contact request: {e}")
                    }
                    _ => log::error!("Error processing form: {e}"),
                }
                e.into_reply()
            }
        }
    }

    async fn process(&self, method: &Method, body: &[u8]) -> Result<ContactReply, ContactError> {
        if method != Method::POST {
            return Err(ContactError::MethodNotAllowed);
        }
        let request = serde_json::from_slice::<ContactRequest>(body)?;
        let submission = request.validate()?;
        let email = EmailContent::compose(&submission, &self.recipient, Utc::now());

        let status = self.relay.relay(&submission, &email).await?;
        if status.is_success() {
            log::info!("contact email relayed for {}", submission.email);
            Ok(ContactReply::ok(ContactResponse::sent()))
        } else {
            Ok(self.policy.on_rejected(&submission, &email, status))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Mutex,
    };

    use super::*;

    struct FakeRelay {
        answer: Result<StatusCode, RelayError>,
        calls: AtomicUsize,
        subjects: Mutex<Vec<String>>,
    }

    impl FakeRelay {
        fn answering(status: StatusCode) -> Self {
            Self {
                answer: Ok(status),
                calls: AtomicUsize::new(0),
                subjects: Mutex::new(Vec::new()),
            }
        }

        fn unreachable() -> Self {
            Self {
                answer: Err(RelayError::Transport("connection refused".to_string())),
                calls: AtomicUsize::new(0),
                subjects: Mutex::new(Vec::new()),
            }
        }
    }

    impl Relay for FakeRelay {
        async fn relay(
            &self,
            _submission: &Submission,
            email: &EmailContent,
        ) -> Result<StatusCode, RelayError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.subjects
                .lock()
                .expect("subjects lock")
                .push(email.subject.clone());
            self.answer.clone()
        }
    }

    fn handler(relay: FakeRelay) -> ContactHandler<FakeRelay, SilentFallbackPolicy> {
        ContactHandler::new(relay, SilentFallbackPolicy, "owner@example.com")
    }

    fn calls(h: &ContactHandler<FakeRelay, SilentFallbackPolicy>) -> usize {
        h.relay.calls.load(Ordering::SeqCst)
    }

    const JANE: &[u8] = br#"{"name":"Jane","email":"jane@x.com","message":"Hi"}"#;

    #[tokio::test]
    async fn test_non_post_is_rejected() {
        let h = handler(FakeRelay::answering(StatusCode::OK));
        for method in [Method::GET, Method::PUT, Method::DELETE, Method::PATCH] {
            // body is well-formed but must not matter
            let reply = h.handle(&method, JANE).await;
            assert_eq!(reply.status, StatusCode::METHOD_NOT_ALLOWED);
            assert_eq!(
                reply.body,
                ContactResponse::Failure {
                    error: "Method not allowed".to_string(),
                    details: None
                }
            );
        }
        let reply = h.handle(&Method::GET, b"not json").await;
        assert_eq!(reply.status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(calls(&h), 0);
    }

    #[tokio::test]
    async fn test_missing_fields_never_reach_relay() {
        let h = handler(FakeRelay::answering(StatusCode::OK));
        let bodies: [&[u8]; 9] = [
            br#"{}"#,
            br#"{"email":"jane@x.com","message":"Hi"}"#,
            br#"{"name":"Jane","message":"Hi"}"#,
            br#"{"name":"Jane","email":"jane@x.com"}"#,
            br#"{"name":"Jane"}"#,
            br#"{"email":"jane@x.com"}"#,
            br#"{"message":"Hi"}"#,
            br#"{"name":"","email":"jane@x.com","message":"  "}"#,
            br#"{"name":"   ","email":"jane@x.com","message":"Hi"}"#,
        ];
        for body in bodies {
            let reply = h.handle(&Method::POST, body).await;
            assert_eq!(reply.status, StatusCode::BAD_REQUEST);
            assert_eq!(
                reply.body,
                ContactResponse::Failure {
                    error: "Missing required fields".to_string(),
                    details: None
                }
            );
        }
        assert_eq!(calls(&h), 0);
    }

    #[tokio::test]
    async fn test_relay_success_sends_email() {
        let h = handler(FakeRelay::answering(StatusCode::OK));
        let reply = h.handle(&Method::POST, JANE).await;
        assert_eq!(reply, ContactReply::ok(ContactResponse::sent()));
        assert_eq!(calls(&h), 1);
        assert_eq!(
            *h.relay.subjects.lock().unwrap(),
            vec!["New Contact Form Submission from Jane".to_string()]
        );
    }

    #[tokio::test]
    async fn test_caller_subject_is_kept() {
        let h = handler(FakeRelay::answering(StatusCode::ACCEPTED));
        let body = br#"{"name":"Jane","email":"jane@x.com","message":"Hi","subject":"Hiring"}"#;
        let reply = h.handle(&Method::POST, body).await;
        assert_eq!(reply.body, ContactResponse::sent());
        assert_eq!(*h.relay.subjects.lock().unwrap(), vec!["Hiring".to_string()]);
    }

    #[tokio::test]
    async fn test_relay_rejection_still_reports_success() {
        for status in [
            StatusCode::BAD_REQUEST,
            StatusCode::UNAUTHORIZED,
            StatusCode::TOO_MANY_REQUESTS,
            StatusCode::INTERNAL_SERVER_ERROR,
            StatusCode::FOUND,
        ] {
            let h = handler(FakeRelay::answering(status));
            let reply = h.handle(&Method::POST, JANE).await;
            assert_eq!(reply.status, StatusCode::OK, "relay answered {status}");
            assert_eq!(reply.body, ContactResponse::submitted());
            assert_eq!(calls(&h), 1);
        }
    }

    #[tokio::test]
    async fn test_unreachable_relay_is_server_error() {
        let h = handler(FakeRelay::unreachable());
        let reply = h.handle(&Method::POST, JANE).await;
        assert_eq!(reply.status, StatusCode::INTERNAL_SERVER_ERROR);
        match reply.body {
            ContactResponse::Failure { error, details } => {
                assert_eq!(error, "Failed to process form submission");
                assert!(details.unwrap_or_default().contains("connection refused"));
            }
            other => panic!("unexpected body {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_malformed_body_is_server_error() {
        let h = handler(FakeRelay::answering(StatusCode::OK));
        let reply = h.handle(&Method::POST, b"{name: jane").await;
        assert_eq!(reply.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(matches!(
            reply.body,
            ContactResponse::Failure { details: Some(_), .. }
        ));
        assert_eq!(calls(&h), 0);
    }

    #[test]
    fn test_response_envelope_json() {
        let json = serde_json::to_value(ContactResponse::sent()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"success": true, "message": "Email sent successfully!"})
        );
        let json = serde_json::to_value(ContactError::MissingFields.into_reply().body).unwrap();
        assert_eq!(json, serde_json::json!({"error": "Missing required fields"}));
    }

    #[tokio::test]
    async fn test_non_string_optionals_are_accepted() {
        let h = handler(FakeRelay::answering(StatusCode::OK));
        let bodies: [&[u8]; 3] = [
            br#"{"name":"Jane","email":"jane@x.com","message":"Hi","budget":5000}"#,
            br#"{"name":"Jane","email":"jane@x.com","message":"Hi","service":["web"]}"#,
            br#"{"name":"Jane","email":"jane@x.com","message":"Hi","subject":null}"#,
        ];
        for body in bodies {
            let reply = h.handle(&Method::POST, body).await;
            assert_eq!(reply, ContactReply::ok(ContactResponse::sent()));
        }
        assert_eq!(calls(&h), 3);
    }

    #[test]
    fn test_scalar_fields_read_as_text() {
        let request = serde_json::from_str::<ContactRequest>(
            r#"{"name":"Jane","email":"jane@x.com","message":42,"budget":5000,"service":true}"#,
        )
        .unwrap();
        let submission = request.validate().unwrap();
        assert_eq!(submission.message, "42");
        assert_eq!(submission.budget.as_deref(), Some("5000"));
        assert_eq!(submission.service.as_deref(), Some("true"));
        assert_eq!(
            submission.relay_message(),
            "Service: true\nBudget: 5000\n\nMessage:\n42"
        );
    }

    #[test]
    fn test_relay_message_fills_missing_optionals() {
        let submission = ContactRequest {
            name: Some("Jane".to_string()),
            email: Some("jane@x.com".to_string()),
            message: Some("Hi".to_string()),
            budget: Some("$5k - $10k".to_string()),
            ..Default::default()
        }
        .validate()
        .unwrap();
        assert_eq!(
            submission.relay_message(),
            "Service: N/A\nBudget: $5k - $10k\n\nMessage:\nHi"
        );
    }
}

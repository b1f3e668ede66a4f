use chrono::{DateTime, FixedOffset, Utc};
use html_escape::{encode_double_quoted_attribute, encode_text};

use super::Submission;

// India Standard Time, UTC+05:30
const IST_OFFSET_SECS: i32 = 5 * 3600 + 30 * 60;

/// The email composed for a submission, in plain text and HTML.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailContent {
    pub to: String,
    pub from: String,
    pub subject: String,
    pub text: String,
    pub html: String,
    pub received_at: DateTime<Utc>,
}

impl EmailContent {
    pub fn compose(submission: &Submission, to: &str, received_at: DateTime<Utc>) -> Self {
        Self {
            to: to.to_string(),
            from: submission.email.clone(),
            subject: submission.subject(),
            text: text_body(submission),
            html: html_body(submission, received_at),
            received_at,
        }
    }
}

fn text_body(s: &Submission) -> String {
    let mut lines = vec![format!("Name: {}", s.name), format!("Email: {}", s.email)];
    if let Some(service) = &s.service {
        lines.push(format!("Service: {service}"));
    }
    if let Some(budget) = &s.budget {
        lines.push(format!("Budget: {budget}"));
    }
    lines.push(String::new());
    lines.push("Message:".to_string());
    lines.push(s.message.clone());
    lines.join("\n")
}

fn received_label(received_at: DateTime<Utc>) -> String {
    match FixedOffset::east_opt(IST_OFFSET_SECS) {
        Some(ist) => received_at
            .with_timezone(&ist)
            .format("%d/%m/%Y, %I:%M:%S %p IST")
            .to_string(),
        None => received_at.to_rfc2822(),
    }
}

fn field_row(label: &str, value: &str) -> String {
    format!(
        r#"<p style="margin: 10px 0;"><strong style="color: #4F46E5;">{label}:</strong> {}</p>"#,
        encode_text(value)
    )
}

fn html_body(s: &Submission, received_at: DateTime<Utc>) -> String {
    let mut rows = vec![
        field_row("Name", &s.name),
        format!(
            r#"<p style="margin: 10px 0;"><strong style="color: #4F46E5;">Email:</strong> <a href="mailto:{}" style="color: #4F46E5;">{}</a></p>"#,
            encode_double_quoted_attribute(&s.email),
            encode_text(&s.email),
        ),
    ];
    if let Some(service) = &s.service {
        rows.push(field_row("Service", service));
    }
    if let Some(budget) = &s.budget {
        rows.push(field_row("Budget", budget));
    }

    format!(
        r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto; padding: 20px; background-color: #f5f5f5;">
  <div style="background-color: white; padding: 30px; border-radius: 10px;">
    <h2 style="color: #333; border-bottom: 3px solid #4F46E5; padding-bottom: 10px;">New Contact Form Submission</h2>
    <div style="margin: 20px 0;">
      {rows}
    </div>
    <div style="margin-top: 20px; padding: 20px; background-color: #f9fafb; border-left: 4px solid #4F46E5;">
      <p style="margin: 0 0 10px 0;"><strong style="color: #4F46E5;">Message:</strong></p>
      <p style="margin: 0; white-space: pre-wrap; line-height: 1.6;">{message}</p>
    </div>
    <div style="margin-top: 30px; padding-top: 20px; border-top: 1px solid #e5e7eb; text-align: center; color: #6b7280; font-size: 12px;">
      <p>This email was sent from your portfolio contact form</p>
      <p>Received at: {received}</p>
    </div>
  </div>
</div>"#,
        rows = rows.join("\n      "),
        message = encode_text(&s.message),
        received = received_label(received_at),
    )
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn submission(service: Option<&str>, budget: Option<&str>) -> Submission {
        Submission {
            name: "Jane".to_string(),
            email: "jane@x.com".to_string(),
            message: "Hi <there>".to_string(),
            service: service.map(str::to_string),
            budget: budget.map(str::to_string),
            subject: None,
        }
    }

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 6, 30, 0).unwrap()
    }

    #[test]
    fn test_compose_defaults_subject() {
        let email = EmailContent::compose(&submission(None, None), "me@site.dev", at());
        assert_eq!(email.subject, "New Contact Form Submission from Jane");
        assert_eq!(email.to, "me@site.dev");
        assert_eq!(email.from, "jane@x.com");
    }

    #[test]
    fn test_text_body_skips_absent_optionals() {
        let email = EmailContent::compose(&submission(None, None), "me@site.dev", at());
        assert_eq!(
            email.text,
            "Name: Jane\nEmail: jane@x.com\n\nMessage:\nHi <there>"
        );

        let email = EmailContent::compose(
            &submission(Some("Consulting"), Some("$10k+")),
            "me@site.dev",
            at(),
        );
        assert!(email.text.contains("Service: Consulting\nBudget: $10k+\n"));
    }

    #[test]
    fn test_html_body_escapes_input() {
        let email = EmailContent::compose(&submission(Some("UI/UX Design"), None), "me@site.dev", at());
        assert!(email.html.contains("Hi &lt;there&gt;"));
        assert!(!email.html.contains("<there>"));
        assert!(email.html.contains("UI/UX Design"));
        assert!(!email.html.contains("Budget:"));
        assert!(email.html.contains("mailto:jane@x.com"));
    }

    #[test]
    fn test_html_body_escapes_email_attribute() {
        let mut s = submission(None, None);
        s.email = r#"x"><script>@evil.com"#.to_string();
        let email = EmailContent::compose(&s, "me@site.dev", at());
        assert!(!email.html.contains("<script>"));
        assert!(email.html.contains(r#"href="mailto:x&quot;"#));
    }

    #[test]
    fn test_received_time_in_ist() {
        let email = EmailContent::compose(&submission(None, None), "me@site.dev", at());
        assert!(email.html.contains("01/05/2024, 12:00:00 PM IST"));
    }
}

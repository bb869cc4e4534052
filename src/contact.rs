//! Contact form domain: field state, validation, the submission status
//! machine, and the `mailto:` fallback link.
//!
//! All of this is synchronous and independent of the DOM; the component in
//! `app::contact` owns the timers and the delivery call.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use thiserror::Error;

pub const MIN_NAME_LEN: usize = 2;
pub const MIN_MESSAGE_LEN: usize = 10;

/// How long `Success`/`Error` (and with them the tail of a `Sending` cycle)
/// stay on screen before the form returns to `Idle`.
pub const STATUS_RESET_MS: f64 = 3000.0;

/// Matches the escaping of JS `encodeURIComponent`, which is what mail
/// clients expect inside `mailto:` query values.
const MAILTO_QUERY: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl ContactFields {
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }
}

/// Error messages from the most recent validation pass, at most one per
/// field. Editing a field clears only that field's entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub message: Option<&'static str>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.message.is_none()
    }

    pub fn get(&self, field: Field) -> Option<&'static str> {
        match field {
            Field::Name => self.name,
            Field::Email => self.email,
            Field::Message => self.message,
        }
    }

    pub fn clear(&mut self, field: Field) {
        match field {
            Field::Name => self.name = None,
            Field::Email => self.email = None,
            Field::Message => self.message = None,
        }
    }
}

/// Checks all fields and returns the first violated rule's message per
/// field. Pure and side-effect free.
pub fn validate(fields: &ContactFields) -> FieldErrors {
    let mut errors = FieldErrors::default();
    if fields.name.trim().chars().count() < MIN_NAME_LEN {
        errors.name = Some("Name must be at least 2 characters");
    }
    if !is_valid_email(&fields.email) {
        errors.email = Some("Enter a valid email address");
    }
    if fields.message.trim().chars().count() < MIN_MESSAGE_LEN {
        errors.message = Some("Message must be at least 10 characters");
    }
    errors
}

/// Structural address check: nonempty local part, a dotted domain with
/// nonempty labels and a final label of at least two characters, and no
/// whitespace anywhere.
fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    if email.is_empty() || email.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.rsplit_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && !host.starts_with('.') && !host.ends_with('.') && tld.len() >= 2
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Sending,
    Success,
    Error,
}

impl SubmissionStatus {
    /// Status that follows a settled delivery attempt. Only a 200 response
    /// counts as success; every other response or fault is coerced to
    /// `Error`.
    pub fn from_outcome(outcome: &Result<DeliveryResponse, DeliveryError>) -> Self {
        match outcome {
            Ok(res) if res.is_success() => Self::Success,
            _ => Self::Error,
        }
    }
}

/// Response shape of the delivery collaborator's `send` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryResponse {
    pub status: u16,
    pub text: String,
}

impl DeliveryResponse {
    pub fn is_success(&self) -> bool {
        self.status == 200
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DeliveryError {
    /// The delivery SDK never loaded or is not reachable from this build.
    #[error("mail delivery service is not available")]
    Unavailable,
    #[error("mail delivery failed: {0}")]
    Failed(String),
}

/// Builds the mail-client handoff link with the field values embedded as
/// URL-encoded subject and body.
pub fn mailto_link(to: &str, fields: &ContactFields) -> String {
    let subject = format!("Portfolio contact from {}", fields.name);
    let body = format!("{}\n\n{} <{}>", fields.message, fields.name, fields.email);
    format!(
        "mailto:{to}?subject={}&body={}",
        utf8_percent_encode(&subject, MAILTO_QUERY),
        utf8_percent_encode(&body, MAILTO_QUERY),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_fields() -> ContactFields {
        ContactFields {
            name: "Indu Gundam".to_string(),
            email: "a@b.com".to_string(),
            message: "I would like to work with you.".to_string(),
        }
    }

    #[test]
    fn accepts_a_well_formed_submission() {
        assert!(validate(&valid_fields()).is_empty());
    }

    #[test]
    fn name_requires_two_characters() {
        let mut fields = valid_fields();
        fields.name = "a".to_string();
        assert!(validate(&fields).name.is_some());

        fields.name = "ab".to_string();
        assert!(validate(&fields).name.is_none());
    }

    #[test]
    fn email_grammar() {
        let cases = [
            ("not-an-email", false),
            ("a@b.com", true),
            ("", false),
            ("a@b", false),
            ("@b.com", false),
            ("a@.com", false),
            ("a b@c.com", false),
            ("first.last@sub.domain.org", true),
        ];
        let mut fields = valid_fields();
        for (email, ok) in cases {
            fields.email = email.to_string();
            assert_eq!(validate(&fields).email.is_none(), ok, "email: {email:?}");
        }
    }

    #[test]
    fn message_requires_ten_characters() {
        let mut fields = valid_fields();
        fields.message = "too short".to_string();
        assert!(validate(&fields).message.is_some());

        fields.message = "long enough now".to_string();
        assert!(validate(&fields).message.is_none());
    }

    #[test]
    fn editing_clears_only_that_fields_error() {
        let mut errors = validate(&ContactFields::default());
        assert!(errors.name.is_some());
        assert!(errors.email.is_some());
        assert!(errors.message.is_some());

        errors.clear(Field::Email);
        assert!(errors.email.is_none());
        assert!(errors.name.is_some());
        assert!(errors.message.is_some());
    }

    #[test]
    fn status_follows_delivery_outcome() {
        let ok = Ok(DeliveryResponse {
            status: 200,
            text: "OK".to_string(),
        });
        assert_eq!(SubmissionStatus::from_outcome(&ok), SubmissionStatus::Success);

        let rejected = Ok(DeliveryResponse {
            status: 400,
            text: "bad template".to_string(),
        });
        assert_eq!(
            SubmissionStatus::from_outcome(&rejected),
            SubmissionStatus::Error
        );

        let unavailable = Err(DeliveryError::Unavailable);
        assert_eq!(
            SubmissionStatus::from_outcome(&unavailable),
            SubmissionStatus::Error
        );
    }

    #[test]
    fn mailto_link_encodes_subject_and_body() {
        let fields = ContactFields {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hello there & good day".to_string(),
        };
        let link = mailto_link("owner@example.com", &fields);
        assert!(link.starts_with("mailto:owner@example.com?subject="));
        assert!(link.contains("subject=Portfolio%20contact%20from%20Ada"));
        assert!(link.contains("Hello%20there%20%26%20good%20day"));
        assert!(link.contains("ada%40example.com"));
        assert!(!link.contains(' '));
    }
}

//! Contact boundary and contact form.
//!
//! The form submits a [`ContactSubmission`] through a [`ContactSender`].
//! The shipped sender is [`SimulatedSender`]: a fixed-latency call that
//! always succeeds and optionally keeps a copy in an [`Inbox`].

mod form;
mod inbox;
mod sender;

pub use form::{ContactForm, FormField, FormStatus};
pub use inbox::{Inbox, StoredSubmission, DEFAULT_INBOX_CAPACITY};
pub use sender::{ContactSender, SimulatedSender, DEFAULT_LATENCY};

use crate::error::{FolioError, Result};
use serde::{Deserialize, Serialize};

/// Acknowledgment text of a delivered message
pub const SUCCESS_MESSAGE: &str = "Thank you for your message! I'll get back to you soon.";

/// Text shown by the form when delivery fails
pub const FAILURE_MESSAGE: &str = "Failed to send message. Please try again.";

/// A message sent through the contact form.
///
/// Absent fields deserialize as empty so [`ContactSubmission::validate`]
/// reports them by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactSubmission {
    /// Build a submission from its four fields
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        subject: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            subject: subject.into(),
            message: message.into(),
        }
    }

    /// Check that every field is present.
    ///
    /// Whitespace-only values count as empty. Reports the first missing
    /// field in form order.
    pub fn validate(&self) -> Result<()> {
        for field in FormField::ALL {
            if self.get(field).trim().is_empty() {
                return Err(FolioError::MissingField(field.name()));
            }
        }
        Ok(())
    }

    /// Value of one field
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Subject => &self.subject,
            FormField::Message => &self.message,
        }
    }

    pub(crate) fn get_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Subject => &mut self.subject,
            FormField::Message => &mut self.message,
        }
    }
}

/// Reply of the contact boundary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactAck {
    pub success: bool,
    pub message: String,
}

impl ContactAck {
    /// The standard success acknowledgment
    pub fn delivered() -> Self {
        Self {
            success: true,
            message: SUCCESS_MESSAGE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_complete_submission() {
        let submission = ContactSubmission::new("Jane", "jane@x.com", "Hi", "Hello");
        assert!(submission.validate().is_ok());
    }

    #[test]
    fn test_validate_reports_first_missing_field() {
        let submission = ContactSubmission::new("Jane", "", "", "Hello");
        assert_eq!(
            submission.validate(),
            Err(FolioError::MissingField("email"))
        );
    }

    #[test]
    fn test_validate_treats_whitespace_as_empty() {
        let submission = ContactSubmission::new("Jane", "jane@x.com", "Hi", "   \n");
        assert_eq!(
            submission.validate(),
            Err(FolioError::MissingField("message"))
        );
    }

    #[test]
    fn test_submission_deserializes_from_json() {
        let submission: ContactSubmission = serde_json::from_str(
            r#"{"name":"Jane","email":"jane@x.com","subject":"Hi","message":"Hello"}"#,
        )
        .unwrap();
        assert_eq!(submission.subject, "Hi");
    }

    #[test]
    fn test_absent_key_is_reported_as_missing_field() {
        let submission: ContactSubmission =
            serde_json::from_str(r#"{"name":"Jane","email":"jane@x.com","subject":"Hi"}"#)
                .unwrap();
        assert_eq!(submission.message, "");
        assert_eq!(
            submission.validate(),
            Err(FolioError::MissingField("message"))
        );
    }
}

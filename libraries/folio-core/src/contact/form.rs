/// Contact form state machine
use super::{ContactAck, ContactSender, ContactSubmission, FAILURE_MESSAGE};
use crate::error::{FolioError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four required inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormField {
    Name,
    Email,
    Subject,
    Message,
}

impl FormField {
    /// Fields in form order
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Email,
        FormField::Subject,
        FormField::Message,
    ];

    /// Input name attribute
    pub fn name(self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Subject => "subject",
            FormField::Message => "message",
        }
    }

    /// Visible label
    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Email => "Email",
            FormField::Subject => "Subject",
            FormField::Message => "Message",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Where the form is in its submit cycle
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "message", rename_all = "lowercase")]
pub enum FormStatus {
    /// Nothing sent yet
    #[default]
    Idle,
    /// A submission is outstanding
    Submitting,
    /// Last submission was acknowledged
    Succeeded(String),
    /// Last submission failed
    Failed(String),
}

impl FormStatus {
    /// Inline status message, if any
    pub fn message(&self) -> Option<&str> {
        match self {
            FormStatus::Succeeded(msg) | FormStatus::Failed(msg) => Some(msg),
            FormStatus::Idle | FormStatus::Submitting => None,
        }
    }
}

/// Local state of the contact form: field values and submit status
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    fields: ContactSubmission,
    status: FormStatus,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Form pre-filled with `fields`, status idle
    pub fn with_fields(fields: ContactSubmission) -> Self {
        Self {
            fields,
            status: FormStatus::Idle,
        }
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    pub fn fields(&self) -> &ContactSubmission {
        &self.fields
    }

    pub fn value(&self, field: FormField) -> &str {
        self.fields.get(field)
    }

    /// Update one input
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        *self.fields.get_mut(field) = value.into();
    }

    /// The submit control is disabled only while a submission is outstanding
    pub fn submit_disabled(&self) -> bool {
        self.status == FormStatus::Submitting
    }

    /// Enter `Submitting` and hand out the submission to deliver.
    ///
    /// Refused while another submission is outstanding or while a required
    /// field is empty; the status is left untouched in both cases.
    pub fn begin_submit(&mut self) -> Result<ContactSubmission> {
        if self.submit_disabled() {
            return Err(FolioError::SubmissionInProgress);
        }
        self.fields.validate()?;

        self.status = FormStatus::Submitting;
        Ok(self.fields.clone())
    }

    /// Settle an outstanding submission with the boundary's outcome.
    ///
    /// On success the fields are cleared; on failure they are kept so the
    /// visitor can retry.
    pub fn finish(&mut self, outcome: Result<ContactAck>) -> &FormStatus {
        debug_assert_eq!(self.status, FormStatus::Submitting);

        self.status = match outcome {
            Ok(ack) => {
                self.fields = ContactSubmission::default();
                FormStatus::Succeeded(ack.message)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Contact submission failed");
                FormStatus::Failed(FAILURE_MESSAGE.to_string())
            }
        };
        &self.status
    }

    /// Run a full submit cycle against `sender`
    pub async fn submit(&mut self, sender: &dyn ContactSender) -> Result<&FormStatus> {
        let submission = self.begin_submit()?;
        let outcome = sender.send(submission).await;
        Ok(self.finish(outcome))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::SUCCESS_MESSAGE;

    fn filled() -> ContactForm {
        ContactForm::with_fields(ContactSubmission::new("Jane", "jane@x.com", "Hi", "Hello"))
    }

    #[test]
    fn test_new_form_is_idle_and_enabled() {
        let form = ContactForm::new();
        assert_eq!(form.status(), &FormStatus::Idle);
        assert!(!form.submit_disabled());
    }

    #[test]
    fn test_begin_submit_disables_control() {
        let mut form = filled();
        let submission = form.begin_submit().unwrap();

        assert_eq!(submission.name, "Jane");
        assert_eq!(form.status(), &FormStatus::Submitting);
        assert!(form.submit_disabled());
    }

    #[test]
    fn test_second_submit_is_refused_while_submitting() {
        let mut form = filled();
        form.begin_submit().unwrap();

        assert_eq!(form.begin_submit(), Err(FolioError::SubmissionInProgress));
        assert_eq!(form.status(), &FormStatus::Submitting);
    }

    #[test]
    fn test_empty_field_keeps_form_idle() {
        let mut form = filled();
        form.set_field(FormField::Subject, "");

        assert_eq!(form.begin_submit(), Err(FolioError::MissingField("subject")));
        assert_eq!(form.status(), &FormStatus::Idle);
    }

    #[test]
    fn test_success_clears_fields() {
        let mut form = filled();
        form.begin_submit().unwrap();
        let status = form.finish(Ok(ContactAck::delivered())).clone();

        assert_eq!(status, FormStatus::Succeeded(SUCCESS_MESSAGE.to_string()));
        for field in FormField::ALL {
            assert_eq!(form.value(field), "");
        }
        assert!(!form.submit_disabled());
    }

    #[test]
    fn test_failure_keeps_fields() {
        let mut form = filled();
        form.begin_submit().unwrap();
        form.finish(Err(FolioError::delivery("offline")));

        assert_eq!(
            form.status(),
            &FormStatus::Failed(FAILURE_MESSAGE.to_string())
        );
        assert_eq!(form.value(FormField::Email), "jane@x.com");
        assert!(!form.submit_disabled());
    }

    #[test]
    fn test_resubmit_from_failed() {
        let mut form = filled();
        form.begin_submit().unwrap();
        form.finish(Err(FolioError::delivery("offline")));

        assert!(form.begin_submit().is_ok());
        assert_eq!(form.status(), &FormStatus::Submitting);
    }

    #[test]
    fn test_status_serializes_with_tag() {
        let json = serde_json::to_value(FormStatus::Failed("nope".to_string())).unwrap();
        assert_eq!(json["state"], "failed");
        assert_eq!(json["message"], "nope");
    }
}

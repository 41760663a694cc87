//! Contact form state and the transactional email hand-off.

#[cfg(feature = "ssr")]
mod emailjs;

#[cfg(feature = "ssr")]
pub use emailjs::{EmailJsClient, EmailJsConfig};

use std::future::Future;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const FORM_ID: &str = "contact-form";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Subject,
        ContactField::Message,
    ];

    /// DOM id of the matching form control.
    pub fn input_id(self) -> &'static str {
        match self {
            ContactField::Name => "contact-name",
            ContactField::Email => "contact-email",
            ContactField::Subject => "contact-subject",
            ContactField::Message => "contact-message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Subject => "subject",
            ContactField::Message => "message",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactDraft {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Subject => self.subject = value,
            ContactField::Message => self.message = value,
        }
    }

    /// Every field carries non-blank text.
    pub fn is_complete(&self) -> bool {
        ContactField::ALL
            .iter()
            .all(|f| !self.get(*f).trim().is_empty())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Sent,
    Failed,
}

/// Draft plus submission state, as the form component sees it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub draft: ContactDraft,
    submitting: bool,
    status: SubmitStatus,
}

impl ContactForm {
    pub fn submitting(&self) -> bool {
        self.submitting
    }

    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    /// Starts a submission and hands back the draft to send. Returns `None`
    /// while another submission is still in flight.
    pub fn begin(&mut self) -> Option<ContactDraft> {
        if self.submitting {
            return None;
        }
        self.submitting = true;
        self.status = SubmitStatus::Idle;
        Some(self.draft.clone())
    }

    /// Records the outcome. Success clears the draft; failure keeps it so
    /// the visitor can retry or copy their message.
    pub fn finish<E>(&mut self, result: Result<(), E>) {
        self.submitting = false;
        match result {
            Ok(()) => {
                self.status = SubmitStatus::Sent;
                self.draft = ContactDraft::default();
            }
            Err(_) => self.status = SubmitStatus::Failed,
        }
    }
}

/// Template parameters handed to the email service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub from_name: String,
    pub from_email: String,
    pub subject: String,
    pub message: String,
    pub to_email: String,
}

impl ContactMessage {
    pub fn new(draft: ContactDraft, recipient: &str) -> Self {
        Self {
            from_name: draft.name,
            from_email: draft.email,
            subject: draft.subject,
            message: draft.message,
            to_email: recipient.to_string(),
        }
    }
}

#[derive(Error, Debug)]
pub enum ContactError {
    #[error("contact form is missing a required field")]
    Incomplete,
    #[cfg(feature = "ssr")]
    #[error("email request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("email service returned HTTP {0}")]
    Status(u16),
}

pub trait EmailSender {
    fn send(&self, message: &ContactMessage) -> impl Future<Output = Result<(), ContactError>> + Send;
}

/// Builds the message for `recipient` and passes it to `sender`.
pub async fn deliver<S: EmailSender>(
    sender: &S,
    draft: ContactDraft,
    recipient: &str,
) -> Result<(), ContactError> {
    if !draft.is_complete() {
        return Err(ContactError::Incomplete);
    }
    sender.send(&ContactMessage::new(draft, recipient)).await
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    struct MockSender {
        fail: bool,
        sent: Mutex<Vec<ContactMessage>>,
    }

    impl MockSender {
        fn new(fail: bool) -> Self {
            Self {
                fail,
                sent: Mutex::new(Vec::new()),
            }
        }
    }

    impl EmailSender for MockSender {
        async fn send(&self, message: &ContactMessage) -> Result<(), ContactError> {
            self.sent.lock().unwrap().push(message.clone());
            if self.fail {
                Err(ContactError::Status(500))
            } else {
                Ok(())
            }
        }
    }

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::default();
        form.draft.set(ContactField::Name, "Ada Lovelace");
        form.draft.set(ContactField::Email, "ada@example.com");
        form.draft.set(ContactField::Subject, "Internship");
        form.draft.set(ContactField::Message, "Hello there");
        form
    }

    #[tokio::test]
    async fn test_successful_submit_clears_form() {
        let sender = MockSender::new(false);
        let mut form = filled_form();

        let draft = form.begin().expect("should start submitting");
        assert!(form.submitting());
        let res = deliver(&sender, draft, "owner@example.com").await;
        form.finish(res);

        assert!(!form.submitting());
        assert_eq!(form.status(), SubmitStatus::Sent);
        assert_eq!(form.draft, ContactDraft::default());

        let sent = sender.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].from_name, "Ada Lovelace");
        assert_eq!(sent[0].to_email, "owner@example.com");
    }

    #[tokio::test]
    async fn test_failed_submit_keeps_draft() {
        let sender = MockSender::new(true);
        let mut form = filled_form();
        let before = form.draft.clone();

        let draft = form.begin().expect("should start submitting");
        let res = deliver(&sender, draft, "owner@example.com").await;
        assert!(matches!(res, Err(ContactError::Status(500))));
        form.finish(res);

        assert_eq!(form.status(), SubmitStatus::Failed);
        assert_eq!(form.draft, before);
    }

    #[tokio::test]
    async fn test_incomplete_draft_is_not_sent() {
        let sender = MockSender::new(false);
        let mut draft = filled_form().draft;
        draft.set(ContactField::Subject, "   ");
        let res = deliver(&sender, draft, "owner@example.com").await;
        assert!(matches!(res, Err(ContactError::Incomplete)));
        assert!(sender.sent.lock().unwrap().is_empty());
    }

    #[test]
    fn test_single_submission_in_flight() {
        let mut form = filled_form();
        assert!(form.begin().is_some());
        assert!(form.begin().is_none());
        form.finish::<ContactError>(Err(ContactError::Status(503)));
        assert!(form.begin().is_some());
    }
}

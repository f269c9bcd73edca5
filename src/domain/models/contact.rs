use serde::{Deserialize, Serialize};

pub const SENT_MESSAGE: &str = "Message sent successfully. I'll respond soon.";
pub const FAILED_MESSAGE: &str = "Failed to send message. Please try again later.";

/// Contact form fields as typed by the visitor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactDraft {
    /// Presence only; email syntax is left to the `type="email"` input.
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.email, &self.message]
            .iter()
            .all(|field| !field.trim().is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SendStatus {
    #[default]
    Idle,
    Sending,
    Sent,
    Failed(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub draft: ContactDraft,
    pub status: SendStatus,
}

impl ContactForm {
    pub fn is_sending(&self) -> bool {
        self.status == SendStatus::Sending
    }

    /// Moves to `Sending` and hands back the fields to relay.
    /// Returns `None` while a send is in flight or when a field is blank.
    pub fn begin_submit(&mut self) -> Option<ContactDraft> {
        if self.is_sending() || !self.draft.is_complete() {
            return None;
        }
        self.status = SendStatus::Sending;
        Some(self.draft.clone())
    }

    /// Applies the relay outcome. The draft survives a failure.
    pub fn complete<E>(&mut self, outcome: Result<(), E>) {
        match outcome {
            Ok(()) => {
                self.draft = ContactDraft::default();
                self.status = SendStatus::Sent;
            }
            Err(_) => {
                self.status = SendStatus::Failed(FAILED_MESSAGE.to_string());
            }
        }
    }

    pub fn status_message(&self) -> Option<&str> {
        match &self.status {
            SendStatus::Idle | SendStatus::Sending => None,
            SendStatus::Sent => Some(SENT_MESSAGE),
            SendStatus::Failed(message) => Some(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            draft: ContactDraft {
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
                message: "Hello there".to_string(),
            },
            status: SendStatus::Idle,
        }
    }

    #[test]
    fn test_success_clears_draft() {
        let mut form = filled();
        let sent = form.begin_submit().unwrap();
        assert_eq!(sent.name, "Ada");
        assert!(form.is_sending());

        form.complete(Ok::<(), String>(()));

        assert_eq!(form.status, SendStatus::Sent);
        assert_eq!(form.draft, ContactDraft::default());
        assert!(!form.status_message().unwrap().is_empty());
    }

    #[test]
    fn test_failure_keeps_draft() {
        let mut form = filled();
        let before = form.draft.clone();
        form.begin_submit().unwrap();

        form.complete(Err("relay returned 400"));

        assert_eq!(form.draft, before);
        assert!(matches!(form.status, SendStatus::Failed(_)));
        assert_eq!(form.status_message(), Some(FAILED_MESSAGE));
    }

    #[test]
    fn test_failure_needs_no_error_details() {
        struct Rejected;

        let mut form = filled();
        form.begin_submit().unwrap();
        form.complete(Err(Rejected));

        assert_eq!(form.status, SendStatus::Failed(FAILED_MESSAGE.to_string()));
    }

    #[test]
    fn test_no_resubmit_while_sending() {
        let mut form = filled();
        assert!(form.begin_submit().is_some());
        assert!(form.begin_submit().is_none());
    }

    #[test]
    fn test_blank_field_is_refused() {
        let mut form = filled();
        form.draft.message = "   ".to_string();
        assert!(form.begin_submit().is_none());
        assert_eq!(form.status, SendStatus::Idle);
    }

    #[test]
    fn test_resubmit_after_failure() {
        let mut form = filled();
        form.begin_submit().unwrap();
        form.complete(Err("timeout"));
        assert!(form.begin_submit().is_some());
    }
}

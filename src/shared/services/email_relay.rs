use async_trait::async_trait;
use serde::Serialize;

use crate::config::RelayConfig;
use crate::domain::models::ContactDraft;
use crate::shared::errors::{AppError, Result};
use crate::shared::logging;
use crate::shared::services::http::HttpTransport;

/// Sends a contact message on the visitor's behalf.
#[async_trait(?Send)]
pub trait RelayClient {
    async fn send(&self, draft: &ContactDraft) -> Result<()>;
}

#[derive(Debug, Serialize)]
struct TemplateParams<'a> {
    from_name: &'a str,
    from_email: &'a str,
    message: &'a str,
}

#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: TemplateParams<'a>,
}

/// EmailJS REST relay.
pub struct EmailRelay<H> {
    http: H,
    config: RelayConfig,
}

impl<H: HttpTransport> EmailRelay<H> {
    pub fn new(http: H, config: RelayConfig) -> Self {
        Self { http, config }
    }

    fn payload(&self, draft: &ContactDraft) -> Result<serde_json::Value> {
        let request = SendRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.public_key,
            template_params: TemplateParams {
                from_name: &draft.name,
                from_email: &draft.email,
                message: &draft.message,
            },
        };
        Ok(serde_json::to_value(request)?)
    }
}

#[async_trait(?Send)]
impl<H: HttpTransport> RelayClient for EmailRelay<H> {
    async fn send(&self, draft: &ContactDraft) -> Result<()> {
        let body = self.payload(draft)?;
        let response = self.http.post_json(&self.config.endpoint, &body).await?;
        if !response.is_success() {
            logging::log_contact_relay_rejected(response.status, &response.body);
            return Err(AppError::status("EmailJS", response.status));
        }
        logging::log_contact_relay_sent();
        Ok(())
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::domain::models::{ContactForm, SendStatus};
    use crate::shared::services::http::testing::ScriptedTransport;
    use futures::executor::block_on;

    fn draft() -> ContactDraft {
        ContactDraft {
            name: "Grace".to_string(),
            email: "grace@example.com".to_string(),
            message: "Let's talk".to_string(),
        }
    }

    fn submit(form: &mut ContactForm, relay: &impl RelayClient) {
        let outgoing = form.begin_submit().expect("form should be submittable");
        let outcome = block_on(relay.send(&outgoing));
        form.complete(outcome);
    }

    #[test]
    fn test_payload_uses_fixed_parameter_names() {
        let transport = ScriptedTransport::default().reply(200, "OK");
        let relay = EmailRelay::new(transport.clone(), SiteConfig::default().relay);

        block_on(relay.send(&draft())).unwrap();

        let requests = transport.requests.borrow();
        assert_eq!(requests[0].method, "POST");
        assert_eq!(requests[0].url, "https://api.emailjs.com/api/v1.0/email/send");
        let body = requests[0].body.as_ref().unwrap();
        assert_eq!(body["service_id"], "service_1b70yuk");
        assert_eq!(body["template_id"], "template_v3cf3m9");
        assert_eq!(body["user_id"], "nz5aMvVJAtpFm3p-n");
        assert_eq!(body["template_params"]["from_name"], "Grace");
        assert_eq!(body["template_params"]["from_email"], "grace@example.com");
        assert_eq!(body["template_params"]["message"], "Let's talk");
    }

    #[test]
    fn test_successful_submission_clears_form() {
        let relay = EmailRelay::new(
            ScriptedTransport::default().reply(200, "OK"),
            SiteConfig::default().relay,
        );
        let mut form = ContactForm { draft: draft(), status: SendStatus::Idle };

        submit(&mut form, &relay);

        assert_eq!(form.status, SendStatus::Sent);
        assert_eq!(form.draft, ContactDraft::default());
        assert!(!form.status_message().unwrap().is_empty());
    }

    #[test]
    fn test_rejected_submission_keeps_draft() {
        let relay = EmailRelay::new(
            ScriptedTransport::default().reply(400, "The user_id parameter is required"),
            SiteConfig::default().relay,
        );
        let mut form = ContactForm { draft: draft(), status: SendStatus::Idle };

        submit(&mut form, &relay);

        assert!(matches!(form.status, SendStatus::Failed(_)));
        assert_eq!(form.draft, draft());
        assert!(!form.status_message().unwrap().is_empty());
    }

    #[test]
    fn test_network_failure_keeps_draft() {
        let relay = EmailRelay::new(
            ScriptedTransport::default().fail("connection reset"),
            SiteConfig::default().relay,
        );
        let mut form = ContactForm { draft: draft(), status: SendStatus::Idle };

        submit(&mut form, &relay);

        assert!(matches!(form.status, SendStatus::Failed(_)));
        assert_eq!(form.draft, draft());
    }
}

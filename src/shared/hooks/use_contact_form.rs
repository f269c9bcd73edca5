use std::rc::Rc;

use dioxus::prelude::*;

use crate::domain::models::ContactForm;
use crate::shared::lifecycle::Liveness;
use crate::shared::logging::{self, LogOperation};
use crate::shared::services::{AppServices, EmailRelay, PlatformHttp, RelayClient};

/// Contact form state and submit handler
#[derive(Clone)]
pub struct UseContactForm {
    pub form: Signal<ContactForm>,
    relay: Rc<EmailRelay<PlatformHttp>>,
    liveness: Liveness,
}

impl UseContactForm {
    /// Relays the current draft. No-op while a send is already in flight.
    pub fn submit(&self) {
        let mut form = self.form;
        let Some(draft) = form.write().begin_submit() else {
            return;
        };

        let relay = self.relay.clone();
        let token = self.liveness.begin();
        spawn(async move {
            let outcome = relay.send(&draft).await;
            if let Err(err) = &outcome {
                logging::log_contact_relay_error(&err.to_string());
            }
            if token.is_current() {
                form.write().complete(outcome);
            } else {
                logging::log_stale_completion(LogOperation::ContactRelay);
            }
        });
    }
}

pub fn use_contact_form() -> UseContactForm {
    let services = use_context::<AppServices>();
    let form = use_signal(ContactForm::default);
    let relay = use_hook(|| Rc::new(services.email_relay()));
    let liveness = use_hook(Liveness::default);

    let teardown = liveness.clone();
    use_drop(move || teardown.invalidate());

    UseContactForm {
        form,
        relay,
        liveness,
    }
}

use dioxus::prelude::*;

use crate::app::components::Button;
use crate::domain::models::SendStatus;
use crate::shared::hooks::use_contact_form;

#[component]
pub fn ContactForm() -> Element {
    let contact = use_contact_form();
    let mut form = contact.form;
    let state = form.read().clone();
    let sending = state.is_sending();
    let label = if sending { "Sending..." } else { "Send Message" };
    let status_class = match &state.status {
        SendStatus::Failed(_) => "c-contact__status c-contact__status--error",
        _ => "c-contact__status",
    };

    rsx! {
        form {
            class: "c-contact",
            onsubmit: move |evt| {
                evt.prevent_default();
                contact.submit();
            },

            input {
                class: "c-contact__field",
                name: "name",
                placeholder: "Your name",
                required: true,
                value: "{state.draft.name}",
                oninput: move |evt| form.write().draft.name = evt.value(),
            }
            input {
                class: "c-contact__field",
                name: "email",
                r#type: "email",
                placeholder: "Your email",
                required: true,
                value: "{state.draft.email}",
                oninput: move |evt| form.write().draft.email = evt.value(),
            }
            textarea {
                class: "c-contact__field c-contact__field--message",
                name: "message",
                placeholder: "Your message",
                rows: "5",
                required: true,
                value: "{state.draft.message}",
                oninput: move |evt| form.write().draft.message = evt.value(),
            }

            Button { kind: "submit", disabled: sending, "{label}" }

            if let Some(message) = state.status_message() {
                p { class: "{status_class}", role: "status", "{message}" }
            }
        }
    }
}

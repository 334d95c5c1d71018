use dioxus::prelude::*;

use super::modal::{Modal, BOOK_CALL_MODAL};
use super::{dismiss_later, reset_form, submitted_fields, use_language, Notice};
use crate::core::config::SiteConfig;
use crate::leads::{self, LEADS};
use crate::t;

/// Consultation request form. Submissions are appended to `leads.csv` in local storage.
#[component]
pub fn LeadForm(#[props(default = "lead-form".to_string())] form_id: String) -> Element {
    let _lang = use_language();
    let config = use_context::<SiteConfig>();
    let mut notice = use_signal(|| Option::<Notice>::None);

    let onsubmit = {
        let form_id = form_id.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let fields = submitted_fields(&evt.values());
            let outcome =
                leads::platform_ledger(&config).and_then(|ledger| ledger.capture(&LEADS, fields));
            match outcome {
                Ok(record) => {
                    tracing::info!(list = LEADS.file_name, at = %record.timestamp(), "lead captured");
                    notice.set(Some(Notice::Success(t!("lead-form-thanks"))));
                    reset_form(&form_id);
                }
                Err(err) => {
                    tracing::error!("lead capture failed: {err}");
                    notice.set(Some(Notice::Error(t!("lead-form-failed"))));
                }
            }
            dismiss_later(notice);
        }
    };

    rsx! {
        form { id: "{form_id}", class: "lead-form", onsubmit,
            label { r#for: "{form_id}-name", {t!("lead-form-name")} }
            input {
                id: "{form_id}-name",
                name: "name",
                r#type: "text",
                autocomplete: "name",
                required: true,
            }
            label { r#for: "{form_id}-email", {t!("lead-form-email")} }
            input {
                id: "{form_id}-email",
                name: "email",
                r#type: "email",
                autocomplete: "email",
                required: true,
            }
            label { r#for: "{form_id}-company", {t!("lead-form-company")} }
            input {
                id: "{form_id}-company",
                name: "company",
                r#type: "text",
                autocomplete: "organization",
            }
            button { r#type: "submit", class: "button button--primary", {t!("lead-form-submit")} }

            if let Some(notice) = notice() {
                p { class: notice.class(), role: "status", {notice.message().to_string()} }
            }
        }
    }
}

/// The lead form inside the "book a call" dialog opened from the home page.
#[component]
pub fn BookCallModal() -> Element {
    let _lang = use_language();

    rsx! {
        Modal { id: BOOK_CALL_MODAL.to_string(), title: t!("book-call-title"),
            LeadForm { form_id: "lead-form-modal".to_string() }
        }
    }
}

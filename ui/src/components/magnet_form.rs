use dioxus::prelude::*;

use super::{dismiss_later, submitted_fields, use_language, Notice};
use crate::core::config::SiteConfig;
use crate::leads::{self, PLAYBOOK_SUBSCRIBERS};
use crate::t;

/// Playbook sign-up. A successful submission reveals the download link.
#[component]
pub fn MagnetForm() -> Element {
    let _lang = use_language();
    let config = use_context::<SiteConfig>();
    let playbook_url = config.playbook_url.clone();
    let mut revealed = use_signal(|| false);
    let mut notice = use_signal(|| Option::<Notice>::None);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let fields = submitted_fields(&evt.values());
        let outcome = leads::platform_ledger(&config)
            .and_then(|ledger| ledger.capture(&PLAYBOOK_SUBSCRIBERS, fields));
        match outcome {
            Ok(_) => {
                tracing::info!(list = PLAYBOOK_SUBSCRIBERS.file_name, "playbook sign-up captured");
                revealed.set(true);
            }
            Err(err) => {
                tracing::error!("playbook sign-up failed: {err}");
                notice.set(Some(Notice::Error(t!("magnet-form-failed"))));
                dismiss_later(notice);
            }
        }
    };

    let link_class = if revealed() {
        "playbook-link"
    } else {
        "playbook-link hidden"
    };

    rsx! {
        form { id: "magnet-form", class: "magnet-form", onsubmit,
            label { r#for: "magnet-email", {t!("magnet-form-email")} }
            input {
                id: "magnet-email",
                name: "email",
                r#type: "email",
                autocomplete: "email",
                required: true,
            }
            button { r#type: "submit", class: "button button--primary", {t!("magnet-form-submit")} }

            if let Some(notice) = notice() {
                p { class: notice.class(), role: "status", {notice.message().to_string()} }
            }
        }
        a {
            id: "playbook-link",
            class: link_class,
            href: "{playbook_url}",
            download: "",
            {t!("magnet-form-link")}
        }
    }
}

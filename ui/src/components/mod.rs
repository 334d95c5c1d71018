//! Dioxus components shared by the site's pages.

pub mod export_panel;
pub mod lead_form;
pub mod magnet_form;
pub mod modal;
pub mod site_footer;
pub mod site_navbar;

pub use export_panel::LeadExportPanel;
pub use lead_form::{BookCallModal, LeadForm};
pub use magnet_form::MagnetForm;
pub use modal::{Modal, ModalHost, ModalState, ModalTrigger, BOOK_CALL_MODAL};
pub use site_footer::{ActiveLanguage, SiteFooter};
pub use site_navbar::SiteNavbar;

use std::collections::HashMap;

use dioxus::prelude::*;

/// How long a form notice stays visible.
#[cfg(target_arch = "wasm32")]
const NOTICE_MS: u32 = 6_000;

/// Inline feedback under a form or panel.
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    Success(String),
    Error(String),
}

impl Notice {
    pub fn class(&self) -> &'static str {
        match self {
            Notice::Success(_) => "form-notice form-notice--success",
            Notice::Error(_) => "form-notice form-notice--error",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Notice::Success(msg) | Notice::Error(msg) => msg,
        }
    }
}

/// Re-render on language switches. Returns the active tag.
pub fn use_language() -> String {
    try_use_context::<ActiveLanguage>()
        .map(|lang| (lang.0)())
        .unwrap_or_else(crate::i18n::current_language)
}

/// Named form values, multi-valued fields joined with commas.
pub(crate) fn submitted_fields(values: &HashMap<String, FormValue>) -> Vec<(String, String)> {
    values
        .iter()
        .map(|(name, value)| (name.clone(), value.as_value()))
        .collect()
}

pub(crate) fn reset_form(form_id: &str) {
    #[cfg(target_arch = "wasm32")]
    crate::dom::reset_form(form_id);

    #[cfg(not(target_arch = "wasm32"))]
    let _ = form_id;
}

/// Clear `notice` after a few seconds.
pub(crate) fn dismiss_later(notice: Signal<Option<Notice>>) {
    #[cfg(target_arch = "wasm32")]
    {
        let mut notice = notice;
        spawn(async move {
            gloo_timers::future::TimeoutFuture::new(NOTICE_MS).await;
            notice.set(None);
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    let _ = notice;
}

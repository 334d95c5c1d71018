//! Dialog open/close wiring: triggers open a dialog by id, close buttons and
//! Escape anywhere on the page close it.

use dioxus::prelude::*;

use super::use_language;
use crate::t;

/// Id of the "book a call" dialog hosting the lead form.
pub const BOOK_CALL_MODAL: &str = "book-call";

/// Which dialog (if any) is open. Provided by [`ModalHost`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModalState {
    open: Signal<Option<String>>,
}

impl ModalState {
    pub fn open(&mut self, id: &str) {
        tracing::debug!(modal = id, "opening dialog");
        self.open.set(Some(id.to_string()));
    }

    pub fn close(&mut self) {
        if self.open.peek().is_some() {
            self.open.set(None);
        }
    }

    pub fn is_open(&self, id: &str) -> bool {
        self.open.read().as_deref() == Some(id)
    }
}

/// Provides [`ModalState`] to its subtree and closes any open dialog on Escape,
/// wherever focus happens to be.
#[component]
pub fn ModalHost(children: Element) -> Element {
    let modals = use_context_provider(|| ModalState {
        open: Signal::new(None),
    });

    #[cfg(target_arch = "wasm32")]
    use_hook(move || {
        let mut modals = modals;
        let guard = crate::dom::dialog::on_document_escape(move || modals.close());
        if let Err(err) = &guard {
            tracing::warn!("Escape will not close dialogs: {err}");
        }
        std::rc::Rc::new(guard.ok())
    });

    #[cfg(not(target_arch = "wasm32"))]
    let _ = modals;

    rsx! {
        div { class: "modal-host", {children} }
    }
}

#[component]
pub fn ModalTrigger(
    target: String,
    #[props(default = "button button--primary".to_string())] class: String,
    children: Element,
) -> Element {
    let mut modals = use_context::<ModalState>();
    let target_attr = target.clone();

    rsx! {
        button {
            r#type: "button",
            class: "{class}",
            "data-open-modal": "{target_attr}",
            onclick: move |_| modals.open(&target),
            {children}
        }
    }
}

/// A `<dialog>` shown modally while [`ModalState`] names its `id`.
#[component]
pub fn Modal(id: String, title: String, children: Element) -> Element {
    let _lang = use_language();
    let mut modals = use_context::<ModalState>();
    let open = modals.is_open(&id);

    // In the browser the dialog is driven through showModal()/close(); the
    // `open` attribute would show it non-modally and make showModal() throw.
    #[cfg(target_arch = "wasm32")]
    {
        let id = id.clone();
        use_effect(move || {
            let requested = modals.is_open(&id);
            crate::dom::dialog::sync_dialog(&id, requested);
        });
    }
    let open_attr = open && cfg!(not(target_arch = "wasm32"));

    rsx! {
        dialog {
            id: "{id}",
            class: "modal",
            open: open_attr,
            aria_labelledby: "{id}-title",
            div { class: "modal__header",
                h2 { id: "{id}-title", "{title}" }
                button {
                    r#type: "button",
                    class: "modal-close",
                    "data-close": "",
                    aria_label: t!("modal-close"),
                    onclick: move |_| modals.close(),
                    "×"
                }
            }
            div { class: "modal__body", {children} }
        }
    }
}

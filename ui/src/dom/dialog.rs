//! `<dialog>` elements driven from the modal state.

use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlDialogElement, KeyboardEvent};

use crate::core::dialog::{dialog_command, is_dismiss_key, DialogCommand};
use crate::core::error::Result;

use super::listener::EventListenerGuard;
use super::{describe_js, document};

/// Show (modally) or close the dialog with `id` so that it matches `open`.
pub fn sync_dialog(id: &str, open: bool) {
    let dialog = document()
        .ok()
        .and_then(|doc| doc.get_element_by_id(id))
        .and_then(|el| el.dyn_into::<HtmlDialogElement>().ok());
    let Some(dialog) = dialog else {
        tracing::debug!(dialog = id, "dialog not rendered yet");
        return;
    };

    match dialog_command(open, dialog.open()) {
        Some(DialogCommand::ShowModal) => {
            if let Err(err) = dialog.show_modal() {
                tracing::warn!(dialog = id, "showModal failed: {}", describe_js(&err));
            }
        }
        Some(DialogCommand::Close) => dialog.close(),
        None => {}
    }
}

/// Run `dismiss` on every Escape press anywhere in the document.
pub fn on_document_escape<F>(mut dismiss: F) -> Result<EventListenerGuard>
where
    F: FnMut() + 'static,
{
    let document = document()?;
    Ok(EventListenerGuard::new(&document, "keydown", false, move |event: Event| {
        if let Ok(key) = event.dyn_into::<KeyboardEvent>() {
            if is_dismiss_key(&key.key()) {
                dismiss();
            }
        }
    }))
}

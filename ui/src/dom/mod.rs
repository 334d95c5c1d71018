//! Browser adapters (wasm32 only): listeners, storage, downloads, dialogs and the navbar loader.

pub mod dialog;
pub mod download;
pub mod listener;
pub mod navbar;
pub mod storage;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlFormElement, Window};

use crate::core::error::{Result, SiteError};

pub(crate) fn window() -> Result<Window> {
    web_sys::window().ok_or_else(|| SiteError::MissingElement("window".into()))
}

pub(crate) fn document() -> Result<Document> {
    window()?
        .document()
        .ok_or_else(|| SiteError::MissingElement("document".into()))
}

/// Best-effort text for a thrown JS value.
pub(crate) fn describe_js(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

/// Clear a form's inputs. Missing forms are ignored.
pub fn reset_form(form_id: &str) {
    let form = document()
        .ok()
        .and_then(|doc| doc.get_element_by_id(form_id))
        .and_then(|el| el.dyn_into::<HtmlFormElement>().ok());
    if let Some(form) = form {
        form.reset();
    }
}

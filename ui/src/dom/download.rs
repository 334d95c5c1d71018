//! Offer bytes to the browser as a file via a throwaway object URL.

use js_sys::{Array, Uint8Array};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use crate::core::error::{Result, SiteError};

use super::{describe_js, document};

/// Start a download of `bytes` named `file_name`.
pub fn offer_file(file_name: &str, mime: &str, bytes: &[u8]) -> Result<()> {
    let js_failure =
        |step: &str, err: JsValue| SiteError::Download(format!("{file_name}: {step}: {}", describe_js(&err)));

    let parts = Array::of1(&Uint8Array::from(bytes));
    let props = BlobPropertyBag::new();
    props.set_type(mime);
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &props)
        .map_err(|err| js_failure("blob", err))?;
    let object_url =
        Url::create_object_url_with_blob(&blob).map_err(|err| js_failure("object url", err))?;

    let outcome = click_link(file_name, &object_url);
    // Revoke even if the click could not be staged.
    let _ = Url::revoke_object_url(&object_url);
    outcome
}

fn click_link(file_name: &str, href: &str) -> Result<()> {
    let document = document()?;
    let body = document
        .body()
        .ok_or_else(|| SiteError::MissingElement("body".into()))?;
    let link = document
        .create_element("a")
        .ok()
        .and_then(|el| el.dyn_into::<HtmlAnchorElement>().ok())
        .ok_or_else(|| SiteError::Download(format!("{file_name}: cannot create link")))?;

    link.set_href(href);
    link.set_download(file_name);
    link.set_hidden(true);
    body.append_child(&link)
        .map_err(|err| SiteError::Download(format!("{file_name}: {}", describe_js(&err))))?;
    link.click();
    link.remove();
    tracing::debug!(file = file_name, "browser download started");
    Ok(())
}

//! Hand a stored list to the user as a file.

use crate::core::error::Result;

use super::ledger::LeadLedger;
use super::record::LeadList;
use super::store::KeyValueStore;

pub const CSV_MIME: &str = "text/csv";

/// Where a finished download ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    /// The browser was handed the file; it decides where it lands.
    Browser,
    /// Written to disk (non-browser builds).
    Saved(String),
}

/// Download a list under its own file name. `Ok(None)` when the list is empty.
pub fn download_list<S: KeyValueStore>(
    ledger: &LeadLedger<S>,
    list: &LeadList,
) -> Result<Option<Delivery>> {
    let Some(bytes) = ledger.export(list)? else {
        tracing::info!(list = list.file_name, "nothing stored yet, skipping download");
        return Ok(None);
    };
    deliver_bytes(list.file_name, CSV_MIME, bytes).map(Some)
}

/// Hand `bytes` over as `file_name`: a browser download on the web, a file
/// under the temp dir elsewhere.
pub fn deliver_bytes(file_name: &str, mime: &str, bytes: Vec<u8>) -> Result<Delivery> {
    #[cfg(target_arch = "wasm32")]
    {
        crate::dom::download::offer_file(file_name, mime, &bytes)?;
        Ok(Delivery::Browser)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = mime;
        let saved = save_export(file_name, &bytes)
            .map_err(|err| crate::core::error::SiteError::Download(format!("{file_name}: {err}")))?;
        Ok(Delivery::Saved(saved.display().to_string()))
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn save_export(file_name: &str, bytes: &[u8]) -> std::io::Result<std::path::PathBuf> {
    let dir = std::env::temp_dir().join("sitekit-exports");
    std::fs::create_dir_all(&dir)?;
    let path = dir.join(file_name);
    std::fs::write(&path, bytes)?;
    Ok(path)
}

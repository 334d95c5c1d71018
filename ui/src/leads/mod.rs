//! Lead capture: form submissions appended to browser-local CSV lists.

pub mod csv;
pub mod download;
pub mod ledger;
pub mod record;
pub mod store;

pub use download::{download_list, Delivery};
pub use ledger::{LeadLedger, ListStatus};
pub use record::{LeadList, LeadRecord, ALL_LISTS, LEADS, PLAYBOOK_SUBSCRIBERS};
pub use store::{KeyValueStore, MemoryStore};

use crate::core::config::SiteConfig;
use crate::core::error::Result;

#[cfg(target_arch = "wasm32")]
pub type PlatformStore = crate::dom::storage::LocalStorage;

#[cfg(not(target_arch = "wasm32"))]
pub type PlatformStore = std::rc::Rc<MemoryStore>;

#[cfg(not(target_arch = "wasm32"))]
thread_local! {
    static NATIVE_STORE: std::rc::Rc<MemoryStore> = std::rc::Rc::new(MemoryStore::new());
}

/// Ledger over `window.localStorage` (or a per-thread memory store off the web).
pub fn platform_ledger(config: &SiteConfig) -> Result<LeadLedger<PlatformStore>> {
    #[cfg(target_arch = "wasm32")]
    let store = crate::dom::storage::LocalStorage::open()?;

    #[cfg(not(target_arch = "wasm32"))]
    let store = NATIVE_STORE.with(|store| store.clone());

    Ok(LeadLedger::new(store, config))
}

/// Expose `window.dlLeads()` and `window.dlPlaybookSubs()` for manual exports from the console.
#[cfg(target_arch = "wasm32")]
pub fn install_console_exports(config: &SiteConfig) {
    use wasm_bindgen::prelude::Closure;

    let Some(window) = web_sys::window() else {
        return;
    };

    for (name, list) in [("dlLeads", LEADS), ("dlPlaybookSubs", PLAYBOOK_SUBSCRIBERS)] {
        let config = config.clone();
        let callback = Closure::wrap(Box::new(move || {
            let outcome = platform_ledger(&config).and_then(|ledger| download_list(&ledger, &list));
            if let Err(err) = outcome {
                tracing::error!("console export of {} failed: {err}", list.file_name);
            }
        }) as Box<dyn FnMut()>);

        if js_sys::Reflect::set(&window, &name.into(), callback.as_ref()).is_err() {
            tracing::warn!("could not install window.{name}");
        }
        // Lives for the whole page.
        callback.forget();
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn install_console_exports(_config: &SiteConfig) {}

//! `window.localStorage` as a [`KeyValueStore`].

use crate::core::error::{Result, SiteError};
use crate::leads::store::KeyValueStore;

use super::describe_js;

pub struct LocalStorage {
    inner: web_sys::Storage,
}

impl LocalStorage {
    pub fn open() -> Result<Self> {
        let inner = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(SiteError::StorageUnavailable)?;
        Ok(Self { inner })
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.inner.get_item(key).map_err(|err| SiteError::Storage {
            key: key.to_string(),
            reason: describe_js(&err),
        })
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        // Quota errors surface here.
        self.inner.set_item(key, value).map_err(|err| SiteError::Storage {
            key: key.to_string(),
            reason: describe_js(&err),
        })
    }
}

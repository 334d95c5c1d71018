//! Append-only CSV lists persisted in a [`KeyValueStore`].

use crate::core::config::SiteConfig;
use crate::core::error::Result;

use super::csv;
use super::record::{LeadList, LeadRecord};
use super::store::KeyValueStore;

pub struct LeadLedger<S> {
    store: S,
    prefix: String,
}

impl<S: KeyValueStore> LeadLedger<S> {
    pub fn new(store: S, config: &SiteConfig) -> Self {
        Self::with_prefix(store, config.storage_prefix.clone())
    }

    pub fn with_prefix(store: S, prefix: impl Into<String>) -> Self {
        Self {
            store,
            prefix: prefix.into(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Storage key of a list, e.g. `csv:leads.csv`.
    pub fn key_for(&self, list: &LeadList) -> String {
        format!("{}{}", self.prefix, list.file_name)
    }

    /// Append one row, writing the header first if the list does not exist yet.
    ///
    /// Read-modify-write: two tabs appending at once can lose a row.
    pub fn append(&self, list: &LeadList, record: &LeadRecord) -> Result<()> {
        let key = self.key_for(list);
        let mut blob = self
            .store
            .get(&key)?
            .filter(|existing| !existing.is_empty())
            .unwrap_or_else(|| csv::header_line(list.headers));
        blob.push_str(&csv::row_line(&record.row_for(list)));
        self.store.set(&key, &blob)?;
        tracing::debug!(key = %key, bytes = blob.len(), "appended lead record");
        Ok(())
    }

    /// Stamp `fields` with the current time and append them.
    pub fn capture<K, V>(
        &self,
        list: &LeadList,
        fields: impl IntoIterator<Item = (K, V)>,
    ) -> Result<LeadRecord>
    where
        K: Into<String>,
        V: Into<String>,
    {
        let record = LeadRecord::capture(fields);
        self.append(list, &record)?;
        Ok(record)
    }

    /// Raw CSV bytes of a list, `None` if nothing was ever stored.
    pub fn export(&self, list: &LeadList) -> Result<Option<Vec<u8>>> {
        Ok(self
            .store
            .get(&self.key_for(list))?
            .filter(|blob| !blob.is_empty())
            .map(String::into_bytes))
    }

    /// All rows of a list, header first.
    pub fn rows(&self, list: &LeadList) -> Result<Vec<Vec<String>>> {
        match self.store.get(&self.key_for(list))? {
            Some(blob) => csv::parse(&blob),
            None => Ok(Vec::new()),
        }
    }

    /// Number of stored submissions (header excluded).
    pub fn record_count(&self, list: &LeadList) -> Result<usize> {
        Ok(self.rows(list)?.len().saturating_sub(1))
    }

    /// Whether a list can be exported, and how many rows it holds if the blob parses.
    ///
    /// A blob that no longer parses is still exportable as raw bytes.
    pub fn status(&self, list: &LeadList) -> Result<ListStatus> {
        let Some(blob) = self
            .store
            .get(&self.key_for(list))?
            .filter(|blob| !blob.is_empty())
        else {
            return Ok(ListStatus::default());
        };
        let records = match csv::parse(&blob) {
            Ok(rows) => Some(rows.len().saturating_sub(1)),
            Err(err) => {
                tracing::warn!(list = list.file_name, "stored list does not parse: {err}");
                None
            }
        };
        Ok(ListStatus {
            exportable: true,
            records,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListStatus {
    pub exportable: bool,
    /// `None` when the stored text is not valid CSV.
    pub records: Option<usize>,
}

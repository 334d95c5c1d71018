//! Lead list definitions and captured records.

use std::collections::BTreeMap;

use time::{macros::format_description, OffsetDateTime};

/// Column that always receives the capture time, overriding any submitted field of the same name.
pub const TIMESTAMP_COLUMN: &str = "timestamp";

/// A named, append-only list of submissions with a fixed column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeadList {
    pub file_name: &'static str,
    pub headers: &'static [&'static str],
}

/// Consultation requests from the main lead form.
pub const LEADS: LeadList = LeadList {
    file_name: "leads.csv",
    headers: &["name", "email", "company", "timestamp"],
};

/// Playbook download sign-ups from the lead magnet form.
pub const PLAYBOOK_SUBSCRIBERS: LeadList = LeadList {
    file_name: "playbook-subs.csv",
    headers: &["email", "timestamp"],
};

pub const ALL_LISTS: [LeadList; 2] = [LEADS, PLAYBOOK_SUBSCRIBERS];

#[derive(Debug, Clone, PartialEq)]
pub struct LeadRecord {
    fields: BTreeMap<String, String>,
    captured_at: OffsetDateTime,
}

impl LeadRecord {
    pub fn new<K, V>(fields: impl IntoIterator<Item = (K, V)>, captured_at: OffsetDateTime) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            fields: fields
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            captured_at,
        }
    }

    /// Record stamped with the current UTC time.
    pub fn capture<K, V>(fields: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self::new(fields, OffsetDateTime::now_utc())
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn captured_at(&self) -> OffsetDateTime {
        self.captured_at
    }

    /// ISO-8601 UTC with millisecond precision, e.g. `2025-03-01T09:30:00.250Z`.
    pub fn timestamp(&self) -> String {
        self.captured_at
            .to_offset(time::UtcOffset::UTC)
            .format(&format_description!(
                "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z"
            ))
            .unwrap_or_else(|_| self.captured_at.unix_timestamp().to_string())
    }

    /// Values in `list`'s column order. Columns the form did not submit are empty.
    pub fn row_for(&self, list: &LeadList) -> Vec<String> {
        list.headers
            .iter()
            .map(|&column| {
                if column == TIMESTAMP_COLUMN {
                    self.timestamp()
                } else {
                    self.get(column).unwrap_or_default().to_string()
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn timestamp_has_millisecond_precision() {
        let record = LeadRecord::new(
            [("email", "a@example.com")],
            datetime!(2025-03-01 09:30:00.25 UTC),
        );
        assert_eq!(record.timestamp(), "2025-03-01T09:30:00.250Z");
    }

    #[test]
    fn timestamp_is_normalised_to_utc() {
        let record = LeadRecord::new(
            [("email", "a@example.com")],
            datetime!(2025-03-01 11:30:00 +02:00),
        );
        assert_eq!(record.timestamp(), "2025-03-01T09:30:00.000Z");
    }

    #[test]
    fn row_follows_header_order_and_fills_gaps() {
        let record = LeadRecord::new(
            [("company", "Acme"), ("name", "Ada"), ("extra", "ignored")],
            datetime!(2025-01-02 03:04:05 UTC),
        );
        assert_eq!(
            record.row_for(&LEADS),
            vec!["Ada", "", "Acme", "2025-01-02T03:04:05.000Z"]
        );
    }

    #[test]
    fn submitted_timestamp_field_is_overridden() {
        let record = LeadRecord::new(
            [("email", "a@example.com"), ("timestamp", "forged")],
            datetime!(2025-01-02 03:04:05 UTC),
        );
        assert_eq!(
            record.row_for(&PLAYBOOK_SUBSCRIBERS),
            vec!["a@example.com", "2025-01-02T03:04:05.000Z"]
        );
    }
}

//! Site configuration: fixed fragment/stylesheet locations, selectors and storage naming.
//!
//! Every field has a default, so a partial (or empty) JSON object is a valid config.

use serde::Deserialize;

use super::error::Result;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Same-origin path of the shared navbar markup.
    pub fragment_url: String,
    /// Stylesheet linked into `<head>` once the fragment is mounted.
    pub stylesheet_url: String,
    /// Id of the element whose content is replaced by the fragment.
    pub mount_id: String,
    /// Selector (relative to the mount) of links considered for highlighting.
    pub link_selector: String,
    pub toggle_selector: String,
    pub drawer_selector: String,
    pub active_class: String,
    /// Prefix prepended to a lead list's file name to form its storage key.
    pub storage_prefix: String,
    /// Download revealed after a playbook sign-up.
    pub playbook_url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            fragment_url: "/components/navbar.html".into(),
            stylesheet_url: "/components/navbar.css".into(),
            mount_id: "navbar".into(),
            link_selector: ".nv a[href]".into(),
            toggle_selector: ".nv__toggle".into(),
            drawer_selector: "#nv-drawer".into(),
            active_class: "is-active".into(),
            storage_prefix: "csv:".into(),
            playbook_url: "/downloads/growth-playbook.pdf".into(),
        }
    }
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::SiteError;

    #[test]
    fn empty_object_yields_defaults() {
        let cfg = SiteConfig::from_json("{}").unwrap();
        assert_eq!(cfg, SiteConfig::default());
        assert_eq!(cfg.fragment_url, "/components/navbar.html");
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let cfg = SiteConfig::from_json(r#"{ "mount_id": "site-nav", "storage_prefix": "leads:" }"#)
            .unwrap();
        assert_eq!(cfg.mount_id, "site-nav");
        assert_eq!(cfg.storage_prefix, "leads:");
        assert_eq!(cfg.active_class, "is-active");
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let err = SiteConfig::from_json("{ mount_id").unwrap_err();
        assert!(matches!(err, SiteError::Config(_)));
    }
}

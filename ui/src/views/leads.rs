use dioxus::prelude::*;

use crate::components::{use_language, LeadExportPanel};
use crate::t;

/// Unlisted page for pulling the locally captured lists off this browser.
#[component]
pub fn Leads() -> Element {
    let _lang = use_language();

    rsx! {
        section { class: "page page-leads",
            h1 { {t!("leads-title")} }
            LeadExportPanel {}
        }
    }
}

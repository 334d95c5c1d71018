use dioxus::prelude::*;

use crate::components::{use_language, LeadForm};
use crate::t;

#[component]
pub fn Contact() -> Element {
    let _lang = use_language();

    rsx! {
        section { class: "page page-contact",
            h1 { {t!("contact-title")} }
            p { {t!("contact-intro")} }
            LeadForm {}
        }
    }
}

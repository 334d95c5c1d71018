use dioxus::prelude::*;

use crate::components::{use_language, MagnetForm};
use crate::t;

#[component]
pub fn Playbook() -> Element {
    let _lang = use_language();

    rsx! {
        section { class: "page page-playbook",
            h1 { {t!("playbook-title")} }
            p { {t!("playbook-intro")} }
            MagnetForm {}
        }
    }
}

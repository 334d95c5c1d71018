use dioxus::prelude::*;

use crate::components::use_language;
use crate::t;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let _lang = use_language();
    let path = format!("/{}", segments.join("/"));

    rsx! {
        section { class: "page page-not-found",
            h1 { {t!("not-found-title")} }
            p { {t!("not-found-body", path = path)} }
            a { href: "/", {t!("not-found-home")} }
        }
    }
}

use dioxus::prelude::*;

use crate::components::{use_language, ModalTrigger, BOOK_CALL_MODAL};
use crate::t;

#[component]
pub fn Home() -> Element {
    let _lang = use_language();

    rsx! {
        section { class: "page page-home",
            h1 { {t!("home-title")} }
            p { class: "page-home__tagline", {t!("home-tagline")} }
            ul { class: "page-home__features",
                li { {t!("home-feature-strategy")} }
                li { {t!("home-feature-content")} }
                li { {t!("home-feature-analytics")} }
            }
            p { class: "page-home__cta",
                ModalTrigger { target: BOOK_CALL_MODAL.to_string(), {t!("home-cta")} }
            }
        }
    }
}

use dioxus::prelude::*;

use crate::i18n;
use crate::t;

/// App-wide language tag; components read it so they re-render on a switch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveLanguage(pub Signal<String>);

#[component]
pub fn SiteFooter() -> Element {
    let lang_ctx = try_use_context::<ActiveLanguage>();
    let current = lang_ctx
        .map(|lang| (lang.0)())
        .unwrap_or_else(i18n::current_language);
    let langs = use_signal(i18n::available_languages);
    let show_switcher = langs().len() > 1;

    let on_change = move |evt: FormEvent| {
        let tag = evt.value();
        match i18n::set_language(&tag) {
            Ok(active) => {
                if let Some(ActiveLanguage(mut code)) = lang_ctx {
                    code.set(active);
                }
            }
            Err(err) => tracing::warn!("switching language to {tag} failed: {err}"),
        }
    };

    rsx! {
        footer { class: "site-footer",
            p { class: "site-footer__copy", {t!("footer-copyright")} }
            if show_switcher {
                div { class: "site-footer__locale",
                    label { class: "visually-hidden", r#for: "locale-select", {t!("footer-language-label")} }
                    select {
                        id: "locale-select",
                        value: "{current}",
                        oninput: on_change,
                        for code in langs() {
                            option { key: "{code}", value: "{code}", "{code}" }
                        }
                    }
                }
            }
        }
    }
}

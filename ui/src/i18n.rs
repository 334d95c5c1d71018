//! Translated UI strings.
//!
//! Bundles live in `i18n/<lang>/sitekit-ui.ftl` and are embedded at compile
//! time, so a wasm build needs no extra requests. `en-US` is the reference
//! locale: every key must exist there, and `fl!` checks call sites against it.
//!
//! The browser's `navigator.languages` (or the OS locale list natively) picks
//! the starting language in [`init`]; the footer switcher calls [`set_language`].
use std::collections::BTreeSet;
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use i18n_embed::I18nEmbedError;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl;

/// `t!(<message id>)` or `t!(<message id>, name = value, ..)` through the shared loader.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Must agree with `domain` in `i18n.toml`.
const DOMAIN: &str = "sitekit-ui";

pub const FALLBACK_LANGUAGE: &str = "en-US";

#[derive(Embed)]
#[folder = "i18n"]
struct Bundles;

pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = FALLBACK_LANGUAGE
        .parse()
        .expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static STARTUP: Once = Once::new();

/// Negotiate the starting language once per process. Returns the active tag.
pub fn init() -> String {
    STARTUP.call_once(|| {
        let requested = requested_languages();
        match i18n_embed::select(&*LOADER, &Bundles, &requested) {
            Ok(_) => tracing::debug!(language = %current_language(), "translations loaded"),
            Err(err) => tracing::warn!("no translations selected ({err}); using {FALLBACK_LANGUAGE}"),
        }
    });
    current_language()
}

/// Switch languages and return the one now in effect. An unparseable or
/// unshipped tag leaves the fallback active.
pub fn set_language(tag: &str) -> Result<String, I18nEmbedError> {
    match tag.parse::<LanguageIdentifier>() {
        Ok(lang) => {
            i18n_embed::select(&*LOADER, &Bundles, &[lang])?;
        }
        Err(_) => tracing::debug!(tag, "ignoring malformed language tag"),
    }
    Ok(current_language())
}

/// Tag strings are currently resolved in; the fallback before any bundle loads.
pub fn current_language() -> String {
    LOADER
        .current_languages()
        .first()
        .map(|lang| lang.to_string())
        .unwrap_or_else(|| FALLBACK_LANGUAGE.to_string())
}

/// Shipped language tags in sorted order.
pub fn available_languages() -> Vec<String> {
    Bundles::iter()
        .filter_map(|path| path.split_once('/').map(|(lang, _)| lang.to_string()))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}

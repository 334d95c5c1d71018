//! Shared crate for the site: route matching, the navbar drawer, local lead
//! capture, and the Dioxus components and pages built on them.

pub mod components;
pub mod core;
pub mod i18n;
pub mod leads;
pub mod views;

#[cfg(target_arch = "wasm32")]
pub mod dom;

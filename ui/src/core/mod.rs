//! Platform-independent logic: configuration, errors, route matching, navbar installation, dialogs and the drawer.

pub mod config;
pub mod dialog;
pub mod drawer;
pub mod error;
pub mod focus;
pub mod navbar;
pub mod platform;
pub mod route;

pub use config::SiteConfig;
pub use error::{Result, SiteError};

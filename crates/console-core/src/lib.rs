//! console-core - Core library for Catalog Console
//!
//! This crate holds the presentation logic shared by the console clients
//! (desktop, CLI): declarative form descriptors for dbt ingestion settings,
//! the permission-filtered settings menu and its routing rules, and the
//! placeholder dispatcher. Rendering is left to the clients.

pub mod config;
pub mod dbt_form;
pub mod error;
pub mod i18n;
pub mod models;
pub mod placeholder;
pub mod routing;
pub mod settings_menu;
pub mod util;

pub use error::{Error, Result};
pub use i18n::{Catalog, Translator};

//! Localized message resolution for Waypoint.
//!
//! Maps opaque message keys plus positional arguments to display text, with
//! layered fallback. Lookups never fail: a key missing from the active locale
//! falls back to the base locale, and a key missing from both resolves to
//! itself.
//!
//! # Components
//!
//! - [`MessageCatalog`]: Base layer plus optional active locale layer
//! - [`Template`]: Checked `%s` placeholder substitution
//! - [`lang_file`]: Line-oriented `key=value` language file format
//! - [`defaults`]: Built-in base entries every catalog starts from

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod catalog;
pub mod defaults;
mod error;
pub mod lang_file;
mod template;

pub use catalog::{BASE_LOCALE, MessageCatalog};
pub use error::{CatalogError, FormatError};
pub use template::Template;

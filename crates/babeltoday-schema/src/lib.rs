//! Catalog parsing, version ordering, and support data model for babeltoday.
//!
//! This crate defines the schema layer: the three JSON catalog documents
//! (`Browser` list, plugin compatibility map, preset declarations), the
//! dotted-numeric `Version` ordering, and the `Support` type that models
//! unknown support as an explicit variant instead of a sentinel string.

pub mod catalog;
pub mod types;
pub mod version;

pub use catalog::{
    parse_browsers_file, parse_browsers_str, parse_plugins_file, parse_plugins_str,
    parse_presets_file, parse_presets_str, Browser, CatalogError, Catalogs, PluginMap,
    PluginVersions, PresetDecl,
};
pub use types::{BrowserId, PluginKey, PresetName};
pub use version::{Support, Version};

use crate::types::{BrowserId, PluginKey, PresetName};
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse catalog: {0}")]
    ParseJson(#[from] serde_json::Error),
    #[error("browser id must not be empty")]
    EmptyBrowserId,
    #[error("duplicate browser id: '{0}'")]
    DuplicateBrowserId(String),
}

/// One target browser from the browser catalog.
///
/// Catalog order is display order, so browsers are kept in a `Vec`.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Browser {
    pub id: BrowserId,
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub engine: Option<String>,
}

/// Per-browser minimum supported versions of one plugin.
///
/// Absence of a browser id means "unknown / no native support".
pub type PluginVersions = BTreeMap<BrowserId, String>;

/// The plugin compatibility catalog: plugin key to per-browser versions.
///
/// Row order never comes from this catalog (rows follow preset declaration
/// order), so sorted storage is fine.
pub type PluginMap = BTreeMap<PluginKey, PluginVersions>;

/// One preset declaration: a named, ordered bundle of plugin keys.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PresetDecl {
    pub name: PresetName,
    pub plugins: Vec<PluginKey>,
}

/// The three catalogs a report is computed from, loaded wholesale up front.
#[derive(Debug, Clone)]
pub struct Catalogs {
    pub browsers: Vec<Browser>,
    pub plugins: PluginMap,
    pub presets: Vec<PresetDecl>,
}

impl Catalogs {
    /// Load and validate all three catalog files.
    pub fn load(
        browsers: impl AsRef<Path>,
        plugins: impl AsRef<Path>,
        presets: impl AsRef<Path>,
    ) -> Result<Self, CatalogError> {
        Ok(Self {
            browsers: parse_browsers_file(browsers)?,
            plugins: parse_plugins_file(plugins)?,
            presets: parse_presets_file(presets)?,
        })
    }
}

pub fn parse_browsers_str(input: &str) -> Result<Vec<Browser>, CatalogError> {
    let browsers: Vec<Browser> = serde_json::from_str(input)?;
    let mut seen = BTreeSet::new();
    for browser in &browsers {
        if browser.id.trim().is_empty() {
            return Err(CatalogError::EmptyBrowserId);
        }
        if !seen.insert(browser.id.as_str()) {
            return Err(CatalogError::DuplicateBrowserId(browser.id.to_string()));
        }
    }
    Ok(browsers)
}

pub fn parse_browsers_file(path: impl AsRef<Path>) -> Result<Vec<Browser>, CatalogError> {
    let content = fs::read_to_string(path)?;
    parse_browsers_str(&content)
}

pub fn parse_plugins_str(input: &str) -> Result<PluginMap, CatalogError> {
    Ok(serde_json::from_str(input)?)
}

pub fn parse_plugins_file(path: impl AsRef<Path>) -> Result<PluginMap, CatalogError> {
    let content = fs::read_to_string(path)?;
    parse_plugins_str(&content)
}

pub fn parse_presets_str(input: &str) -> Result<Vec<PresetDecl>, CatalogError> {
    let OrderedPresets(presets) = serde_json::from_str(input)?;
    Ok(presets)
}

pub fn parse_presets_file(path: impl AsRef<Path>) -> Result<Vec<PresetDecl>, CatalogError> {
    let content = fs::read_to_string(path)?;
    parse_presets_str(&content)
}

// The preset catalog is a JSON object, but declaration order is display
// order, so it cannot go through a sorted map type. A manual map visitor
// keeps the entries in document order.
struct OrderedPresets(Vec<PresetDecl>);

impl<'de> Deserialize<'de> for OrderedPresets {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct PresetMapVisitor;

        impl<'de> Visitor<'de> for PresetMapVisitor {
            type Value = OrderedPresets;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of preset name to plugin key list")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut presets = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((name, plugins)) = map.next_entry::<PresetName, Vec<PluginKey>>()? {
                    presets.push(PresetDecl { name, plugins });
                }
                Ok(OrderedPresets(presets))
            }
        }

        deserializer.deserialize_map(PresetMapVisitor)
    }
}

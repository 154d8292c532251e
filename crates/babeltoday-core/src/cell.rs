use crate::resolve::ResolvedPlugin;
use babeltoday_schema::{Browser, PluginVersions, Support};
use serde::Serialize;

/// Display text for a cell with no native support.
pub const USE_PLUGIN: &str = "Use plugin";

/// Support determination for one (plugin, browser) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PluginCell {
    /// Raw catalog version string, or `null` when unknown.
    #[serde(rename = "version")]
    pub support: Support,
    pub supported: bool,
}

impl PluginCell {
    /// Evaluate one plugin's per-browser version map against one browser.
    pub fn evaluate(browser: &Browser, versions: &PluginVersions) -> Self {
        let support = Support::from_entry(versions.get(browser.id.as_str()));
        let supported = support.satisfied_by(&browser.version);
        Self { support, supported }
    }

    /// Table cell text: the raw catalog version, or the "Use plugin" sentinel.
    pub fn display(&self) -> &str {
        match &self.support {
            Support::Since(version) => version,
            Support::Unknown => USE_PLUGIN,
        }
    }
}

/// Aggregate support determination for one (preset, browser) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PresetCell {
    pub supported_count: usize,
    pub total: usize,
    pub fully_supported: bool,
}

impl PresetCell {
    /// Count how many of the preset's plugins the browser natively covers.
    ///
    /// An empty plugin list is vacuously fully supported (0/0).
    pub fn evaluate(browser: &Browser, plugins: &[ResolvedPlugin]) -> Self {
        let supported_count = plugins
            .iter()
            .filter(|plugin| PluginCell::evaluate(browser, &plugin.versions).supported)
            .count();
        let total = plugins.len();
        Self {
            supported_count,
            total,
            fully_supported: supported_count == total,
        }
    }

    /// Table cell text: "Yes", or "Use plugin (n/m)".
    pub fn display(&self) -> String {
        if self.fully_supported {
            "Yes".to_owned()
        } else {
            format!("{USE_PLUGIN} ({}/{})", self.supported_count, self.total)
        }
    }
}

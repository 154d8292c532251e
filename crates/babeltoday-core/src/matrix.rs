use crate::cell::{PluginCell, PresetCell};
use crate::resolve::{resolve_presets, ResolvedPreset};
use babeltoday_schema::{Browser, Catalogs, PluginKey, PresetName};
use serde::Serialize;
use tracing::debug;

/// The fully computed support matrix: one preset block per catalog preset,
/// cells in browser-catalog order.
///
/// Pure function of the loaded catalogs; computing it twice yields identical
/// results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SupportMatrix {
    pub browsers: Vec<Browser>,
    pub presets: Vec<PresetMatrix>,
}

/// One preset block: the aggregate preset row plus one row per plugin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PresetMatrix {
    pub name: PresetName,
    pub cells: Vec<PresetCell>,
    pub plugins: Vec<PluginRow>,
}

/// One plugin row inside a preset block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PluginRow {
    pub key: PluginKey,
    pub cells: Vec<PluginCell>,
}

impl SupportMatrix {
    /// Join the catalogs and evaluate every (row, browser) pair.
    pub fn compute(catalogs: &Catalogs) -> Self {
        let resolved = resolve_presets(&catalogs.presets, &catalogs.plugins);
        let presets = resolved
            .iter()
            .map(|preset| preset_block(&catalogs.browsers, preset))
            .collect();
        debug!(
            "computed support matrix: {} presets x {} browsers",
            catalogs.presets.len(),
            catalogs.browsers.len()
        );
        Self {
            browsers: catalogs.browsers.clone(),
            presets,
        }
    }
}

fn preset_block(browsers: &[Browser], preset: &ResolvedPreset) -> PresetMatrix {
    PresetMatrix {
        name: preset.name.clone(),
        cells: browsers
            .iter()
            .map(|browser| PresetCell::evaluate(browser, &preset.plugins))
            .collect(),
        plugins: preset
            .plugins
            .iter()
            .map(|plugin| PluginRow {
                key: plugin.key.clone(),
                cells: browsers
                    .iter()
                    .map(|browser| PluginCell::evaluate(browser, &plugin.versions))
                    .collect(),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use babeltoday_schema::{parse_browsers_str, parse_plugins_str, parse_presets_str};

    fn catalogs() -> Catalogs {
        Catalogs {
            browsers: parse_browsers_str(
                r#"[
                    {"id": "chrome", "name": "Chrome", "version": "55"},
                    {"id": "firefox", "name": "Firefox", "version": "52"}
                ]"#,
            )
            .unwrap(),
            plugins: parse_plugins_str(
                r#"{
                    "transform-es2015-arrow-functions": {"chrome": "47", "firefox": "45"},
                    "transform-es2015-classes": {"chrome": "49"}
                }"#,
            )
            .unwrap(),
            presets: parse_presets_str(
                r#"{
                    "es2015": ["transform-es2015-arrow-functions", "transform-es2015-classes"]
                }"#,
            )
            .unwrap(),
        }
    }

    #[test]
    fn matrix_shape_follows_catalog_order() {
        let matrix = SupportMatrix::compute(&catalogs());
        assert_eq!(matrix.browsers.len(), 2);
        assert_eq!(matrix.presets.len(), 1);
        let preset = &matrix.presets[0];
        assert_eq!(preset.name, "es2015");
        assert_eq!(preset.cells.len(), 2);
        assert_eq!(preset.plugins.len(), 2);
        assert_eq!(preset.plugins[0].cells.len(), 2);
    }

    #[test]
    fn preset_cells_aggregate_plugin_cells() {
        let matrix = SupportMatrix::compute(&catalogs());
        let preset = &matrix.presets[0];
        // chrome 55 covers both plugins, firefox 52 only arrow-functions
        assert!(preset.cells[0].fully_supported);
        assert_eq!(preset.cells[1].supported_count, 1);
        assert!(!preset.cells[1].fully_supported);
    }

    #[test]
    fn compute_is_idempotent() {
        let catalogs = catalogs();
        assert_eq!(
            SupportMatrix::compute(&catalogs),
            SupportMatrix::compute(&catalogs)
        );
    }

    #[test]
    fn matrix_serializes_for_json_output() {
        let matrix = SupportMatrix::compute(&catalogs());
        let json = serde_json::to_value(&matrix).unwrap();
        assert_eq!(json["presets"][0]["name"], "es2015");
        assert_eq!(json["presets"][0]["plugins"][0]["cells"][0]["version"], "47");
        assert_eq!(
            json["presets"][0]["plugins"][1]["cells"][1]["version"],
            serde_json::Value::Null
        );
    }
}

use babeltoday_schema::{PluginKey, PluginMap, PluginVersions, PresetDecl, PresetName};
use tracing::debug;

/// A preset with each of its plugin keys resolved against the plugin catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPreset {
    pub name: PresetName,
    pub plugins: Vec<ResolvedPlugin>,
}

/// One plugin record inside a resolved preset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPlugin {
    pub key: PluginKey,
    pub versions: PluginVersions,
}

/// Join the preset catalog against the plugin catalog.
///
/// Declaration order is preserved on both levels. A plugin key with no entry
/// in the plugin catalog resolves to an empty version map (unsupported on
/// every browser); it is never an error.
pub fn resolve_presets(presets: &[PresetDecl], plugins: &PluginMap) -> Vec<ResolvedPreset> {
    presets
        .iter()
        .map(|preset| ResolvedPreset {
            name: preset.name.clone(),
            plugins: preset
                .plugins
                .iter()
                .map(|key| {
                    let versions = plugins.get(key.as_str()).cloned().unwrap_or_else(|| {
                        debug!("plugin '{key}' not in plugin catalog, treating as unsupported");
                        PluginVersions::new()
                    });
                    ResolvedPlugin {
                        key: key.clone(),
                        versions,
                    }
                })
                .collect(),
        })
        .collect()
}

pub mod check;
pub mod completions;
pub mod list;
pub mod man_pages;
pub mod matrix;
pub mod render;

use babeltoday_schema::Catalogs;
use std::path::PathBuf;
use tracing::debug;

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_CATALOG_ERROR: u8 = 2;

/// Locations of the three catalog documents.
#[derive(Debug, Clone)]
pub struct CatalogPaths {
    pub browsers: PathBuf,
    pub plugins: PathBuf,
    pub presets: PathBuf,
}

pub fn load_catalogs(paths: &CatalogPaths) -> Result<Catalogs, String> {
    let catalogs = Catalogs::load(&paths.browsers, &paths.plugins, &paths.presets)
        .map_err(|e| format!("catalog error: {e}"))?;
    debug!(
        "loaded catalogs: {} browsers, {} plugins, {} presets",
        catalogs.browsers.len(),
        catalogs.plugins.len(),
        catalogs.presets.len()
    );
    Ok(catalogs)
}

pub fn json_pretty(value: &impl serde::Serialize) -> Result<String, String> {
    serde_json::to_string_pretty(value).map_err(|e| format!("JSON serialization failed: {e}"))
}

/// Colorize a pre-padded table cell. Padding must happen before this call,
/// or the escape codes throw off column widths.
pub fn colorize_cell(text: &str, supported: bool) -> String {
    use console::Style;
    if supported {
        Style::new().green().apply_to(text).to_string()
    } else {
        Style::new().dim().apply_to(text).to_string()
    }
}

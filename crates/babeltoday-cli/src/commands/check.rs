use super::{json_pretty, load_catalogs, CatalogPaths, EXIT_FAILURE, EXIT_SUCCESS};
use babeltoday_core::{resolve_presets, PluginCell, PresetCell};
use babeltoday_schema::{Browser, Catalogs};

pub fn run(
    paths: &CatalogPaths,
    name: &str,
    browser_id: &str,
    plugin: bool,
    json: bool,
) -> Result<u8, String> {
    let catalogs = load_catalogs(paths)?;
    let browser = find_browser(&catalogs, browser_id)?;
    if plugin {
        check_plugin(&catalogs, browser, name, json)
    } else {
        check_preset(&catalogs, browser, name, json)
    }
}

fn find_browser<'a>(catalogs: &'a Catalogs, id: &str) -> Result<&'a Browser, String> {
    catalogs
        .browsers
        .iter()
        .find(|browser| browser.id == id)
        .ok_or_else(|| format!("no browser with id '{id}'"))
}

fn check_plugin(
    catalogs: &Catalogs,
    browser: &Browser,
    key: &str,
    json: bool,
) -> Result<u8, String> {
    // Missing catalog entries evaluate to unsupported, same as in the matrix.
    let versions = catalogs.plugins.get(key).cloned().unwrap_or_default();
    let cell = PluginCell::evaluate(browser, &versions);
    if json {
        println!(
            "{}",
            json_pretty(&serde_json::json!({
                "plugin": key,
                "browser": browser.id.as_str(),
                "supported": cell.supported,
                "since": cell.support,
            }))?
        );
    } else {
        println!(
            "{key} on {} {}: {}",
            browser.name,
            browser.version,
            cell.display()
        );
    }
    Ok(if cell.supported {
        EXIT_SUCCESS
    } else {
        EXIT_FAILURE
    })
}

fn check_preset(
    catalogs: &Catalogs,
    browser: &Browser,
    name: &str,
    json: bool,
) -> Result<u8, String> {
    let decl = catalogs
        .presets
        .iter()
        .find(|preset| preset.name == name)
        .ok_or_else(|| format!("no preset named '{name}'"))?;
    let resolved = resolve_presets(std::slice::from_ref(decl), &catalogs.plugins);
    let cell = PresetCell::evaluate(browser, &resolved[0].plugins);
    if json {
        println!(
            "{}",
            json_pretty(&serde_json::json!({
                "preset": name,
                "browser": browser.id.as_str(),
                "supported": cell.fully_supported,
                "supported_count": cell.supported_count,
                "total": cell.total,
            }))?
        );
    } else {
        println!(
            "{name} on {} {}: {}",
            browser.name,
            browser.version,
            cell.display()
        );
    }
    Ok(if cell.fully_supported {
        EXIT_SUCCESS
    } else {
        EXIT_FAILURE
    })
}

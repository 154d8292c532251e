use super::{json_pretty, load_catalogs, CatalogPaths, EXIT_SUCCESS};
use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CatalogKind {
    Browsers,
    Presets,
    Plugins,
}

pub fn run(paths: &CatalogPaths, catalog: CatalogKind, json: bool) -> Result<u8, String> {
    let catalogs = load_catalogs(paths)?;
    match catalog {
        CatalogKind::Browsers => {
            if json {
                println!("{}", json_pretty(&catalogs.browsers)?);
            } else {
                println!("{:<10} {:<20} VERSION", "ID", "NAME");
                for browser in &catalogs.browsers {
                    println!(
                        "{:<10} {:<20} {}",
                        browser.id, browser.name, browser.version
                    );
                }
            }
        }
        CatalogKind::Presets => {
            if json {
                println!("{}", json_pretty(&catalogs.presets)?);
            } else {
                for preset in &catalogs.presets {
                    println!("{} ({} plugins)", preset.name, preset.plugins.len());
                }
            }
        }
        CatalogKind::Plugins => {
            if json {
                println!("{}", json_pretty(&catalogs.plugins)?);
            } else {
                for key in catalogs.plugins.keys() {
                    println!("{key}");
                }
            }
        }
    }
    Ok(EXIT_SUCCESS)
}

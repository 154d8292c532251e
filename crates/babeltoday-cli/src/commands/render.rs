use super::{load_catalogs, CatalogPaths, EXIT_SUCCESS};
use babeltoday_core::SupportMatrix;
use babeltoday_report::{render_report, ReportOptions};
use std::path::Path;

pub fn run(paths: &CatalogPaths, output: Option<&Path>, no_date: bool) -> Result<u8, String> {
    let catalogs = load_catalogs(paths)?;
    let matrix = SupportMatrix::compute(&catalogs);
    let options = ReportOptions {
        generated_on: (!no_date).then(|| chrono::Utc::now().date_naive()),
    };
    let html = render_report(&matrix, &options);
    match output {
        Some(path) => {
            std::fs::write(path, &html)
                .map_err(|e| format!("failed to write {}: {e}", path.display()))?;
            println!("report written to {}", path.display());
        }
        None => print!("{html}"),
    }
    Ok(EXIT_SUCCESS)
}

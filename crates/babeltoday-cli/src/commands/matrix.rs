use super::{colorize_cell, json_pretty, load_catalogs, CatalogPaths, EXIT_SUCCESS};
use babeltoday_core::SupportMatrix;

pub fn run(paths: &CatalogPaths, json: bool) -> Result<u8, String> {
    let catalogs = load_catalogs(paths)?;
    let matrix = SupportMatrix::compute(&catalogs);
    if json {
        println!("{}", json_pretty(&matrix)?);
    } else {
        print_table(&matrix);
    }
    Ok(EXIT_SUCCESS)
}

fn print_table(matrix: &SupportMatrix) {
    let headers: Vec<String> = matrix
        .browsers
        .iter()
        .map(|browser| format!("{} ({})", browser.name, browser.version))
        .collect();

    let mut name_width = 0;
    let mut widths: Vec<usize> = headers.iter().map(String::len).collect();
    for preset in &matrix.presets {
        name_width = name_width.max(preset.name.len());
        for (width, cell) in widths.iter_mut().zip(&preset.cells) {
            *width = (*width).max(cell.display().len());
        }
        for plugin in &preset.plugins {
            name_width = name_width.max(plugin.key.len() + 2);
            for (width, cell) in widths.iter_mut().zip(&plugin.cells) {
                *width = (*width).max(cell.display().len());
            }
        }
    }

    let mut header_line = format!("{:<name_width$}", "");
    for (header, &width) in headers.iter().zip(&widths) {
        header_line.push_str(&format!("  {header:<width$}"));
    }
    println!("{}", header_line.trim_end());

    for preset in &matrix.presets {
        let mut line = format!("{:<name_width$}", preset.name.as_str());
        for (cell, &width) in preset.cells.iter().zip(&widths) {
            let text = format!("{:<width$}", cell.display());
            line.push_str("  ");
            line.push_str(&colorize_cell(&text, cell.fully_supported));
        }
        println!("{line}");

        for plugin in &preset.plugins {
            let mut line = format!("{:<name_width$}", format!("  {}", plugin.key));
            for (cell, &width) in plugin.cells.iter().zip(&widths) {
                let text = format!("{:<width$}", cell.display());
                line.push_str("  ");
                line.push_str(&colorize_cell(&text, cell.supported));
            }
            println!("{line}");
        }
    }
}

use babeltoday_core::{PluginRow, PresetMatrix, SupportMatrix};
use babeltoday_schema::Browser;
use chrono::NaiveDate;

/// Rendering options for [`render_report`].
#[derive(Debug, Clone, Default)]
pub struct ReportOptions {
    /// Date stamped into the footer, or `None` to omit the line.
    pub generated_on: Option<NaiveDate>,
}

const HEAD: &str = r#"<!DOCTYPE html>
<html>
  <head>
    <link href="http://fonts.googleapis.com/icon?family=Material+Icons" rel="stylesheet">
    <link type="text/css" rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/materialize/0.97.7/css/materialize.min.css" media="screen,projection"/>
    <link type="text/css" rel="stylesheet" href="/css/style.css"/>
    <meta name="viewport" content="width=device-width, initial-scale=1.0"/>
    <title>Do I need Babel today?</title>
  </head>
  <body>
"#;

/// Render the full HTML document for a computed support matrix.
pub fn render_report(matrix: &SupportMatrix, options: &ReportOptions) -> String {
    let mut out = String::with_capacity(16 * 1024);
    out.push_str(HEAD);
    out.push_str("    <table class=\"highlight\">\n");
    out.push_str("      <thead>\n        <tr>\n          <th></th>\n");
    for browser in &matrix.browsers {
        browser_header_cell(&mut out, browser);
    }
    out.push_str("        </tr>\n      </thead>\n");
    for preset in &matrix.presets {
        preset_body(&mut out, preset);
    }
    out.push_str("    </table>\n");
    tail(&mut out, options);
    out
}

fn browser_header_cell(out: &mut String, browser: &Browser) {
    out.push_str(&format!(
        "          <th data-field=\"{}\">{} ({})</th>\n",
        escape_html(browser.id.as_str()),
        escape_html(&browser.name),
        escape_html(&browser.version),
    ));
}

fn preset_body(out: &mut String, preset: &PresetMatrix) {
    out.push_str(&format!(
        "      <tbody data-id=\"{}\">\n",
        escape_html(preset.name.as_str())
    ));
    preset_row(out, preset);
    for plugin in &preset.plugins {
        plugin_row(out, plugin);
    }
    out.push_str("      </tbody>\n");
}

fn preset_row(out: &mut String, preset: &PresetMatrix) {
    let name = escape_html(preset.name.as_str());
    out.push_str("        <tr class=\"preset-row\">\n");
    out.push_str(&format!(
        "          <td class=\"preset-name\"><a href=\"http://babeljs.io/docs/plugins/preset-{name}\">{name}</a></td>\n"
    ));
    for cell in &preset.cells {
        out.push_str(&format!(
            "          <td class=\"{}\">{}</td>\n",
            supported_class(cell.fully_supported),
            escape_html(&cell.display()),
        ));
    }
    out.push_str("        </tr>\n");
}

fn plugin_row(out: &mut String, plugin: &PluginRow) {
    let key = escape_html(plugin.key.as_str());
    out.push_str("        <tr class=\"plugin-row\">\n");
    out.push_str(&format!(
        "          <td class=\"plugin-name\"><a href=\"http://babeljs.io/docs/plugins/{key}\">{key}</a></td>\n"
    ));
    for cell in &plugin.cells {
        out.push_str(&format!(
            "          <td class=\"{}\">{}</td>\n",
            supported_class(cell.supported),
            escape_html(cell.display()),
        ));
    }
    out.push_str("        </tr>\n");
}

fn tail(out: &mut String, options: &ReportOptions) {
    out.push_str(
        r#"    <footer class="page-footer">
      <div class="container">
        <div class="row">
          <div class="col l6 s12">
            <h5 class="white-text">Sources</h5>
            <ul>
              <li><a class="grey-text text-lighten-3" href="http://babeljs.io/docs/plugins/">Babel plugins</a></li>
              <li><a class="grey-text text-lighten-3" href="https://raw.githubusercontent.com/babel/babel-preset-env/master/data/plugins.json">Plugin browser support</a></li>
              <li><a class="grey-text text-lighten-3" href="https://github.com/mariusGundersen/DoIneedBabelToday">Source code</a></li>
            </ul>
          </div>
        </div>
      </div>
      <div class="footer-copyright">
        <div class="container">
"#,
    );
    if let Some(date) = options.generated_on {
        out.push_str(&format!(
            "          Generated on {}\n",
            date.format("%Y-%m-%d")
        ));
    }
    out.push_str(
        r#"        </div>
      </div>
    </footer>
  </body>
</html>
"#,
    );
}

fn supported_class(supported: bool) -> &'static str {
    if supported {
        "is-supported"
    } else {
        ""
    }
}

/// Escape markup metacharacters in catalog-derived text.
fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use babeltoday_schema::{parse_browsers_str, parse_plugins_str, parse_presets_str, Catalogs};

    fn matrix() -> SupportMatrix {
        let catalogs = Catalogs {
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
        };
        SupportMatrix::compute(&catalogs)
    }

    #[test]
    fn report_is_a_complete_document() {
        let html = render_report(&matrix(), &ReportOptions::default());
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Do I need Babel today?</title>"));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn header_cells_carry_browser_fields() {
        let html = render_report(&matrix(), &ReportOptions::default());
        assert!(html.contains(r#"<th data-field="chrome">Chrome (55)</th>"#));
        assert!(html.contains(r#"<th data-field="firefox">Firefox (52)</th>"#));
    }

    #[test]
    fn preset_body_contains_preset_and_plugin_rows() {
        let html = render_report(&matrix(), &ReportOptions::default());
        assert!(html.contains(r#"<tbody data-id="es2015">"#));
        assert!(html.contains(r#"<tr class="preset-row">"#));
        assert!(html.contains(r#"<tr class="plugin-row">"#));
        assert!(html.contains(
            r#"<a href="http://babeljs.io/docs/plugins/preset-es2015">es2015</a>"#
        ));
        assert!(html.contains(
            r#"<a href="http://babeljs.io/docs/plugins/transform-es2015-classes">transform-es2015-classes</a>"#
        ));
    }

    #[test]
    fn supported_cells_are_marked() {
        let html = render_report(&matrix(), &ReportOptions::default());
        // chrome 55 covers both plugins, firefox 52 misses classes
        assert!(html.contains(r#"<td class="is-supported">Yes</td>"#));
        assert!(html.contains(r#"<td class="">Use plugin (1/2)</td>"#));
        assert!(html.contains(r#"<td class="is-supported">47</td>"#));
        assert!(html.contains(r#"<td class="">Use plugin</td>"#));
    }

    #[test]
    fn catalog_text_is_escaped() {
        let catalogs = Catalogs {
            browsers: parse_browsers_str(
                r#"[{"id": "chrome", "name": "Chrome <&> \"Canary\"", "version": "55"}]"#,
            )
            .unwrap(),
            plugins: parse_plugins_str("{}").unwrap(),
            presets: parse_presets_str("{}").unwrap(),
        };
        let html = render_report(&SupportMatrix::compute(&catalogs), &ReportOptions::default());
        assert!(html.contains("Chrome &lt;&amp;&gt; &quot;Canary&quot; (55)"));
        assert!(!html.contains("<&>"));
    }

    #[test]
    fn generated_on_line_follows_options() {
        let dated = ReportOptions {
            generated_on: NaiveDate::from_ymd_opt(2017, 1, 15),
        };
        let html = render_report(&matrix(), &dated);
        assert!(html.contains("Generated on 2017-01-15"));

        let undated = render_report(&matrix(), &ReportOptions::default());
        assert!(!undated.contains("Generated on"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let matrix = matrix();
        let options = ReportOptions::default();
        assert_eq!(
            render_report(&matrix, &options),
            render_report(&matrix, &options)
        );
    }
}

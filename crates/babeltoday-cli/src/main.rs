mod commands;

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use commands::list::CatalogKind;
use commands::{CatalogPaths, EXIT_CATALOG_ERROR, EXIT_FAILURE};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(
    name = "babeltoday",
    version,
    about = "Browser support matrix generator for Babel presets and plugins"
)]
struct Cli {
    /// Path to the browser catalog JSON file.
    #[arg(long, default_value = "data/browsers.json", global = true)]
    browsers: PathBuf,

    /// Path to the plugin compatibility catalog JSON file.
    #[arg(long, default_value = "data/plugins.json", global = true)]
    plugins: PathBuf,

    /// Path to the preset catalog JSON file.
    #[arg(long, default_value = "data/presets.json", global = true)]
    presets: PathBuf,

    /// Output results as structured JSON.
    #[arg(long, default_value_t = false, global = true)]
    json: bool,

    /// Enable verbose (debug) logging output.
    #[arg(short, long, default_value_t = false, global = true)]
    verbose: bool,

    /// Enable trace-level logging (more detailed than --verbose).
    #[arg(long, default_value_t = false, global = true)]
    trace: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Compute the support matrix and print the HTML report.
    Render {
        /// Write the report to a file instead of stdout.
        #[arg(long)]
        output: Option<PathBuf>,
        /// Omit the generated-on line from the footer.
        #[arg(long, default_value_t = false)]
        no_date: bool,
    },
    /// Print the computed support matrix as a terminal table.
    Matrix,
    /// List the entries of one catalog.
    List {
        /// Catalog to enumerate.
        #[arg(value_enum)]
        catalog: CatalogKind,
    },
    /// Evaluate one preset (or plugin) against one browser.
    Check {
        /// Preset name, or plugin key with --plugin.
        name: String,
        /// Browser id to evaluate against.
        #[arg(long)]
        browser: String,
        /// Treat NAME as a plugin key instead of a preset name.
        #[arg(long, default_value_t = false)]
        plugin: bool,
    },
    /// Generate shell completions for bash, zsh, fish, elvish, or powershell.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
    /// Generate man pages in the specified directory.
    ManPages {
        /// Output directory for man pages.
        #[arg(default_value = "man")]
        dir: PathBuf,
    },
}

fn main() -> ExitCode {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let msg = info.to_string();
        if msg.contains("Broken pipe")
            || msg.contains("broken pipe")
            || msg.contains("os error 32")
            || msg.contains("failed printing to stdout")
        {
            std::process::exit(0);
        }
        default_hook(info);
    }));

    let cli = Cli::parse();

    let default_level = if cli.trace {
        "trace"
    } else if cli.verbose {
        "debug"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("BABELTODAY_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_target(false)
        .without_time()
        .init();

    let paths = CatalogPaths {
        browsers: cli.browsers,
        plugins: cli.plugins,
        presets: cli.presets,
    };
    let json_output = cli.json;

    let result = match cli.command {
        Commands::Render { output, no_date } => {
            commands::render::run(&paths, output.as_deref(), no_date)
        }
        Commands::Matrix => commands::matrix::run(&paths, json_output),
        Commands::List { catalog } => commands::list::run(&paths, catalog, json_output),
        Commands::Check {
            name,
            browser,
            plugin,
        } => commands::check::run(&paths, &name, &browser, plugin, json_output),
        Commands::Completions { shell } => commands::completions::run::<Cli>(shell),
        Commands::ManPages { dir } => commands::man_pages::run::<Cli>(&dir),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(msg) => {
            eprintln!("error: {msg}");
            let code = if msg.starts_with("catalog error:") {
                EXIT_CATALOG_ERROR
            } else {
                EXIT_FAILURE
            };
            ExitCode::from(code)
        }
    }
}

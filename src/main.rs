// Unibox - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Config loading and logging initialisation (debug mode support)
// 3. Headless listing (--list) or eframe GUI launch

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod gui;

// Re-export modules from the library crate so that `gui.rs` can still use
// `crate::app::...`, `crate::core::...` etc.
pub use unibox::app;
pub use unibox::core;
pub use unibox::platform;
pub use unibox::ui;
pub use unibox::util;

use clap::{Parser, ValueEnum};
use crate::core::export::ExportFormat;
use std::io::Write;
use std::path::PathBuf;

/// Output format for --list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ListFormat {
    Table,
    Csv,
    Json,
}

/// Unibox - unified messaging dashboard.
///
/// Browse conversations, contacts, smart filters and notifications from
/// every platform in one place.
#[derive(Parser, Debug)]
#[command(name = "Unibox", version, about)]
struct Cli {
    /// Print the rows of a screen (inbox, contacts, filters, analytics,
    /// notifications, settings) and exit without opening a window.
    #[arg(short = 'l', long = "list", value_name = "SCREEN")]
    list: Option<String>,

    /// Search text applied to the listed screen.
    #[arg(short = 'q', long = "query", default_value = "")]
    query: String,

    /// Output format for --list.
    #[arg(long = "format", value_enum, default_value_t = ListFormat::Table)]
    format: ListFormat,

    /// Directory containing config.toml (defaults to the platform config dir).
    #[arg(short = 'c', long = "config-dir")]
    config_dir: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // Resolve platform paths and load config before logging so the
    // configured level can take effect.
    let paths = match cli.config_dir.clone() {
        Some(config_dir) => platform::config::PlatformPaths { config_dir },
        None => platform::config::PlatformPaths::resolve(),
    };
    let (config, config_warnings) = platform::config::load_config(&paths.config_dir);

    util::logging::init(cli.debug, config.log_level.as_deref());

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        config = %paths.config_file().display(),
        "Unibox starting"
    );
    for warning in &config_warnings {
        tracing::warn!(warning = %warning, "Config warning");
    }

    let mut state = app::state::DashboardState::new(&config);
    if let Some(first) = config_warnings.first() {
        state.status_message = format!("Config: {first}");
    }

    if let Some(ref key) = cli.list {
        let code = match run_list(&mut state, key, &cli.query, cli.format) {
            Ok(()) => 0,
            Err(e) => {
                tracing::error!(error = %e, "Listing failed");
                eprintln!("Error: {e}");
                1
            }
        };
        std::process::exit(code);
    }

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "{} v{}",
                util::constants::APP_NAME,
                util::constants::APP_VERSION
            ))
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    let result = eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |_cc| Ok(Box::new(gui::UniboxApp::new(state)))),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: Failed to launch Unibox GUI: {e}");
        std::process::exit(1);
    }
}

/// Print one screen's filtered rows to stdout.
fn run_list(
    state: &mut app::state::DashboardState,
    key: &str,
    query: &str,
    format: ListFormat,
) -> util::error::Result<()> {
    use util::error::UniboxError;

    let screen = app::state::Screen::from_key(key).ok_or_else(|| UniboxError::UnknownScreen {
        key: key.to_string(),
    })?;
    state.set_query(screen, query);
    tracing::debug!(screen = screen.key(), matches = state.visible_count(screen), "Listing");

    let path = PathBuf::from("<stdout>");
    let write_err = |source: std::io::Error| UniboxError::Io {
        path: path.clone(),
        operation: "write",
        source,
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match format {
        ListFormat::Table => {
            for line in app::report::table_lines(state, screen) {
                writeln!(out, "{line}").map_err(write_err)?;
            }
        }
        ListFormat::Csv => {
            app::report::export_visible(state, screen, ExportFormat::Csv, &mut out, &path)?;
        }
        ListFormat::Json => {
            app::report::export_visible(state, screen, ExportFormat::Json, &mut out, &path)?;
            writeln!(out).map_err(write_err)?;
        }
    }
    out.flush().map_err(write_err)?;
    Ok(())
}

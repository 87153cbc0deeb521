//! HexTray - terminal designer for hexagonal triangle-tile trays
//!
//! Paint the 294 triangles of the hexagon with the tray colors, optionally
//! repeating every stroke across all six slices. The design is saved after
//! every change and restored on the next start.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn};

use hextray::config::Config;
use hextray::constants::{APP_BINARY_NAME, APP_NAME, LOG_FILE_NAME};
use hextray::logging::{self, LogTarget};
use hextray::models::{Hexagon, Palette};
use hextray::services::{load_or_blank, Designer, FileStore, HexagonStore};
use hextray::tui;

/// HexTray - terminal designer for hexagonal triangle-tile trays
#[derive(Parser, Debug)]
#[command(name = APP_BINARY_NAME, author, version, about, long_about = None)]
struct Cli {
    /// Design file to open and save (defaults to the configured one)
    #[arg(value_name = "FILE")]
    design_path: Option<PathBuf>,

    /// Start from a blank hexagon, ignoring any saved design
    #[arg(long)]
    blank: bool,

    /// Print the tile count per color and exit
    #[arg(long)]
    summary: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load or create default config
    let (config, config_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };

    // A missing log location must not keep the designer from starting
    let target = if cli.summary {
        Some(LogTarget::Stderr)
    } else {
        Config::config_dir()
            .ok()
            .map(|dir| LogTarget::File(dir.join(LOG_FILE_NAME)))
    };
    logging::init_or_warn(cli.verbose, target);

    if let Some(e) = config_error {
        warn!("Using default configuration: {e:#}");
    }

    let design_path = match cli.design_path {
        Some(path) => path,
        None => config.design_file_path()?,
    };
    let store = FileStore::new(&design_path);

    let hexagon = if cli.blank {
        Hexagon::blank()
    } else {
        load_or_blank(&store)
    };

    if cli.summary {
        print_summary(&hexagon);
        return Ok(());
    }

    info!(
        "Starting {} v{} with {}",
        APP_NAME,
        env!("CARGO_PKG_VERSION"),
        design_path.display()
    );

    let mut designer = Designer::new(hexagon, Palette::standard());
    let sink = store.clone();
    designer.subscribe(Box::new(move |hexagon| sink.save(hexagon)));

    let mut state = tui::AppState::new(designer, config, design_path);
    let mut terminal = tui::setup_terminal()?;
    let result = tui::run_tui(&mut state, &mut terminal);
    tui::restore_terminal(terminal)?;

    info!("Exiting");
    result
}

/// Prints one `name: count` line per palette color, then the empty tiles.
fn print_summary(hexagon: &Hexagon) {
    let palette = Palette::standard();
    for (entry, count) in palette.usage(hexagon) {
        println!("{}: {count}", entry.name);
    }
    println!("Empty: {}", hexagon.count_empty_tiles());
}

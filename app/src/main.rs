mod app;
mod points;

use std::path::PathBuf;

use clap::Parser;
use eframe::{NativeOptions, egui, run_native};
use plasma_core::PlasmaConfig;
use tracing_subscriber::EnvFilter;

use crate::app::PlasmaApp;

/// Diamond-square plasma fractal: renders a grayscale point cloud and saves it as a PGM raster
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// TOML configuration file (size, initial_range, seed, corner_range, output_range)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Raster written after every generation
    #[arg(short, long, default_value = "plasma.pgm")]
    output: PathBuf,

    /// Grid size, must be 2^k + 1 (overrides the config file)
    #[arg(long)]
    size: Option<usize>,

    /// Initial randomness range (overrides the config file)
    #[arg(long)]
    range: Option<i32>,

    /// Seed for reproducible sessions (overrides the config file)
    #[arg(long)]
    seed: Option<u64>,

    /// Rendered point size in pixels
    #[arg(long, default_value_t = 3.0)]
    point_size: f32,

    /// Open the window fullscreen
    #[arg(long)]
    fullscreen: bool,

    /// Generate once, write the raster and exit without opening a window
    #[arg(long)]
    headless: bool,
}

impl Cli {
    // Config file (or defaults) with command-line overrides applied
    fn resolve_config(&self) -> Result<PlasmaConfig, plasma_core::PlasmaError> {
        let mut config = match &self.config {
            Some(path) => PlasmaConfig::from_toml_file(path)?,
            None => PlasmaConfig::default(),
        };
        if let Some(size) = self.size {
            config.size = size;
        }
        if let Some(range) = self.range {
            config.initial_range = range;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = cli.resolve_config()?;
    tracing::info!(
        size = config.size,
        initial_range = config.initial_range,
        seed = ?config.seed,
        "configuration loaded"
    );

    if cli.headless {
        let grid = plasma_core::generate(&config)?;
        let bytes = plasma_storage::save_pgm(&cli.output, &grid)?;
        tracing::info!(path = %cli.output.display(), bytes, "headless run finished");
        return Ok(());
    }

    let app = PlasmaApp::new(&config, cli.output, cli.point_size)?;
    let opts = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Plasma fractal")
            .with_inner_size([1000.0, 760.0])
            .with_min_inner_size([400.0, 300.0])
            .with_fullscreen(cli.fullscreen),
        ..Default::default()
    };
    run_native(
        "Plasma fractal",
        opts,
        Box::new(|_cc| Ok(Box::new(app))),
    )?;
    Ok(())
}

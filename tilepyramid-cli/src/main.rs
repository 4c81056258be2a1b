//! Tilepyramid CLI - enumerate slippy-map tiles for a bounding box.
//!
//! Computes the set of Web Mercator tile coordinates covering a zoom
//! range and an optional geographic bounding box, and prints them as
//! tile paths or JSON. Logging goes to stderr and is controlled through
//! `RUST_LOG` (default `warn`).

mod error;
mod output;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use tilepyramid::{GeoBounds, PyramidConfig, Strategy, TilePyramid};

use crate::error::CliError;
use crate::output::OutputFormat;

/// Enumerate the slippy-map tiles covering a bounding box.
#[derive(Debug, Parser)]
#[command(name = "tilepyramid", version, about)]
struct Cli {
    /// First zoom level to generate (1-20)
    #[arg(long)]
    min_zoom: u8,

    /// Last zoom level to generate (1-20)
    #[arg(long)]
    max_zoom: u8,

    /// Target bounding box as min_x,min_y,max_x,max_y in degrees
    #[arg(long, default_value = "-180,-90,180,90")]
    bounds: String,

    /// Filter tiles on a worker pool instead of the calling thread
    #[arg(long)]
    parallel: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let bounds: GeoBounds = cli.bounds.parse()?;
    let config = PyramidConfig::new(cli.min_zoom, cli.max_zoom, bounds)?;
    let strategy = if cli.parallel {
        Strategy::Parallel
    } else {
        Strategy::Sequential
    };

    let engine = TilePyramid::with_strategy(config, strategy);
    debug!(
        min_zoom = cli.min_zoom,
        max_zoom = cli.max_zoom,
        bounds = %bounds,
        candidates = engine.total_candidates(),
        "Generating pyramid"
    );

    let pyramid = engine.generate();
    output::render(&pyramid, cli.format, std::io::stdout().lock())
}

//! Command-line interface for the synthesis service

use crate::adjacency::border::BorderPolicy;
use crate::adjacency::fingerprint::EdgeFingerprinter;
use crate::algorithm::executor::SynthesisConfig;
use crate::io::configuration::{
    DEFAULT_ATTEMPTS, DEFAULT_BORDER_HEX, DEFAULT_HEIGHT, DEFAULT_PORT,
    DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_WIDTH, EDGE_SAMPLE_COUNT, OUTPUT_DIR, ServiceConfig,
    TILE_SET_DIR, service_version,
};
use crate::io::error::Result;
use clap::Parser;
use std::path::PathBuf;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

#[derive(Parser)]
#[command(name = "tilewave")]
#[command(
    author,
    version,
    about = "Generate tile images with border-constrained wave function collapse"
)]
/// Command-line arguments for the synthesis service
pub struct Cli {
    /// Generate one image into the output directory and exit
    #[arg(long)]
    pub run_once: bool,

    /// Print the adjacency fingerprints of the tile set and exit
    #[arg(long)]
    pub print_adjacency: bool,

    /// Port to listen on
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Directory containing the tile images
    #[arg(short, long, default_value = TILE_SET_DIR)]
    pub tiles: PathBuf,

    /// Directory one-shot images are written to
    #[arg(short, long, default_value = OUTPUT_DIR)]
    pub output: PathBuf,

    /// Solid reference color whose edge marks the canvas border
    #[arg(short, long, default_value = DEFAULT_BORDER_HEX)]
    pub border_color: String,

    /// Pixels sampled along each tile edge
    #[arg(long, default_value_t = EDGE_SAMPLE_COUNT)]
    pub edge_samples: usize,

    /// Output width in cells for one-shot generation
    #[arg(short = 'W', long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Output height in cells for one-shot generation
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,

    /// Solver attempt budget for one-shot generation
    #[arg(short, long, default_value_t = DEFAULT_ATTEMPTS)]
    pub attempts: usize,

    /// Random seed for one-shot generation (defaults to the current time)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Wall-clock limit in seconds for each HTTP generation request
    #[arg(long, default_value_t = DEFAULT_REQUEST_TIMEOUT_SECS)]
    pub request_timeout: u64,

    /// Only log warnings and errors, and hide progress output
    #[arg(short, long)]
    pub quiet: bool,
}

/// What the process should do
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Generate one image and exit
    RunOnce,
    /// Print the adjacency table and exit
    PrintAdjacency,
    /// Serve HTTP requests until shut down
    Serve,
}

impl Cli {
    /// Selected mode; one-shot generation wins over the adjacency report
    pub const fn mode(&self) -> Mode {
        if self.run_once {
            Mode::RunOnce
        } else if self.print_adjacency {
            Mode::PrintAdjacency
        } else {
            Mode::Serve
        }
    }

    /// Resolve the process-wide service configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the border color is not a valid hex color
    pub fn service_config(&self) -> Result<ServiceConfig> {
        let fingerprinter = EdgeFingerprinter::new(self.edge_samples);
        Ok(ServiceConfig {
            tiles_dir: self.tiles.clone(),
            output_dir: self.output.clone(),
            port: self.port,
            border: BorderPolicy::from_hex(&fingerprinter, &self.border_color)?,
            fingerprinter,
            request_timeout: Duration::from_secs(self.request_timeout),
            version: service_version(),
        })
    }

    /// Generation parameters for one-shot mode
    pub fn synthesis_config(&self) -> SynthesisConfig {
        SynthesisConfig {
            width: self.width,
            height: self.height,
            max_attempts: self.attempts,
            seed: self.seed.unwrap_or_else(time_seed),
        }
    }
}

/// Seed derived from the current time
pub fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}

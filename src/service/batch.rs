//! One-shot generation to a timestamped file

use crate::algorithm::executor::{SynthesisConfig, Synthesizer};
use crate::io::configuration::ServiceConfig;
use crate::io::error::Result;
use crate::io::image::{save_png, timestamped_output_path};
use crate::io::loader::load_tile_set;
use crate::io::progress::AttemptProgress;
use log::{error, info};
use std::path::PathBuf;
use std::time::SystemTime;

/// Generate one image and save it under the output directory
///
/// A solver failure is logged and the partial image is still saved.
///
/// # Errors
///
/// Returns an error if:
/// - The tile set cannot be loaded
/// - The generation parameters are invalid
/// - The image cannot be saved
pub fn run_once(
    config: &ServiceConfig,
    synthesis: &SynthesisConfig,
    quiet: bool,
) -> Result<PathBuf> {
    let tiles = load_tile_set(&config.tiles_dir, &config.fingerprinter)?;
    let progress = AttemptProgress::new(synthesis.max_attempts, quiet);

    let result = Synthesizer::new(&tiles, &config.border)
        .synthesize_observed(synthesis, |attempt| progress.start_attempt(attempt))?;
    progress.finish(result.is_complete());

    if let Some(error) = result.error() {
        error!("Unable to generate: {error}");
    }

    let output_path = timestamped_output_path(&config.output_dir, SystemTime::now());
    save_png(result.image(), &output_path)?;
    info!("Image saved to: {}", output_path.display());

    Ok(output_path)
}

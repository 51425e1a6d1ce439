//! Synthesis orchestration with bounded solver retries
//!
//! The orchestrator validates the request, builds the border-constrained
//! possibility space, hands it to the solver and always renders whatever
//! grid state the solver ends with.

use crate::adjacency::border::BorderPolicy;
use crate::algorithm::initialize::initialize;
use crate::algorithm::solver::{Solver, WaveSolver};
use crate::io::configuration::{
    DEFAULT_ATTEMPTS, DEFAULT_HEIGHT, DEFAULT_WIDTH, MAX_GRID_DIMENSION, MAX_OUTPUT_PIXELS,
};
use crate::io::error::{Result, SynthesisError, invalid_parameter};
use crate::spatial::tiles::TileSet;
use image::RgbaImage;
use log::{debug, info, warn};

/// Parameters of one generation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SynthesisConfig {
    /// Output width in cells
    pub width: usize,
    /// Output height in cells
    pub height: usize,
    /// Solver attempt budget
    pub max_attempts: usize,
    /// Seed for the solver's random choices
    pub seed: u64,
}

impl SynthesisConfig {
    /// Default dimensions and attempt budget with the given seed
    pub const fn with_seed(seed: u64) -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            max_attempts: DEFAULT_ATTEMPTS,
            seed,
        }
    }

    /// Reject degenerate or oversized requests before any solving
    ///
    /// # Errors
    ///
    /// Returns an error if a dimension is zero or above
    /// [`MAX_GRID_DIMENSION`], or the attempt budget is zero
    pub fn validate(&self) -> Result<()> {
        for (parameter, value) in [("width", self.width), ("height", self.height)] {
            if value == 0 {
                return Err(invalid_parameter(parameter, &value, &"must be positive"));
            }
            if value > MAX_GRID_DIMENSION {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &format!("must not exceed {MAX_GRID_DIMENSION}"),
                ));
            }
        }
        if self.max_attempts == 0 {
            return Err(invalid_parameter(
                "attempts",
                &self.max_attempts,
                &"must be at least 1",
            ));
        }
        Ok(())
    }

    /// Pixel size of the rendered image for tiles of `tile_dimensions`
    ///
    /// # Errors
    ///
    /// Returns an error if a side overflows `u32` or the image would exceed
    /// [`MAX_OUTPUT_PIXELS`]
    pub fn output_dimensions(&self, tile_dimensions: (u32, u32)) -> Result<(u32, u32)> {
        let (tile_width, tile_height) = tile_dimensions;
        let side = |cells: usize, tile: u32| {
            u32::try_from(cells)
                .ok()
                .and_then(|cells| cells.checked_mul(tile))
        };
        let too_large = || {
            invalid_parameter(
                "size",
                &format!("{}x{} cells of {tile_width}x{tile_height} px", self.width, self.height),
                &format!("output must not exceed {MAX_OUTPUT_PIXELS} pixels"),
            )
        };

        let (Some(width), Some(height)) = (
            side(self.width, tile_width),
            side(self.height, tile_height),
        ) else {
            return Err(too_large());
        };
        if u64::from(width) * u64::from(height) > MAX_OUTPUT_PIXELS {
            return Err(too_large());
        }
        Ok((width, height))
    }
}

/// Rendered image paired with the solver's outcome
///
/// The image is always present; on failure it shows the partial grid.
#[derive(Debug)]
pub struct Synthesis {
    image: RgbaImage,
    outcome: Result<()>,
}

impl Synthesis {
    /// Pair a rendered image with the solver's outcome
    pub const fn new(image: RgbaImage, outcome: Result<()>) -> Self {
        Self { image, outcome }
    }

    /// Rendered image, complete or partial
    pub const fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Solver outcome
    pub const fn outcome(&self) -> &Result<()> {
        &self.outcome
    }

    /// Solver error, if the grid was not fully collapsed
    pub const fn error(&self) -> Option<&SynthesisError> {
        match &self.outcome {
            Ok(()) => None,
            Err(error) => Some(error),
        }
    }

    /// Whether the solver reached a full solution
    pub const fn is_complete(&self) -> bool {
        self.outcome.is_ok()
    }

    /// Split into the image and the outcome
    pub fn into_parts(self) -> (RgbaImage, Result<()>) {
        (self.image, self.outcome)
    }
}

/// Collapse with `solver` and render its final state regardless of the outcome
pub fn run_solver<S: Solver + ?Sized>(solver: &mut S, max_attempts: usize) -> Synthesis {
    let outcome = solver.collapse(max_attempts);
    if let Err(error) = &outcome {
        warn!("solver did not complete: {error}");
    }
    Synthesis::new(solver.export_image(), outcome)
}

/// Border-constrained synthesis over one loaded tile set
#[derive(Clone, Copy, Debug)]
pub struct Synthesizer<'a> {
    tiles: &'a TileSet,
    border: &'a BorderPolicy,
}

impl<'a> Synthesizer<'a> {
    /// Create a synthesizer for a tile set and border policy
    pub const fn new(tiles: &'a TileSet, border: &'a BorderPolicy) -> Self {
        Self { tiles, border }
    }

    /// Generate an image
    ///
    /// Solver exhaustion is not an error here: it is reported through
    /// [`Synthesis::outcome`] alongside the partial image.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is degenerate or the image would
    /// be too large
    pub fn synthesize(&self, config: &SynthesisConfig) -> Result<Synthesis> {
        self.synthesize_observed(config, |_| {})
    }

    /// Generate an image, reporting the start of each solver attempt
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is degenerate (see
    /// [`SynthesisConfig::validate`]) or the image would be too large (see
    /// [`SynthesisConfig::output_dimensions`])
    pub fn synthesize_observed(
        &self,
        config: &SynthesisConfig,
        observer: impl FnMut(usize) + 'a,
    ) -> Result<Synthesis> {
        config.validate()?;
        let (image_width, image_height) = config.output_dimensions(self.tiles.tile_dimensions())?;
        debug!("output image {image_width}x{image_height} px");

        let space = initialize(self.tiles, self.border, config.width, config.height);
        if let Some(position) = space.first_contradiction() {
            debug!("cell {position} has no border-compatible tiles");
        }

        let mut solver = WaveSolver::new(self.tiles, config.width, config.height, config.seed)
            .with_attempt_observer(observer);
        solver.set_possibility_space(space)?;

        info!(
            "synthesizing {}x{} cells from {} tiles ({} attempts, seed {})",
            config.width,
            config.height,
            self.tiles.len(),
            config.max_attempts,
            config.seed
        );
        Ok(run_solver(&mut solver, config.max_attempts))
    }
}

//! Tests for synthesis configuration, solver orchestration and partial results

#[cfg(test)]
mod tests {
    use crate::support::{BRICK, GROUND, border, brick_tiles, rail_tiles, tile_set};
    use image::{Rgba, RgbaImage};
    use std::cell::Cell;
    use tilewave::SynthesisError;
    use tilewave::algorithm::executor::{
        Synthesis, SynthesisConfig, Synthesizer, run_solver,
    };
    use tilewave::algorithm::solver::Solver;
    use tilewave::io::configuration::{
        CONTRADICTION_COLOR, MAX_GRID_DIMENSION, MAX_OUTPUT_PIXELS,
    };

    // Always fails and counts how often it was asked to render
    struct StuckSolver {
        exports: Cell<usize>,
    }

    impl Solver for StuckSolver {
        fn collapse(&mut self, max_attempts: usize) -> tilewave::Result<()> {
            Err(SynthesisError::Unsolved {
                attempts: max_attempts,
                contradiction: None,
            })
        }

        fn export_image(&self) -> RgbaImage {
            self.exports.set(self.exports.get() + 1);
            RgbaImage::from_pixel(2, 2, BRICK)
        }
    }

    fn config(width: usize, height: usize, max_attempts: usize) -> SynthesisConfig {
        SynthesisConfig {
            width,
            height,
            max_attempts,
            seed: 17,
        }
    }

    // Tests default generation parameters
    #[test]
    fn test_default_config() {
        let config = SynthesisConfig::with_seed(5);
        assert_eq!((config.width, config.height, config.max_attempts), (8, 8, 400));
        assert_eq!(config.seed, 5);
        assert!(config.validate().is_ok());
    }

    // Tests degenerate and oversized requests are rejected
    // Verified by removing the zero-dimension check
    #[test]
    fn test_validate_rejects_degenerate_config() {
        assert!(matches!(
            config(0, 4, 10).validate(),
            Err(SynthesisError::InvalidParameter {
                parameter: "width",
                ..
            })
        ));
        assert!(matches!(
            config(4, 0, 10).validate(),
            Err(SynthesisError::InvalidParameter {
                parameter: "height",
                ..
            })
        ));
        assert!(matches!(
            config(4, 4, 0).validate(),
            Err(SynthesisError::InvalidParameter {
                parameter: "attempts",
                ..
            })
        ));
        assert!(config(MAX_GRID_DIMENSION + 1, 4, 10).validate().is_err());
        assert!(config(MAX_GRID_DIMENSION, 1, 10).validate().is_ok());
    }

    // Tests the pixel budget accounts for tile size
    // Verified by multiplying the dimensions in u32
    #[test]
    fn test_output_dimensions() {
        let default_grid = config(8, 8, 1).output_dimensions((200, 200));
        assert_eq!(default_grid.ok(), Some((1600, 1600)));
        let largest_grid = config(256, 256, 1).output_dimensions((16, 16));
        assert_eq!(largest_grid.ok(), Some((4096, 4096)));
        assert_eq!(
            u64::from(4096_u32 * 4096),
            MAX_OUTPUT_PIXELS,
            "budget is a 4096 pixel square"
        );

        let oversized = [
            ((256, 256), (200, 200)),
            ((1, 1), (u32::MAX, 2)),
            ((2, 1), (u32::MAX, 1)),
        ];
        for (grid, tile) in oversized {
            let result = config(grid.0, grid.1, 1).output_dimensions(tile);
            assert!(
                matches!(
                    result,
                    Err(SynthesisError::InvalidParameter {
                        parameter: "size",
                        ..
                    })
                ),
                "{grid:?} cells of {tile:?} px"
            );
        }
    }

    // Tests an oversized image is refused before the solver runs
    #[test]
    fn test_oversized_output_never_solves() {
        let tiles = tile_set(vec![("large", RgbaImage::from_pixel(200, 200, GROUND))]);
        let policy = border();
        let attempts = Cell::new(0);
        let result = Synthesizer::new(&tiles, &policy).synthesize_observed(
            &config(MAX_GRID_DIMENSION, MAX_GRID_DIMENSION, 10),
            |_| attempts.set(attempts.get() + 1),
        );

        let error = result.err().expect("oversized output rejected");
        assert!(error.is_input_error());
        assert_eq!(attempts.get(), 0);
    }

    // Tests a failed solve still yields the solver's image
    // Verified by returning early from run_solver on error
    #[test]
    fn test_run_solver_always_exports() {
        let mut solver = StuckSolver {
            exports: Cell::new(0),
        };
        let result = run_solver(&mut solver, 3);

        assert!(!result.is_complete());
        assert_eq!(result.image().dimensions(), (2, 2));
        assert!(matches!(
            result.error(),
            Some(SynthesisError::Unsolved { attempts: 3, .. })
        ));
        assert_eq!(solver.exports.get(), 1);
    }

    // Tests a synthesis result splits into image and outcome
    #[test]
    fn test_synthesis_parts() {
        let synthesis = Synthesis::new(RgbaImage::new(1, 1), Ok(()));
        assert!(synthesis.is_complete());
        assert!(synthesis.error().is_none());
        assert!(synthesis.outcome().is_ok());
        let (image, outcome) = synthesis.into_parts();
        assert_eq!(image.dimensions(), (1, 1));
        assert!(outcome.is_ok());
    }

    // Tests a satisfiable request produces a complete image of the right size
    #[test]
    fn test_synthesize_success() {
        let tiles = rail_tiles();
        let policy = border();
        let result = Synthesizer::new(&tiles, &policy)
            .synthesize(&config(3, 3, 50))
            .expect("valid config");

        assert!(result.is_complete());
        assert_eq!(result.image().dimensions(), (18, 18));
        assert!(result.image().pixels().all(|pixel| *pixel == GROUND));
    }

    // Tests an unsatisfiable request returns a partial image with the error
    // Verified by discarding the image when the solver fails
    #[test]
    fn test_synthesize_failure_keeps_image() {
        let tiles = brick_tiles();
        let policy = border();
        let result = Synthesizer::new(&tiles, &policy)
            .synthesize(&config(3, 3, 10))
            .expect("valid config");

        assert!(!result.is_complete());
        assert!(matches!(result.error(), Some(SynthesisError::Unsolved { .. })));
        let image = result.image();
        assert_eq!(image.dimensions(), (18, 18));
        assert_eq!(*image.get_pixel(0, 0), Rgba(CONTRADICTION_COLOR));
        // the interior cell kept its only tile
        assert_eq!(*image.get_pixel(8, 8), BRICK);
    }

    // Tests invalid configs fail before the solver starts
    #[test]
    fn test_invalid_config_never_solves() {
        let tiles = rail_tiles();
        let policy = border();
        let attempts = Cell::new(0);
        let result = Synthesizer::new(&tiles, &policy)
            .synthesize_observed(&config(0, 3, 10), |_| attempts.set(attempts.get() + 1));

        assert!(result.is_err());
        assert_eq!(attempts.get(), 0);
    }

    // Tests the observer sees each solver attempt
    #[test]
    fn test_observer_sees_attempts() {
        let tiles = rail_tiles();
        let policy = border();
        let attempts = Cell::new(0);
        let result = Synthesizer::new(&tiles, &policy)
            .synthesize_observed(&config(3, 3, 50), |attempt| attempts.set(attempt))
            .expect("valid config");

        assert!(result.is_complete());
        assert_eq!(attempts.get(), 1);
    }
}

//! Wave function collapse solver over an externally supplied possibility space
//!
//! The orchestrator only relies on the [`Solver`] contract. [`WaveSolver`]
//! fulfils it with arc-consistency propagation, minimum-entropy cell
//! selection and full restarts on contradiction.

use crate::algorithm::propagation::{AdjacencyRules, propagate};
use crate::io::error::{Result, SynthesisError, invalid_parameter};
use crate::io::image::render_possibility_space;
use crate::spatial::grid::{CellPosition, PossibilitySpace};
use crate::spatial::tiles::TileSet;
use image::RgbaImage;
use log::{debug, trace};
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Constraint solver contract consumed by the synthesis orchestrator
pub trait Solver {
    /// Collapse every cell to a single tile within `max_attempts` attempts
    ///
    /// # Errors
    ///
    /// Returns [`SynthesisError::Unsolved`] when no attempt reaches a full
    /// solution, or an invalid parameter error for a zero attempt budget
    fn collapse(&mut self, max_attempts: usize) -> Result<()>;

    /// Render the current grid state, complete or not
    fn export_image(&self) -> RgbaImage;
}

/// Callback invoked with the 1-based number of each attempt as it starts
pub type AttemptObserver<'a> = Box<dyn FnMut(usize) + 'a>;

// Where an attempt failed
enum Contradiction {
    // Propagating the starting space, before any random choice
    Initial(CellPosition),
    // After at least one collapse
    Search(CellPosition),
}

/// Seeded wave function collapse solver over a tile set
pub struct WaveSolver<'a> {
    tiles: &'a TileSet,
    rules: AdjacencyRules,
    initial: PossibilitySpace,
    state: PossibilitySpace,
    rng: StdRng,
    observer: Option<AttemptObserver<'a>>,
}

impl<'a> WaveSolver<'a> {
    /// Create a solver whose default space allows every tile in every cell
    pub fn new(tiles: &'a TileSet, width: usize, height: usize, seed: u64) -> Self {
        let initial = PossibilitySpace::unconstrained(width, height, tiles.len());
        Self {
            tiles,
            rules: AdjacencyRules::from_tiles(tiles),
            state: initial.clone(),
            initial,
            rng: StdRng::seed_from_u64(seed),
            observer: None,
        }
    }

    /// Replace the starting possibility space
    ///
    /// # Errors
    ///
    /// Returns an error if the space's dimensions differ from the solver's
    /// grid or its superpositions are sized for a different tile set
    pub fn set_possibility_space(&mut self, space: PossibilitySpace) -> Result<()> {
        if (space.width(), space.height()) != (self.initial.width(), self.initial.height()) {
            return Err(invalid_parameter(
                "possibility_space",
                &format!("{}x{}", space.width(), space.height()),
                &format!(
                    "solver grid is {}x{}",
                    self.initial.width(),
                    self.initial.height()
                ),
            ));
        }
        if let Some((position, superposition)) = space
            .iter()
            .find(|(_, superposition)| superposition.capacity() != self.tiles.len())
        {
            return Err(invalid_parameter(
                "possibility_space",
                &position,
                &format!(
                    "superposition addresses {} tiles, tile set has {}",
                    superposition.capacity(),
                    self.tiles.len()
                ),
            ));
        }

        self.state = space.clone();
        self.initial = space;
        Ok(())
    }

    /// Report the start of each attempt to `observer`
    #[must_use]
    pub fn with_attempt_observer(mut self, observer: impl FnMut(usize) + 'a) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    /// Current grid state
    pub const fn possibility_space(&self) -> &PossibilitySpace {
        &self.state
    }

    // One full collapse from the initial space
    fn run_attempt(&mut self) -> std::result::Result<(), Contradiction> {
        let everything: Vec<CellPosition> = self.state.positions().collect();
        propagate(&mut self.state, &self.rules, everything).map_err(Contradiction::Initial)?;

        while let Some(position) = self.select_cell() {
            let tile = self
                .select_tile(position)
                .ok_or(Contradiction::Search(position))?;
            trace!("collapsing {position} to tile {tile}");
            if let Some(superposition) = self.state.get_mut(position) {
                superposition.collapse_to(tile);
            }
            propagate(&mut self.state, &self.rules, [position]).map_err(Contradiction::Search)?;
        }

        Ok(())
    }

    // Undecided cell with the fewest candidates, ties broken at random
    fn select_cell(&mut self) -> Option<CellPosition> {
        let mut lowest = usize::MAX;
        let mut candidates = Vec::new();

        for (position, superposition) in self.state.iter() {
            let count = superposition.count();
            if count < 2 {
                continue;
            }
            if count < lowest {
                lowest = count;
                candidates.clear();
            }
            if count == lowest {
                candidates.push(position);
            }
        }

        if candidates.is_empty() {
            return None;
        }
        let choice = self.rng.random_range(0..candidates.len());
        candidates.get(choice).copied()
    }

    fn select_tile(&mut self, position: CellPosition) -> Option<usize> {
        let options = self.state.get(position)?.to_vec();
        if options.is_empty() {
            return None;
        }
        let choice = self.rng.random_range(0..options.len());
        options.get(choice).copied()
    }
}

impl Solver for WaveSolver<'_> {
    fn collapse(&mut self, max_attempts: usize) -> Result<()> {
        if max_attempts == 0 {
            return Err(invalid_parameter(
                "attempts",
                &max_attempts,
                &"must be at least 1",
            ));
        }

        let mut contradiction = None;
        for attempt in 1..=max_attempts {
            if let Some(observer) = self.observer.as_mut() {
                observer(attempt);
            }
            self.state = self.initial.clone();

            match self.run_attempt() {
                Ok(()) => {
                    debug!("collapsed on attempt {attempt}/{max_attempts}");
                    return Ok(());
                }
                // No random choice was made yet, so every retry fails the same way
                Err(Contradiction::Initial(position)) => {
                    debug!("starting space contradicts at {position}");
                    return Err(SynthesisError::Unsolved {
                        attempts: attempt,
                        contradiction: Some(position),
                    });
                }
                Err(Contradiction::Search(position)) => {
                    debug!("attempt {attempt}/{max_attempts}: contradiction at {position}");
                    contradiction = Some(position);
                }
            }
        }

        Err(SynthesisError::Unsolved {
            attempts: max_attempts,
            contradiction,
        })
    }

    fn export_image(&self) -> RgbaImage {
        render_possibility_space(self.tiles, &self.state)
    }
}

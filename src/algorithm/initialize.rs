//! Border-constrained construction of the initial possibility space

use crate::adjacency::border::BorderPolicy;
use crate::algorithm::bitset::TileBitset;
use crate::spatial::grid::{BoundaryFlags, CellPosition, PossibilitySpace};
use crate::spatial::tiles::TileSet;

/// Build the initial superposition of every cell of a `width` x `height` grid
///
/// Interior cells may hold any tile. A cell on the canvas edge keeps only
/// tiles whose fingerprint on each canvas-facing side equals the border
/// fingerprint; corner cells must match on both sides. Tiles stay in load
/// order. A grid with a zero dimension yields an empty space, and a 1-wide
/// or 1-high grid may yield empty superpositions, which the solver reports
/// as a contradiction.
pub fn initialize(
    tiles: &TileSet,
    border: &BorderPolicy,
    width: usize,
    height: usize,
) -> PossibilitySpace {
    PossibilitySpace::from_fn(width, height, |position| {
        initial_superposition(tiles, border, position, width, height)
    })
}

/// Superposition of a single cell before solving
pub fn initial_superposition(
    tiles: &TileSet,
    border: &BorderPolicy,
    position: CellPosition,
    width: usize,
    height: usize,
) -> TileBitset {
    let flags = BoundaryFlags::for_cell(position, width, height);
    let mut superposition = TileBitset::all(tiles.len());
    if !flags.is_boundary() {
        return superposition;
    }

    superposition.retain(|index| {
        tiles.get(index).is_some_and(|tile| {
            flags
                .constrained_directions()
                .all(|direction| border.admits(tile, direction))
        })
    });
    superposition
}

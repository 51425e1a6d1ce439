//! Arc-consistency propagation of adjacency constraints
//!
//! After a cell's superposition shrinks, each neighbour keeps only the tiles
//! that at least one remaining tile of the cell supports on the shared edge.
//! Changes ripple outward until nothing else can be removed.

use crate::adjacency::fingerprint::Direction;
use crate::algorithm::bitset::TileBitset;
use crate::spatial::grid::{CellPosition, PossibilitySpace};
use crate::spatial::tiles::TileSet;
use std::collections::VecDeque;

/// Precomputed neighbour compatibility of every tile in every direction
#[derive(Clone, Debug)]
pub struct AdjacencyRules {
    allowed: Vec<[TileBitset; 4]>,
}

impl AdjacencyRules {
    /// Derive rules from fingerprint equality of facing edges
    pub fn from_tiles(tiles: &TileSet) -> Self {
        let count = tiles.len();
        let allowed = (0..count)
            .map(|tile| {
                Direction::ALL.map(|direction| {
                    let mut neighbours = TileBitset::new(count);
                    for other in 0..count {
                        if tiles.compatible(tile, direction, other) {
                            neighbours.insert(other);
                        }
                    }
                    neighbours
                })
            })
            .collect();

        Self { allowed }
    }

    /// Tiles that may sit on the `direction` side of `tile`
    pub fn allowed(&self, tile: usize, direction: Direction) -> Option<&TileBitset> {
        self.allowed
            .get(tile)
            .and_then(|sides| sides.get(direction.index()))
    }

    /// Number of tiles covered by the rules
    pub const fn tile_count(&self) -> usize {
        self.allowed.len()
    }

    /// Union of the tiles supported in `direction` by any tile of `superposition`
    pub fn support(&self, superposition: &TileBitset, direction: Direction) -> TileBitset {
        let mut support = TileBitset::new(self.tile_count());
        for tile in superposition.iter() {
            if let Some(allowed) = self.allowed(tile, direction) {
                support.union_with(allowed);
            }
        }
        support
    }
}

/// Propagate constraints outward from `seeds` until a fixed point
///
/// # Errors
///
/// Returns the position of the first cell whose superposition becomes empty
pub fn propagate(
    space: &mut PossibilitySpace,
    rules: &AdjacencyRules,
    seeds: impl IntoIterator<Item = CellPosition>,
) -> Result<(), CellPosition> {
    let mut queue: VecDeque<CellPosition> = seeds.into_iter().collect();

    if let Some(position) = queue
        .iter()
        .copied()
        .find(|&position| space.get(position).is_some_and(TileBitset::is_empty))
    {
        return Err(position);
    }

    while let Some(position) = queue.pop_front() {
        let Some(current) = space.get(position).cloned() else {
            continue;
        };

        for direction in Direction::ALL {
            let Some(neighbour) = space.neighbor(position, direction) else {
                continue;
            };
            let support = rules.support(&current, direction);
            let Some(candidates) = space.get_mut(neighbour) else {
                continue;
            };

            if candidates.intersect_with(&support) {
                if candidates.is_empty() {
                    return Err(neighbour);
                }
                queue.push_back(neighbour);
            }
        }
    }

    Ok(())
}

//! Cell grid holding one superposition per cell

use crate::adjacency::fingerprint::Direction;
use crate::algorithm::bitset::TileBitset;
use ndarray::Array2;
use std::fmt;

/// Position of one cell, 0-indexed from the top-left corner
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CellPosition {
    /// Column
    pub x: usize,
    /// Row
    pub y: usize,
}

impl CellPosition {
    /// Create a position
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for CellPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Which canvas edges a cell touches
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BoundaryFlags {
    /// Cell is in the first row
    pub top: bool,
    /// Cell is in the last row
    pub bottom: bool,
    /// Cell is in the first column
    pub left: bool,
    /// Cell is in the last column
    pub right: bool,
}

impl BoundaryFlags {
    /// Compute the flags of `position` in a `width` x `height` grid
    pub const fn for_cell(position: CellPosition, width: usize, height: usize) -> Self {
        Self {
            top: position.y == 0,
            bottom: position.y + 1 == height,
            left: position.x == 0,
            right: position.x + 1 == width,
        }
    }

    /// Whether the cell faces the canvas edge in `direction`
    pub const fn faces(&self, direction: Direction) -> bool {
        match direction {
            Direction::Up => self.top,
            Direction::Down => self.bottom,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    /// Directions in which the cell faces the canvas edge
    pub fn constrained_directions(self) -> impl Iterator<Item = Direction> {
        Direction::ALL
            .into_iter()
            .filter(move |&direction| self.faces(direction))
    }

    /// Whether the cell touches any canvas edge
    pub const fn is_boundary(&self) -> bool {
        self.top || self.bottom || self.left || self.right
    }
}

/// Superpositions for every cell of a `width` x `height` grid, stored row-major
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PossibilitySpace {
    cells: Array2<TileBitset>,
}

impl PossibilitySpace {
    /// Build a space by evaluating `superposition` once per cell in row-major order
    pub fn from_fn(
        width: usize,
        height: usize,
        mut superposition: impl FnMut(CellPosition) -> TileBitset,
    ) -> Self {
        Self {
            cells: Array2::from_shape_fn((height, width), |(y, x)| {
                superposition(CellPosition::new(x, y))
            }),
        }
    }

    /// Build a space where every cell may hold any of `tile_count` tiles
    pub fn unconstrained(width: usize, height: usize, tile_count: usize) -> Self {
        Self::from_fn(width, height, |_| TileBitset::all(tile_count))
    }

    /// Width in cells
    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    /// Height in cells
    pub fn height(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has no cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Superposition of a cell
    pub fn get(&self, position: CellPosition) -> Option<&TileBitset> {
        self.cells.get((position.y, position.x))
    }

    /// Mutable superposition of a cell
    pub fn get_mut(&mut self, position: CellPosition) -> Option<&mut TileBitset> {
        self.cells.get_mut((position.y, position.x))
    }

    /// Neighbouring cell in `direction`, if inside the grid
    pub fn neighbor(&self, position: CellPosition, direction: Direction) -> Option<CellPosition> {
        let (dx, dy) = direction.offset();
        let x = position.x.checked_add_signed(dx)?;
        let y = position.y.checked_add_signed(dy)?;
        (x < self.width() && y < self.height()).then_some(CellPosition::new(x, y))
    }

    /// All cells with their superpositions in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (CellPosition, &TileBitset)> + '_ {
        self.cells
            .indexed_iter()
            .map(|((y, x), superposition)| (CellPosition::new(x, y), superposition))
    }

    /// All positions in row-major order
    pub fn positions(&self) -> impl Iterator<Item = CellPosition> + use<> {
        let width = self.width();
        (0..self.len()).map(move |index| CellPosition::new(index % width, index / width))
    }

    /// First cell, in row-major order, whose superposition is empty
    pub fn first_contradiction(&self) -> Option<CellPosition> {
        self.iter()
            .find(|(_, superposition)| superposition.is_empty())
            .map(|(position, _)| position)
    }

    /// Whether every cell holds exactly one tile
    pub fn is_collapsed(&self) -> bool {
        self.cells
            .iter()
            .all(|superposition| superposition.single().is_some())
    }
}

//! Spatial data structures
//!
//! This module contains spatial-related functionality including:
//! - Tiles, their edge fingerprints and the ordered tile set
//! - The cell grid of superpositions handed to the solver

/// Cell positions, boundary flags and the possibility space
pub mod grid;
/// Tile and tile set types
pub mod tiles;

pub use grid::{CellPosition, PossibilitySpace};
pub use tiles::{Tile, TileSet};

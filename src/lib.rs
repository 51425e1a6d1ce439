//! Border-constrained wave function collapse for tile image synthesis
//!
//! Tiles are matched by fingerprints of their pixel edges. Cells on the edge
//! of the output grid only accept tiles whose canvas-facing edges match a
//! border fingerprint, and the solver is retried within an attempt budget,
//! always yielding a renderable image.

#![forbid(unsafe_code)]

/// Edge fingerprints and the border policy
pub mod adjacency;
/// Possibility space initialization, solving and orchestration
pub mod algorithm;
/// Input/output operations, configuration and error handling
pub mod io;
/// HTTP, one-shot and reporting entry points
pub mod service;
/// Tiles and the cell grid
pub mod spatial;

pub use io::error::{Result, SynthesisError};

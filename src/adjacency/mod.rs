//! Directional adjacency identity of tiles
//!
//! This module contains:
//! - Edge fingerprinting and directions
//! - The border policy that marks edges allowed to face the canvas edge

/// Border fingerprint filter for boundary cells
pub mod border;
/// Edge fingerprints, directions and hex reference colors
pub mod fingerprint;

pub use border::BorderPolicy;
pub use fingerprint::{Direction, EdgeFingerprinter, Fingerprint};

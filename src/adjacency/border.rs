//! Border fingerprint policy for cells on the edge of the canvas

use crate::adjacency::fingerprint::{Direction, EdgeFingerprinter, Fingerprint, parse_hex_color};
use crate::io::error::Result;
use crate::spatial::tiles::Tile;
use image::Rgba;

/// Designated fingerprint meaning "this edge faces the open canvas"
///
/// Computed from a solid reference color with the same scheme used for tile
/// edges, so it compares directly against tile fingerprints.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BorderPolicy {
    fingerprint: Fingerprint,
    reference: Rgba<u8>,
}

impl BorderPolicy {
    /// Build the policy from a solid reference color
    pub fn from_color(fingerprinter: &EdgeFingerprinter, reference: Rgba<u8>) -> Self {
        Self {
            fingerprint: fingerprinter.fingerprint_of_color(reference),
            reference,
        }
    }

    /// Build the policy from a hex reference color
    ///
    /// # Errors
    ///
    /// Returns an error if `hex` is not a valid hex color
    pub fn from_hex(fingerprinter: &EdgeFingerprinter, hex: &str) -> Result<Self> {
        Ok(Self::from_color(fingerprinter, parse_hex_color(hex)?))
    }

    /// The border fingerprint
    pub const fn fingerprint(&self) -> Fingerprint {
        self.fingerprint
    }

    /// Color the border fingerprint was derived from
    pub const fn reference_color(&self) -> Rgba<u8> {
        self.reference
    }

    /// Whether `tile` may face the canvas edge on its `direction` side
    pub fn admits(&self, tile: &Tile, direction: Direction) -> bool {
        tile.fingerprint(direction) == self.fingerprint
    }
}

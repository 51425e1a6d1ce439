//! Edge fingerprinting for tile adjacency
//!
//! A tile edge is reduced to a handful of sampled pixels which are digested
//! into a 32-bit [`Fingerprint`]. Two tiles may sit side by side when the
//! fingerprints of their facing edges are equal.

use crate::io::configuration::EDGE_SAMPLE_COUNT;
use crate::io::error::{Result, invalid_parameter};
use fxhash::FxHasher32;
use image::{Rgba, RgbaImage};
use std::fmt;
use std::hash::Hasher;

/// Side of a tile or cell
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards row 0
    Up,
    /// Towards the last row
    Down,
    /// Towards column 0
    Left,
    /// Towards the last column
    Right,
}

impl Direction {
    /// All directions in adjacency table order
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Direction pointing back across the shared edge
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Grid step `(dx, dy)` taken when moving in this direction
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }

    /// Position of this direction in [`Direction::ALL`]
    pub const fn index(self) -> usize {
        match self {
            Self::Up => 0,
            Self::Down => 1,
            Self::Left => 2,
            Self::Right => 3,
        }
    }

    /// Human-readable name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Opaque identity of one tile edge
///
/// Only equality is meaningful. Collisions between different edges are
/// possible but unlikely.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Fingerprint(u32);

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08x}", self.0)
    }
}

/// Fingerprinting scheme shared by tile edges and the border reference
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EdgeFingerprinter {
    samples: usize,
}

impl Default for EdgeFingerprinter {
    fn default() -> Self {
        Self::new(EDGE_SAMPLE_COUNT)
    }
}

impl EdgeFingerprinter {
    /// Create a fingerprinter sampling `samples` pixels per edge (at least one)
    pub const fn new(samples: usize) -> Self {
        Self {
            samples: if samples == 0 { 1 } else { samples },
        }
    }

    /// Number of pixels sampled per edge
    pub const fn samples(&self) -> usize {
        self.samples
    }

    /// Fingerprint one edge of an image
    ///
    /// Horizontal edges are read left to right and vertical edges top to
    /// bottom, so facing edges of neighbouring tiles sample the same pixels.
    pub fn fingerprint(&self, image: &RgbaImage, direction: Direction) -> Fingerprint {
        let (width, height) = image.dimensions();
        let length = match direction {
            Direction::Up | Direction::Down => width,
            Direction::Left | Direction::Right => height,
        };

        let pixels = self.sample_offsets(length).map(|offset| {
            let (x, y) = match direction {
                Direction::Up => (offset, 0),
                Direction::Down => (offset, height.saturating_sub(1)),
                Direction::Left => (0, offset),
                Direction::Right => (width.saturating_sub(1), offset),
            };
            image
                .get_pixel_checked(x, y)
                .copied()
                .unwrap_or(Rgba([0, 0, 0, 0]))
        });

        Self::digest(pixels)
    }

    /// Fingerprint of an edge made entirely of `color`
    pub fn fingerprint_of_color(&self, color: Rgba<u8>) -> Fingerprint {
        Self::digest(std::iter::repeat_n(color, self.samples))
    }

    /// Fingerprint of a solid edge given as `#rrggbb`, `rrggbb` or `rrggbbaa`
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid hex color
    pub fn fingerprint_of_hex(&self, hex: &str) -> Result<Fingerprint> {
        Ok(self.fingerprint_of_color(parse_hex_color(hex)?))
    }

    // Segment centers spread over pixel indices `0..=length - 1`, rounded to
    // the nearest pixel and kept off the corners when the edge has interior
    // pixels; empty when the edge has no pixels
    fn sample_offsets(&self, length: u32) -> impl Iterator<Item = u32> {
        let samples = self.samples as u64;
        let count = if length == 0 { 0 } else { self.samples };
        let last = u64::from(length.saturating_sub(1));
        let (low, high) = if last >= 2 { (1, last - 1) } else { (0, last) };
        (0..count as u64).map(move |i| {
            let center = ((2 * i + 1) * last + samples) / (2 * samples);
            center.clamp(low, high) as u32
        })
    }

    fn digest(pixels: impl Iterator<Item = Rgba<u8>>) -> Fingerprint {
        let mut hasher = FxHasher32::default();
        for Rgba(channels) in pixels {
            // Fully transparent pixels compare equal whatever their color
            let bytes = match channels {
                [_, _, _, 0] => [0; 4],
                visible => visible,
            };
            hasher.write(&bytes);
        }
        Fingerprint(hasher.finish() as u32)
    }
}

/// Parse `#rrggbb`, `rrggbb` or `rrggbbaa` into an RGBA color
///
/// # Errors
///
/// Returns an error if the string has the wrong length or non-hex digits
pub fn parse_hex_color(hex: &str) -> Result<Rgba<u8>> {
    let digits = hex.trim().trim_start_matches('#');
    let well_formed = matches!(digits.len(), 6 | 8) && digits.bytes().all(|b| b.is_ascii_hexdigit());
    if !well_formed {
        return Err(invalid_parameter(
            "border_color",
            &hex,
            &"expected 6 or 8 hex digits",
        ));
    }

    let mut channels = [0xff; 4];
    for (channel, index) in channels.iter_mut().zip((0..digits.len()).step_by(2)) {
        let pair = digits.get(index..index + 2).unwrap_or_default();
        *channel = u8::from_str_radix(pair, 16)
            .map_err(|e| invalid_parameter("border_color", &hex, &e))?;
    }
    Ok(Rgba(channels))
}

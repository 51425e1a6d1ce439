//! Tiles and the ordered tile set
//!
//! A [`Tile`] pairs a source image with the fingerprints of its four edges.
//! The [`TileSet`] keeps tiles in load order, which is the index space used
//! by every superposition.

use crate::adjacency::fingerprint::{Direction, EdgeFingerprinter, Fingerprint};
use crate::io::error::{Result, invalid_tile_set};
use image::RgbaImage;

/// Source image with per-direction adjacency fingerprints
#[derive(Clone, Debug)]
pub struct Tile {
    name: String,
    image: RgbaImage,
    adjacency: [Fingerprint; 4],
}

impl Tile {
    /// Fingerprint all four edges of `image`
    pub fn new(name: impl Into<String>, image: RgbaImage, fingerprinter: &EdgeFingerprinter) -> Self {
        let adjacency = Direction::ALL.map(|direction| fingerprinter.fingerprint(&image, direction));
        Self {
            name: name.into(),
            image,
            adjacency,
        }
    }

    /// Display name, usually the file stem
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Source image
    pub const fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Fingerprint of the edge on the `direction` side
    pub const fn fingerprint(&self, direction: Direction) -> Fingerprint {
        let [up, down, left, right] = self.adjacency;
        match direction {
            Direction::Up => up,
            Direction::Down => down,
            Direction::Left => left,
            Direction::Right => right,
        }
    }

    /// Pixel size `(width, height)`
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }
}

/// Non-empty ordered collection of equally sized tiles
#[derive(Clone, Debug)]
pub struct TileSet {
    tiles: Vec<Tile>,
    tile_width: u32,
    tile_height: u32,
}

impl TileSet {
    /// Build a tile set, keeping the given order
    ///
    /// # Errors
    ///
    /// Returns an error if there are no tiles or their pixel sizes differ
    pub fn new(tiles: Vec<Tile>) -> Result<Self> {
        let (tile_width, tile_height) = tiles
            .first()
            .map(Tile::dimensions)
            .ok_or_else(|| invalid_tile_set(&"no tiles loaded"))?;

        if let Some(mismatch) = tiles
            .iter()
            .find(|tile| tile.dimensions() != (tile_width, tile_height))
        {
            let (width, height) = mismatch.dimensions();
            return Err(invalid_tile_set(&format!(
                "tile '{}' is {width}x{height}, expected {tile_width}x{tile_height}",
                mismatch.name()
            )));
        }

        if tile_width == 0 || tile_height == 0 {
            return Err(invalid_tile_set(&"tiles have no pixels"));
        }

        Ok(Self {
            tiles,
            tile_width,
            tile_height,
        })
    }

    /// Fingerprint named images and build a tile set in the given order
    ///
    /// # Errors
    ///
    /// Returns an error if there are no images or their pixel sizes differ
    pub fn from_images(
        images: Vec<(String, RgbaImage)>,
        fingerprinter: &EdgeFingerprinter,
    ) -> Result<Self> {
        Self::new(
            images
                .into_iter()
                .map(|(name, image)| Tile::new(name, image, fingerprinter))
                .collect(),
        )
    }

    /// Number of tiles
    pub const fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Always false; a tile set holds at least one tile
    pub const fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Tile at load-order index
    pub fn get(&self, index: usize) -> Option<&Tile> {
        self.tiles.get(index)
    }

    /// Tiles in load order
    pub fn iter(&self) -> std::slice::Iter<'_, Tile> {
        self.tiles.iter()
    }

    /// Shared pixel size `(width, height)` of every tile
    pub const fn tile_dimensions(&self) -> (u32, u32) {
        (self.tile_width, self.tile_height)
    }

    /// Whether tile `b` may sit on the `direction` side of tile `a`
    pub fn compatible(&self, a: usize, direction: Direction, b: usize) -> bool {
        match (self.tiles.get(a), self.tiles.get(b)) {
            (Some(first), Some(second)) => {
                first.fingerprint(direction) == second.fingerprint(direction.opposite())
            }
            _ => false,
        }
    }
}

impl<'a> IntoIterator for &'a TileSet {
    type Item = &'a Tile;
    type IntoIter = std::slice::Iter<'a, Tile>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

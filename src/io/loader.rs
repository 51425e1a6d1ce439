//! Loading of tile images from a directory

use crate::adjacency::fingerprint::EdgeFingerprinter;
use crate::io::error::{Result, SynthesisError, invalid_tile_set};
use crate::spatial::tiles::TileSet;
use image::{ImageFormat, RgbaImage};
use log::debug;
use std::path::{Path, PathBuf};

/// Read every image in `dir`, sorted by file name
///
/// Files are recognised by extension; anything else is skipped. The sort
/// order becomes the tile index order, so it is part of the data contract.
///
/// # Errors
///
/// Returns an error if:
/// - The directory cannot be read
/// - An image file cannot be decoded
/// - The directory holds no images
pub fn load_tile_images(dir: &Path) -> Result<Vec<(String, RgbaImage)>> {
    let read_error = |e| SynthesisError::FileSystem {
        path: dir.to_path_buf(),
        operation: "read tile directory",
        source: e,
    };

    let mut paths: Vec<PathBuf> = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(read_error)? {
        let path = entry.map_err(read_error)?.path();
        if path.is_file() && ImageFormat::from_path(&path).is_ok() {
            paths.push(path);
        }
    }
    paths.sort();

    if paths.is_empty() {
        return Err(invalid_tile_set(&format!(
            "no tile images found in '{}'",
            dir.display()
        )));
    }

    paths
        .into_iter()
        .map(|path| {
            let image = image::open(&path)
                .map_err(|e| SynthesisError::TileLoad {
                    path: path.clone(),
                    source: e,
                })?
                .to_rgba8();
            let name = path
                .file_stem()
                .unwrap_or_default()
                .to_string_lossy()
                .to_string();
            debug!("loaded tile '{name}' ({}x{})", image.width(), image.height());
            Ok((name, image))
        })
        .collect()
}

/// Load and fingerprint the tile set in `dir`
///
/// # Errors
///
/// Returns an error if the images cannot be loaded or do not form a valid
/// tile set
pub fn load_tile_set(dir: &Path, fingerprinter: &EdgeFingerprinter) -> Result<TileSet> {
    TileSet::from_images(load_tile_images(dir)?, fingerprinter)
}

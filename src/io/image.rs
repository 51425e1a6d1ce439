//! Rendering of grid states and PNG export

use crate::io::configuration::CONTRADICTION_COLOR;
use crate::io::error::{Result, SynthesisError};
use crate::spatial::grid::PossibilitySpace;
use crate::spatial::tiles::TileSet;
use image::{ImageFormat, Rgba, RgbaImage, imageops};
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// Render a possibility space, one tile-sized block per cell
///
/// Collapsed cells show their tile. Undecided cells show the per-pixel mean
/// of their remaining candidates, and contradicted cells are filled with
/// [`CONTRADICTION_COLOR`], so partial results stay readable.
pub fn render_possibility_space(tiles: &TileSet, space: &PossibilitySpace) -> RgbaImage {
    let (tile_width, tile_height) = tiles.tile_dimensions();
    let mut canvas = RgbaImage::new(
        (space.width() as u32).saturating_mul(tile_width),
        (space.height() as u32).saturating_mul(tile_height),
    );

    for (position, superposition) in space.iter() {
        let origin_x = (position.x as u32).saturating_mul(tile_width);
        let origin_y = (position.y as u32).saturating_mul(tile_height);

        if let Some(tile) = superposition.single().and_then(|index| tiles.get(index)) {
            imageops::replace(
                &mut canvas,
                tile.image(),
                i64::from(origin_x),
                i64::from(origin_y),
            );
            continue;
        }

        let candidates: Vec<&RgbaImage> = superposition
            .iter()
            .filter_map(|index| tiles.get(index).map(|tile| tile.image()))
            .collect();

        for py in 0..tile_height {
            for px in 0..tile_width {
                let color = mean_pixel(&candidates, px, py).unwrap_or(Rgba(CONTRADICTION_COLOR));
                if let Some(pixel) = canvas.get_pixel_mut_checked(origin_x + px, origin_y + py) {
                    *pixel = color;
                }
            }
        }
    }

    canvas
}

// Channel-wise mean of one pixel across images; None when there are no images
fn mean_pixel(images: &[&RgbaImage], x: u32, y: u32) -> Option<Rgba<u8>> {
    if images.is_empty() {
        return None;
    }

    let mut sums = [0_u32; 4];
    for image in images {
        if let Some(Rgba(channels)) = image.get_pixel_checked(x, y) {
            for (sum, &channel) in sums.iter_mut().zip(channels) {
                *sum += u32::from(channel);
            }
        }
    }

    let count = images.len() as u32;
    Some(Rgba(sums.map(|sum| (sum / count) as u8)))
}

/// Encode an image as PNG bytes
///
/// # Errors
///
/// Returns an error if PNG encoding fails
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>> {
    let mut buffer = Cursor::new(Vec::new());
    image
        .write_to(&mut buffer, ImageFormat::Png)
        .map_err(|e| SynthesisError::ImageEncode { source: e })?;
    Ok(buffer.into_inner())
}

/// Save an image as PNG, creating the parent directory if needed
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn save_png(image: &RgbaImage, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| SynthesisError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    image
        .save_with_format(output_path, ImageFormat::Png)
        .map_err(|e| SynthesisError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}

/// Output path named after the nanoseconds since the Unix epoch at `time`
pub fn timestamped_output_path(output_dir: &Path, time: SystemTime) -> PathBuf {
    let nanos = time
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos())
        .unwrap_or_default();
    output_dir.join(format!("{nanos}.png"))
}

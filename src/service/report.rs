//! Adjacency fingerprint table for inspecting a tile set

use crate::adjacency::border::BorderPolicy;
use crate::adjacency::fingerprint::Direction;
use crate::spatial::tiles::TileSet;
use image::Rgba;

const RULE: &str = "|--------------------|----------|----------|-----------|";

/// Format every tile's edge fingerprints as a text table
///
/// Fingerprints equal to the border fingerprint are marked with `*`.
pub fn adjacency_table(tiles: &TileSet, border: &BorderPolicy) -> String {
    let Rgba([red, green, blue, alpha]) = border.reference_color();
    let mut lines = vec![
        format!(
            "Border fingerprint: {} (#{red:02x}{green:02x}{blue:02x}{alpha:02x})",
            border.fingerprint()
        ),
        String::new(),
        RULE.to_string(),
        format!("|{:<20}|{:<10}|{:<10}|{:<11}|", "Tile", "Direction", "Hash", "Size"),
        RULE.to_string(),
    ];

    for tile in tiles {
        let (width, height) = tile.dimensions();
        let size = format!("{width}x{height}");
        for direction in Direction::ALL {
            let marker = if border.admits(tile, direction) { '*' } else { ' ' };
            lines.push(format!(
                "|{:<20}|{:<10}| {}{marker}|{size:<11}|",
                tile.name(),
                direction.name(),
                tile.fingerprint(direction),
            ));
        }
        lines.push(RULE.to_string());
    }

    lines.push(String::new());
    lines.join("\n")
}

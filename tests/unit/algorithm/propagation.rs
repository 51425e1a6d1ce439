//! Tests for adjacency rules and arc-consistency propagation

#[cfg(test)]
mod tests {
    use crate::support::rail_tiles;
    use tilewave::adjacency::fingerprint::Direction;
    use tilewave::algorithm::bitset::TileBitset;
    use tilewave::algorithm::propagation::{AdjacencyRules, propagate};
    use tilewave::spatial::grid::{CellPosition, PossibilitySpace};

    const EMPTY: usize = 0;
    const HORIZONTAL: usize = 1;
    const VERTICAL: usize = 2;

    fn collapse(space: &mut PossibilitySpace, position: CellPosition, tile: usize) {
        if let Some(superposition) = space.get_mut(position) {
            superposition.collapse_to(tile);
        }
    }

    // Tests rules are derived from facing edge fingerprints
    // Verified by using the same direction on both tiles
    #[test]
    fn test_rules_from_tiles() {
        let rules = AdjacencyRules::from_tiles(&rail_tiles());
        assert_eq!(rules.tile_count(), 3);

        let right_of_horizontal = rules.allowed(HORIZONTAL, Direction::Right).expect("rule");
        assert_eq!(right_of_horizontal.to_vec(), vec![HORIZONTAL]);

        let right_of_empty = rules.allowed(EMPTY, Direction::Right).expect("rule");
        assert_eq!(right_of_empty.to_vec(), vec![EMPTY, VERTICAL]);

        let below_vertical = rules.allowed(VERTICAL, Direction::Down).expect("rule");
        assert_eq!(below_vertical.to_vec(), vec![VERTICAL]);

        assert!(rules.allowed(3, Direction::Up).is_none());
    }

    // Tests support is the union over every candidate tile
    #[test]
    fn test_support_unions_candidates() {
        let rules = AdjacencyRules::from_tiles(&rail_tiles());
        let mut candidates = TileBitset::new(3);
        candidates.insert(HORIZONTAL);
        candidates.insert(VERTICAL);

        let support = rules.support(&candidates, Direction::Right);
        assert_eq!(support.to_vec(), vec![EMPTY, HORIZONTAL, VERTICAL]);
        assert!(rules.support(&TileBitset::new(3), Direction::Right).is_empty());
    }

    // Tests a collapse ripples along a row
    // Verified by not re-queueing neighbours whose superposition shrank
    #[test]
    fn test_propagation_ripples() {
        let rules = AdjacencyRules::from_tiles(&rail_tiles());
        let mut space = PossibilitySpace::unconstrained(4, 1, 3);
        let origin = CellPosition::new(0, 0);
        collapse(&mut space, origin, HORIZONTAL);

        assert_eq!(propagate(&mut space, &rules, [origin]), Ok(()));
        for x in 0..4 {
            let cell = space.get(CellPosition::new(x, 0)).expect("cell");
            assert_eq!(cell.to_vec(), vec![HORIZONTAL], "cell {x}");
        }
    }

    // Tests propagation narrows across rows as well as columns
    #[test]
    fn test_propagation_vertical_neighbours() {
        let rules = AdjacencyRules::from_tiles(&rail_tiles());
        let mut space = PossibilitySpace::unconstrained(1, 3, 3);
        let middle = CellPosition::new(0, 1);
        collapse(&mut space, middle, EMPTY);

        assert_eq!(propagate(&mut space, &rules, [middle]), Ok(()));
        let above = space.get(CellPosition::new(0, 0)).expect("cell");
        assert_eq!(above.to_vec(), vec![EMPTY, HORIZONTAL]);
    }

    // Tests conflicting collapses report the emptied cell
    #[test]
    fn test_contradiction_reported() {
        let rules = AdjacencyRules::from_tiles(&rail_tiles());
        let mut space = PossibilitySpace::unconstrained(3, 1, 3);
        collapse(&mut space, CellPosition::new(0, 0), HORIZONTAL);
        collapse(&mut space, CellPosition::new(2, 0), VERTICAL);

        let result = propagate(&mut space, &rules, [CellPosition::new(0, 0)]);
        assert_eq!(result, Err(CellPosition::new(2, 0)));
    }

    // Tests an already empty seed is reported before any work
    #[test]
    fn test_empty_seed_reported() {
        let rules = AdjacencyRules::from_tiles(&rail_tiles());
        let mut space = PossibilitySpace::from_fn(2, 1, |position| {
            if position.x == 1 {
                TileBitset::new(3)
            } else {
                TileBitset::all(3)
            }
        });
        let seeds: Vec<CellPosition> = space.positions().collect();
        assert_eq!(
            propagate(&mut space, &rules, seeds),
            Err(CellPosition::new(1, 0))
        );
    }

    // Tests an unconstrained space is already consistent
    #[test]
    fn test_unconstrained_space_is_stable() {
        let rules = AdjacencyRules::from_tiles(&rail_tiles());
        let mut space = PossibilitySpace::unconstrained(3, 3, 3);
        let before = space.clone();
        let seeds: Vec<CellPosition> = space.positions().collect();
        assert_eq!(propagate(&mut space, &rules, seeds), Ok(()));
        assert_eq!(space, before);
    }
}

use lodestone_column::ColumnPos;
use lodestone_pretransform::{calculate_edges, Direction};
use proptest::prelude::*;

const DIRECTIONS: [Direction; 6] = [
    Direction::North,
    Direction::East,
    Direction::South,
    Direction::West,
    Direction::Up,
    Direction::Down,
];

fn position() -> impl Strategy<Value = (i32, i32)> {
    (-100_000i32..=100_000, -100_000i32..=100_000)
}

fn direction_set() -> impl Strategy<Value = Vec<Direction>> {
    prop::collection::vec(prop::sample::select(DIRECTIONS.as_slice()), 0..8)
}

proptest! {
    // calculate_edges returns exactly the edges whose neighbor chunk
    // coordinate differs from the origin's; vertical directions never
    // contribute
    #[test]
    fn edges_match_chunk_boundaries((x, z) in position(), directions in direction_set()) {
        let set = calculate_edges(x, z, &directions);
        let origin = ColumnPos::containing(x, z);

        for direction in DIRECTIONS {
            let Some(edge) = direction.edge() else {
                // Up/Down map to no edge and can never appear
                continue;
            };
            let (dx, _, dz) = direction.offset();
            let crosses = ColumnPos::containing(x + dx, z + dz) != origin;
            let declared = directions.contains(&direction);
            prop_assert_eq!(set.contains(edge), crosses && declared);
        }
    }

    // A block away from the column border never needs a neighbor
    #[test]
    fn interior_blocks_need_no_edges((cx, cz) in (-1000i32..=1000, -1000i32..=1000), lx in 1i32..15, lz in 1i32..15) {
        let x = (cx << 4) + lx;
        let z = (cz << 4) + lz;
        prop_assert!(calculate_edges(x, z, &DIRECTIONS).is_empty());
    }
}

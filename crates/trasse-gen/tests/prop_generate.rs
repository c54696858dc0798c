use std::collections::HashSet;

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use trasse_gen::{GenParams, generate, to_transport};
use trasse_geom::{Face, Pos3};

proptest! {
    // every generated road, under any weighting, is complete and disjoint
    #[test]
    fn roads_hold_their_invariants(
        size in 3usize..=8,
        seed in 0u64..=512,
        linearity in 1u32..=8,
        altitude_variation in 1u32..=4,
    ) {
        let params = GenParams { linearity, altitude_variation };
        let mut rng = StdRng::seed_from_u64(seed);
        let road = generate(size, &params, &mut rng);
        prop_assume!(road.is_some());
        let road = road.unwrap();

        prop_assert_eq!(road.len(), size);
        let voxels: HashSet<Pos3> = road.iter().map(|s| s.voxel).collect();
        prop_assert_eq!(voxels.len(), size);

        for segment in &road {
            for v in segment.face.vertices() {
                prop_assert!(v.x >= 0 && v.y >= 0 && v.z >= 0);
                prop_assert!(v.x <= size as i32 && v.y <= size as i32 && v.z <= size as i32);
            }
        }

        // wedges never chain
        for pair in road.windows(2) {
            if matches!(pair[0].face, Face::Tri(_)) {
                prop_assert!(matches!(pair[1].face, Face::Quad(_)));
            }
        }

        let flat = to_transport(&road);
        prop_assert_eq!(flat.len(), size);
        for (vertices, segment) in flat.iter().zip(&road) {
            prop_assert_eq!(vertices.len(), segment.face.vertices().len());
        }
    }
}

use proptest::prelude::*;
use trasse_geom::{Axis, Pos3};

fn coord() -> impl Strategy<Value = i32> {
    -1_000i32..=1_000
}

fn axis() -> impl Strategy<Value = Axis> {
    prop_oneof![Just(Axis::X), Just(Axis::Y), Just(Axis::Z)]
}

proptest! {
    // shifting back by the same delta is the identity
    #[test]
    fn shifted_roundtrip(x in coord(), y in coord(), z in coord(), a in axis(), d in -8i32..=8) {
        let p = Pos3::new(x, y, z);
        prop_assert_eq!(p.shifted(a, d).shifted(a, -d), p);
    }

    // shifted touches exactly one component
    #[test]
    fn shifted_is_single_axis(x in coord(), y in coord(), z in coord(), a in axis(), d in -8i32..=8) {
        let p = Pos3::new(x, y, z);
        let q = p.shifted(a, d);
        let changed = [(q.x - p.x), (q.y - p.y), (q.z - p.z)];
        let expect = match a {
            Axis::X => [d, 0, 0],
            Axis::Y => [0, d, 0],
            Axis::Z => [0, 0, d],
        };
        prop_assert_eq!(changed, expect);
    }

    // offset composes componentwise
    #[test]
    fn offset_composes(
        x in coord(), y in coord(), z in coord(),
        dx1 in -8i32..=8, dy1 in -8i32..=8, dz1 in -8i32..=8,
        dx2 in -8i32..=8, dy2 in -8i32..=8, dz2 in -8i32..=8,
    ) {
        let p = Pos3::new(x, y, z);
        prop_assert_eq!(
            p.offset(dx1, dy1, dz1).offset(dx2, dy2, dz2),
            p.offset(dx1 + dx2, dy1 + dy2, dz1 + dz2)
        );
    }

    // the voxel footprint spans one unit of x and z and no y
    #[test]
    fn voxel_corners_span(x in coord(), y in coord(), z in coord()) {
        let [v1, v2, v3, v4] = Pos3::new(x, y, z).voxel_corners();
        prop_assert_eq!(v1, Pos3::new(x, y, z));
        prop_assert_eq!(v2, v1.shifted(Axis::X, 1));
        prop_assert_eq!(v3, v1.offset(1, 0, 1));
        prop_assert_eq!(v4, v1.shifted(Axis::Z, 1));
        prop_assert!([v1, v2, v3, v4].iter().all(|v| v.y == y));
    }
}

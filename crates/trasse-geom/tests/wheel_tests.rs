use trasse_geom::{Axis, Bearing, Climb, Course, Facing, Pos3};

const BEARINGS: [Bearing; 8] = [
    Bearing::Fore,
    Bearing::ForeRight,
    Bearing::Right,
    Bearing::BackRight,
    Bearing::Back,
    Bearing::BackLeft,
    Bearing::Left,
    Bearing::ForeLeft,
];

const FACINGS: [Facing; 4] = [Facing::North, Facing::East, Facing::South, Facing::West];

#[test]
fn absolute_matches_wheel_arithmetic() {
    for b in BEARINGS {
        for f in FACINGS {
            let expect = (b.number() + f.number() - 2) % 8 + 1;
            assert_eq!(b.absolute(f).number(), expect, "{b:?} under {f:?}");
        }
    }
}

#[test]
fn fore_stays_on_the_frame_heading() {
    for f in FACINGS {
        assert_eq!(Bearing::Fore.absolute(f).number(), f.number());
    }
}

#[test]
fn diagonals_alternate_on_the_wheel() {
    for b in BEARINGS {
        assert_eq!(b.is_diagonal(), b.number() % 2 == 0);
        // rotating by a cardinal frame preserves diagonality
        for f in FACINGS {
            assert_eq!(b.absolute(f).is_diagonal(), b.is_diagonal());
        }
    }
}

#[test]
fn quarter_turns_cycle() {
    for f in FACINGS {
        assert_eq!(f.turned_left().turned_right(), f);
        assert_eq!(
            f.turned_right().turned_right().turned_right().turned_right(),
            f
        );
        assert_eq!(f.turned_left().turned_left(), f.turned_right().turned_right());
    }
}

#[test]
fn lateral_offsets_agree_with_turned_frames() {
    for f in FACINGS {
        assert_eq!(f.left(), f.turned_left().step());
        assert_eq!(f.right(), f.turned_right().step());
    }
}

#[test]
fn steps_are_horizontal_units() {
    for f in FACINGS {
        let (dx, dz) = f.step();
        assert_eq!(dx.abs() + dz.abs(), 1);
    }
}

#[test]
fn forward_diagonals_must_stay_level() {
    for climb in [Climb::Up, Climb::Down] {
        assert!(Course::new(Bearing::ForeRight, climb).is_err());
        assert!(Course::new(Bearing::ForeLeft, climb).is_err());
    }
    assert!(Course::new(Bearing::ForeRight, Climb::Level).is_ok());
    assert!(Course::new(Bearing::ForeLeft, Climb::Level).is_ok());
    // the other bearings accept any climb at construction time
    for b in [Bearing::Fore, Bearing::Right, Bearing::BackRight, Bearing::Back] {
        for climb in [Climb::Up, Climb::Level, Climb::Down] {
            assert!(Course::new(b, climb).is_ok(), "{b:?} {climb:?}");
        }
    }
}

#[test]
fn climb_deltas() {
    assert_eq!(Climb::Up.dy(), -1);
    assert_eq!(Climb::Level.dy(), 0);
    assert_eq!(Climb::Down.dy(), 1);
}

#[test]
fn voxel_corners_order() {
    let p = Pos3::new(3, 4, 5);
    assert_eq!(
        p.voxel_corners(),
        [
            Pos3::new(3, 4, 5),
            Pos3::new(4, 4, 5),
            Pos3::new(4, 4, 6),
            Pos3::new(3, 4, 6),
        ]
    );
}

#[test]
fn shifted_single_axis() {
    let p = Pos3::new(1, 2, 3);
    assert_eq!(p.shifted(Axis::X, 1), Pos3::new(2, 2, 3));
    assert_eq!(p.shifted(Axis::Y, -1), Pos3::new(1, 1, 3));
    assert_eq!(p.shifted(Axis::Z, 2), Pos3::new(1, 2, 5));
}

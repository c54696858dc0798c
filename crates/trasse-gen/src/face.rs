//! Per-segment face synthesis.

use thiserror::Error;
use trasse_geom::{Axis, Bearing, Climb, Course, Face, Facing, Pos3};

/// Failure to synthesize a face for a voxel/course/frame combination.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum FaceError {
    /// A diagonal segment only exists level; slopes are quads.
    #[error("cannot build a non-horizontal diagonal segment")]
    DiagonalSlope,
    /// The pair maps to a wedge no road move can produce (a sideways or
    /// backward diagonal relative to the frame).
    #[error("no wedge for absolute bearing {bearing:?} under facing {facing:?}")]
    UnbuildableWedge { bearing: Bearing, facing: Facing },
}

/// One committed road piece: the voxel it occupies, the travel course chosen
/// for it, the build frame in effect when it was placed, and the derived
/// face.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Segment {
    pub voxel: Pos3,
    pub course: Course,
    pub facing: Facing,
    pub face: Face,
}

impl Segment {
    pub fn new(voxel: Pos3, course: Course, facing: Facing) -> Result<Segment, FaceError> {
        let face = build_face(voxel, course, facing)?;
        Ok(Segment {
            voxel,
            course,
            facing,
            face,
        })
    }

    /// Straight travel along the build frame itself; always constructible.
    pub fn straight(voxel: Pos3, facing: Facing, climb: Climb) -> Segment {
        Segment {
            voxel,
            course: Course::ahead(climb),
            facing,
            face: straight_face(voxel, facing, climb),
        }
    }
}

/// Synthesize the visible face for a voxel travelled along `course` while the
/// build frame advances along `facing`.
///
/// Straight and sloped travel yields a quad of the voxel's four base corners,
/// with the two corners on the edge far from the travel direction raised or
/// lowered one unit to encode the climb. A level diagonal yields a triangular
/// wedge; a left and a right turn sharing the same absolute diagonal produce
/// mirror-image wedges. Deterministic, and never touches the lattice.
pub fn build_face(voxel: Pos3, course: Course, facing: Facing) -> Result<Face, FaceError> {
    match course.bearing.absolute(facing) {
        Bearing::Fore => Ok(straight_face(voxel, Facing::North, course.climb)),
        Bearing::Right => Ok(straight_face(voxel, Facing::East, course.climb)),
        Bearing::Back => Ok(straight_face(voxel, Facing::South, course.climb)),
        Bearing::Left => Ok(straight_face(voxel, Facing::West, course.climb)),
        diagonal => wedge_face(voxel, diagonal, facing, course.climb),
    }
}

/// Quad for travel along the absolute cardinal `along`: the edge far from
/// the direction of travel carries the climb.
pub(crate) fn straight_face(voxel: Pos3, along: Facing, climb: Climb) -> Face {
    let mut v = voxel.voxel_corners();
    let far: [usize; 2] = match along {
        Facing::North => [2, 3],
        Facing::East => [1, 2],
        Facing::South => [0, 1],
        Facing::West => [0, 3],
    };
    let dy = climb.dy();
    if dy != 0 {
        for i in far {
            v[i] = v[i].shifted(Axis::Y, dy);
        }
    }
    Face::Quad(v)
}

/// Wedge for a level diagonal. Each absolute diagonal admits exactly two
/// frames (the one turning into it from the left and the one from the
/// right), and each selects a different triangle of the base corners.
fn wedge_face(
    voxel: Pos3,
    bearing: Bearing,
    facing: Facing,
    climb: Climb,
) -> Result<Face, FaceError> {
    if climb != Climb::Level {
        return Err(FaceError::DiagonalSlope);
    }
    let [v1, v2, v3, v4] = voxel.voxel_corners();
    let tri = match (bearing, facing) {
        (Bearing::ForeRight, Facing::North) => [v1, v2, v3],
        (Bearing::ForeRight, Facing::East) => [v3, v4, v1],
        (Bearing::BackRight, Facing::East) => [v4, v1, v2],
        (Bearing::BackRight, Facing::South) => [v3, v4, v2],
        (Bearing::BackLeft, Facing::South) => [v1, v3, v4],
        (Bearing::BackLeft, Facing::West) => [v2, v3, v1],
        (Bearing::ForeLeft, Facing::West) => [v4, v2, v3],
        (Bearing::ForeLeft, Facing::North) => [v1, v4, v2],
        (bearing, facing) => return Err(FaceError::UnbuildableWedge { bearing, facing }),
    };
    Ok(Face::Tri(tri))
}

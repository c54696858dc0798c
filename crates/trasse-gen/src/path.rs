//! Backtracking road search over one lattice attempt.

use rand::Rng;
use rand::seq::SliceRandom;
use trasse_geom::{Axis, Bearing, Climb, Course, Facing, Pos3};
use trasse_lattice::{Cell, Lattice};

use crate::face::Segment;
use crate::params::GenParams;

/// Footprint of the previously placed segment. A path may only turn out of a
/// square footprint; a wedge must be followed by straight travel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Footprint {
    Square,
    Triangle,
}

/// Run one backtracking attempt: build a road of exactly `size` connected
/// segments through a fresh cube of side `size`, or report that this
/// attempt's shuffled option tree holds no full-length path.
///
/// `None` is a normal probabilistic outcome, not an error: the shuffled
/// weights fix trial order, and every committed voxel blocks the rest of its
/// attempt, so a differently shuffled attempt may succeed where this one ran
/// dry. Callers retry whole attempts with fresh randomness.
pub fn generate<R: Rng + ?Sized>(
    size: usize,
    params: &GenParams,
    rng: &mut R,
) -> Option<Vec<Segment>> {
    assert!(size >= 1, "road size must be positive");
    assert!(
        params.linearity >= 1 && params.altitude_variation >= 1,
        "bias weights must be positive"
    );
    let mut walker = Walker {
        lattice: Lattice::new(size),
        target: size,
        params,
        rng,
    };
    // start centered on x, at the near edge of z, in the top layer
    let start = Pos3::new((size / 2) as i32, 0, 0);
    let mut path = Vec::with_capacity(size);
    if walker.extend(&mut path, start, Facing::North, None) {
        debug_assert_eq!(path.len(), size);
        Some(path)
    } else {
        log::debug!("road search exhausted for size {size}");
        None
    }
}

/// Prior contents of the cells one frame marked, for exact undo.
struct Marks {
    here: Cell,
    above: Option<Cell>,
    below: Option<Cell>,
}

struct Walker<'a, R: Rng + ?Sized> {
    lattice: Lattice,
    target: usize,
    params: &'a GenParams,
    rng: &'a mut R,
}

impl<R: Rng + ?Sized> Walker<'_, R> {
    fn extend(
        &mut self,
        path: &mut Vec<Segment>,
        voxel: Pos3,
        facing: Facing,
        prev: Option<Footprint>,
    ) -> bool {
        if path.len() == self.target {
            return true;
        }

        let here = self.lattice.get(voxel);
        self.lattice.set(voxel, Cell::Reserved);

        if path.len() + 1 == self.target {
            // the road ends in this voxel: lay it straight and level, with
            // nothing ahead to validate
            self.lattice.set(voxel, Cell::Segment(path.len() as u32));
            path.push(Segment::straight(voxel, facing, Climb::Level));
            return true;
        }

        let nb = self.lattice.neighborhood(voxel, facing);
        let square = prev == Some(Footprint::Square);
        let sides = nb.left.is_clear() && nb.right.is_clear();
        let mut options: Vec<Course> = Vec::new();
        if sides && nb.under_left.is_clear() && nb.under.is_clear() && square {
            options.push(Course::turn_left());
        }
        if sides && nb.under_right.is_clear() && nb.under.is_clear() && square {
            options.push(Course::turn_right());
        }
        if sides && nb.upward.is_clear() && nb.forward.is_clear() && nb.above.is_clear() {
            for _ in 0..self.params.altitude_variation {
                options.push(Course::ahead(Climb::Up));
            }
        }
        if sides && nb.downward.is_clear() && nb.under.is_clear() && nb.forward.is_clear() {
            for _ in 0..self.params.altitude_variation {
                options.push(Course::ahead(Climb::Down));
            }
        }
        if sides && nb.forward.is_clear() && nb.downward.is_clear() && nb.under.is_clear() {
            for _ in 0..self.params.linearity {
                options.push(Course::ahead(Climb::Level));
            }
        }

        if options.is_empty() {
            self.lattice.set(voxel, here);
            return false;
        }

        // headroom and footroom of a committed voxel are off limits to every
        // later branch, though not to this frame's own option checks above
        let marks = self.mark(voxel, here);
        options.shuffle(&mut *self.rng);

        for course in options {
            let Ok(segment) = Segment::new(voxel, course, facing) else {
                continue;
            };
            let (next_facing, footprint) = advance_frame(facing, course.bearing);
            let next_voxel = step_voxel(voxel, next_facing, course.climb);
            self.lattice.set(voxel, Cell::Segment(path.len() as u32));
            path.push(segment);
            if self.extend(path, next_voxel, next_facing, Some(footprint)) {
                return true;
            }
            path.pop();
        }

        self.unmark(voxel, marks);
        false
    }

    /// Reserve the voxel's headroom and footroom, remembering prior contents
    /// so a failed branch can be undone exactly. Cells beyond the lattice
    /// boundary are skipped.
    fn mark(&mut self, voxel: Pos3, here: Cell) -> Marks {
        let mut reserve = |p: Pos3| {
            if self.lattice.contains(p) {
                let prior = self.lattice.get(p);
                self.lattice.set(p, Cell::Reserved);
                Some(prior)
            } else {
                None
            }
        };
        let above = reserve(voxel.shifted(Axis::Y, -1));
        let below = reserve(voxel.shifted(Axis::Y, 1));
        Marks { here, above, below }
    }

    fn unmark(&mut self, voxel: Pos3, marks: Marks) {
        self.lattice.set(voxel, marks.here);
        if let Some(prior) = marks.above {
            self.lattice.set(voxel.shifted(Axis::Y, -1), prior);
        }
        if let Some(prior) = marks.below {
            self.lattice.set(voxel.shifted(Axis::Y, 1), prior);
        }
    }
}

/// Fold a chosen bearing into the build frame: turns rotate the frame a
/// quarter and leave a wedge behind, everything else keeps the frame and
/// leaves a square.
fn advance_frame(facing: Facing, bearing: Bearing) -> (Facing, Footprint) {
    match bearing {
        Bearing::ForeRight => (facing.turned_right(), Footprint::Triangle),
        Bearing::ForeLeft => (facing.turned_left(), Footprint::Triangle),
        _ => (facing, Footprint::Square),
    }
}

/// One unit of travel: the (already advanced) frame's horizontal step plus
/// the climb's vertical step.
fn step_voxel(voxel: Pos3, facing: Facing, climb: Climb) -> Pos3 {
    let (dx, dz) = facing.step();
    voxel.offset(dx, climb.dy(), dz)
}

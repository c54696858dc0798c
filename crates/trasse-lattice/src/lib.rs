//! Cubical voxel lattice: bounds-checked cells and oriented neighborhood
//! reads for the road search.
#![forbid(unsafe_code)]

use trasse_geom::{Facing, Pos3};

/// One lattice cell. `Reserved` blocks a cell that holds no segment: the
/// headroom and footroom of a placed voxel, or the voxel currently being
/// extended. `Segment` carries the index of the owning segment in the
/// attempt's sequence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Cell {
    #[default]
    Free,
    Reserved,
    Segment(u32),
}

impl Cell {
    #[inline]
    pub fn is_free(self) -> bool {
        matches!(self, Cell::Free)
    }
}

/// Outcome of probing a neighbor cell: its occupancy, or the out-of-bounds
/// sentinel when the probe would leave the lattice. The sentinel is never
/// clear; a road cannot run off the edge of the cube.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Probe {
    Free,
    Reserved,
    Segment,
    OutOfBounds,
}

impl Probe {
    #[inline]
    pub fn is_clear(self) -> bool {
        matches!(self, Probe::Free)
    }

    #[inline]
    fn from_cell(cell: Cell) -> Probe {
        match cell {
            Cell::Free => Probe::Free,
            Cell::Reserved => Probe::Reserved,
            Cell::Segment(_) => Probe::Segment,
        }
    }

    /// Combine two stacked reads; the pair is clear only when both are.
    #[inline]
    fn and(self, other: Probe) -> Probe {
        if self.is_clear() { other } else { self }
    }
}

/// Occupancy of the nine named neighbors of a voxel, oriented by the build
/// frame: the lateral and forward cells at the voxel's level, the stacked
/// clearances used to validate climbs, and the under-the-turn cells used to
/// validate lateral turns.
///
/// `upward`, `downward`, `above`, and `under` each combine two vertically
/// adjacent reads, since a slope transition needs two stacked clearances,
/// not one. `under_left` and `under_right` are single reads of the cell
/// beneath each lateral neighbor.
#[derive(Clone, Copy, Debug)]
pub struct Neighborhood {
    pub left: Probe,
    pub right: Probe,
    pub forward: Probe,
    pub upward: Probe,
    pub downward: Probe,
    pub above: Probe,
    pub under: Probe,
    pub under_left: Probe,
    pub under_right: Probe,
}

/// A cube of `size³` cells, flat-indexed, owned by one generation attempt.
#[derive(Clone, Debug)]
pub struct Lattice {
    size: usize,
    cells: Vec<Cell>,
}

impl Lattice {
    /// Allocate an empty cube. `size` must be at least 1.
    pub fn new(size: usize) -> Lattice {
        assert!(size >= 1, "lattice size must be positive");
        Lattice {
            size,
            cells: vec![Cell::Free; size * size * size],
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn contains(&self, pos: Pos3) -> bool {
        let s = self.size as i32;
        pos.x >= 0 && pos.x < s && pos.y >= 0 && pos.y < s && pos.z >= 0 && pos.z < s
    }

    #[inline]
    fn idx(&self, pos: Pos3) -> usize {
        (pos.x as usize * self.size + pos.y as usize) * self.size + pos.z as usize
    }

    /// Read a cell. Panics if `pos` lies outside the lattice.
    #[inline]
    pub fn get(&self, pos: Pos3) -> Cell {
        assert!(
            self.contains(pos),
            "position {pos:?} outside lattice of side {}",
            self.size
        );
        self.cells[self.idx(pos)]
    }

    /// Write a cell. Panics if `pos` lies outside the lattice.
    #[inline]
    pub fn set(&mut self, pos: Pos3, cell: Cell) {
        assert!(
            self.contains(pos),
            "position {pos:?} outside lattice of side {}",
            self.size
        );
        let i = self.idx(pos);
        self.cells[i] = cell;
    }

    /// Probe by raw coordinates, substituting the sentinel for anything
    /// outside the lattice instead of panicking.
    #[inline]
    pub fn probe(&self, x: i32, y: i32, z: i32) -> Probe {
        let p = Pos3::new(x, y, z);
        if self.contains(p) {
            Probe::from_cell(self.cells[self.idx(p)])
        } else {
            Probe::OutOfBounds
        }
    }

    #[inline]
    pub fn has_marks(&self) -> bool {
        self.cells.iter().any(|c| !c.is_free())
    }

    #[inline]
    pub fn is_clear(&self) -> bool {
        !self.has_marks()
    }

    /// Occupancy of the nine named neighbors of `pos` under the build frame
    /// `facing`. Panics if `pos` itself lies outside the lattice; neighbor
    /// probes that would, resolve to the sentinel.
    pub fn neighborhood(&self, pos: Pos3, facing: Facing) -> Neighborhood {
        assert!(
            self.contains(pos),
            "position {pos:?} outside lattice of side {}",
            self.size
        );
        let Pos3 { x, y, z } = pos;
        let (fx, fz) = facing.step();
        let (lx, lz) = facing.left();
        let (rx, rz) = facing.right();
        let stack_up = |px: i32, pz: i32| self.probe(px, y - 1, pz).and(self.probe(px, y - 2, pz));
        let stack_down = |px: i32, pz: i32| self.probe(px, y + 1, pz).and(self.probe(px, y + 2, pz));
        Neighborhood {
            left: self.probe(x + lx, y, z + lz),
            right: self.probe(x + rx, y, z + rz),
            forward: self.probe(x + fx, y, z + fz),
            upward: stack_up(x + fx, z + fz),
            downward: stack_down(x + fx, z + fz),
            above: stack_up(x, z),
            under: stack_down(x, z),
            under_left: self.probe(x + lx, y + 1, z + lz),
            under_right: self.probe(x + rx, y + 1, z + rz),
        }
    }
}

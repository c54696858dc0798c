//! Value types for lattice positions, headings, and road faces (no renderer
//! dependency).
#![forbid(unsafe_code)]

use core::fmt;

/// Lattice axes. `Y` points downward; a level road sits at the bottom of its
/// voxel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// An integer lattice position (voxel corner or vertex).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Pos3 {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Pos3 {
    #[inline]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Move one or more units along a single axis.
    #[inline]
    pub const fn shifted(self, axis: Axis, delta: i32) -> Pos3 {
        match axis {
            Axis::X => Pos3::new(self.x + delta, self.y, self.z),
            Axis::Y => Pos3::new(self.x, self.y + delta, self.z),
            Axis::Z => Pos3::new(self.x, self.y, self.z + delta),
        }
    }

    #[inline]
    pub const fn offset(self, dx: i32, dy: i32, dz: i32) -> Pos3 {
        Pos3::new(self.x + dx, self.y + dy, self.z + dz)
    }

    /// The four base corners of the voxel whose minimal corner is `self`, in
    /// the fixed order (corner, +x, +x+z, +z). They span the horizontal
    /// footprint of the cell; `y` is untouched.
    #[inline]
    pub const fn voxel_corners(self) -> [Pos3; 4] {
        let Pos3 { x, y, z } = self;
        [
            Pos3::new(x, y, z),
            Pos3::new(x + 1, y, z),
            Pos3::new(x + 1, y, z + 1),
            Pos3::new(x, y, z + 1),
        ]
    }
}

/// Eight-way compass wheel, clockwise. Relative to the active build frame:
/// `Fore` is straight ahead, `Right` a quarter turn clockwise, and the even
/// bearings are the diagonals between them.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bearing {
    Fore = 1,
    ForeRight = 2,
    Right = 3,
    BackRight = 4,
    Back = 5,
    BackLeft = 6,
    Left = 7,
    ForeLeft = 8,
}

const WHEEL: [Bearing; 8] = [
    Bearing::Fore,
    Bearing::ForeRight,
    Bearing::Right,
    Bearing::BackRight,
    Bearing::Back,
    Bearing::BackLeft,
    Bearing::Left,
    Bearing::ForeLeft,
];

impl Bearing {
    #[inline]
    pub const fn number(self) -> u8 {
        self as u8
    }

    #[inline]
    pub const fn is_diagonal(self) -> bool {
        self.number() % 2 == 0
    }

    /// Re-express this frame-relative bearing on the absolute wheel: the
    /// result is the compass bearing obtained by rotating `self` into the
    /// frame that advances along `facing`.
    #[inline]
    pub const fn absolute(self, facing: Facing) -> Bearing {
        WHEEL[((self as u8 + facing as u8 - 2) % 8) as usize]
    }
}

/// Absolute build-frame heading: the cardinal the path is currently advancing
/// along. Discriminants live on the same compass wheel as [`Bearing`]
/// (`North` is +z).
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Facing {
    North = 1,
    East = 3,
    South = 5,
    West = 7,
}

impl Facing {
    #[inline]
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Unit step in the horizontal plane, as (dx, dz).
    #[inline]
    pub const fn step(self) -> (i32, i32) {
        match self {
            Facing::North => (0, 1),
            Facing::East => (1, 0),
            Facing::South => (0, -1),
            Facing::West => (-1, 0),
        }
    }

    /// Unit offset toward the left-hand neighbor of this frame.
    #[inline]
    pub const fn left(self) -> (i32, i32) {
        let (dx, dz) = self.step();
        (-dz, dx)
    }

    /// Unit offset toward the right-hand neighbor of this frame.
    #[inline]
    pub const fn right(self) -> (i32, i32) {
        let (dx, dz) = self.step();
        (dz, -dx)
    }

    #[inline]
    pub const fn turned_right(self) -> Facing {
        match self {
            Facing::North => Facing::East,
            Facing::East => Facing::South,
            Facing::South => Facing::West,
            Facing::West => Facing::North,
        }
    }

    #[inline]
    pub const fn turned_left(self) -> Facing {
        match self {
            Facing::North => Facing::West,
            Facing::West => Facing::South,
            Facing::South => Facing::East,
            Facing::East => Facing::North,
        }
    }
}

/// Vertical slope of a segment. `Up` rises, which moves toward smaller `y`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Climb {
    Up,
    Level,
    Down,
}

impl Climb {
    /// The `y` delta of one unit of travel at this climb.
    #[inline]
    pub const fn dy(self) -> i32 {
        match self {
            Climb::Up => -1,
            Climb::Level => 0,
            Climb::Down => 1,
        }
    }
}

/// A forward diagonal cannot climb or descend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DiagonalClimbError;

impl fmt::Display for DiagonalClimbError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("diagonal bearings cannot climb or descend")
    }
}

impl std::error::Error for DiagonalClimbError {}

/// A frame-relative travel direction: bearing plus climb.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Course {
    pub bearing: Bearing,
    pub climb: Climb,
}

impl Course {
    /// Checked constructor. The forward diagonals (`ForeRight`, `ForeLeft`)
    /// only exist level; every other bearing accepts any climb.
    pub const fn new(bearing: Bearing, climb: Climb) -> Result<Course, DiagonalClimbError> {
        match (bearing, climb) {
            (Bearing::ForeRight | Bearing::ForeLeft, Climb::Up | Climb::Down) => {
                Err(DiagonalClimbError)
            }
            _ => Ok(Course { bearing, climb }),
        }
    }

    #[inline]
    pub const fn ahead(climb: Climb) -> Course {
        Course {
            bearing: Bearing::Fore,
            climb,
        }
    }

    #[inline]
    pub const fn turn_left() -> Course {
        Course {
            bearing: Bearing::ForeLeft,
            climb: Climb::Level,
        }
    }

    #[inline]
    pub const fn turn_right() -> Course {
        Course {
            bearing: Bearing::ForeRight,
            climb: Climb::Level,
        }
    }
}

/// A segment's visible surface: a quad for straight or sloped travel, a
/// triangular wedge for a diagonal turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Face {
    Tri([Pos3; 3]),
    Quad([Pos3; 4]),
}

impl Face {
    #[inline]
    pub fn vertices(&self) -> &[Pos3] {
        match self {
            Face::Tri(v) => v,
            Face::Quad(v) => v,
        }
    }
}

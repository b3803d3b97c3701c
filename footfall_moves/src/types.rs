// Core types shared across the movement model.
//
// Defines the lattice position (`VoxelCoord`), the block materials used by
// the in-memory `VoxelWorld` (`BlockType`), and the fixed horizontal direction
// tables the movement kinds and the successor generator iterate over.
//
// See also: `world.rs` for the block classification built on `BlockType`,
// `movement/` for the kinds that step between coordinates, `provider.rs`
// for the enumeration order of the direction tables.
//
// **Critical constraint: determinism.** Direction tables are fixed arrays;
// successor order follows them exactly. `VoxelCoord` has a total order so it
// can key `BTreeMap`s.

use serde::Serialize;
use std::fmt;

// ---------------------------------------------------------------------------
// Spatial types
// ---------------------------------------------------------------------------

/// A position in the 3D voxel grid. Each component is in voxel units.
///
/// The coordinate system uses right-handed conventions:
/// - X: east  (positive) / west  (negative)
/// - Y: up    (positive) / down  (negative)
/// - Z: south (positive) / north (negative)
///
/// An agent "at" a coordinate occupies that cell (feet) and the cell above
/// it (head).
///
/// Arithmetic saturates at the ends of the `i32` range instead of
/// overflowing. A step that would leave the range lands on the boundary, so
/// its delta no longer matches any movement kind and the movement is simply
/// invalid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct VoxelCoord {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl VoxelCoord {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Translate by the given per-axis deltas.
    pub const fn offset(self, dx: i32, dy: i32, dz: i32) -> Self {
        Self::new(
            self.x.saturating_add(dx),
            self.y.saturating_add(dy),
            self.z.saturating_add(dz),
        )
    }

    /// The cell `n` steps above this one.
    pub const fn up(self, n: i32) -> Self {
        self.offset(0, n, 0)
    }

    /// The cell `n` steps below this one.
    pub const fn down(self, n: i32) -> Self {
        Self::new(self.x, self.y.saturating_sub(n), self.z)
    }

    /// Per-axis difference `other - self`, saturated to the `i32` range.
    pub const fn delta_to(self, other: Self) -> (i32, i32, i32) {
        (
            other.x.saturating_sub(self.x),
            other.y.saturating_sub(self.y),
            other.z.saturating_sub(self.z),
        )
    }

    /// Chebyshev distance in the horizontal (XZ) plane, ignoring altitude.
    pub fn horizontal_chebyshev(self, other: Self) -> u32 {
        self.x.abs_diff(other.x).max(self.z.abs_diff(other.z))
    }
}

impl fmt::Display for VoxelCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

// ---------------------------------------------------------------------------
// Horizontal directions
// ---------------------------------------------------------------------------

/// One of the four horizontal cardinal directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Cardinal {
    North,
    East,
    South,
    West,
}

impl Cardinal {
    /// All four cardinals in enumeration order: N(-Z), E(+X), S(+Z), W(-X).
    pub const ALL: [Cardinal; 4] = [
        Cardinal::North,
        Cardinal::East,
        Cardinal::South,
        Cardinal::West,
    ];

    /// Unit `(dx, dz)` step for this direction.
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Cardinal::North => (0, -1),
            Cardinal::East => (1, 0),
            Cardinal::South => (0, 1),
            Cardinal::West => (-1, 0),
        }
    }

    /// Recover a cardinal from a unit horizontal step. `None` for anything
    /// that is not exactly one cardinal unit.
    pub const fn from_offset(dx: i32, dz: i32) -> Option<Cardinal> {
        match (dx, dz) {
            (0, -1) => Some(Cardinal::North),
            (1, 0) => Some(Cardinal::East),
            (0, 1) => Some(Cardinal::South),
            (-1, 0) => Some(Cardinal::West),
            _ => None,
        }
    }
}

/// The four horizontal diagonal steps: NE, SE, SW, NW.
pub const DIAGONAL_OFFSETS: [(i32, i32); 4] = [(1, -1), (1, 1), (-1, 1), (-1, -1)];

// ---------------------------------------------------------------------------
// Block types
// ---------------------------------------------------------------------------

/// The material of a single cell in a `VoxelWorld`.
///
/// Only the physical classification matters to movement; see
/// `world::BlockOracle` for the flags each material maps to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BlockType {
    #[default]
    Air,
    Stone,
    Dirt,
    Planks,
    Water,
    Ladder,
    Vine,
    /// Decorative foliage: not air, but nothing to collide with.
    TallGrass,
    /// Collides, but is too thin and tall to stand on.
    Fence,
}

impl BlockType {
    pub fn is_air(self) -> bool {
        self == BlockType::Air
    }

    /// Full cube a body can stand on.
    pub fn is_solid(self) -> bool {
        matches!(self, BlockType::Stone | BlockType::Dirt | BlockType::Planks)
    }

    pub fn is_liquid(self) -> bool {
        self == BlockType::Water
    }

    pub fn is_climbable(self) -> bool {
        matches!(self, BlockType::Ladder | BlockType::Vine)
    }

    pub fn has_collision(self) -> bool {
        self.is_solid() || self == BlockType::Fence
    }

    /// A body can occupy the cell.
    pub fn is_passable(self) -> bool {
        !self.has_collision()
    }
}

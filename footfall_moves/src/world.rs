// Block classification oracle and a dense in-memory voxel grid.
//
// `BlockOracle` is the read-only query surface every movement kind depends
// on: six per-cell flags answered against the current world snapshot. A
// production consumer implements it over its own world storage; this crate
// never assumes anything about that storage beyond the trait.
//
// `VoxelWorld` is the crate's own implementation, used by tests, the
// benchmark, and consumers without a world of their own. It is stored as a
// flat `Vec<BlockType>` indexed by `x + z * size_x + y * size_x * size_z`
// (coordinates relative to `origin`), giving O(1) read/write access.
// Out-of-bounds reads return `Air`; out-of-bounds writes are no-ops.
//
// See also: `types.rs` for `BlockType` and its classification,
// `movement/probe.rs` which wraps an oracle to record consulted cells.
//
// **Critical constraint: purity.** Oracle queries must not mutate state and
// must answer in constant time; `calculate()` relies on both.

use crate::types::{BlockType, VoxelCoord};

/// Per-cell physical classification of the world.
///
/// Implementations answer for the world as it is right now. Every method is
/// expected to be O(1) and side-effect free.
pub trait BlockOracle {
    fn is_air(&self, pos: VoxelCoord) -> bool;
    /// An agent's body can occupy the cell. Usually the inverse of
    /// `has_collision`, but an oracle may mark collision-free cells (webs,
    /// deep snow) impassable.
    fn is_passable(&self, pos: VoxelCoord) -> bool;
    /// Full block a body can stand on.
    fn is_solid(&self, pos: VoxelCoord) -> bool;
    fn is_liquid(&self, pos: VoxelCoord) -> bool;
    fn is_climbable(&self, pos: VoxelCoord) -> bool;
    fn has_collision(&self, pos: VoxelCoord) -> bool;
}

impl<T: BlockOracle + ?Sized> BlockOracle for &T {
    fn is_air(&self, pos: VoxelCoord) -> bool {
        (**self).is_air(pos)
    }
    fn is_passable(&self, pos: VoxelCoord) -> bool {
        (**self).is_passable(pos)
    }
    fn is_solid(&self, pos: VoxelCoord) -> bool {
        (**self).is_solid(pos)
    }
    fn is_liquid(&self, pos: VoxelCoord) -> bool {
        (**self).is_liquid(pos)
    }
    fn is_climbable(&self, pos: VoxelCoord) -> bool {
        (**self).is_climbable(pos)
    }
    fn has_collision(&self, pos: VoxelCoord) -> bool {
        (**self).has_collision(pos)
    }
}

/// Dense 3D voxel grid covering `origin .. origin + size` on each axis.
#[derive(Clone, Debug, Default)]
pub struct VoxelWorld {
    /// Flat storage: index = x + z * size_x + y * size_x * size_z, with
    /// x/y/z relative to `origin`.
    blocks: Vec<BlockType>,
    /// World coordinate of the grid's minimum corner.
    pub origin: VoxelCoord,
    pub size_x: u32,
    pub size_y: u32,
    pub size_z: u32,
}

impl VoxelWorld {
    /// Create a new world filled with `Air`, with its minimum corner at
    /// (0, 0, 0).
    pub fn new(size_x: u32, size_y: u32, size_z: u32) -> Self {
        Self::with_origin(VoxelCoord::new(0, 0, 0), size_x, size_y, size_z)
    }

    /// Create a new world filled with `Air`, with its minimum corner at
    /// `origin`. Lets a grid cover negative coordinates.
    pub fn with_origin(origin: VoxelCoord, size_x: u32, size_y: u32, size_z: u32) -> Self {
        let total = (size_x as usize) * (size_y as usize) * (size_z as usize);
        Self {
            blocks: vec![BlockType::Air; total],
            origin,
            size_x,
            size_y,
            size_z,
        }
    }

    /// Check whether a coordinate is within bounds.
    pub fn in_bounds(&self, coord: VoxelCoord) -> bool {
        self.local(coord).is_some()
    }

    /// Grid-relative `(x, y, z)` of a world coordinate, or `None` if out of
    /// bounds. Widened to `i64` so any pair of `i32` corners subtracts.
    fn local(&self, coord: VoxelCoord) -> Option<(usize, usize, usize)> {
        let axis = |c: i32, o: i32, size: u32| {
            let d = i64::from(c) - i64::from(o);
            (0..i64::from(size)).contains(&d).then_some(d as usize)
        };
        Some((
            axis(coord.x, self.origin.x, self.size_x)?,
            axis(coord.y, self.origin.y, self.size_y)?,
            axis(coord.z, self.origin.z, self.size_z)?,
        ))
    }

    /// Convert a coordinate to a flat index. Returns `None` if out of bounds.
    fn index(&self, coord: VoxelCoord) -> Option<usize> {
        let (x, y, z) = self.local(coord)?;
        let sx = self.size_x as usize;
        let sz = self.size_z as usize;
        Some(x + z * sx + y * sx * sz)
    }

    /// Read a block. Returns `Air` for out-of-bounds coordinates.
    pub fn get(&self, coord: VoxelCoord) -> BlockType {
        self.index(coord)
            .map(|i| self.blocks[i])
            .unwrap_or(BlockType::Air)
    }

    /// Write a block. No-op for out-of-bounds coordinates.
    pub fn set(&mut self, coord: VoxelCoord, block: BlockType) {
        if let Some(i) = self.index(coord) {
            self.blocks[i] = block;
        }
    }

    /// Fill the inclusive box spanned by `a` and `b` (corners in any order).
    /// Cells outside the grid are skipped.
    pub fn fill(&mut self, a: VoxelCoord, b: VoxelCoord, block: BlockType) {
        for y in a.y.min(b.y)..=a.y.max(b.y) {
            for z in a.z.min(b.z)..=a.z.max(b.z) {
                for x in a.x.min(b.x)..=a.x.max(b.x) {
                    self.set(VoxelCoord::new(x, y, z), block);
                }
            }
        }
    }
}

impl BlockOracle for VoxelWorld {
    fn is_air(&self, pos: VoxelCoord) -> bool {
        self.get(pos).is_air()
    }

    fn is_passable(&self, pos: VoxelCoord) -> bool {
        self.get(pos).is_passable()
    }

    fn is_solid(&self, pos: VoxelCoord) -> bool {
        self.get(pos).is_solid()
    }

    fn is_liquid(&self, pos: VoxelCoord) -> bool {
        self.get(pos).is_liquid()
    }

    fn is_climbable(&self, pos: VoxelCoord) -> bool {
        self.get(pos).is_climbable()
    }

    fn has_collision(&self, pos: VoxelCoord) -> bool {
        self.get(pos).has_collision()
    }
}

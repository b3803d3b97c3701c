// Recording wrapper around a `BlockOracle`.
//
// Every query a movement kind makes goes through a `Probe`, which forwards to
// the oracle and appends the queried cell to the movement's consulted-cell
// list (deduplicated, first-read order). That list is what
// `Movement::positions_checked()` hands to the consumer for dirty-cell
// invalidation, so it must contain exactly the cells read: no more, no less.
//
// The body predicates (`body_clear`, `walkable`, `solid_below`) live here so
// every kind describes the 2-cell hitbox the same way.

use crate::config::HITBOX_HEIGHT;
use crate::types::VoxelCoord;
use crate::world::BlockOracle;
use smallvec::SmallVec;

/// Inline capacity for consulted cells. Covers every kind except long falls
/// and long fly hops without spilling to the heap.
pub const CHECKED_INLINE: usize = 16;

pub type CheckedCells = SmallVec<[VoxelCoord; CHECKED_INLINE]>;

pub(crate) struct Probe<'a, W: BlockOracle + ?Sized> {
    world: &'a W,
    checked: &'a mut CheckedCells,
}

impl<'a, W: BlockOracle + ?Sized> Probe<'a, W> {
    pub(crate) fn new(world: &'a W, checked: &'a mut CheckedCells) -> Self {
        Self { world, checked }
    }

    fn record(&mut self, pos: VoxelCoord) {
        if !self.checked.contains(&pos) {
            self.checked.push(pos);
        }
    }

    pub(crate) fn is_passable(&mut self, pos: VoxelCoord) -> bool {
        self.record(pos);
        self.world.is_passable(pos)
    }

    pub(crate) fn is_solid(&mut self, pos: VoxelCoord) -> bool {
        self.record(pos);
        self.world.is_solid(pos)
    }

    pub(crate) fn is_liquid(&mut self, pos: VoxelCoord) -> bool {
        self.record(pos);
        self.world.is_liquid(pos)
    }

    pub(crate) fn is_climbable(&mut self, pos: VoxelCoord) -> bool {
        self.record(pos);
        self.world.is_climbable(pos)
    }

    pub(crate) fn has_collision(&mut self, pos: VoxelCoord) -> bool {
        self.record(pos);
        self.world.has_collision(pos)
    }

    /// The hitbox fits with its feet at `pos`. Reads bottom-up and stops at
    /// the first blocked cell.
    pub(crate) fn body_clear(&mut self, pos: VoxelCoord) -> bool {
        (0..HITBOX_HEIGHT).all(|h| !self.has_collision(pos.up(h)))
    }

    /// Every hitbox cell at `pos` is passable.
    pub(crate) fn walkable(&mut self, pos: VoxelCoord) -> bool {
        (0..HITBOX_HEIGHT).all(|h| self.is_passable(pos.up(h)))
    }

    pub(crate) fn solid_below(&mut self, pos: VoxelCoord) -> bool {
        self.is_solid(pos.down(1))
    }
}

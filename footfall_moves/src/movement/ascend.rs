// Ascend: jump up one or two cells.
//
// Two shapes are accepted:
//
// - **Step-up jump** (height 1, horizontal offset within ±1, diagonal only if
//   the agent allows diagonals). The agent needs room to jump above its own
//   head (src+1 and src+2), solid footing at both ends, and the hitbox must
//   fit at the landing cell. If the block directly ahead of the source is
//   solid, the two cells above it must be free so the agent clears it
//   instead of jumping into it.
// - **Vertical jump** (height 2, no horizontal offset). The agent rises in
//   its own column: the intermediate cell (src+1) must fit the hitbox, and
//   so must the destination. The landing column is the launch column, so no
//   footing is read under the destination.
//
// A height-2 jump with any horizontal offset is always invalid, as is a
// height-1 jump straight up.

use super::Verdict;
use super::probe::Probe;
use crate::config::{
    ASCEND_BASE_COST, ASCEND_COST_PER_EXTRA_HEIGHT, AgentCapabilities, MAX_JUMP_HEIGHT,
};
use crate::types::VoxelCoord;
use crate::world::BlockOracle;

/// Cost of an ascend of the given height.
pub fn cost(height: i32) -> f32 {
    ASCEND_BASE_COST + (height - 1) as f32 * ASCEND_COST_PER_EXTRA_HEIGHT
}

pub(crate) fn evaluate<W: BlockOracle + ?Sized>(
    probe: &mut Probe<'_, W>,
    agent: &AgentCapabilities,
    src: VoxelCoord,
    dest: VoxelCoord,
    height: i32,
) -> Verdict {
    if !(1..=MAX_JUMP_HEIGHT).contains(&height) {
        return Err("height out of range");
    }
    let (dx, dy, dz) = src.delta_to(dest);
    if dy != height {
        return Err("altitude does not match height");
    }
    if dx.unsigned_abs() > 1 || dz.unsigned_abs() > 1 {
        return Err("horizontal offset too large");
    }
    let horizontal = dx != 0 || dz != 0;
    if height == 2 && horizontal {
        return Err("two-high jump must be vertical");
    }
    if !horizontal && height == 1 {
        return Err("one-high jump needs a horizontal step");
    }
    if dx != 0 && dz != 0 && !agent.allow_diagonal {
        return Err("diagonal ascend disabled");
    }

    if !probe.body_clear(dest) {
        return Err("destination blocked");
    }
    if !probe.solid_below(src) {
        return Err("no takeoff footing");
    }

    if horizontal {
        if !probe.solid_below(dest) {
            return Err("no landing footing");
        }
        if probe.has_collision(src.up(1)) || probe.has_collision(src.up(2)) {
            return Err("no jump headroom");
        }
        let ahead = src.offset(dx, 0, dz);
        if probe.is_solid(ahead)
            && (probe.has_collision(ahead.up(1)) || probe.has_collision(ahead.up(2)))
        {
            return Err("obstacle too tall to clear");
        }
    } else if !probe.body_clear(src.up(1)) {
        return Err("intermediate cell blocked");
    }

    Ok(cost(height))
}

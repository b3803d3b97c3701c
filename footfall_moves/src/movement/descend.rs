// Descend: step off an edge (or drop in place) and fall to a lower cell.
//
// The landing cell must fit the hitbox and either sit on a solid block or be
// water, which breaks the fall. The whole column above the landing cell, up
// to the agent's head height at the source, must be passable: the agent
// steps into that column at source altitude and falls straight down through
// it.

use super::Verdict;
use super::probe::Probe;
use crate::config::{DESCEND_BASE_COST, DESCEND_COST_PER_BLOCK, MAX_FALL_DISTANCE};
use crate::types::{Cardinal, VoxelCoord};
use crate::world::BlockOracle;

/// Cost of a descend covering `fall_distance` cells.
pub fn cost(fall_distance: i32) -> f32 {
    DESCEND_BASE_COST + fall_distance as f32 * DESCEND_COST_PER_BLOCK
}

pub(crate) fn evaluate<W: BlockOracle + ?Sized>(
    probe: &mut Probe<'_, W>,
    src: VoxelCoord,
    dest: VoxelCoord,
    fall_distance: i32,
) -> Verdict {
    if !(1..=MAX_FALL_DISTANCE).contains(&fall_distance) {
        return Err("fall distance out of range");
    }
    let (dx, dy, dz) = src.delta_to(dest);
    if dy != -fall_distance {
        return Err("altitude does not match fall distance");
    }
    if (dx, dz) != (0, 0) && Cardinal::from_offset(dx, dz).is_none() {
        return Err("not a cardinal step");
    }

    if !probe.body_clear(dest) {
        return Err("destination blocked");
    }
    if !(probe.solid_below(dest) || probe.is_liquid(dest)) {
        return Err("nothing breaks the fall");
    }
    // dest and dest+1 are covered by body_clear above; dest + fall + 1 is
    // the head cell at source altitude.
    for h in 2..=fall_distance + 1 {
        if !probe.is_passable(dest.up(h)) {
            return Err("fall path obstructed");
        }
    }

    Ok(cost(fall_distance))
}

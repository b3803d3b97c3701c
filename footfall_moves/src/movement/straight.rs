// Straight: a same-altitude step to one of the four cardinal neighbors.
//
// Valid when the hitbox fits at the destination and something holds the
// agent up there: a solid block underneath, water, or a ladder/vine in the
// destination cell itself.

use super::Verdict;
use super::probe::Probe;
use crate::config::STRAIGHT_COST;
use crate::types::{Cardinal, VoxelCoord};
use crate::world::BlockOracle;

pub(crate) fn evaluate<W: BlockOracle + ?Sized>(
    probe: &mut Probe<'_, W>,
    src: VoxelCoord,
    dest: VoxelCoord,
) -> Verdict {
    let (dx, dy, dz) = src.delta_to(dest);
    if dy != 0 || Cardinal::from_offset(dx, dz).is_none() {
        return Err("not a cardinal step");
    }
    if probe.has_collision(dest) {
        return Err("destination blocked");
    }
    if probe.has_collision(dest.up(1)) {
        return Err("no headroom");
    }
    if !(probe.solid_below(dest) || probe.is_liquid(dest) || probe.is_climbable(dest)) {
        return Err("nothing to stand on");
    }
    Ok(STRAIGHT_COST)
}

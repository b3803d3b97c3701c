// Parkour: a running jump across a gap of 2..=4 cells along one cardinal
// axis, landing up to one cell higher or lower.
//
// Requirements, in the order they are checked:
// 1. Solid footing at the source.
// 2. A runway one cell behind the source (opposite the jump direction): solid
//    footing and room for the hitbox. Models the run-up.
// 3. For upward jumps, a free cell two above the source (the jump arc).
// 4. Every cell strictly between source and landing has nothing solid under
//    it (a real gap; otherwise this is just a walk) and room for the hitbox.
// 5. The landing cell fits the hitbox and has solid footing.

use super::Verdict;
use super::probe::Probe;
use crate::config::{MAX_PARKOUR_GAP, MIN_PARKOUR_GAP, PARKOUR_BASE_COST, PARKOUR_COST_PER_BLOCK};
use crate::types::VoxelCoord;
use crate::world::BlockOracle;

/// Cost of a parkour jump across `gap_distance` cells.
pub fn cost(gap_distance: i32) -> f32 {
    PARKOUR_BASE_COST + gap_distance as f32 * PARKOUR_COST_PER_BLOCK
}

pub(crate) fn evaluate<W: BlockOracle + ?Sized>(
    probe: &mut Probe<'_, W>,
    src: VoxelCoord,
    dest: VoxelCoord,
    gap_distance: i32,
) -> Verdict {
    if !(MIN_PARKOUR_GAP..=MAX_PARKOUR_GAP).contains(&gap_distance) {
        return Err("gap out of range");
    }
    let (dx, dy, dz) = src.delta_to(dest);
    if !(-1..=1).contains(&dy) {
        return Err("vertical change out of range");
    }
    if (dx != 0) == (dz != 0) {
        return Err("not along a single cardinal axis");
    }
    if src.horizontal_chebyshev(dest) != gap_distance as u32 {
        return Err("distance does not match gap");
    }
    let (sx, sz) = (dx.signum(), dz.signum());

    if !probe.solid_below(src) {
        return Err("no takeoff footing");
    }
    let runway = src.offset(-sx, 0, -sz);
    if !probe.solid_below(runway) || !probe.body_clear(runway) {
        return Err("no runway");
    }
    if dy > 0 && probe.has_collision(src.up(2)) {
        return Err("no jump headroom");
    }
    for i in 1..gap_distance {
        let cell = src.offset(sx * i, 0, sz * i);
        if probe.solid_below(cell) {
            return Err("gap is walkable");
        }
        if !probe.body_clear(cell) {
            return Err("gap obstructed");
        }
    }
    if !probe.body_clear(dest) {
        return Err("landing blocked");
    }
    if !probe.solid_below(dest) {
        return Err("no landing footing");
    }

    Ok(cost(gap_distance))
}

// Diagonal: a same-altitude step along both horizontal axes at once.
//
// Besides the usual destination checks, both orthogonal cells the agent
// brushes past (one step along x only, one step along z only) must be
// walkable on their own. Otherwise the agent would squeeze through the
// corner where two solid blocks meet.

use super::Verdict;
use super::probe::Probe;
use crate::config::DIAGONAL_COST;
use crate::types::VoxelCoord;
use crate::world::BlockOracle;

pub(crate) fn evaluate<W: BlockOracle + ?Sized>(
    probe: &mut Probe<'_, W>,
    src: VoxelCoord,
    dest: VoxelCoord,
) -> Verdict {
    let (dx, dy, dz) = src.delta_to(dest);
    if dy != 0 || dx.unsigned_abs() != 1 || dz.unsigned_abs() != 1 {
        return Err("not a diagonal step");
    }
    if !probe.walkable(dest) {
        return Err("destination blocked");
    }
    if !probe.solid_below(dest) {
        return Err("nothing to stand on");
    }
    for shortcut in [src.offset(dx, 0, 0), src.offset(0, 0, dz)] {
        if !probe.walkable(shortcut) {
            return Err("corner cut");
        }
    }
    Ok(DIAGONAL_COST)
}

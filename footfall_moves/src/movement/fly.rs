// Fly: free movement to a nearby cell, for agents that can fly.
//
// The path from source to destination is sampled at one point per unit of
// the largest axis delta, each sample rounded to the nearest cell. Every
// sample, including the destination, must fit the hitbox.

use super::Verdict;
use super::probe::Probe;
use crate::config::{
    AgentCapabilities, FLY_COST_PER_VERTICAL_BLOCK, FLY_DIAGONAL_COST, FLY_STRAIGHT_COST,
};
use crate::types::VoxelCoord;
use crate::world::BlockOracle;

/// Cost of a flight with the given per-axis deltas.
pub fn cost(dx: i32, dy: i32, dz: i32) -> f32 {
    let horizontal = if dx != 0 && dz != 0 {
        FLY_DIAGONAL_COST
    } else {
        FLY_STRAIGHT_COST
    };
    horizontal + dy.unsigned_abs() as f32 * FLY_COST_PER_VERTICAL_BLOCK
}

/// The `step`-th of `steps` evenly spaced points from `src` along
/// `(dx, dy, dz)`, rounded to the nearest cell.
fn sample(src: VoxelCoord, (dx, dy, dz): (i32, i32, i32), step: u32, steps: u32) -> VoxelCoord {
    let t = step as f32 / steps as f32;
    src.offset(
        (dx as f32 * t).round() as i32,
        (dy as f32 * t).round() as i32,
        (dz as f32 * t).round() as i32,
    )
}

pub(crate) fn evaluate<W: BlockOracle + ?Sized>(
    probe: &mut Probe<'_, W>,
    agent: &AgentCapabilities,
    src: VoxelCoord,
    dest: VoxelCoord,
) -> Verdict {
    if !agent.can_fly {
        return Err("agent cannot fly");
    }
    let delta = src.delta_to(dest);
    let (dx, dy, dz) = delta;
    let steps = dx.unsigned_abs().max(dy.unsigned_abs()).max(dz.unsigned_abs());
    if steps == 0 {
        return Err("zero-length flight");
    }
    if !probe.body_clear(dest) {
        return Err("destination blocked");
    }
    for step in 1..steps {
        if !probe.body_clear(sample(src, delta, step, steps)) {
            return Err("flight path obstructed");
        }
    }
    Ok(cost(dx, dy, dz))
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::super::{MoveContext, Movement};
    use super::*;
    use crate::types::BlockType;
    use crate::world::VoxelWorld;

    fn calc(world: &VoxelWorld, caps: AgentCapabilities, m: &mut Movement) -> bool {
        m.calculate(&MoveContext::new(world, &caps))
    }

    #[test]
    fn cannot_fly_is_always_invalid() {
        let grounded = AgentCapabilities::grounded();
        for world in [empty_world(), flat_world()] {
            for dest in [
                ORIGIN.offset(1, 0, 0),
                ORIGIN.offset(0, 1, 0),
                ORIGIN.offset(1, 1, 1),
            ] {
                let mut m = Movement::fly(ORIGIN, dest);
                assert!(!calc(&world, grounded, &mut m), "{dest}");
                assert!(m.positions_checked().is_empty());
            }
        }
    }

    #[test]
    fn open_air_costs() {
        let world = empty_world();
        let caps = AgentCapabilities::flying();
        let cases = [
            ((1, 0, 0), 1.0),
            ((0, 1, 0), 1.2),
            ((0, -1, 0), 1.2),
            ((1, 0, 1), 1.4),
            ((1, 1, 1), 1.6),
            ((2, 0, 0), 1.0),
            ((0, 2, 0), 1.4),
            ((2, -1, 0), 1.2),
        ];
        for ((dx, dy, dz), expected) in cases {
            let mut m = Movement::fly(ORIGIN, ORIGIN.offset(dx, dy, dz));
            assert!(calc(&world, caps, &mut m), "({dx}, {dy}, {dz})");
            assert!(
                approx(m.cost().unwrap(), expected),
                "({dx}, {dy}, {dz}): {:?}",
                m.cost()
            );
        }
    }

    #[test]
    fn blocked_destination_or_head_is_invalid() {
        let caps = AgentCapabilities::flying();
        let dest = ORIGIN.offset(0, 1, 1);
        for blocked in [dest, dest.up(1)] {
            let mut world = empty_world();
            world.set(blocked, BlockType::Stone);
            let mut m = Movement::fly(ORIGIN, dest);
            assert!(!calc(&world, caps, &mut m), "{blocked}");
        }
    }

    #[test]
    fn obstacle_on_long_hop_path_is_invalid() {
        let caps = AgentCapabilities::flying();
        let mut world = empty_world();
        world.set(ORIGIN.offset(1, 0, 0), BlockType::Fence);
        let mut m = Movement::fly(ORIGIN, ORIGIN.offset(2, 0, 0));
        assert!(!calc(&world, caps, &mut m));

        // The unit hop the other way is unaffected.
        let mut back = Movement::fly(ORIGIN, ORIGIN.offset(-1, 0, 0));
        assert!(calc(&world, caps, &mut back));
    }

    #[test]
    fn long_hop_checks_intermediate_head() {
        let caps = AgentCapabilities::flying();
        let mut world = empty_world();
        // Only the head cell of the midpoint sample (1, 64, 0) is blocked.
        world.set(ORIGIN.offset(1, 1, 0), BlockType::Fence);
        let mut m = Movement::fly(ORIGIN, ORIGIN.offset(2, 0, 0));
        assert!(!calc(&world, caps, &mut m));
        assert!(m.positions_checked().contains(&ORIGIN.offset(1, 1, 0)));
    }

    #[test]
    fn flying_through_liquid_is_allowed() {
        let caps = AgentCapabilities::flying();
        let mut world = empty_world();
        world.set(ORIGIN.offset(1, 0, 0), BlockType::Water);
        let mut m = Movement::fly(ORIGIN, ORIGIN.offset(1, 0, 0));
        assert!(calc(&world, caps, &mut m));
    }

    #[test]
    fn zero_length_is_invalid() {
        let world = empty_world();
        let mut m = Movement::fly(ORIGIN, ORIGIN);
        assert!(!calc(&world, AgentCapabilities::flying(), &mut m));
    }

    #[test]
    fn samples_round_to_nearest_cell() {
        let src = VoxelCoord::new(0, 0, 0);
        assert_eq!(sample(src, (2, 1, 0), 1, 2), VoxelCoord::new(1, 1, 0));
        assert_eq!(sample(src, (-2, -1, 0), 1, 2), VoxelCoord::new(-1, -1, 0));
        assert_eq!(sample(src, (4, 0, 1), 1, 4), VoxelCoord::new(1, 0, 0));
    }
}

// Successor generation: every candidate movement out of one cell.
//
// `MovementProvider` turns an agent's capabilities into the full, unvalidated
// list of movements leaving a position. It never reads the world: the
// consumer calls `calculate()` on each candidate and drops the invalid ones.
//
// Enumeration (grounded agent):
//   1. 4 cardinal Straight steps.
//   2. 4 Diagonal steps, if diagonals are allowed.
//   3. Ascend height 1: 4 cardinal, plus 4 diagonal if diagonals are allowed.
//      Ascend height 2: 4 cardinal. Those can never pass the ascend
//      predicate (a two-high jump must be vertical) but are emitted so the
//      candidate set matches the established movement model.
//   4. If descending is allowed, for each fall distance 1..=10: 4 cardinal
//      Descends and 1 straight down.
//   5. If parkour is allowed, for each gap 2..=4: 4 cardinal directions, each
//      landing one lower, level, or one higher.
//
// A flying agent gets Fly moves only: the 26 cells at Chebyshev distance 1,
// plus (unless disabled in config) 14 longer hops: two cells along a single
// horizontal axis, two cells straight up or down, and two cells along a
// horizontal axis combined with one cell up or down.
//
// See also: `movement/` for the kinds themselves, `invalidation.rs` for a
// cache that sits between this provider and a search.
//
// **Critical constraint: determinism.** Emission order is fixed by the loops
// below and the direction tables in `types.rs`. Order carries no priority.

use crate::config::{
    AgentCapabilities, MAX_FALL_DISTANCE, MAX_JUMP_HEIGHT, MAX_PARKOUR_GAP, MIN_PARKOUR_GAP,
    MovementConfig,
};
use crate::movement::Movement;
use crate::types::{Cardinal, DIAGONAL_OFFSETS, VoxelCoord};

/// Longer fly hops added to the 26 unit neighbors, as (dx, dy, dz).
const EXTENDED_FLY_HOPS: [(i32, i32, i32); 14] = [
    // Two along one horizontal axis.
    (2, 0, 0),
    (-2, 0, 0),
    (0, 0, 2),
    (0, 0, -2),
    // Two vertically.
    (0, 2, 0),
    (0, -2, 0),
    // Two horizontally, one vertically.
    (2, 1, 0),
    (2, -1, 0),
    (-2, 1, 0),
    (-2, -1, 0),
    (0, 1, 2),
    (0, -1, 2),
    (0, 1, -2),
    (0, -1, -2),
];

/// Stateless successor generator for one capability set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MovementProvider {
    pub capabilities: AgentCapabilities,
    /// Include `EXTENDED_FLY_HOPS` for flying agents.
    pub extended_fly_hops: bool,
}

impl MovementProvider {
    pub fn new(capabilities: AgentCapabilities) -> Self {
        Self {
            capabilities,
            extended_fly_hops: true,
        }
    }

    pub fn from_config(config: &MovementConfig) -> Self {
        Self {
            capabilities: config.capabilities,
            extended_fly_hops: config.extended_fly_hops,
        }
    }

    /// All candidate movements leaving `pos`, unvalidated.
    pub fn successors(&self, pos: VoxelCoord) -> Vec<Movement> {
        let out = if self.capabilities.can_fly {
            self.fly_successors(pos)
        } else {
            self.ground_successors(pos)
        };
        tracing::debug!(%pos, count = out.len(), flying = self.capabilities.can_fly, "generated successors");
        out
    }

    fn fly_successors(&self, pos: VoxelCoord) -> Vec<Movement> {
        let mut out = Vec::with_capacity(26 + EXTENDED_FLY_HOPS.len());
        for dy in -1..=1 {
            for dz in -1..=1 {
                for dx in -1..=1 {
                    if (dx, dy, dz) != (0, 0, 0) {
                        out.push(Movement::fly(pos, pos.offset(dx, dy, dz)));
                    }
                }
            }
        }
        if self.extended_fly_hops {
            for (dx, dy, dz) in EXTENDED_FLY_HOPS {
                out.push(Movement::fly(pos, pos.offset(dx, dy, dz)));
            }
        }
        out
    }

    fn ground_successors(&self, pos: VoxelCoord) -> Vec<Movement> {
        let caps = &self.capabilities;
        let mut out = Vec::with_capacity(128);

        for dir in Cardinal::ALL {
            out.push(Movement::straight(pos, dir));
        }

        if caps.allow_diagonal {
            for (dx, dz) in DIAGONAL_OFFSETS {
                out.push(Movement::diagonal(pos, dx, dz));
            }
        }

        for height in 1..=MAX_JUMP_HEIGHT {
            for dir in Cardinal::ALL {
                let (dx, dz) = dir.offset();
                out.push(Movement::ascend(pos, dx, dz, height));
            }
            if height == 1 && caps.allow_diagonal {
                for (dx, dz) in DIAGONAL_OFFSETS {
                    out.push(Movement::ascend(pos, dx, dz, height));
                }
            }
        }

        if caps.allow_descend {
            for fall in 1..=MAX_FALL_DISTANCE {
                for dir in Cardinal::ALL {
                    let (dx, dz) = dir.offset();
                    out.push(Movement::descend(pos, dx, dz, fall));
                }
                out.push(Movement::descend(pos, 0, 0, fall));
            }
        }

        if caps.allow_parkour {
            for gap in MIN_PARKOUR_GAP..=MAX_PARKOUR_GAP {
                for dir in Cardinal::ALL {
                    for dy in -1..=1 {
                        out.push(Movement::parkour(pos, dir, gap, dy));
                    }
                }
            }
        }

        out
    }
}

impl Default for MovementProvider {
    fn default() -> Self {
        Self::from_config(&MovementConfig::default())
    }
}

/// Shorthand for `MovementProvider::new(*capabilities).successors(pos)`.
pub fn successors(pos: VoxelCoord, capabilities: &AgentCapabilities) -> Vec<Movement> {
    MovementProvider::new(*capabilities).successors(pos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::movement::{MoveContext, MovementKind};
    use crate::types::BlockType;
    use crate::world::VoxelWorld;
    use std::collections::BTreeSet;

    const POS: VoxelCoord = VoxelCoord::new(0, 64, 0);

    fn count_kind(moves: &[Movement], pred: impl Fn(MovementKind) -> bool) -> usize {
        moves.iter().filter(|m| pred(m.kind())).count()
    }

    #[test]
    fn default_grounded_candidate_counts() {
        let moves = successors(POS, &AgentCapabilities::default());
        assert_eq!(count_kind(&moves, |k| k == MovementKind::Straight), 4);
        assert_eq!(count_kind(&moves, |k| k == MovementKind::Diagonal), 4);
        assert_eq!(
            count_kind(&moves, |k| k == MovementKind::Ascend { height: 1 }),
            8
        );
        assert_eq!(
            count_kind(&moves, |k| k == MovementKind::Ascend { height: 2 }),
            4
        );
        assert_eq!(
            count_kind(&moves, |k| matches!(k, MovementKind::Descend { .. })),
            50
        );
        assert_eq!(
            count_kind(&moves, |k| matches!(k, MovementKind::Parkour { .. })),
            36
        );
        assert_eq!(moves.len(), 106);
        assert!(moves.iter().all(|m| m.src() == POS && !m.is_valid()));
    }

    #[test]
    fn height_two_ascends_are_cardinal_only() {
        let moves = successors(POS, &AgentCapabilities::default());
        for m in moves
            .iter()
            .filter(|m| m.kind() == MovementKind::Ascend { height: 2 })
        {
            let (dx, dy, dz) = POS.delta_to(m.dest());
            assert_eq!(dy, 2);
            assert!(Cardinal::from_offset(dx, dz).is_some());
        }
    }

    #[test]
    fn descends_cover_every_fall_distance_and_straight_down() {
        let moves = successors(POS, &AgentCapabilities::default());
        for fall in 1..=MAX_FALL_DISTANCE {
            let kind = MovementKind::Descend {
                fall_distance: fall,
            };
            let dests: BTreeSet<_> = moves
                .iter()
                .filter(|m| m.kind() == kind)
                .map(|m| m.dest())
                .collect();
            assert_eq!(dests.len(), 5, "fall {fall}");
            assert!(dests.contains(&POS.down(fall)));
        }
    }

    #[test]
    fn minimal_capabilities_leave_straight_and_ascend() {
        let moves = successors(POS, &AgentCapabilities::minimal());
        assert_eq!(moves.len(), 4 + 4 + 4);
        assert!(moves.iter().all(|m| matches!(
            m.kind(),
            MovementKind::Straight | MovementKind::Ascend { .. }
        )));
    }

    #[test]
    fn each_flag_toggles_its_kind() {
        let no_parkour = AgentCapabilities {
            allow_parkour: false,
            ..AgentCapabilities::default()
        };
        assert_eq!(successors(POS, &no_parkour).len(), 106 - 36);

        let no_descend = AgentCapabilities {
            allow_descend: false,
            ..AgentCapabilities::default()
        };
        assert_eq!(successors(POS, &no_descend).len(), 106 - 50);

        let no_diagonal = AgentCapabilities {
            allow_diagonal: false,
            ..AgentCapabilities::default()
        };
        assert_eq!(successors(POS, &no_diagonal).len(), 106 - 8);
    }

    #[test]
    fn flying_gets_only_fly_moves() {
        let moves = successors(POS, &AgentCapabilities::flying());
        assert_eq!(moves.len(), 40);
        assert!(moves.iter().all(|m| m.kind() == MovementKind::Fly));

        let dests: BTreeSet<_> = moves.iter().map(|m| m.dest()).collect();
        assert_eq!(dests.len(), 40, "no duplicate destinations");
        assert!(!dests.contains(&POS));
        let unit = dests
            .iter()
            .filter(|d| {
                let (dx, dy, dz) = POS.delta_to(**d);
                dx.abs().max(dy.abs()).max(dz.abs()) == 1
            })
            .count();
        assert_eq!(unit, 26);
    }

    #[test]
    fn extended_hops_can_be_disabled() {
        let config = MovementConfig {
            capabilities: AgentCapabilities::flying(),
            extended_fly_hops: false,
        };
        let moves = MovementProvider::from_config(&config).successors(POS);
        assert_eq!(moves.len(), 26);
    }

    #[test]
    fn emission_order_is_deterministic() {
        let provider = MovementProvider::default();
        let a: Vec<_> = provider.successors(POS).iter().map(|m| (m.kind(), m.dest())).collect();
        let b: Vec<_> = provider.successors(POS).iter().map(|m| (m.kind(), m.dest())).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn flat_ground_valid_set() {
        let mut world = VoxelWorld::with_origin(VoxelCoord::new(-8, 50, -8), 16, 30, 16);
        world.fill(
            VoxelCoord::new(-8, 60, -8),
            VoxelCoord::new(7, 63, 7),
            BlockType::Stone,
        );
        let caps = AgentCapabilities::default();
        let ctx = MoveContext::new(&world, &caps);
        let valid: Vec<_> = MovementProvider::new(caps)
            .successors(POS)
            .iter_mut()
            .filter_map(|m| {
                if m.calculate(&ctx) {
                    Some((m.kind(), m.cost().unwrap_or(0.0)))
                } else {
                    None
                }
            })
            .collect();
        // On a flat plain only the 8 walking steps survive.
        assert_eq!(valid.len(), 8);
        assert!(valid.iter().all(|(kind, cost)| {
            matches!(kind, MovementKind::Straight | MovementKind::Diagonal) && *cost > 0.0
        }));
    }
}

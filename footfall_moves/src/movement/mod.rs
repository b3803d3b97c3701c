// Movement contract: one candidate edge between two lattice cells.
//
// A `Movement` pairs a `MovementKind` (the closed set of six ways an agent can
// get from one cell to another) with its source and destination, plus the
// cached result of the last `calculate()`: validity, cost, and the cells that
// were read to decide them.
//
// Each kind's validity predicate and cost formula lives in its own file and
// is dispatched by `match` from `calculate()`. The kinds share the recording
// `Probe` so the consulted-cell list is built the same way everywhere.
//
// Lifecycle: the successor generator (`provider.rs`) builds a fresh batch of
// unvalidated movements per expanded node; the consumer calls `calculate()`
// on each, drops the invalid ones, and orders the rest by `cost()`.
//
// **Equality.** Two movements are equal when their `(src, dest)` pair is
// equal, regardless of kind. A Straight step and a Descend that happen to
// share endpoints hash and compare the same, so any set or map keyed on
// `Movement` will conflate them. Use `same_edge()` when the kind matters.
//
// See also: `probe.rs` for the recording oracle wrapper, `provider.rs` for
// the candidate enumeration, `invalidation.rs` for the consumer-side cache
// that uses `positions_checked()`.
//
// **Critical constraint: no faults.** `calculate()` never panics and never
// returns an error. Missing world or agent context, or geometry that does not
// match the kind, all degrade to "invalid".

pub mod ascend;
pub mod descend;
pub mod diagonal;
pub mod fly;
pub mod parkour;
mod probe;
pub mod straight;

pub use probe::{CHECKED_INLINE, CheckedCells};

use crate::config::AgentCapabilities;
use crate::types::{Cardinal, VoxelCoord};
use crate::world::BlockOracle;
use probe::Probe;
use serde::Serialize;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Outcome of a single kind's evaluation: the edge cost, or a short reason
/// the edge is rejected (used for trace logging).
pub(crate) type Verdict = Result<f32, &'static str>;

// ---------------------------------------------------------------------------
// Kinds
// ---------------------------------------------------------------------------

/// The six movement kinds, with their kind-specific parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum MovementKind {
    /// Same-altitude cardinal step.
    Straight,
    /// Same-altitude step along both horizontal axes.
    Diagonal,
    /// Jump up `height` cells (1 or 2).
    Ascend { height: i32 },
    /// Walk off an edge and fall `fall_distance` cells (1..=10).
    Descend { fall_distance: i32 },
    /// Running jump across `gap_distance` cells (2..=4).
    Parkour { gap_distance: i32 },
    /// Free flight to any nearby cell.
    Fly,
}

impl MovementKind {
    /// Stable lowercase name for diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            MovementKind::Straight => "straight",
            MovementKind::Diagonal => "diagonal",
            MovementKind::Ascend { .. } => "ascend",
            MovementKind::Descend { .. } => "descend",
            MovementKind::Parkour { .. } => "parkour",
            MovementKind::Fly => "fly",
        }
    }
}

// ---------------------------------------------------------------------------
// Evaluation context
// ---------------------------------------------------------------------------

/// Everything `calculate()` may read: the world and the agent.
///
/// Either may be absent (world not loaded yet, agent not spawned); every
/// movement is then invalid.
pub struct MoveContext<'a, W: BlockOracle + ?Sized> {
    pub world: Option<&'a W>,
    pub agent: Option<&'a AgentCapabilities>,
}

impl<'a, W: BlockOracle + ?Sized> MoveContext<'a, W> {
    pub fn new(world: &'a W, agent: &'a AgentCapabilities) -> Self {
        Self {
            world: Some(world),
            agent: Some(agent),
        }
    }
}

impl<W: BlockOracle + ?Sized> Clone for MoveContext<'_, W> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<W: BlockOracle + ?Sized> Copy for MoveContext<'_, W> {}

// ---------------------------------------------------------------------------
// Movement
// ---------------------------------------------------------------------------

/// A candidate edge from `src` to `dest`, with the cached result of the last
/// `calculate()`. Serializes (including the consulted cells) for diagnostic
/// dumps of a search frontier.
#[derive(Clone, Debug, Serialize)]
pub struct Movement {
    kind: MovementKind,
    src: VoxelCoord,
    dest: VoxelCoord,
    /// Meaningful only while `valid` is true.
    cost: f32,
    valid: bool,
    /// Cells read by the last `calculate()`, first-read order, no repeats.
    checked: CheckedCells,
}

impl Movement {
    /// A movement of `kind` between two arbitrary cells. The kind's
    /// predicate rejects endpoints that do not fit it.
    pub fn new(kind: MovementKind, src: VoxelCoord, dest: VoxelCoord) -> Self {
        Self {
            kind,
            src,
            dest,
            cost: 0.0,
            valid: false,
            checked: CheckedCells::new(),
        }
    }

    pub fn straight(src: VoxelCoord, dir: Cardinal) -> Self {
        let (dx, dz) = dir.offset();
        Self::new(MovementKind::Straight, src, src.offset(dx, 0, dz))
    }

    pub fn diagonal(src: VoxelCoord, dx: i32, dz: i32) -> Self {
        Self::new(MovementKind::Diagonal, src, src.offset(dx, 0, dz))
    }

    /// Jump `height` cells up while moving `(dx, dz)` horizontally.
    pub fn ascend(src: VoxelCoord, dx: i32, dz: i32, height: i32) -> Self {
        Self::new(
            MovementKind::Ascend { height },
            src,
            src.offset(dx, height, dz),
        )
    }

    /// Step `(dx, dz)` and fall `fall_distance` cells. `(0, 0)` drops
    /// straight down.
    pub fn descend(src: VoxelCoord, dx: i32, dz: i32, fall_distance: i32) -> Self {
        Self::new(
            MovementKind::Descend { fall_distance },
            src,
            src.offset(dx, 0, dz).down(fall_distance),
        )
    }

    /// Jump `gap_distance` cells along `dir`, landing `dy` cells higher.
    pub fn parkour(src: VoxelCoord, dir: Cardinal, gap_distance: i32, dy: i32) -> Self {
        let (dx, dz) = dir.offset();
        Self::new(
            MovementKind::Parkour { gap_distance },
            src,
            src.offset(
                dx.saturating_mul(gap_distance),
                dy,
                dz.saturating_mul(gap_distance),
            ),
        )
    }

    pub fn fly(src: VoxelCoord, dest: VoxelCoord) -> Self {
        Self::new(MovementKind::Fly, src, dest)
    }

    /// Decide validity and cost against the current world and agent, caching
    /// the result. Returns the new validity.
    pub fn calculate<W: BlockOracle + ?Sized>(&mut self, ctx: &MoveContext<'_, W>) -> bool {
        self.valid = false;
        self.cost = 0.0;
        self.checked.clear();

        let (Some(world), Some(agent)) = (ctx.world, ctx.agent) else {
            tracing::warn!(
                kind = self.kind.name(),
                src = %self.src,
                world_loaded = ctx.world.is_some(),
                agent_present = ctx.agent.is_some(),
                "movement context unavailable"
            );
            return false;
        };

        let (src, dest) = (self.src, self.dest);
        let verdict = {
            let mut probe = Probe::new(world, &mut self.checked);
            match self.kind {
                MovementKind::Straight => straight::evaluate(&mut probe, src, dest),
                MovementKind::Diagonal => diagonal::evaluate(&mut probe, src, dest),
                MovementKind::Ascend { height } => {
                    ascend::evaluate(&mut probe, agent, src, dest, height)
                }
                MovementKind::Descend { fall_distance } => {
                    descend::evaluate(&mut probe, src, dest, fall_distance)
                }
                MovementKind::Parkour { gap_distance } => {
                    parkour::evaluate(&mut probe, src, dest, gap_distance)
                }
                MovementKind::Fly => fly::evaluate(&mut probe, agent, src, dest),
            }
        };

        match verdict {
            Ok(cost) if cost > 0.0 => {
                self.cost = cost;
                self.valid = true;
            }
            Ok(cost) => {
                tracing::trace!(kind = self.kind.name(), %src, %dest, cost, "non-positive cost");
            }
            Err(reason) => {
                tracing::trace!(kind = self.kind.name(), %src, %dest, reason, "rejected");
            }
        }
        self.valid
    }

    /// Edge cost, if the last `calculate()` found the movement valid.
    pub fn cost(&self) -> Option<f32> {
        self.valid.then_some(self.cost)
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn src(&self) -> VoxelCoord {
        self.src
    }

    pub fn dest(&self) -> VoxelCoord {
        self.dest
    }

    pub fn kind(&self) -> MovementKind {
        self.kind
    }

    pub fn kind_name(&self) -> &'static str {
        self.kind.name()
    }

    /// Every cell the last `calculate()` read. If none of them changes, a
    /// repeat `calculate()` returns the same answer.
    pub fn positions_checked(&self) -> &[VoxelCoord] {
        &self.checked
    }

    /// Equality that also distinguishes the kind (and its parameters).
    pub fn same_edge(&self, other: &Movement) -> bool {
        self == other && self.kind == other.kind
    }
}

impl PartialEq for Movement {
    fn eq(&self, other: &Self) -> bool {
        self.src == other.src && self.dest == other.dest
    }
}

impl Eq for Movement {}

impl Hash for Movement {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.src.hash(state);
        self.dest.hash(state);
    }
}

impl fmt::Display for Movement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} -> {}", self.kind.name(), self.src, self.dest)
    }
}

// ---------------------------------------------------------------------------
// Test fixtures shared by the kind modules
// ---------------------------------------------------------------------------

// Agent capabilities, physical limits, and traversal costs.
//
// `AgentCapabilities` is the per-agent switchboard the successor generator
// reads (flight, diagonal steps, parkour, descending). It is wrapped in a
// `MovementConfig` that can be loaded from JSON at startup, the same way the
// rest of the data-driven tuning is handled.
//
// The body dimensions and the cost table are fixed constants rather than
// config: a search that mixes edge weights from differently tuned configs
// would compare incomparable costs, and the validity predicates are written
// against a 2-cell-tall body.
//
// See also: `movement/` where every kind reads these limits and costs,
// `provider.rs` which turns capabilities into a candidate list,
// `error.rs` for `ConfigError`.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

// ---------------------------------------------------------------------------
// Fixed body limits
// ---------------------------------------------------------------------------

/// Height of the agent's hitbox in cells (feet cell + head cell).
pub const HITBOX_HEIGHT: i32 = 2;

/// Highest single-step ascend.
pub const MAX_JUMP_HEIGHT: i32 = 2;

/// Longest fall a descend may cover.
pub const MAX_FALL_DISTANCE: i32 = 10;

/// Shortest parkour gap (horizontal distance from source to landing).
pub const MIN_PARKOUR_GAP: i32 = 2;

/// Longest parkour gap.
pub const MAX_PARKOUR_GAP: i32 = 4;

// ---------------------------------------------------------------------------
// Fixed cost table
// ---------------------------------------------------------------------------

pub const STRAIGHT_COST: f32 = 1.0;

/// √2, truncated. Fixed so every diagonal edge weighs exactly the same.
pub const DIAGONAL_COST: f32 = 1.414;

pub const ASCEND_BASE_COST: f32 = 1.3;
pub const ASCEND_COST_PER_EXTRA_HEIGHT: f32 = 1.0;

pub const DESCEND_BASE_COST: f32 = 1.0;
pub const DESCEND_COST_PER_BLOCK: f32 = 0.1;

pub const PARKOUR_BASE_COST: f32 = 2.0;
pub const PARKOUR_COST_PER_BLOCK: f32 = 0.5;

pub const FLY_STRAIGHT_COST: f32 = 1.0;
pub const FLY_DIAGONAL_COST: f32 = 1.4;
pub const FLY_COST_PER_VERTICAL_BLOCK: f32 = 0.2;

// ---------------------------------------------------------------------------
// Capabilities
// ---------------------------------------------------------------------------

/// What the agent is able and allowed to do.
///
/// Flight overrides everything else: a flying agent only gets fly moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentCapabilities {
    pub can_fly: bool,
    pub allow_diagonal: bool,
    pub allow_parkour: bool,
    pub allow_descend: bool,
}

impl AgentCapabilities {
    /// A grounded agent with every optional movement kind disabled: only
    /// straight steps and ascends remain.
    pub const fn minimal() -> Self {
        Self {
            can_fly: false,
            allow_diagonal: false,
            allow_parkour: false,
            allow_descend: false,
        }
    }

    /// A flying agent.
    pub const fn flying() -> Self {
        Self {
            can_fly: true,
            ..Self::grounded()
        }
    }

    /// The default grounded agent: diagonal, parkour, and descend enabled.
    pub const fn grounded() -> Self {
        Self {
            can_fly: false,
            allow_diagonal: true,
            allow_parkour: true,
            allow_descend: true,
        }
    }
}

impl Default for AgentCapabilities {
    fn default() -> Self {
        Self::grounded()
    }
}

// ---------------------------------------------------------------------------
// Top-level config
// ---------------------------------------------------------------------------

/// Movement configuration. Loaded from JSON, never mutated during a search.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementConfig {
    /// Capabilities of the agent the successors are generated for.
    pub capabilities: AgentCapabilities,

    /// Emit the longer fly hops (±2 cells) in addition to the 26 unit
    /// neighbors. Keeps open-air search shallow; disable to restrict flight
    /// to unit steps.
    pub extended_fly_hops: bool,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            capabilities: AgentCapabilities::default(),
            extended_fly_hops: true,
        }
    }
}

impl MovementConfig {
    /// Parse a config from a JSON string. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config = serde_json::from_str(json)?;
        Ok(config)
    }

    /// Read and parse a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json_str(&text)?;
        tracing::debug!(path = %path.as_ref().display(), ?config, "loaded movement config");
        Ok(config)
    }
}

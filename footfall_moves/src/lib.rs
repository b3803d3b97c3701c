// footfall_moves: movement validity and cost for voxel pathfinding.
//
// This crate decides whether an agent can get from one lattice cell to
// another in a single move, and what that move costs. A search (A*, Dijkstra,
// or anything else) asks the provider for candidate moves out of a cell,
// validates each against a read-only block oracle, and uses the costs as edge
// weights. The search itself lives outside this crate.
//
// Module overview:
// - `types.rs`:        VoxelCoord, Cardinal directions, BlockType.
// - `world.rs`:        BlockOracle trait + VoxelWorld, a dense grid implementing it.
// - `config.rs`:       Physical limits, cost constants, AgentCapabilities, MovementConfig.
// - `error.rs`:        ConfigError for config loading.
// - `movement/`:       Movement, MovementKind, MoveContext, one file per kind.
// - `provider.rs`:     MovementProvider: candidate successors of a cell.
// - `invalidation.rs`: SuccessorCache: cached successors with per-cell eviction.
//
// **Critical constraint: determinism.** Validity and cost are pure functions
// of the cells read, the agent's capabilities, and the movement's endpoints.
// No `HashMap` in any iteration path, no system time, no randomness. Use
// `BTreeMap` for ordered collections.

pub mod config;
pub mod error;
pub mod invalidation;
pub mod movement;
pub mod provider;
pub mod types;
pub mod world;

pub use config::{AgentCapabilities, MovementConfig};
pub use invalidation::SuccessorCache;
pub use movement::{MoveContext, Movement, MovementKind};
pub use provider::MovementProvider;
pub use types::{BlockType, Cardinal, VoxelCoord};
pub use world::{BlockOracle, VoxelWorld};

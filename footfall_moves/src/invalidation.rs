// Successor cache with dirty tracking.
//
// Expanding the same cell twice in one search (or across searches on a
// static world) repeats every oracle query the candidates make. The cache
// keeps the validated successors of each expanded cell and a reverse index
// from every cell any candidate read to the sources whose answer depended on
// it. When the world changes a cell, `invalidate()` evicts exactly those
// sources.
//
// Dependencies are recorded for every candidate, valid or not: a blocked
// step becomes walkable when the block in front of it is removed, so the
// cells read by a rejected candidate matter as much as those read by an
// accepted one.
//
// Nothing is cached when the context lacks a world or an agent. Those
// results depend on neither, so no cell change could evict them.
//
// See also: `provider.rs` for the candidate enumeration, `movement/mod.rs`
// for `positions_checked()`.
//
// **Critical constraint: determinism.** Ordered maps and sets only, so
// iteration and eviction order never depend on hashing.

use crate::movement::{MoveContext, Movement};
use crate::provider::MovementProvider;
use crate::types::VoxelCoord;
use crate::world::BlockOracle;
use std::collections::{BTreeMap, BTreeSet};

#[derive(Clone, Debug, Default)]
struct CacheEntry {
    /// Validated successors, in provider emission order.
    moves: Vec<Movement>,
    /// Union of `positions_checked()` over every candidate, valid or not.
    reads: BTreeSet<VoxelCoord>,
}

/// Validated successors per source cell, evicted by cell changes.
#[derive(Clone, Debug, Default)]
pub struct SuccessorCache {
    entries: BTreeMap<VoxelCoord, CacheEntry>,
    /// Read cell -> sources whose entry read it.
    dependents: BTreeMap<VoxelCoord, BTreeSet<VoxelCoord>>,
}

impl SuccessorCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Valid successors of `pos`, computing and caching them on a miss.
    ///
    /// The cache is keyed on `pos` alone. Callers that switch provider or
    /// agent between calls must `clear()` first.
    pub fn get_or_compute<W: BlockOracle + ?Sized>(
        &mut self,
        pos: VoxelCoord,
        provider: &MovementProvider,
        ctx: &MoveContext<'_, W>,
    ) -> &[Movement] {
        if ctx.world.is_none() || ctx.agent.is_none() {
            return &[];
        }
        if !self.entries.contains_key(&pos) {
            let entry = Self::compute(pos, provider, ctx);
            for &cell in &entry.reads {
                self.dependents.entry(cell).or_default().insert(pos);
            }
            self.entries.insert(pos, entry);
        }
        self.entries
            .get(&pos)
            .map(|entry| entry.moves.as_slice())
            .unwrap_or(&[])
    }

    fn compute<W: BlockOracle + ?Sized>(
        pos: VoxelCoord,
        provider: &MovementProvider,
        ctx: &MoveContext<'_, W>,
    ) -> CacheEntry {
        let mut entry = CacheEntry::default();
        for mut m in provider.successors(pos) {
            let valid = m.calculate(ctx);
            entry.reads.extend(m.positions_checked().iter().copied());
            if valid {
                entry.moves.push(m);
            }
        }
        entry
    }

    /// Evict every cached source that read `cell`. Returns how many were
    /// evicted.
    pub fn invalidate(&mut self, cell: VoxelCoord) -> usize {
        let Some(sources) = self.dependents.remove(&cell) else {
            return 0;
        };
        let mut evicted = 0;
        for src in sources {
            let Some(entry) = self.entries.remove(&src) else {
                continue;
            };
            evicted += 1;
            for read in entry.reads {
                if read == cell {
                    continue;
                }
                if let Some(set) = self.dependents.get_mut(&read) {
                    set.remove(&src);
                    if set.is_empty() {
                        self.dependents.remove(&read);
                    }
                }
            }
        }
        tracing::debug!(%cell, evicted, "invalidated successor cache");
        evicted
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.dependents.clear();
    }

    /// Number of cached source cells.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, pos: VoxelCoord) -> bool {
        self.entries.contains_key(&pos)
    }
}

//! Serial phase of one relaxation round.
//!
//! The local engine and the master coordinator differ only in how the
//! per-shard minimum candidates are produced (worker threads vs follower
//! exchanges). The mutation sequence between scatters is shared here so
//! both variants settle identical distances for every cell.

use crate::core::{Cell, Direction};
use crate::field::TerrainField;
use crate::search::{DistanceMap, FrontierShards};

/// Canonical search state owned by the coordinating thread.
#[derive(Clone, Debug)]
pub(crate) struct SearchState {
    pub dist: DistanceMap,
    pub frontier: FrontierShards,
}

impl SearchState {
    pub fn new(rows: usize, cols: usize, shard_count: usize) -> Self {
        Self {
            dist: DistanceMap::new(rows, cols),
            frontier: FrontierShards::new(shard_count, rows, cols),
        }
    }

    /// Seed the search at the destination: distance zero, first shard.
    pub fn seed(&mut self, dest: Cell) {
        self.dist.seed(dest);
        self.frontier.insert(dest);
    }
}

/// Pick the round's global minimum from the gathered per-shard candidates.
///
/// Candidates are compared by their canonical distance; the lowest-indexed
/// candidate wins ties. Returns `None` when every candidate is absent,
/// which means the frontier is exhausted.
pub(crate) fn pick_global_min(
    dist: &DistanceMap,
    candidates: &[Option<Cell>],
) -> Option<(Cell, usize)> {
    let mut best: Option<(Cell, usize, f32)> = None;
    for (shard, candidate) in candidates.iter().enumerate() {
        let Some(cell) = candidate else { continue };
        let Some(d) = dist.distance(*cell) else {
            debug_assert!(false, "candidate without a canonical distance");
            continue;
        };
        match best {
            Some((_, _, b)) if d >= b => {}
            _ => best = Some((*cell, shard, d)),
        }
    }
    best.map(|(cell, shard, _)| (cell, shard))
}

/// Relax all 8 neighbors of a just-settled cell.
///
/// Valid, unsettled neighbors whose tentative distance improves are
/// recorded with `chosen` as parent; every valid unsettled neighbor is
/// (re-)offered to the frontier, which deduplicates. When `deltas` is
/// given, each touched neighbor and its post-relaxation distance is pushed
/// for the follower broadcast.
pub(crate) fn relax_neighbors(
    field: &TerrainField,
    state: &mut SearchState,
    chosen: Cell,
    mut deltas: Option<&mut Vec<(Cell, f32)>>,
) {
    let Some(base) = state.dist.distance(chosen) else {
        debug_assert!(false, "relaxing from a cell without a distance");
        return;
    };
    for dir in Direction::ALL {
        let Some(cost) = field.approach_cost(chosen, dir) else {
            continue;
        };
        let neighbor = chosen.neighbor(dir);
        if state.dist.is_settled(neighbor) {
            continue;
        }
        state.dist.relax(neighbor, base + cost, chosen);
        state.frontier.insert(neighbor);
        if let Some(deltas) = deltas.as_mut() {
            if let Some(d) = state.dist.distance(neighbor) {
                deltas.push((neighbor, d));
            }
        }
    }
}

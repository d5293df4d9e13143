//! Round exchange messages between master and followers.
//!
//! One request/response pair per follower per round. The request replays
//! the previous round's outcome so every follower applies the identical
//! update sequence; replicas stay consistent purely by determinism, so no
//! message may be dropped or reordered.

use serde::{Deserialize, Serialize};

use crate::core::Cell;

/// One relaxation delta: a cell and its canonical distance after the
/// round's relax step.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DistUpdate {
    /// The touched cell.
    pub cell: Cell,
    /// Canonical distance after relaxation.
    pub dist: f32,
}

/// Master -> follower: the previous round's settled cell (absent on the
/// first round) and the frontier cells its relaxation touched.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RoundRequest {
    /// Cell settled in the previous round, if any.
    pub settled: Option<Cell>,
    /// Relaxation deltas of the previous round, in relax order.
    pub updates: Vec<DistUpdate>,
}

/// Follower -> master: the local minimum of the follower's shard, absent
/// when the shard is empty.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundResponse {
    /// Local minimum candidate.
    pub candidate: Option<Cell>,
}

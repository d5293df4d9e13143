//! Follower-side replica of the search state.
//!
//! A follower owns a replica of the distance map and the full shard set,
//! kept consistent with the master purely by applying every round message
//! in order with the same deterministic insertion policy the master uses.
//! It answers minimum queries for exactly one shard index.

use tracing::debug;

use crate::cluster::{RoundRequest, RoundResponse};
use crate::core::Cell;
use crate::error::{Error, Result};
use crate::search::{DistanceMap, FrontierShards};

/// Replicated search state for one follower.
#[derive(Clone, Debug)]
pub struct FollowerState {
    replica: DistanceMap,
    shards: FrontierShards,
    shard_index: usize,
}

impl FollowerState {
    /// Create a follower replica for a `rows` x `cols` grid.
    ///
    /// `shard_count` is the cluster's follower count and `shard_index` is
    /// this follower's own shard. The replica is seeded at the destination
    /// exactly as the master seeds its canonical state.
    pub fn new(
        rows: usize,
        cols: usize,
        shard_count: usize,
        shard_index: usize,
        dest: Cell,
    ) -> Result<Self> {
        if shard_index >= shard_count {
            return Err(Error::Config(format!(
                "shard index {shard_index} out of range for {shard_count} shards"
            )));
        }
        if dest.row < 0
            || dest.col < 0
            || dest.row as usize >= rows
            || dest.col as usize >= cols
        {
            return Err(Error::InvalidEndpoint(dest));
        }
        let mut replica = DistanceMap::new(rows, cols);
        let mut shards = FrontierShards::new(shard_count, rows, cols);
        replica.seed(dest);
        shards.insert(dest);
        Ok(Self {
            replica,
            shards,
            shard_index,
        })
    }

    /// This follower's shard index.
    #[inline]
    pub fn shard_index(&self) -> usize {
        self.shard_index
    }

    /// Apply one round message and answer with this shard's local minimum.
    ///
    /// Ordering matters: the settled cell leaves the shard set first, then
    /// the deltas are applied (distance sync + load-balanced insert), so
    /// the shard layout evolves exactly as the master's canonical one did.
    pub fn apply(&mut self, request: &RoundRequest) -> RoundResponse {
        if let Some(cell) = request.settled {
            if let Some(shard) = self.shards.shard_of(cell) {
                self.shards.remove(cell, shard);
            }
            self.replica.settle(cell);
        }
        for update in &request.updates {
            self.replica.sync(update.cell, update.dist);
            self.shards.insert(update.cell);
        }

        let candidate = self.shards.local_min(self.shard_index, &self.replica);
        debug!(
            shard = self.shard_index,
            members = self.shards.shard_len(self.shard_index),
            ?candidate,
            "round applied"
        );
        RoundResponse { candidate }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cluster::DistUpdate;

    #[test]
    fn rejects_out_of_range_shard_index() {
        let err = FollowerState::new(4, 4, 2, 2, Cell::new(0, 0)).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn first_round_answers_the_seeded_destination() {
        let dest = Cell::new(2, 2);
        let mut follower = FollowerState::new(4, 4, 2, 0, dest).unwrap();
        let response = follower.apply(&RoundRequest::default());
        assert_eq!(response.candidate, Some(dest));

        // The other shard starts empty.
        let mut other = FollowerState::new(4, 4, 2, 1, dest).unwrap();
        assert_eq!(other.apply(&RoundRequest::default()).candidate, None);
    }

    #[test]
    fn settle_and_deltas_move_the_shard_set_forward() {
        let dest = Cell::new(0, 0);
        let mut follower = FollowerState::new(2, 2, 1, 0, dest).unwrap();
        follower.apply(&RoundRequest::default());

        let response = follower.apply(&RoundRequest {
            settled: Some(dest),
            updates: vec![
                DistUpdate {
                    cell: Cell::new(0, 1),
                    dist: 10.0,
                },
                DistUpdate {
                    cell: Cell::new(1, 1),
                    dist: 12.0,
                },
            ],
        });
        // Destination left the frontier; the cheaper delta wins the scan.
        assert_eq!(response.candidate, Some(Cell::new(0, 1)));
    }
}

//! Single-process relaxation engine with sharded worker threads.
//!
//! Each round fans the per-shard minimum scan out across a pool of
//! persistent worker threads, joins them at a barrier, then applies the
//! serial settle/relax phase on the coordinating thread. Workers only ever
//! hold the read lock on the shared state and the coordinator only takes
//! the write lock after every worker has answered, so no phase overlaps a
//! mutation with a concurrent read.

use std::sync::{Arc, RwLock};
use std::thread;

use crossbeam_channel::{unbounded, Receiver, Sender};
use tracing::{debug, info};

use crate::core::Cell;
use crate::error::{Error, Result};
use crate::field::TerrainField;
use crate::search::round::{pick_global_min, relax_neighbors, SearchState};
use crate::search::DistanceMap;

/// Result of one completed search.
#[derive(Debug)]
pub struct SearchReport {
    /// The filled distance map, complete for every cell at or below the
    /// source's eventual distance.
    pub distances: DistanceMap,
    /// Rounds executed (one settle each, except the final empty round).
    pub rounds: u64,
    /// Cells settled.
    pub settled: usize,
    /// Whether the source cell was settled. False means the frontier
    /// drained first: the source is unreachable from the destination.
    pub reached: bool,
}

/// Destination-seeded relaxation search over a terrain field.
pub struct RelaxationEngine<'f> {
    field: &'f TerrainField,
    workers: usize,
}

impl<'f> RelaxationEngine<'f> {
    /// Create an engine with the given worker (= shard) count.
    pub fn new(field: &'f TerrainField, workers: usize) -> Self {
        Self {
            field,
            workers: workers.max(1),
        }
    }

    /// Run one search from `source` to `dest` to completion.
    ///
    /// The search expands outward from the destination and stops as soon as
    /// the source is settled, or when the frontier drains without reaching
    /// it (reported, not an error - callers decide what an unreachable
    /// endpoint means for them).
    pub fn run(&self, source: Cell, dest: Cell) -> Result<SearchReport> {
        for endpoint in [source, dest] {
            if !self.field.is_valid(endpoint) {
                return Err(Error::InvalidEndpoint(endpoint));
            }
        }

        let (rows, cols) = self.field.bounds();
        let mut state = SearchState::new(rows, cols, self.workers);
        state.seed(dest);
        let state = Arc::new(RwLock::new(state));

        info!(
            rows,
            cols,
            workers = self.workers,
            %source,
            %dest,
            "starting sharded relaxation search"
        );

        let (result_tx, result_rx) = unbounded();
        let mut round_txs = Vec::with_capacity(self.workers);
        let mut handles = Vec::with_capacity(self.workers);
        for shard in 0..self.workers {
            let (tx, rx) = unbounded::<()>();
            round_txs.push(tx);
            let state = Arc::clone(&state);
            let results = result_tx.clone();
            let handle = thread::Builder::new()
                .name(format!("shard-{shard}"))
                .spawn(move || shard_worker(shard, state, rx, results))
                .expect("failed to spawn shard worker");
            handles.push(handle);
        }
        drop(result_tx);

        let mut rounds = 0u64;
        let mut settled = 0usize;
        let mut reached = false;
        loop {
            // Scatter: every worker scans its shard against the state
            // snapshot; the collect below is the barrier.
            for tx in &round_txs {
                tx.send(()).expect("shard worker exited early");
            }
            let mut candidates = vec![None; self.workers];
            for _ in 0..self.workers {
                let (shard, candidate) =
                    result_rx.recv().expect("shard worker exited early");
                candidates[shard] = candidate;
            }
            rounds += 1;

            let mut st = state.write().expect("search state lock poisoned");
            let Some((chosen, shard)) = pick_global_min(&st.dist, &candidates) else {
                break;
            };
            st.frontier.remove(chosen, shard);
            st.dist.settle(chosen);
            settled += 1;
            if chosen == source {
                reached = true;
                break;
            }
            relax_neighbors(self.field, &mut st, chosen, None);

            if settled % 100_000 == 0 {
                debug!(settled, frontier = st.frontier.len(), "search progress");
            }
        }

        // Release the pool; workers exit when their round channel drops.
        drop(round_txs);
        for handle in handles {
            handle.join().expect("shard worker panicked");
        }

        let state = Arc::try_unwrap(state)
            .expect("worker still holds the search state")
            .into_inner()
            .expect("search state lock poisoned");

        info!(rounds, settled, reached, "search finished");
        Ok(SearchReport {
            distances: state.dist,
            rounds,
            settled,
            reached,
        })
    }
}

/// Worker loop: on every round signal, scan one shard for its local
/// minimum. Read-only by construction.
fn shard_worker(
    shard: usize,
    state: Arc<RwLock<SearchState>>,
    rounds: Receiver<()>,
    results: Sender<(usize, Option<Cell>)>,
) {
    while rounds.recv().is_ok() {
        let candidate = {
            let st = state.read().expect("search state lock poisoned");
            st.frontier.local_min(shard, &st.dist)
        };
        if results.send((shard, candidate)).is_err() {
            break;
        }
    }
}

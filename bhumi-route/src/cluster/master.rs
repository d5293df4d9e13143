//! Master coordinator for the distributed search.
//!
//! The master owns the canonical distance map and frontier and delegates
//! each round's per-shard minimum scan to its followers, one synchronous
//! exchange per follower per round. The shard count is the follower count.
//! Any transport failure aborts the entire search; there is no retry and
//! no partial degradation.

use std::thread;

use tracing::{debug, info};

use crate::cluster::{DistUpdate, RoundRequest, RoundResponse};
use crate::core::Cell;
use crate::error::{Error, Result};
use crate::field::TerrainField;
use crate::search::round::{pick_global_min, relax_neighbors, SearchState};
use crate::search::{CellStatus, SearchReport};

use super::FollowerState;

/// One follower's request/response channel.
///
/// The network transport lives behind this trait so the coordinator can be
/// exercised with in-process followers as well as TCP links.
pub trait FollowerLink: Send {
    /// Run one round exchange. Implementations must be synchronous and
    /// bounded in time; an expired deadline is a transport error.
    fn exchange(&mut self, request: &RoundRequest) -> Result<RoundResponse>;
}

/// In-process follower, for tests and single-machine clusters.
pub struct LocalFollowerLink {
    state: FollowerState,
}

impl LocalFollowerLink {
    /// Wrap a follower replica as a link.
    pub fn new(state: FollowerState) -> Self {
        Self { state }
    }
}

impl FollowerLink for LocalFollowerLink {
    fn exchange(&mut self, request: &RoundRequest) -> Result<RoundResponse> {
        Ok(self.state.apply(request))
    }
}

/// Coordinator that drives one distributed search.
pub struct MasterCoordinator<'f> {
    field: &'f TerrainField,
    links: Vec<Box<dyn FollowerLink>>,
}

impl<'f> MasterCoordinator<'f> {
    /// Create a coordinator over the given follower links.
    pub fn new(field: &'f TerrainField, links: Vec<Box<dyn FollowerLink>>) -> Result<Self> {
        if links.is_empty() {
            return Err(Error::Config("a search cluster needs at least one follower".into()));
        }
        Ok(Self { field, links })
    }

    /// Run one search from `source` to `dest` to completion.
    pub fn run(&mut self, source: Cell, dest: Cell) -> Result<SearchReport> {
        for endpoint in [source, dest] {
            if !self.field.is_valid(endpoint) {
                return Err(Error::InvalidEndpoint(endpoint));
            }
        }

        let (rows, cols) = self.field.bounds();
        let followers = self.links.len();
        let mut state = SearchState::new(rows, cols, followers);
        state.seed(dest);

        info!(rows, cols, followers, %source, %dest, "starting distributed search");

        let mut request = RoundRequest::default();
        let mut rounds = 0u64;
        let mut settled = 0usize;
        let mut reached = false;
        loop {
            let responses = scatter(&mut self.links, &request)?;
            rounds += 1;

            let mut candidates = Vec::with_capacity(followers);
            for response in &responses {
                if let Some(cell) = response.candidate {
                    if !matches!(state.dist.status(cell), CellStatus::Open(_)) {
                        return Err(Error::Protocol(format!(
                            "follower candidate {cell} is not an open cell"
                        )));
                    }
                }
                candidates.push(response.candidate);
            }

            let Some((chosen, shard)) = pick_global_min(&state.dist, &candidates) else {
                break;
            };
            state.frontier.remove(chosen, shard);
            state.dist.settle(chosen);
            settled += 1;
            if chosen == source {
                reached = true;
                break;
            }

            let mut deltas = Vec::new();
            relax_neighbors(self.field, &mut state, chosen, Some(&mut deltas));
            request = RoundRequest {
                settled: Some(chosen),
                updates: deltas
                    .into_iter()
                    .map(|(cell, dist)| DistUpdate { cell, dist })
                    .collect(),
            };

            if settled % 100_000 == 0 {
                debug!(settled, frontier = state.frontier.len(), "search progress");
            }
        }

        info!(rounds, settled, reached, "distributed search finished");
        Ok(SearchReport {
            distances: state.dist,
            rounds,
            settled,
            reached,
        })
    }
}

/// Fan one request out to every follower and gather all responses.
///
/// Exchanges run on scoped threads so the round's latency is the slowest
/// follower's, not the sum. The first error wins and fails the search.
fn scatter(
    links: &mut [Box<dyn FollowerLink>],
    request: &RoundRequest,
) -> Result<Vec<RoundResponse>> {
    let results: Vec<Result<RoundResponse>> = thread::scope(|scope| {
        let handles: Vec<_> = links
            .iter_mut()
            .map(|link| scope.spawn(move || link.exchange(request)))
            .collect();
        handles
            .into_iter()
            .map(|handle| {
                handle
                    .join()
                    .unwrap_or_else(|_| Err(Error::Protocol("follower exchange panicked".into())))
            })
            .collect()
    });
    results.into_iter().collect()
}

//! Full-grid relaxation solver.
//!
//! A slow reference solver: instead of frontier selection it sweeps every
//! reached cell each pass and relaxes all of its neighbors, repeating until
//! a pass records no update. Useful as an oracle for the round-based
//! engines and as a fallback when shard scheduling is not wanted.

use tracing::info;

use crate::core::{Cell, Direction};
use crate::error::{Error, Result};
use crate::field::TerrainField;
use crate::search::DistanceMap;

/// Relax the whole grid to a fixpoint from `dest`.
///
/// Returns the completed distance map; every cell reachable from the
/// destination ends up with its exact distance and parent.
pub fn sweep(field: &TerrainField, dest: Cell) -> Result<DistanceMap> {
    if !field.is_valid(dest) {
        return Err(Error::InvalidEndpoint(dest));
    }
    let (rows, cols) = field.bounds();
    let mut dist = DistanceMap::new(rows, cols);
    dist.seed(dest);

    let mut passes = 0u64;
    loop {
        let mut changed = false;
        for row in 0..rows as i32 {
            for col in 0..cols as i32 {
                let cell = Cell::new(row, col);
                if !field.is_valid(cell) {
                    continue;
                }
                let Some(base) = dist.distance(cell) else {
                    continue;
                };
                for dir in Direction::ALL {
                    let Some(cost) = field.approach_cost(cell, dir) else {
                        continue;
                    };
                    changed |= dist.relax(cell.neighbor(dir), base + cost, cell);
                }
            }
        }
        passes += 1;
        if !changed {
            break;
        }
    }

    info!(passes, "full-grid sweep reached fixpoint");
    Ok(dist)
}

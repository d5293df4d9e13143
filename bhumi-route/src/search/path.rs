//! Route reconstruction over a completed distance map.

use crate::core::Cell;
use crate::error::{Error, Result};
use crate::search::DistanceMap;

/// An ordered route from source to destination.
#[derive(Clone, Debug)]
pub struct Route {
    /// Cells from the source to the destination, inclusive.
    pub cells: Vec<Cell>,
    /// Total traversal cost: the source's distance to the destination.
    pub total_cost: f32,
}

/// Walk the parent chain recorded during relaxation from `source` back to
/// `dest`.
///
/// An unreached source means the frontier drained without touching it:
/// reported as a no-route outcome, never a hang. Parents always point at a
/// strictly closer cell, so the walk terminates.
pub fn reconstruct(dist: &DistanceMap, source: Cell, dest: Cell) -> Result<Route> {
    let Some(total_cost) = dist.distance(source) else {
        return Err(Error::NoRoute {
            from: source,
            to: dest,
        });
    };

    let mut cells = vec![source];
    let mut current = source;
    while current != dest {
        let Some(next) = dist.parent(current) else {
            // A reached cell with no parent can only be the seeded
            // destination; anywhere else the chain is broken.
            return Err(Error::NoRoute {
                from: source,
                to: dest,
            });
        };
        cells.push(next);
        current = next;
    }
    Ok(Route { cells, total_cost })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn follows_the_parent_chain_to_the_destination() {
        let mut dist = DistanceMap::new(3, 3);
        let dest = Cell::new(2, 2);
        dist.seed(dest);
        dist.relax(Cell::new(1, 1), 10.0, dest);
        dist.relax(Cell::new(0, 0), 20.0, Cell::new(1, 1));

        let route = reconstruct(&dist, Cell::new(0, 0), dest).unwrap();
        assert_eq!(
            route.cells,
            vec![Cell::new(0, 0), Cell::new(1, 1), Cell::new(2, 2)]
        );
        assert_eq!(route.total_cost, 20.0);
    }

    #[test]
    fn unreached_source_is_a_no_route_outcome() {
        let mut dist = DistanceMap::new(3, 3);
        dist.seed(Cell::new(2, 2));
        let err = reconstruct(&dist, Cell::new(0, 0), Cell::new(2, 2)).unwrap_err();
        assert!(matches!(err, Error::NoRoute { .. }));
    }

    #[test]
    fn source_equal_to_destination_is_a_single_cell_route() {
        let mut dist = DistanceMap::new(2, 2);
        dist.seed(Cell::new(1, 1));
        let route = reconstruct(&dist, Cell::new(1, 1), Cell::new(1, 1)).unwrap();
        assert_eq!(route.cells, vec![Cell::new(1, 1)]);
        assert_eq!(route.total_cost, 0.0);
    }
}

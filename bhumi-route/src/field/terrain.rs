//! Traversability field: validity and directed edge costs over a height
//! grid and an obstacle mask.

use crate::config::CostConfig;
use crate::core::{Cell, Direction};
use crate::error::{Error, Result};
use crate::field::HeightMap;

/// Per-cell obstacle flags, row-major.
#[derive(Clone, Debug)]
pub struct ObstacleMask {
    blocked: Vec<bool>,
    stride: usize,
}

impl ObstacleMask {
    /// Create an all-clear mask of the given dimensions.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            blocked: vec![false; rows * cols],
            stride: cols,
        }
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        if self.stride == 0 {
            0
        } else {
            self.blocked.len() / self.stride
        }
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.stride
    }

    /// Mark or clear a cell as an obstacle.
    #[inline]
    pub fn set_blocked(&mut self, row: usize, col: usize, blocked: bool) {
        debug_assert!(col < self.stride);
        self.blocked[row * self.stride + col] = blocked;
    }

    /// Whether the cell is an obstacle.
    #[inline]
    pub fn is_blocked(&self, row: usize, col: usize) -> bool {
        debug_assert!(col < self.stride);
        self.blocked[row * self.stride + col]
    }
}

/// Immutable traversability field for one search run.
///
/// Wraps the height grid and the obstacle mask and answers the two queries
/// the search needs: cell validity and the directed cost of entering a cell
/// from one of its 8 neighbors. Entering a higher cell is penalized in
/// proportion to the climb; entering a lower or equal cell costs the base
/// cost exactly, so the traversal graph is directed.
#[derive(Clone, Debug)]
pub struct TerrainField {
    heights: HeightMap,
    mask: ObstacleMask,
    cost: CostConfig,
}

impl TerrainField {
    /// Build a field from a height grid and an obstacle mask.
    ///
    /// The two inputs must have exactly the same dimensions; a mismatch is
    /// a fatal precondition violation, reported before any search begins.
    pub fn new(heights: HeightMap, mask: ObstacleMask, cost: CostConfig) -> Result<Self> {
        heights.validate()?;
        if heights.rows() != mask.rows() || heights.cols() != mask.cols() {
            return Err(Error::DimensionMismatch {
                height_rows: heights.rows(),
                height_cols: heights.cols(),
                mask_rows: mask.rows(),
                mask_cols: mask.cols(),
            });
        }
        Ok(Self {
            heights,
            mask,
            cost,
        })
    }

    /// Grid dimensions as (rows, cols).
    #[inline]
    pub fn bounds(&self) -> (usize, usize) {
        (self.heights.rows(), self.heights.cols())
    }

    /// Whether the cell is inside the grid and not an obstacle.
    #[inline]
    pub fn is_valid(&self, cell: Cell) -> bool {
        if cell.row < 0 || cell.col < 0 {
            return false;
        }
        let (row, col) = (cell.row as usize, cell.col as usize);
        if row >= self.heights.rows() || col >= self.heights.cols() {
            return false;
        }
        !self.mask.is_blocked(row, col)
    }

    /// Height of a valid cell.
    #[inline]
    pub fn height(&self, cell: Cell) -> f32 {
        debug_assert!(self.is_valid(cell));
        self.heights.at(cell.row as usize, cell.col as usize)
    }

    /// Cost of travelling from the `dir`-neighbor into `cell`.
    ///
    /// Returns `None` when the neighbor is outside the grid or blocked.
    /// Otherwise the cost is `base_cost`, plus `slope_penalty` per unit of
    /// climb when `cell` is higher than the neighbor. Always strictly
    /// positive.
    pub fn approach_cost(&self, cell: Cell, dir: Direction) -> Option<f32> {
        debug_assert!(self.is_valid(cell));
        let from = cell.neighbor(dir);
        if !self.is_valid(from) {
            return None;
        }
        let climb = self.height(cell) - self.height(from);
        if climb > 0.0 {
            Some(self.cost.base_cost + self.cost.slope_penalty * climb)
        } else {
            Some(self.cost.base_cost)
        }
    }

    /// The cost model this field was built with.
    #[inline]
    pub fn cost_model(&self) -> CostConfig {
        self.cost
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat_field(rows: usize, cols: usize) -> TerrainField {
        TerrainField::new(
            HeightMap::new(rows, cols),
            ObstacleMask::new(rows, cols),
            CostConfig::default(),
        )
        .unwrap()
    }

    #[test]
    fn rejects_mismatched_dimensions() {
        let err = TerrainField::new(
            HeightMap::new(4, 4),
            ObstacleMask::new(4, 5),
            CostConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, Error::DimensionMismatch { .. }));
    }

    #[test]
    fn validity_respects_bounds_and_mask() {
        let mut mask = ObstacleMask::new(3, 3);
        mask.set_blocked(1, 1, true);
        let field = TerrainField::new(HeightMap::new(3, 3), mask, CostConfig::default()).unwrap();

        assert!(field.is_valid(Cell::new(0, 0)));
        assert!(!field.is_valid(Cell::new(1, 1)));
        assert!(!field.is_valid(Cell::new(-1, 0)));
        assert!(!field.is_valid(Cell::new(0, 3)));
    }

    #[test]
    fn climb_is_penalized_and_descent_is_not() {
        let cost = CostConfig::default();
        let mut heights = HeightMap::new(1, 2);
        heights.set_at(0, 1, 2.0);
        let field = TerrainField::new(heights, ObstacleMask::new(1, 2), cost).unwrap();

        let low = Cell::new(0, 0);
        let high = Cell::new(0, 1);

        // Entering the higher cell from the lower one carries the slope
        // penalty; the reverse direction is the base cost exactly.
        let uphill = field.approach_cost(high, Direction::West).unwrap();
        let downhill = field.approach_cost(low, Direction::East).unwrap();
        assert_eq!(uphill, cost.base_cost + cost.slope_penalty * 2.0);
        assert_eq!(downhill, cost.base_cost);
        assert!(uphill > downhill);
    }

    #[test]
    fn cost_is_absent_toward_invalid_neighbors() {
        let field = flat_field(2, 2);
        // (0, 0) has no in-grid neighbor to the north or west.
        assert!(field.approach_cost(Cell::new(0, 0), Direction::North).is_none());
        assert!(field.approach_cost(Cell::new(0, 0), Direction::West).is_none());
        assert!(field.approach_cost(Cell::new(0, 0), Direction::SouthEast).is_some());
    }
}

//! Test utilities for search and cluster tests.

#![allow(dead_code)]

use bhumi_route::{Cell, CostConfig, HeightMap, ObstacleMask, TerrainField};

/// Flat, obstacle-free field with the default cost model.
pub fn flat_field(rows: usize, cols: usize) -> TerrainField {
    TerrainField::new(
        HeightMap::new(rows, cols),
        ObstacleMask::new(rows, cols),
        CostConfig::default(),
    )
    .unwrap()
}

/// Flat field with the listed cells blocked.
pub fn field_with_obstacles(rows: usize, cols: usize, blocked: &[(usize, usize)]) -> TerrainField {
    let mut mask = ObstacleMask::new(rows, cols);
    for &(row, col) in blocked {
        mask.set_blocked(row, col, true);
    }
    TerrainField::new(HeightMap::new(rows, cols), mask, CostConfig::default()).unwrap()
}

/// Field with per-cell heights given row-major.
pub fn sloped_field(rows: usize, cols: usize, heights: &[f32]) -> TerrainField {
    assert_eq!(heights.len(), rows * cols);
    let mut map = HeightMap::new(rows, cols);
    for row in 0..rows {
        for col in 0..cols {
            map.set_at(row, col, heights[row * cols + col]);
        }
    }
    TerrainField::new(map, ObstacleMask::new(rows, cols), CostConfig::default()).unwrap()
}

/// Every in-bounds cell of a grid.
pub fn all_cells(rows: usize, cols: usize) -> impl Iterator<Item = Cell> {
    (0..rows as i32).flat_map(move |row| (0..cols as i32).map(move |col| Cell::new(row, col)))
}

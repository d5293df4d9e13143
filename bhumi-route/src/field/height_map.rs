//! Dense row-major height grid.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Height value per cell, stored row-major with an explicit stride.
///
/// This is the on-disk height map format: a JSON object with the flat
/// `heights` array and the `stride` (number of columns per row).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HeightMap {
    heights: Vec<f32>,
    stride: usize,
}

impl HeightMap {
    /// Create a zero-height grid of the given dimensions.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            heights: vec![0.0; rows * cols],
            stride: cols,
        }
    }

    /// Wrap an existing row-major buffer. The buffer length must be a
    /// multiple of `stride`.
    pub fn from_vec(heights: Vec<f32>, stride: usize) -> Result<Self> {
        let map = Self { heights, stride };
        map.validate()?;
        Ok(map)
    }

    /// Check the stride invariant. Deserialized maps must be validated
    /// before use.
    pub fn validate(&self) -> Result<()> {
        if self.stride == 0 {
            return Err(Error::Malformed("height map stride is zero".into()));
        }
        if self.heights.len() % self.stride != 0 {
            return Err(Error::Malformed(format!(
                "height map of {} values does not divide into rows of {}",
                self.heights.len(),
                self.stride
            )));
        }
        Ok(())
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.heights.len() / self.stride
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.stride
    }

    /// Height at (row, col). Panics on out-of-bounds indices.
    #[inline]
    pub fn at(&self, row: usize, col: usize) -> f32 {
        debug_assert!(col < self.stride);
        self.heights[row * self.stride + col]
    }

    /// Set the height at (row, col).
    #[inline]
    pub fn set_at(&mut self, row: usize, col: usize, height: f32) {
        debug_assert!(col < self.stride);
        self.heights[row * self.stride + col] = height;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_vec_rejects_ragged_buffers() {
        assert!(HeightMap::from_vec(vec![0.0; 7], 3).is_err());
        assert!(HeightMap::from_vec(vec![0.0; 6], 0).is_err());
        let map = HeightMap::from_vec(vec![0.0; 6], 3).unwrap();
        assert_eq!((map.rows(), map.cols()), (2, 3));
    }

    #[test]
    fn indexing_is_row_major() {
        let mut map = HeightMap::new(2, 3);
        map.set_at(1, 2, 4.5);
        assert_eq!(map.at(1, 2), 4.5);
        assert_eq!(map.at(0, 2), 0.0);
    }
}

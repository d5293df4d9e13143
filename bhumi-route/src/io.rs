//! File IO: height maps, obstacle textures, and route output.
//!
//! The height map is a JSON object (`heights` + `stride`). The obstacle
//! texture is a PNG whose pure-black pixels mark blocked cells; pixel
//! (x, y) maps to cell (row = x, col = y), so the image's x axis runs
//! along grid rows. The route output is a JSON array of (row, col)
//! records.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::field::{HeightMap, ObstacleMask};
use crate::search::Route;

/// Load and validate a height map from a JSON file.
pub fn load_height_map(path: &Path) -> Result<HeightMap> {
    let data = fs::read(path)?;
    let map: HeightMap = serde_json::from_slice(&data)?;
    map.validate()?;
    info!(path = %path.display(), rows = map.rows(), cols = map.cols(), "height map loaded");
    Ok(map)
}

/// Write a height map as JSON.
pub fn save_height_map(map: &HeightMap, path: &Path) -> Result<()> {
    let data = serde_json::to_vec(map)?;
    fs::write(path, data)?;
    Ok(())
}

/// Decode an obstacle mask from a texture image.
///
/// A cell is blocked iff its pixel is pure black (r = g = b = 0); alpha is
/// ignored.
pub fn load_obstacle_mask(path: &Path) -> Result<ObstacleMask> {
    let image = image::open(path)?.to_rgba8();
    let (width, height) = image.dimensions();
    let mut mask = ObstacleMask::new(width as usize, height as usize);
    let mut blocked = 0usize;
    for (x, y, pixel) in image.enumerate_pixels() {
        let [r, g, b, _] = pixel.0;
        if r == 0 && g == 0 && b == 0 {
            mask.set_blocked(x as usize, y as usize, true);
            blocked += 1;
        }
    }
    info!(
        path = %path.display(),
        rows = mask.rows(),
        cols = mask.cols(),
        blocked,
        "obstacle mask loaded"
    );
    Ok(mask)
}

/// Write a route as a JSON array of (row, col) records.
pub fn write_route(route: &Route, path: &Path) -> Result<()> {
    let data = serde_json::to_vec(&route.cells)?;
    fs::write(path, data)?;
    info!(path = %path.display(), cells = route.cells.len(), "route written");
    Ok(())
}

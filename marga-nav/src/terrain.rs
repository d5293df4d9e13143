//! Shared input loading for the CLI commands.

use std::path::Path;

use bhumi_route::{io, CostConfig, TerrainField};

use crate::error::Result;

/// Load the height map and obstacle texture and build the field.
///
/// Dimension mismatches and corrupt files fail here, before any search
/// state exists.
pub fn load_field(height_map: &Path, texture: &Path, cost: CostConfig) -> Result<TerrainField> {
    let heights = io::load_height_map(height_map)?;
    let mask = io::load_obstacle_mask(texture)?;
    Ok(TerrainField::new(heights, mask, cost)?)
}

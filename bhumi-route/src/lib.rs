//! # BhumiRoute
//!
//! Least-cost routing over a terrain traversability grid.
//!
//! ## Overview
//!
//! A search runs backwards from the destination: the destination is seeded
//! at distance zero and a frontier of open cells is relaxed outward until
//! the source settles. Frontier minimum selection is sharded so it can be
//! fanned out - across worker threads in one process, or across follower
//! processes under a master coordinator.
//!
//! - **Terrain field**: height grid + obstacle mask; answers validity and
//!   directed edge costs (climbing is penalized, so costs are asymmetric)
//! - **Relaxation engine**: in-process sharded search with a read-only
//!   scatter phase and a serial mutate phase per round
//! - **Cluster**: the same rounds over networked followers that replicate
//!   the frontier and distance state from per-round deltas
//! - **Route reconstruction**: parent-chain walk from source to
//!   destination over the completed distance map
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use bhumi_route::{Cell, CostConfig, RelaxationEngine, TerrainField};
//!
//! let field = TerrainField::new(heights, mask, CostConfig::default())?;
//! let engine = RelaxationEngine::new(&field, 8);
//! let report = engine.run(Cell::new(0, 0), Cell::new(250, 410))?;
//! let route = bhumi_route::reconstruct(&report.distances, source, dest)?;
//! ```
//!
//! ## Coordinate System
//!
//! Cells are (row, col) pairs; arenas are row-major. Texture pixel (x, y)
//! maps to cell (row = x, col = y).

#![warn(missing_docs)]

pub mod cluster;
pub mod config;
pub mod core;
pub mod error;
pub mod field;
pub mod io;
pub mod search;

pub use crate::cluster::{
    DistUpdate, FollowerLink, FollowerState, LocalFollowerLink, MasterCoordinator, RoundRequest,
    RoundResponse,
};
pub use crate::config::{ClusterConfig, CostConfig, RouteConfig, SearchConfig};
pub use crate::core::{Cell, Direction};
pub use crate::error::{Error, Result};
pub use crate::field::{HeightMap, ObstacleMask, TerrainField};
pub use crate::search::{
    reconstruct, sweep, CellStatus, DistanceMap, FrontierShards, RelaxationEngine, Route,
    SearchReport,
};

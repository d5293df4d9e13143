//! Configuration loading for route searches.

use std::fs;
use std::path::Path;
use std::thread;

use serde::Deserialize;

use crate::error::Result;

/// Top-level configuration, loadable from a TOML file. Every field has a
/// default so a missing file or empty table is always usable.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RouteConfig {
    /// Edge cost model.
    #[serde(default)]
    pub cost: CostConfig,
    /// Local engine settings.
    #[serde(default)]
    pub search: SearchConfig,
    /// Master/follower cluster settings.
    #[serde(default)]
    pub cluster: ClusterConfig,
}

impl RouteConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        let config: RouteConfig = toml::from_str(&raw)?;
        Ok(config)
    }
}

/// Directed edge cost parameters.
///
/// Every traversal costs `base_cost`; entering a strictly higher cell adds
/// `slope_penalty` per unit of climb. The penalty multiplier is a tunable,
/// not a constant.
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct CostConfig {
    /// Flat cost of any single traversal (default: 10.0).
    #[serde(default = "default_base_cost")]
    pub base_cost: f32,

    /// Extra cost per unit of climb (default: 100.0).
    #[serde(default = "default_slope_penalty")]
    pub slope_penalty: f32,
}

impl Default for CostConfig {
    fn default() -> Self {
        Self {
            base_cost: default_base_cost(),
            slope_penalty: default_slope_penalty(),
        }
    }
}

/// Local relaxation engine settings.
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct SearchConfig {
    /// Worker thread (= shard) count. Defaults to the machine's available
    /// parallelism.
    #[serde(default = "default_workers")]
    pub workers: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            workers: default_workers(),
        }
    }
}

/// Master/follower transport settings.
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct ClusterConfig {
    /// Connection establishment timeout in milliseconds (default: 5000).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_ms: u64,

    /// Per-round exchange timeout in milliseconds (default: 30000). A
    /// follower that misses the deadline fails the whole search.
    #[serde(default = "default_exchange_timeout")]
    pub exchange_timeout_ms: u64,
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self {
            connect_timeout_ms: default_connect_timeout(),
            exchange_timeout_ms: default_exchange_timeout(),
        }
    }
}

fn default_base_cost() -> f32 {
    10.0
}

fn default_slope_penalty() -> f32 {
    100.0
}

fn default_workers() -> usize {
    thread::available_parallelism().map(|n| n.get()).unwrap_or(4)
}

fn default_connect_timeout() -> u64 {
    5_000
}

fn default_exchange_timeout() -> u64 {
    30_000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_yields_defaults() {
        let config: RouteConfig = toml::from_str("").unwrap();
        assert_eq!(config.cost.base_cost, 10.0);
        assert_eq!(config.cost.slope_penalty, 100.0);
        assert!(config.search.workers >= 1);
        assert_eq!(config.cluster.connect_timeout_ms, 5_000);
    }

    #[test]
    fn partial_sections_keep_unset_defaults() {
        let config: RouteConfig = toml::from_str(
            r#"
            [cost]
            slope_penalty = 5.0

            [cluster]
            exchange_timeout_ms = 1000
            "#,
        )
        .unwrap();
        assert_eq!(config.cost.slope_penalty, 5.0);
        assert_eq!(config.cost.base_cost, 10.0);
        assert_eq!(config.cluster.exchange_timeout_ms, 1_000);
        assert_eq!(config.cluster.connect_timeout_ms, 5_000);
    }
}

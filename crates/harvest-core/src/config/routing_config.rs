//! Routing hierarchy configuration.
//!
//! The hierarchy's shape is fixed; only the thresholds and the demand table
//! are read from config, once, when the hierarchy is built.
//!
//! # Examples
//!
//! ```
//! use harvest_core::config::RoutingConfig;
//!
//! let config = RoutingConfig::default();
//! assert_eq!(config.quality_metric, "freshness");
//! assert_eq!(config.demand["North"]["Wheat"], 8.5);
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::defaults;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RoutingConfig {
    /// Metric read by the quality gates. Default: "freshness".
    pub quality_metric: String,
    /// Quality gate passes at or above this score. Default: 8.0.
    pub premium_threshold: f64,
    /// Demand assumed for (region, category) pairs missing from the table. Default: 5.0.
    pub default_demand: f64,
    /// Demand at or above this is annotated "High". Default: 7.0.
    pub high_demand_threshold: f64,
    /// Region name → category → demand score (0–10).
    pub demand: BTreeMap<String, BTreeMap<String, f64>>,
}

impl RoutingConfig {
    /// The compiled-in demand table.
    pub fn default_demand_table() -> BTreeMap<String, BTreeMap<String, f64>> {
        defaults::DEFAULT_DEMAND_TABLE
            .iter()
            .map(|(region, row)| {
                let row = row
                    .iter()
                    .map(|(category, score)| (category.to_string(), *score))
                    .collect();
                (region.to_string(), row)
            })
            .collect()
    }
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            quality_metric: defaults::DEFAULT_QUALITY_METRIC.to_string(),
            premium_threshold: defaults::DEFAULT_PREMIUM_THRESHOLD,
            default_demand: defaults::DEFAULT_DEMAND,
            high_demand_threshold: defaults::DEFAULT_HIGH_DEMAND_THRESHOLD,
            demand: Self::default_demand_table(),
        }
    }
}

//! Regional demand lookup. Only feeds the routing annotation, never a decision.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

use harvest_core::config::RoutingConfig;
use harvest_core::models::Region;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DemandLevel {
    High,
    Low,
}

impl fmt::Display for DemandLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::High => "High",
            Self::Low => "Low",
        })
    }
}

/// A demand score out of 10 and its level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Demand {
    pub score: f64,
    pub level: DemandLevel,
}

impl fmt::Display for Demand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}/10 ({})", self.score, self.level)
    }
}

/// Static (region, category) → demand table.
#[derive(Debug, Clone)]
pub struct DemandTable {
    scores: HashMap<(Region, String), f64>,
    default_score: f64,
    high_threshold: f64,
}

impl DemandTable {
    /// Build from config. Rows for unknown region names are skipped;
    /// `HarvestConfig::validate` rejects them before this point.
    pub fn from_config(config: &RoutingConfig) -> Self {
        let mut scores = HashMap::new();
        for (region_name, row) in &config.demand {
            let Ok(region) = region_name.parse::<Region>() else {
                warn!(region = %region_name, "skipping demand row for unknown region");
                continue;
            };
            for (category, score) in row {
                scores.insert((region, category.clone()), *score);
            }
        }
        Self {
            scores,
            default_score: config.default_demand,
            high_threshold: config.high_demand_threshold,
        }
    }

    /// Demand for a category in a region; the default score when absent.
    pub fn demand_for(&self, region: Region, category: &str) -> Demand {
        let score = self
            .scores
            .get(&(region, category.to_string()))
            .copied()
            .unwrap_or(self.default_score);
        let level = if score >= self.high_threshold {
            DemandLevel::High
        } else {
            DemandLevel::Low
        };
        Demand { score, level }
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

impl Default for DemandTable {
    fn default() -> Self {
        Self::from_config(&RoutingConfig::default())
    }
}

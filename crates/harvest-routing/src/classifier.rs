//! Classification predicates, as data.

use serde::{Deserialize, Serialize};

use harvest_core::errors::{RoutingError, RoutingResult};
use harvest_core::models::{Lot, Region};

/// The predicate of a decision node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Classifier {
    /// True iff the lot's region is one of `regions`.
    RegionMembership { regions: Vec<Region> },
    /// True iff the lot's region is `region`.
    RegionEquals { region: Region },
    /// True iff `metric >= threshold` OR the lot carries any certification.
    /// The metric must be present even when a certification would decide.
    QualityGate { metric: String, threshold: f64 },
}

impl Classifier {
    /// Evaluate against a lot. Pure.
    pub fn evaluate(&self, lot: &Lot) -> RoutingResult<bool> {
        match self {
            Self::RegionMembership { regions } => Ok(regions.contains(&lot.region)),
            Self::RegionEquals { region } => Ok(lot.region == *region),
            Self::QualityGate { metric, threshold } => {
                let score = lot.metric(metric).ok_or_else(|| RoutingError::MissingMetric {
                    lot_id: lot.id.to_string(),
                    metric: metric.clone(),
                })?;
                Ok(score >= *threshold || lot.is_certified())
            }
        }
    }
}

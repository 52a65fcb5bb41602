//! Top-level harvest configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{IdentityConfig, ObservabilityConfig, RoutingConfig};
use crate::constants::SCORE_SCALE_MAX;
use crate::errors::ConfigError;
use crate::models::Region;

/// Aggregates every sub-config. Unknown keys are ignored.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct HarvestConfig {
    pub routing: RoutingConfig,
    pub identity: IdentityConfig,
    pub observability: ObservabilityConfig,
}

impl HarvestConfig {
    /// Parse and validate configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse, and validate a TOML config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let routing = &self.routing;
        if routing.quality_metric.trim().is_empty() {
            return Err(invalid("routing.quality_metric", "must not be empty"));
        }
        check_score("routing.premium_threshold", routing.premium_threshold)?;
        check_score("routing.default_demand", routing.default_demand)?;
        check_score("routing.high_demand_threshold", routing.high_demand_threshold)?;

        for (region, row) in &routing.demand {
            if region.parse::<Region>().is_err() {
                return Err(invalid(
                    &format!("routing.demand.{region}"),
                    "not a known region (North, South, East, West)",
                ));
            }
            for (category, score) in row {
                check_score(&format!("routing.demand.{region}.{category}"), *score)?;
            }
        }

        let identity = &self.identity;
        if identity.lot_prefix.is_empty() {
            return Err(invalid("identity.lot_prefix", "must not be empty"));
        }
        if identity.handoff_prefix.is_empty() {
            return Err(invalid("identity.handoff_prefix", "must not be empty"));
        }
        Ok(())
    }
}

fn check_score(field: &str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=SCORE_SCALE_MAX).contains(&value) {
        Ok(())
    } else {
        Err(invalid(field, &format!("must be between 0 and {SCORE_SCALE_MAX}")))
    }
}

fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: message.to_string(),
    }
}

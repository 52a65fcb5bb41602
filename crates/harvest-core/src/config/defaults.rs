// Single source of truth for all default values.

// --- Routing ---
pub const DEFAULT_QUALITY_METRIC: &str = "freshness";
pub const DEFAULT_PREMIUM_THRESHOLD: f64 = 8.0;
pub const DEFAULT_DEMAND: f64 = 5.0;
pub const DEFAULT_HIGH_DEMAND_THRESHOLD: f64 = 7.0;

/// Regional demand per (region, category), out of 10.
pub const DEFAULT_DEMAND_TABLE: &[(&str, &[(&str, f64)])] = &[
    (
        "North",
        &[("Wheat", 8.5), ("Rice", 7.0), ("Corn", 6.0), ("Tomato", 5.0), ("Apple", 9.0)],
    ),
    (
        "South",
        &[("Wheat", 5.0), ("Rice", 9.0), ("Corn", 6.5), ("Tomato", 8.0), ("Apple", 4.0)],
    ),
    (
        "East",
        &[("Wheat", 6.0), ("Rice", 8.5), ("Corn", 5.0), ("Tomato", 7.5), ("Apple", 6.5)],
    ),
    (
        "West",
        &[("Wheat", 7.0), ("Rice", 6.0), ("Corn", 8.0), ("Tomato", 9.0), ("Apple", 7.5)],
    ),
];

// --- Identity ---
pub const DEFAULT_ID_START: u64 = 1000;
pub const DEFAULT_LOT_PREFIX: &str = "LOT";
pub const DEFAULT_HANDOFF_PREFIX: &str = "HND";

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;

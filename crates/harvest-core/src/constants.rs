/// Harvest workspace version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Depth of the routing hierarchy: every route takes exactly this many steps.
pub const ROUTING_DEPTH: usize = 4;

/// Number of terminal destinations in the routing hierarchy.
pub const TERMINAL_COUNT: usize = 8;

/// Upper bound of every metric and demand score.
pub const SCORE_SCALE_MAX: f64 = 10.0;

/// Action text of the first handoff recorded for a freshly harvested lot.
pub const INITIAL_HARVEST_ACTION: &str = "Initial harvest entry";

/// Environment variable consulted for the tracing filter.
pub const LOG_ENV_VAR: &str = "HARVEST_LOG";

//! Shared builders, a manual clock, and the golden fixture loader used by the
//! integration tests of every harvest crate.

use std::path::PathBuf;
use std::sync::Mutex;

use chrono::{DateTime, Duration, TimeZone, Utc};
use harvest_core::models::{HandlerRole, HandoffRecord, Lot, Region};
use harvest_core::Clock;
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Fixed instant all test timestamps are offset from.
pub fn epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 6, 1, 6, 0, 0)
        .single()
        .unwrap_or_else(Utc::now)
}

/// `epoch() + minutes`.
pub fn at(minutes: i64) -> DateTime<Utc> {
    epoch() + Duration::minutes(minutes)
}

/// A lot carrying only a freshness score.
pub fn lot(id: &str, category: &str, region: Region, freshness: f64) -> Lot {
    Lot::new(id, category, region)
        .with_quantity(250.0)
        .with_metric("freshness", freshness)
        .with_producer("farmer-1", "Riverside Plot")
        .harvested_at(epoch())
}

/// An unrouted origin handoff created by the lot's producer.
pub fn origin(id: &str, lot: Lot, created_at: DateTime<Utc>) -> HandoffRecord {
    let producer = lot.producer_id.clone();
    let location = lot.origin.clone();
    HandoffRecord::new(
        id,
        created_at,
        producer,
        HandlerRole::Producer,
        location,
        "Initial harvest entry",
        lot,
    )
}

/// A handoff taken by an intermediary.
pub fn transfer(id: &str, lot: Lot, created_at: DateTime<Utc>) -> HandoffRecord {
    HandoffRecord::new(
        id,
        created_at,
        "trader-1",
        HandlerRole::Intermediary,
        "Central Market",
        "Route to Retailer",
        lot,
    )
}

/// A clock that only moves when told to.
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(start),
        }
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap();
        *now += by;
    }
}

impl Clock for ManualClock {
    /// Returns the current instant, then steps one second so consecutive
    /// reads are strictly increasing.
    fn now(&self) -> DateTime<Utc> {
        let mut now = self.now.lock().unwrap();
        let current = *now;
        *now += Duration::seconds(1);
        current
    }
}

/// One routing scenario from `golden/routing_scenarios.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct RoutingScenario {
    pub name: String,
    pub category: String,
    pub region: Region,
    pub metrics: std::collections::BTreeMap<String, f64>,
    #[serde(default)]
    pub certifications: Vec<String>,
    pub expected_leaf: String,
    pub expected_path: Vec<String>,
    pub expected_decisions: Vec<String>,
    pub expected_demand: f64,
    pub expected_level: String,
}

impl RoutingScenario {
    pub fn lot(&self, id: &str) -> Lot {
        let mut lot = Lot::new(id, self.category.clone(), self.region).harvested_at(epoch());
        for (name, score) in &self.metrics {
            lot = lot.with_metric(name.clone(), *score);
        }
        for label in &self.certifications {
            lot = lot.with_certification(label.clone());
        }
        lot
    }
}

/// Root directory of the test-fixtures crate.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// The golden routing scenarios.
pub fn routing_scenarios() -> Vec<RoutingScenario> {
    load_fixture("golden/routing_scenarios.json")
}

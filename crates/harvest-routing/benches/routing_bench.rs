//! Routing throughput on the standard hierarchy.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use harvest_core::config::RoutingConfig;
use harvest_core::models::{Lot, Region};
use harvest_routing::RoutingHierarchy;
use test_fixtures::{at, origin};

fn bench_plan(c: &mut Criterion) {
    let hierarchy = RoutingHierarchy::standard(&RoutingConfig::default()).unwrap();
    let lot = Lot::new("LOT1", "Tomato", Region::East)
        .with_metric("freshness", 6.0)
        .with_certification("Organic");

    c.bench_function("plan_single_lot", |b| {
        b.iter(|| hierarchy.plan(black_box(&lot)).unwrap());
    });
}

fn bench_route_and_drain(c: &mut Criterion) {
    let lots: Vec<Lot> = (0..1_000)
        .map(|i| {
            let region = Region::ALL[i % Region::ALL.len()];
            Lot::new(format!("LOT{i}"), "Wheat", region).with_metric("freshness", (i % 11) as f64)
        })
        .collect();

    c.bench_function("route_1000_then_drain", |b| {
        b.iter(|| {
            let mut hierarchy = RoutingHierarchy::standard(&RoutingConfig::default()).unwrap();
            for (i, lot) in lots.iter().enumerate() {
                let mut record = origin(&format!("HND{i}"), lot.clone(), at(0));
                hierarchy.route(lot, &mut record).unwrap();
            }
            let leaves: Vec<String> = hierarchy.terminals().map(|n| n.id.to_string()).collect();
            for leaf in &leaves {
                while hierarchy.dequeue_from(leaf).unwrap().is_some() {}
            }
            black_box(hierarchy.total_pending())
        });
    });
}

criterion_group!(benches, bench_plan, bench_route_and_drain);
criterion_main!(benches);

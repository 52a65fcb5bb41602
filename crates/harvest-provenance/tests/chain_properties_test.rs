//! Property tests for the provenance chain.

use proptest::prelude::*;

use harvest_core::models::{HandoffId, LotId, Region};
use harvest_provenance::ProvenanceChain;
use test_fixtures::{at, lot, origin, transfer};

/// Build a chain from a script of steps. Each step either starts a new lot
/// (`None`) or extends the newest handoff of lot `k % lots` (`Some(k)`).
/// Timestamps increase with every append.
fn build(steps: &[Option<usize>]) -> (ProvenanceChain, usize) {
    let mut chain = ProvenanceChain::new();
    let mut tails: Vec<(LotId, HandoffId)> = Vec::new();

    for (i, step) in steps.iter().enumerate() {
        let handoff_id = HandoffId(format!("HND{i}"));
        match step {
            Some(k) if !tails.is_empty() => {
                let slot = k % tails.len();
                let (lot_id, tail) = tails[slot].clone();
                let snapshot = chain.get(&tail).unwrap().lot.clone();
                chain
                    .append(transfer(handoff_id.as_str(), snapshot, at(i as i64)), Some(&tail))
                    .unwrap();
                tails[slot] = (lot_id, handoff_id);
            }
            _ => {
                let lot_id = LotId(format!("LOT{}", tails.len()));
                let region = Region::ALL[i % 4];
                chain
                    .append(
                        origin(handoff_id.as_str(), lot(lot_id.as_str(), "Wheat", region, 8.0), at(i as i64)),
                        None,
                    )
                    .unwrap();
                tails.push((lot_id, handoff_id));
            }
        }
    }
    let lots = tails.len();
    (chain, lots)
}

fn steps_strategy() -> impl Strategy<Value = Vec<Option<usize>>> {
    prop::collection::vec(prop::option::of(0_usize..16), 1..60)
}

proptest! {
    #[test]
    fn history_is_strictly_increasing_from_origin_to_latest(steps in steps_strategy()) {
        let (chain, lots) = build(&steps);
        for k in 0..lots {
            let lot_id = LotId(format!("LOT{k}"));
            let history = chain.history_of(&lot_id);
            prop_assert!(!history.is_empty());
            prop_assert!(history[0].previous().is_none());
            let last = history[history.len() - 1];
            prop_assert_eq!(&last.id, &chain.latest_for(&lot_id).unwrap().id);
            prop_assert!(last.next().is_none());
            for pair in history.windows(2) {
                prop_assert!(pair[0].created_at < pair[1].created_at);
                prop_assert_eq!(pair[0].next(), Some(&pair[1].id));
            }
        }
    }

    #[test]
    fn histories_partition_the_chain(steps in steps_strategy()) {
        let (chain, lots) = build(&steps);
        let total: usize = (0..lots)
            .map(|k| chain.history_of(&LotId(format!("LOT{k}"))).len())
            .sum();
        prop_assert_eq!(total, chain.len());
        prop_assert_eq!(chain.latest_per_lot().len(), lots);
    }

    #[test]
    fn failed_append_changes_nothing(steps in steps_strategy(), bogus in 1000_usize..2000) {
        let (mut chain, lots) = build(&steps);
        let before = chain.len();
        let snapshot = lot("LOT0", "Wheat", Region::North, 8.0);
        let missing = HandoffId(format!("HND{bogus}"));

        let result = chain.append(transfer("HNDX", snapshot, at(10_000)), Some(&missing));
        prop_assert!(result.is_err());
        prop_assert_eq!(chain.len(), before);
        prop_assert!(!chain.contains(&HandoffId::from("HNDX")));
        prop_assert_eq!(chain.latest_per_lot().len(), lots);
    }
}

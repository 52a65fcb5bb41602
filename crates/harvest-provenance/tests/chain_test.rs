//! Provenance chain behaviour: linking, history reconstruction, latest-per-lot.

use harvest_core::errors::ChainError;
use harvest_core::models::{HandoffId, LotId, Region};
use harvest_provenance::ProvenanceChain;
use test_fixtures::{at, lot, origin, transfer};

fn ids(history: &[&harvest_core::HandoffRecord]) -> Vec<String> {
    history.iter().map(|r| r.id.to_string()).collect()
}

#[test]
fn origin_append_has_no_links() {
    let mut chain = ProvenanceChain::new();
    let wheat = lot("LOT1", "Wheat", Region::North, 9.0);

    let record = chain.append(origin("HND1", wheat, at(0)), None).unwrap();
    assert!(record.previous().is_none());
    assert!(record.next().is_none());
    assert_eq!(chain.len(), 1);
    assert_eq!(chain.lot_count(), 1);
}

#[test]
fn successor_links_both_directions() {
    let mut chain = ProvenanceChain::new();
    let wheat = lot("LOT1", "Wheat", Region::North, 9.0);
    chain.append(origin("HND1", wheat.clone(), at(0)), None).unwrap();

    let predecessor = HandoffId::from("HND1");
    let second = chain
        .append(transfer("HND2", wheat, at(5)), Some(&predecessor))
        .unwrap();
    assert_eq!(second.previous(), Some(&predecessor));

    let first = chain.get(&predecessor).unwrap();
    assert_eq!(first.next(), Some(&HandoffId::from("HND2")));
}

#[test]
fn history_runs_from_origin_to_latest() {
    let mut chain = ProvenanceChain::new();
    let wheat = lot("LOT1", "Wheat", Region::North, 9.0);
    chain.append(origin("HND1", wheat.clone(), at(0)), None).unwrap();
    chain
        .append(transfer("HND2", wheat.clone(), at(10)), Some(&"HND1".into()))
        .unwrap();
    chain
        .append(transfer("HND3", wheat, at(20)), Some(&"HND2".into()))
        .unwrap();

    let history = chain.history_of(&LotId::from("LOT1"));
    assert_eq!(ids(&history), vec!["HND1", "HND2", "HND3"]);
    assert!(history.windows(2).all(|w| w[0].created_at < w[1].created_at));
}

#[test]
fn single_record_history_has_length_one() {
    let mut chain = ProvenanceChain::new();
    chain
        .append(origin("HND1", lot("LOT1", "Rice", Region::South, 7.0), at(0)), None)
        .unwrap();

    let history = chain.history_of(&LotId::from("LOT1"));
    assert_eq!(ids(&history), vec!["HND1"]);
}

#[test]
fn unknown_lot_history_is_empty() {
    let mut chain = ProvenanceChain::new();
    assert!(chain.history_of(&LotId::from("LOT404")).is_empty());

    chain
        .append(origin("HND1", lot("LOT1", "Rice", Region::South, 7.0), at(0)), None)
        .unwrap();
    assert!(chain.history_of(&LotId::from("LOT404")).is_empty());
}

#[test]
fn histories_of_interleaved_lots_stay_separate() {
    let mut chain = ProvenanceChain::new();
    let wheat = lot("LOT1", "Wheat", Region::North, 9.0);
    let apple = lot("LOT2", "Apple", Region::West, 6.0);

    chain.append(origin("HND1", wheat.clone(), at(0)), None).unwrap();
    chain.append(origin("HND2", apple.clone(), at(1)), None).unwrap();
    chain
        .append(transfer("HND3", apple, at(2)), Some(&"HND2".into()))
        .unwrap();
    chain
        .append(transfer("HND4", wheat, at(3)), Some(&"HND1".into()))
        .unwrap();

    assert_eq!(ids(&chain.history_of(&"LOT1".into())), vec!["HND1", "HND4"]);
    assert_eq!(ids(&chain.history_of(&"LOT2".into())), vec!["HND2", "HND3"]);
}

#[test]
fn invalid_predecessor_leaves_chain_unmodified() {
    let mut chain = ProvenanceChain::new();
    let wheat = lot("LOT1", "Wheat", Region::North, 9.0);
    chain.append(origin("HND1", wheat.clone(), at(0)), None).unwrap();

    let err = chain
        .append(transfer("HND2", wheat, at(5)), Some(&"HND999".into()))
        .unwrap_err();
    assert!(matches!(
        err,
        ChainError::InvalidPredecessor { ref predecessor_id } if predecessor_id == "HND999"
    ));

    assert_eq!(chain.len(), 1);
    assert!(!chain.contains(&"HND2".into()));
    assert!(chain.get(&"HND1".into()).unwrap().next().is_none());
    assert_eq!(ids(&chain.history_of(&"LOT1".into())), vec!["HND1"]);
}

#[test]
fn duplicate_identifier_is_rejected() {
    let mut chain = ProvenanceChain::new();
    let wheat = lot("LOT1", "Wheat", Region::North, 9.0);
    chain.append(origin("HND1", wheat.clone(), at(0)), None).unwrap();

    let err = chain.append(origin("HND1", wheat, at(1)), None).unwrap_err();
    assert!(matches!(err, ChainError::DuplicateHandoff { .. }));
    assert_eq!(chain.len(), 1);
    assert_eq!(chain.get(&"HND1".into()).unwrap().created_at, at(0));
}

#[test]
fn second_successor_is_rejected() {
    let mut chain = ProvenanceChain::new();
    let wheat = lot("LOT1", "Wheat", Region::North, 9.0);
    chain.append(origin("HND1", wheat.clone(), at(0)), None).unwrap();
    chain
        .append(transfer("HND2", wheat.clone(), at(1)), Some(&"HND1".into()))
        .unwrap();

    let err = chain
        .append(transfer("HND3", wheat, at(2)), Some(&"HND1".into()))
        .unwrap_err();
    assert!(matches!(
        err,
        ChainError::SuccessorAlreadyLinked { ref successor_id, .. } if successor_id == "HND2"
    ));
    assert_eq!(chain.len(), 2);
    assert_eq!(
        chain.get(&"HND1".into()).unwrap().next(),
        Some(&HandoffId::from("HND2"))
    );
}

#[test]
fn latest_per_lot_returns_one_record_per_lot_in_first_seen_order() {
    let mut chain = ProvenanceChain::new();
    let wheat = lot("LOT1", "Wheat", Region::North, 9.0);
    let apple = lot("LOT2", "Apple", Region::West, 6.0);

    chain.append(origin("HND1", wheat.clone(), at(0)), None).unwrap();
    chain.append(origin("HND2", apple, at(1)), None).unwrap();
    chain
        .append(transfer("HND3", wheat, at(2)), Some(&"HND1".into()))
        .unwrap();

    let latest = chain.latest_per_lot();
    assert_eq!(ids(&latest), vec!["HND3", "HND2"]);

    let summaries = chain.lot_summaries();
    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0].lot_id, LotId::from("LOT1"));
    assert_eq!(summaries[0].status, "Route to Retailer");
}

#[test]
fn latest_ignores_records_with_older_timestamps() {
    let mut chain = ProvenanceChain::new();
    let wheat = lot("LOT1", "Wheat", Region::North, 9.0);
    chain.append(origin("HND1", wheat.clone(), at(30)), None).unwrap();
    // A second, independent origin stamped earlier does not become "latest".
    chain.append(origin("HND2", wheat, at(10)), None).unwrap();

    assert_eq!(chain.latest_for(&"LOT1".into()).unwrap().id, HandoffId::from("HND1"));
    assert_eq!(ids(&chain.history_of(&"LOT1".into())), vec!["HND1"]);
}

#[test]
fn timestamp_ties_go_to_the_later_append() {
    let mut chain = ProvenanceChain::new();
    let wheat = lot("LOT1", "Wheat", Region::North, 9.0);
    chain.append(origin("HND1", wheat.clone(), at(0)), None).unwrap();
    chain.append(origin("HND2", wheat, at(0)), None).unwrap();

    assert_eq!(chain.latest_for(&"LOT1".into()).unwrap().id, HandoffId::from("HND2"));
}

#[test]
fn history_stops_at_the_most_recent_record() {
    let mut chain = ProvenanceChain::new();
    let wheat = lot("LOT1", "Wheat", Region::North, 9.0);
    chain.append(origin("HND1", wheat.clone(), at(10)), None).unwrap();
    chain
        .append(transfer("HND2", wheat.clone(), at(20)), Some(&"HND1".into()))
        .unwrap();
    // Successor stamped before its predecessor: HND2 stays the most recent.
    chain
        .append(transfer("HND3", wheat, at(15)), Some(&"HND2".into()))
        .unwrap();

    assert_eq!(ids(&chain.history_of(&"LOT1".into())), vec!["HND1", "HND2"]);
}

#[test]
fn iter_yields_append_order() {
    let mut chain = ProvenanceChain::new();
    assert!(chain.is_empty());
    for (i, region) in Region::ALL.into_iter().enumerate() {
        let lot_id = format!("LOT{i}");
        chain
            .append(origin(&format!("HND{i}"), lot(&lot_id, "Corn", region, 5.0), at(i as i64)), None)
            .unwrap();
    }
    let order: Vec<String> = chain.iter().map(|r| r.id.to_string()).collect();
    assert_eq!(order, vec!["HND0", "HND1", "HND2", "HND3"]);
}

#[test]
fn appended_copy_of_a_linked_record_starts_fresh() {
    let mut chain = ProvenanceChain::new();
    let wheat = lot("LOT1", "Wheat", Region::North, 9.0);
    chain.append(origin("HND1", wheat.clone(), at(0)), None).unwrap();
    chain
        .append(transfer("HND2", wheat, at(10)), Some(&"HND1".into()))
        .unwrap();

    let mut copy = chain.get(&"HND2".into()).unwrap().clone();
    copy.id = "HND3".into();
    copy.created_at = at(20);
    let appended = chain.append(copy, None).unwrap();
    assert!(appended.previous().is_none());
    assert!(appended.next().is_none());

    let history = chain.history_of(&"LOT1".into());
    assert_eq!(history.last().map(|r| r.id.as_str()), Some("HND3"));
    assert_eq!(ids(&history), vec!["HND3"]);
    assert!(chain.get(&"HND2".into()).unwrap().next().is_none());
    assert_eq!(
        chain.get(&"HND1".into()).unwrap().next(),
        Some(&HandoffId::from("HND2"))
    );
}

#[test]
fn copied_links_do_not_survive_a_linked_append() {
    let mut chain = ProvenanceChain::new();
    let wheat = lot("LOT1", "Wheat", Region::North, 9.0);
    chain.append(origin("HND1", wheat.clone(), at(0)), None).unwrap();
    chain
        .append(transfer("HND2", wheat, at(10)), Some(&"HND1".into()))
        .unwrap();

    // A copy of HND1 still claims HND2 as its successor.
    let mut copy = chain.get(&"HND1".into()).unwrap().clone();
    copy.id = "HND3".into();
    copy.created_at = at(20);
    let appended = chain.append(copy, Some(&"HND2".into())).unwrap();
    assert_eq!(appended.previous(), Some(&HandoffId::from("HND2")));
    assert!(appended.next().is_none());

    assert_eq!(
        ids(&chain.history_of(&"LOT1".into())),
        vec!["HND1", "HND2", "HND3"]
    );
}

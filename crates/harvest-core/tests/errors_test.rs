use harvest_core::errors::*;

#[test]
fn invalid_predecessor_carries_id() {
    let err = ChainError::InvalidPredecessor {
        predecessor_id: "HND1042".into(),
    };
    assert!(err.to_string().contains("HND1042"));
    assert_eq!(err.error_code(), "INVALID_PREDECESSOR");
}

#[test]
fn successor_already_linked_carries_both_ids() {
    let err = ChainError::SuccessorAlreadyLinked {
        predecessor_id: "HND1".into(),
        successor_id: "HND2".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("HND1"));
    assert!(msg.contains("HND2"));
}

#[test]
fn missing_metric_carries_lot_and_metric() {
    let err = RoutingError::MissingMetric {
        lot_id: "LOT7".into(),
        metric: "freshness".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("LOT7"));
    assert!(msg.contains("freshness"));
}

#[test]
fn coded_message_prefixes_code() {
    let err = RoutingError::UnknownNode {
        node_id: "northPrime".into(),
    };
    assert_eq!(
        err.coded_message(),
        "[UNKNOWN_NODE] unknown terminal node: northPrime"
    );
}

#[test]
fn unregistered_handoff_has_its_own_code() {
    let err = ChainError::UnregisteredHandoff {
        handoff_id: "HND9".into(),
    };
    assert_eq!(
        err.coded_message(),
        "[UNREGISTERED_HANDOFF] handoff HND9 is not registered in the chain"
    );
}

// --- From impls ---

#[test]
fn chain_error_converts_to_harvest_error() {
    let err: HarvestError = ChainError::DuplicateHandoff {
        handoff_id: "HND1".into(),
    }
    .into();
    assert!(matches!(err, HarvestError::Chain(_)));
    assert_eq!(err.error_code(), "DUPLICATE_HANDOFF");
}

#[test]
fn routing_error_converts_to_harvest_error() {
    let err: HarvestError = RoutingError::MalformedHierarchy {
        details: "cycle".into(),
    }
    .into();
    assert!(matches!(err, HarvestError::Routing(_)));
    assert_eq!(err.error_code(), "MALFORMED_HIERARCHY");
}

#[test]
fn config_and_model_errors_convert_to_harvest_error() {
    let config: HarvestError = ConfigError::ValidationFailed {
        field: "routing.premium_threshold".into(),
        message: "out of range".into(),
    }
    .into();
    assert!(matches!(config, HarvestError::Config(_)));
    assert_eq!(config.error_code(), "CONFIG_ERROR");

    let model: HarvestError = ModelError::UnknownRegion {
        value: "Central".into(),
    }
    .into();
    assert!(model.to_string().contains("Central"));
}

//! Integration test: full signal pipeline
//!
//! Drives the engine end to end through its public surface: boundary
//! configurations with exact expectations, summary invariants across a
//! parameter grid, configuration rejection, and the JSON field contract.

use neurocat::{run_simulation, Condition, SimConfig, SimError};

/// Seeded config for a given lesion profile, defaults elsewhere.
fn seeded(severity: f64, adaptation: f64) -> SimConfig {
    SimConfig {
        severity,
        adaptation,
        seed: Some(12345),
        ..Default::default()
    }
}

// =============================================================================
// Boundary Behavior Tests
// =============================================================================

#[test]
fn test_pristine_pathway_delivers_every_signal() {
    let config = SimConfig {
        severity: 0.0,
        adaptation: 0.0,
        node_count: 10,
        attempt_count: 1000,
        seed: Some(1),
        ..Default::default()
    };

    let summary = run_simulation(&config).unwrap();

    assert_eq!(summary.total_attempts, 1000);
    assert_eq!(summary.successful_signals, 1000);
    assert_eq!(summary.accuracy, 1.0);
    assert_eq!(summary.jitter_events, 0);
    assert_eq!(summary.avg_node_failures, 0.0);
}

#[test]
fn test_fully_lesioned_pathway_blocks_every_signal() {
    let config = seeded(1.0, 0.0);

    let summary = run_simulation(&config).unwrap();

    assert_eq!(summary.successful_signals, 0);
    assert_eq!(summary.accuracy, 0.0);
    assert_eq!(summary.jitter_events, summary.total_attempts);
    // Every node fails on every attempt.
    assert_eq!(summary.avg_node_failures, f64::from(config.node_count));
}

#[test]
fn test_full_adaptation_rescues_every_signal() {
    let config = seeded(1.0, 1.0);

    let summary = run_simulation(&config).unwrap();

    // Delivery is perfect, yet the physical failures are all still counted.
    assert_eq!(summary.accuracy, 1.0);
    assert_eq!(summary.jitter_events, 0);
    assert_eq!(summary.avg_node_failures, f64::from(config.node_count));
}

#[test]
fn test_minimal_pathway_and_single_attempt() {
    let config = SimConfig {
        severity: 0.0,
        node_count: 1,
        attempt_count: 1,
        seed: Some(2),
        ..Default::default()
    };

    let summary = run_simulation(&config).unwrap();

    assert_eq!(summary.total_attempts, 1);
    assert_eq!(summary.accuracy, 1.0);
}

// =============================================================================
// Summary Invariant Tests
// =============================================================================

#[test]
fn test_successes_and_jitter_partition_attempts() {
    for (i, &severity) in [0.1, 0.3, 0.5, 0.7, 0.9].iter().enumerate() {
        for (j, &adaptation) in [0.0, 0.4, 0.8].iter().enumerate() {
            let config = SimConfig {
                severity,
                adaptation,
                attempt_count: 300,
                seed: Some((i * 10 + j) as u64),
                ..Default::default()
            };

            let summary = run_simulation(&config).unwrap();

            assert_eq!(
                summary.successful_signals + summary.jitter_events,
                summary.total_attempts,
                "partition violated at severity {severity}, adaptation {adaptation}"
            );
        }
    }
}

#[test]
fn test_accuracy_matches_success_ratio() {
    let summary = run_simulation(&seeded(0.6, 0.3)).unwrap();

    let ratio = f64::from(summary.successful_signals) / f64::from(summary.total_attempts);
    assert!((summary.accuracy - ratio).abs() < 1e-12);
    assert!((0.0..=1.0).contains(&summary.accuracy));
}

#[test]
fn test_accuracy_complements_jitter_rate() {
    let summary = run_simulation(&seeded(0.5, 0.5)).unwrap();

    let jitter_rate = f64::from(summary.jitter_events) / f64::from(summary.total_attempts);
    assert!((summary.accuracy + jitter_rate - 1.0).abs() < 1e-12);
}

#[test]
fn test_avg_failures_bounded_by_pathway_size() {
    for seed in 0..5 {
        let config = SimConfig {
            severity: 0.8,
            adaptation: 0.2,
            node_count: 6,
            attempt_count: 200,
            seed: Some(seed),
            ..Default::default()
        };

        let summary = run_simulation(&config).unwrap();

        assert!(summary.avg_node_failures >= 0.0);
        assert!(summary.avg_node_failures <= 6.0);
    }
}

// =============================================================================
// Configuration Rejection Tests
// =============================================================================

#[test]
fn test_severity_above_one_rejected() {
    let config = SimConfig {
        severity: 1.5,
        ..Default::default()
    };

    assert_eq!(
        run_simulation(&config).unwrap_err(),
        SimError::ProbabilityOutOfRange {
            field: "severity",
            value: 1.5
        }
    );
}

#[test]
fn test_negative_adaptation_rejected() {
    let config = SimConfig {
        adaptation: -0.2,
        ..Default::default()
    };

    assert_eq!(
        run_simulation(&config).unwrap_err(),
        SimError::ProbabilityOutOfRange {
            field: "adaptation",
            value: -0.2
        }
    );
}

#[test]
fn test_zero_nodes_rejected() {
    let config = SimConfig {
        node_count: 0,
        ..Default::default()
    };

    assert_eq!(
        run_simulation(&config).unwrap_err(),
        SimError::CountTooSmall {
            field: "node_count",
            value: 0
        }
    );
}

#[test]
fn test_zero_attempts_rejected() {
    let config = SimConfig {
        attempt_count: 0,
        ..Default::default()
    };

    assert_eq!(
        run_simulation(&config).unwrap_err(),
        SimError::CountTooSmall {
            field: "attempt_count",
            value: 0
        }
    );
}

#[test]
fn test_unrecognized_condition_rejected() {
    let err = "XYZ".parse::<Condition>().unwrap_err();
    assert_eq!(err, SimError::UnknownCondition("XYZ".to_string()));
}

// =============================================================================
// JSON Contract Tests
// =============================================================================

#[test]
fn test_json_exposes_exactly_the_five_contract_fields() {
    let summary = run_simulation(&seeded(0.4, 0.5)).unwrap();

    let value: serde_json::Value = serde_json::from_str(&summary.to_json()).unwrap();
    let object = value.as_object().unwrap();

    assert_eq!(object.len(), 5);
    for key in [
        "total_attempts",
        "successful_signals",
        "accuracy",
        "jitter_events",
        "avg_node_failures",
    ] {
        assert!(object.contains_key(key), "missing contract key {key}");
    }
}

#[test]
fn test_json_values_round_to_summary_fields() {
    let summary = run_simulation(&seeded(0.5, 0.3)).unwrap();
    let value: serde_json::Value = serde_json::from_str(&summary.to_json()).unwrap();

    assert_eq!(
        value["total_attempts"].as_u64().unwrap(),
        u64::from(summary.total_attempts)
    );
    assert_eq!(
        value["successful_signals"].as_u64().unwrap(),
        u64::from(summary.successful_signals)
    );
    assert_eq!(
        value["jitter_events"].as_u64().unwrap(),
        u64::from(summary.jitter_events)
    );
    assert_eq!(value["accuracy"].as_f64().unwrap(), summary.accuracy);
    assert_eq!(
        value["avg_node_failures"].as_f64().unwrap(),
        summary.avg_node_failures
    );
}

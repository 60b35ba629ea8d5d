//! Tests for drift detection module.

use super::*;
use crate::dataset::FeatureFrame;
use approx::assert_relative_eq;

fn column(range: std::ops::Range<i32>) -> Vec<Option<f64>> {
    range.map(|i| Some(f64::from(i))).collect()
}

fn frame(columns: Vec<(&str, Vec<Option<f64>>)>) -> FeatureFrame {
    FeatureFrame::from_columns(columns.into_iter().map(|(n, v)| (n.to_string(), v)).collect())
        .unwrap()
}

fn reference_ab() -> FeatureFrame {
    frame(vec![("A", column(0..100)), ("B", column(100..200))])
}

#[test]
fn test_no_reference() {
    let detector = DriftDetector::without_reference();
    assert!(!detector.has_reference());
    let err = detector.detect_drift(&reference_ab(), 0.05).unwrap_err();
    assert_eq!(err, DriftError::ReferenceUnavailable);
}

#[test]
fn test_identical_batch_has_no_drift() {
    let detector = DriftDetector::new(reference_ab());
    let report = detector.detect_drift(&reference_ab(), 0.05).unwrap();

    assert_eq!(report.total_features, 2);
    assert_eq!(report.compared_features, 2);
    assert!(report.drifted_features.is_empty());
    assert!(!report.overall_drift);
    for score in report.drift_scores.values() {
        assert_eq!(score.ks_statistic, 0.0);
        assert_eq!(score.p_value, 1.0);
        assert!(!score.drifted);
        assert!(score.psi < 0.01);
    }
}

#[test]
fn test_shifted_feature_drifts() {
    let detector = DriftDetector::new(reference_ab());
    let batch = frame(vec![("A", column(50..150)), ("B", column(100..200))]);
    let report = detector.detect_drift(&batch, 0.05).unwrap();

    assert_eq!(report.drifted_features, vec!["A".to_string()]);
    let a = report.drift_scores["A"];
    assert_relative_eq!(a.ks_statistic, 0.5, epsilon = 1e-12);
    assert!(a.p_value < 1e-6);
    // 1 of 2 compared features
    assert!(report.overall_drift);
}

#[test]
fn test_drift_flag_is_strict_less_than() {
    let detector = DriftDetector::new(reference_ab());

    // Identical data has p = 1 exactly
    let at_threshold = detector.detect_drift(&reference_ab(), 1.0).unwrap();
    assert!(at_threshold.drifted_features.is_empty());

    let above = detector.detect_drift(&reference_ab(), 1.0 + 1e-9).unwrap();
    assert_eq!(above.drifted_features.len(), 2);
    assert!(above.drift_scores.values().all(|s| s.drifted));
}

#[test]
fn test_overall_drift_boundary_one_in_five() {
    let reference = frame(vec![
        ("f1", column(0..100)),
        ("f2", column(0..100)),
        ("f3", column(0..100)),
        ("f4", column(0..100)),
        ("f5", column(0..100)),
    ]);
    let detector = DriftDetector::new(reference);

    let one_shifted = frame(vec![
        ("f1", column(100..200)),
        ("f2", column(0..100)),
        ("f3", column(0..100)),
        ("f4", column(0..100)),
        ("f5", column(0..100)),
    ]);
    let report = detector.detect_drift(&one_shifted, 0.05).unwrap();
    assert_eq!(report.drifted_features.len(), 1);
    assert!(!report.overall_drift);

    let two_shifted = frame(vec![
        ("f1", column(100..200)),
        ("f2", column(100..200)),
        ("f3", column(0..100)),
        ("f4", column(0..100)),
        ("f5", column(0..100)),
    ]);
    let report = detector.detect_drift(&two_shifted, 0.05).unwrap();
    assert_eq!(report.drifted_features.len(), 2);
    assert!(report.overall_drift);
}

#[test]
fn test_unknown_columns_are_skipped() {
    let detector = DriftDetector::new(reference_ab());
    let batch = frame(vec![("A", column(0..100)), ("Z", column(500..600))]);
    let report = detector.detect_drift(&batch, 0.05).unwrap();

    assert_eq!(report.total_features, 2);
    assert_eq!(report.compared_features, 1);
    assert_eq!(report.skipped_features, vec!["Z".to_string()]);
    assert!(!report.drift_scores.contains_key("Z"));
}

#[test]
fn test_drifted_features_follow_record_key_order() {
    let detector = DriftDetector::new(reference_ab());
    let rows: Vec<crate::dataset::Record> = (0..100)
        .map(|i| {
            serde_json::from_value(serde_json::json!({"B": 500 + i, "A": 300 + i})).unwrap()
        })
        .collect();
    let batch = FeatureFrame::from_records(&rows).unwrap();
    let report = detector.detect_drift(&batch, 0.05).unwrap();

    assert_eq!(report.drifted_features, vec!["B".to_string(), "A".to_string()]);
}

#[test]
fn test_missing_values_excluded_per_column() {
    let mut a = column(0..100);
    a[3] = None;
    a[7] = Some(f64::NAN);
    let detector = DriftDetector::new(frame(vec![("A", a), ("B", column(100..200))]));

    let mut batch_b = column(100..200);
    batch_b[0] = None;
    let batch = frame(vec![("A", column(0..100)), ("B", batch_b)]);
    let report = detector.detect_drift(&batch, 0.05).unwrap();

    assert_eq!(report.compared_features, 2);
    assert!(report.drift_scores.values().all(|s| s.p_value.is_finite()));
    assert!(report.drifted_features.is_empty());
}

#[test]
fn test_all_missing_column_is_skipped() {
    let detector = DriftDetector::new(reference_ab());
    let batch = frame(vec![("A", vec![None, None]), ("B", vec![Some(150.0), Some(120.0)])]);
    let report = detector.detect_drift(&batch, 0.05).unwrap();

    assert_eq!(report.skipped_features, vec!["A".to_string()]);
    assert_eq!(report.compared_features, 1);
}

#[test]
fn test_empty_batch_compares_nothing() {
    let detector = DriftDetector::new(reference_ab());
    let report = detector.detect_drift(&FeatureFrame::new(), 0.05).unwrap();
    assert_eq!(report.total_features, 0);
    assert!(!report.overall_drift);
}

#[test]
fn test_from_csv_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let detector = DriftDetector::from_csv(dir.path().join("X_train.csv"));
    assert!(!detector.has_reference());
}

#[test]
fn test_from_csv_loads_reference() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("X_train.csv");
    std::fs::write(&path, "A,B\n1,2\n3,4\n").unwrap();

    let detector = DriftDetector::from_csv(&path);
    assert!(detector.has_reference());
    assert_eq!(detector.reference().unwrap().n_rows(), 2);
}

#[test]
fn test_from_csv_malformed_degrades() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("X_train.csv");
    std::fs::write(&path, "A,B\n1,two\n").unwrap();

    let detector = DriftDetector::from_csv(&path);
    assert!(!detector.has_reference());
}

// =========================================================================
// Statistical helpers
// =========================================================================

#[test]
fn test_ks_statistic_disjoint() {
    assert_relative_eq!(ks_statistic(&[0.0, 1.0], &[2.0, 3.0]), 1.0);
}

#[test]
fn test_ks_statistic_handles_ties() {
    // Same multiset in different order
    assert_eq!(ks_statistic(&[1.0, 1.0, 2.0, 3.0], &[3.0, 2.0, 1.0, 1.0]), 0.0);
    // Ties across samples
    assert_relative_eq!(ks_statistic(&[1.0, 1.0], &[1.0, 2.0]), 0.5);
}

#[test]
fn test_ks_exact_small_cases() {
    assert_relative_eq!(ks_exact_p_value(1.0, 1, 1), 1.0);
    // P(D >= 1) for n = m = 2 is 2 / C(4, 2)
    assert_relative_eq!(ks_exact_p_value(1.0, 2, 2), 1.0 / 3.0, epsilon = 1e-12);
    assert_relative_eq!(ks_exact_p_value(0.0, 10, 7), 1.0);
}

#[test]
fn test_ks_exact_disjoint_small_samples_hit_lattice_value() {
    // P(D >= 1) for 3 vs 3 is 2 / C(6, 3)
    assert_eq!(ks_exact_p_value(1.0, 3, 3), 0.1);

    let detector = DriftDetector::new(frame(vec![("A", column(0..3))]));
    let report = detector.detect_drift(&frame(vec![("A", column(10..13))]), 0.1).unwrap();
    assert!(report.drifted_features.is_empty());
}

#[test]
fn test_ks_two_sample_empty() {
    assert!(ks_two_sample(&[], &[1.0]).is_none());
    assert!(ks_two_sample(&[1.0], &[]).is_none());
}

#[test]
fn test_ks_two_sample_is_symmetric() {
    let a: Vec<f64> = (0..30).map(|i| f64::from(i) * 0.7).collect();
    let b: Vec<f64> = (0..45).map(|i| f64::from(i) * 0.5 + 3.0).collect();
    let ab = ks_two_sample(&a, &b).unwrap();
    let ba = ks_two_sample(&b, &a).unwrap();
    assert_relative_eq!(ab.statistic, ba.statistic, epsilon = 1e-12);
    assert_relative_eq!(ab.p_value, ba.p_value, epsilon = 1e-12);
}

#[test]
fn test_ks_two_sample_large_uses_asymptotic() {
    let a: Vec<f64> = (0..200).map(f64::from).collect();
    assert!(a.len() * a.len() > KS_EXACT_MAX_PRODUCT);
    let same = ks_two_sample(&a, &a).unwrap();
    assert_eq!(same.p_value, 1.0);

    let b: Vec<f64> = (100..300).map(f64::from).collect();
    let shifted = ks_two_sample(&a, &b).unwrap();
    assert_relative_eq!(shifted.statistic, 0.5, epsilon = 1e-12);
    assert!(shifted.p_value < 1e-10);
}

#[test]
fn test_ks_p_value_bounds() {
    assert_eq!(ks_p_value(0.0), 1.0);
    assert_eq!(ks_p_value(0.1), 1.0);
    assert!(ks_p_value(1.36) < 0.06 && ks_p_value(1.36) > 0.04);
    assert!(ks_p_value(5.0) < 1e-10);
}

#[test]
fn test_population_stability_index() {
    let base: Vec<f64> = (0..100).map(|i| f64::from(i % 10)).collect();
    assert!(population_stability_index(&base, &base) < 0.01);

    let moved: Vec<f64> = (0..100).map(|i| 90.0 + f64::from(i % 10)).collect();
    assert!(population_stability_index(&base, &moved) > 0.25);
    assert_eq!(population_stability_index(&[], &moved), 0.0);
}

#[test]
fn test_bin_counts() {
    let counts = bin_counts(&[0.5, 1.0, 1.5, 2.5], &[f64::NEG_INFINITY, 1.0, 2.0, f64::INFINITY]);
    assert_eq!(counts, vec![2, 1, 1]);
}

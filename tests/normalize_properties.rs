//! Contract tests for the normalization engine: boundary behavior, center
//! handling, monotonicity, contrast shaping, and invalid-input masking.

use colornorm::{normalize, NormalizationConfig, RangeBounds};
use ndarray::Array1;

const TOL: f64 = 1e-9;

fn strategies() -> Vec<NormalizationConfig> {
    vec![
        NormalizationConfig::linear(),
        NormalizationConfig::log(2.0),
        NormalizationConfig::log(10.0),
        NormalizationConfig::sigmoid(0.5),
        NormalizationConfig::sigmoid(2.0),
    ]
}

fn sweep(vmin: f64, vmax: f64, n: usize) -> Array1<f64> {
    let step = (vmax - vmin) / (n - 1) as f64;
    Array1::from_iter((0..n).map(|i| vmin + step * i as f64))
}

#[test]
fn in_range_values_map_into_the_unit_interval() {
    let values = sweep(-100.0, 300.0, 101);
    for base in [
        RangeBounds::new(-100.0, 300.0),
        RangeBounds::new(-100.0, 300.0).with_center(0.0),
    ] {
        for config in strategies() {
            let config = config.with_bounds(base);
            let result = normalize(&values, &config).unwrap();
            for (i, v) in result.values.iter().enumerate() {
                assert!(
                    (-TOL..=1.0 + TOL).contains(v),
                    "{config:?}: value {} mapped to {v}",
                    values[i]
                );
            }
        }
    }
}

#[test]
fn negative_intensity_sigmoid_respects_the_clip() {
    // the spread direction pushes the extremes outward; clip covers that
    let values = sweep(0.0, 1.0, 51);
    let config = NormalizationConfig::sigmoid(-1.0)
        .with_bounds(RangeBounds::new(0.0, 1.0))
        .with_clip(true);
    let result = normalize(&values, &config).unwrap();
    for v in result.values.iter() {
        assert!((0.0..=1.0).contains(v), "clipped output escaped: {v}");
    }
}

#[test]
fn bounds_map_to_zero_and_one() {
    let bounds = RangeBounds::new(-4.0, 12.0).with_center(0.0);
    let edges = Array1::from(vec![-4.0, 12.0]);
    for config in [NormalizationConfig::linear(), NormalizationConfig::log(10.0)] {
        let result = normalize(&edges, &config.with_bounds(bounds)).unwrap();
        assert!(result.values[0].abs() < TOL, "{config:?}");
        assert!((result.values[1] - 1.0).abs() < TOL, "{config:?}");
    }

    // the logistic leaves a residual of 1/(1 + e^(6*scale)) at the edges
    let result =
        normalize(&edges, &NormalizationConfig::sigmoid(1.0).with_bounds(bounds)).unwrap();
    assert!(result.values[0].abs() < 5e-3);
    assert!((result.values[1] - 1.0).abs() < 5e-3);
}

#[test]
fn the_center_maps_to_one_half_for_every_strategy() {
    let bounds = RangeBounds::new(-100.0, 300.0).with_center(0.0);
    let center = Array1::from(vec![0.0]);
    for config in strategies() {
        let result = normalize(&center, &config.with_bounds(bounds)).unwrap();
        assert!(
            (result.values[0] - 0.5).abs() < TOL,
            "{config:?} moved the center to {}",
            result.values[0]
        );
    }
}

#[test]
fn degenerate_range_maps_everything_to_one_half() {
    let values = Array1::from(vec![-10.0, 7.0, 7.0, 42.0]);
    for config in strategies() {
        let result = normalize(&values, &config.with_bounds(RangeBounds::new(7.0, 7.0))).unwrap();
        for v in result.values.iter() {
            assert_eq!(*v, 0.5, "{config:?}");
        }
    }

    // constant data with derived bounds degenerates the same way
    let constant = Array1::from(vec![3.0, 3.0, 3.0]);
    let result = normalize(&constant, &NormalizationConfig::linear()).unwrap();
    assert!(result.values.iter().all(|&v| v == 0.5));
}

#[test]
fn linear_and_log_are_monotonic() {
    let values = sweep(-100.0, 300.0, 401);
    for base in [
        RangeBounds::new(-100.0, 300.0),
        RangeBounds::new(-100.0, 300.0).with_center(0.0),
    ] {
        for config in [
            NormalizationConfig::linear(),
            NormalizationConfig::log(2.0),
            NormalizationConfig::log(10.0),
        ] {
            let config = config.with_bounds(base);
            let result = normalize(&values, &config).unwrap();
            for i in 1..result.len() {
                assert!(
                    result.values[i] >= result.values[i - 1],
                    "{config:?} not monotonic at index {i}"
                );
            }
        }
    }
}

#[test]
fn log_compresses_distances_near_the_bounds() {
    let bounds = RangeBounds::new(-1.0, 1.0).with_center(0.0);
    let eps = 0.01;
    let probe = Array1::from(vec![-1.0, -1.0 + eps, 1.0 - eps, 1.0]);

    let lin = normalize(&probe, &NormalizationConfig::linear().with_bounds(bounds)).unwrap();
    let log = normalize(&probe, &NormalizationConfig::log(10.0).with_bounds(bounds)).unwrap();

    let lin_lo = lin.values[1] - lin.values[0];
    let log_lo = log.values[1] - log.values[0];
    assert!(log_lo < lin_lo, "no compression near vmin: {log_lo} >= {lin_lo}");

    let lin_hi = lin.values[3] - lin.values[2];
    let log_hi = log.values[3] - log.values[2];
    assert!(log_hi < lin_hi, "no compression near vmax: {log_hi} >= {lin_hi}");
}

#[test]
fn linear_scenario_without_center() {
    let values = Array1::from(vec![0.0, 50.0, 100.0]);
    let config = NormalizationConfig::linear().with_bounds(RangeBounds::new(0.0, 100.0));
    let result = normalize(&values, &config).unwrap();
    assert_eq!(result.values.to_vec(), vec![0.0, 0.5, 1.0]);
}

#[test]
fn linear_scenario_with_asymmetric_center() {
    // only the center itself maps to 0.5; the first segment's midpoint lands
    // at 0.25 because the two segments have different slopes
    let values = Array1::from(vec![-100.0, -50.0, 0.0, 150.0, 300.0]);
    let config = NormalizationConfig::linear()
        .with_bounds(RangeBounds::new(-100.0, 300.0).with_center(0.0));
    let result = normalize(&values, &config).unwrap();
    let expected = [0.0, 0.25, 0.5, 0.75, 1.0];
    for (v, e) in result.values.iter().zip(expected) {
        assert!((v - e).abs() < TOL);
    }
}

#[test]
fn log_scenario_midpoint_diverges_from_linear() {
    let values = Array1::from(vec![1.0, 1.5, 2.0]);
    for base in [2.0, 10.0] {
        let config =
            NormalizationConfig::log(base).with_bounds(RangeBounds::new(1.0, 2.0));
        let result = normalize(&values, &config).unwrap();
        assert!(result.values[0].abs() < TOL);
        assert!((result.values[2] - 1.0).abs() < TOL);
        let mid = result.values[1];
        assert!(mid > 0.0 && mid < 1.0);
        assert!(
            (mid - 0.5).abs() > 1e-2,
            "base {base}: midpoint {mid} indistinguishable from linear"
        );
    }
}

#[test]
fn zero_intensity_sigmoid_is_the_linear_map() {
    let values = sweep(-100.0, 300.0, 81);
    let bounds = RangeBounds::new(-100.0, 300.0).with_center(0.0);
    let lin = normalize(&values, &NormalizationConfig::linear().with_bounds(bounds)).unwrap();
    let sig = normalize(&values, &NormalizationConfig::sigmoid(0.0).with_bounds(bounds)).unwrap();
    for (a, b) in lin.values.iter().zip(sig.values.iter()) {
        assert!((a - b).abs() < TOL);
    }
}

#[test]
fn non_finite_inputs_are_masked_not_zeroed() {
    let values = Array1::from(vec![0.0, f64::NAN, 100.0, f64::INFINITY, 50.0]);
    for config in strategies() {
        let config = config.with_bounds(RangeBounds::new(0.0, 100.0));
        let result = normalize(&values, &config).unwrap();
        assert_eq!(result.len(), 5);
        assert!(!result.mask[0]);
        assert!(result.mask[1], "{config:?} did not mask NaN");
        assert!(!result.mask[2]);
        assert!(result.mask[3], "{config:?} did not mask Inf");
        assert!(!result.mask[4]);
        assert!(result.values[1].is_nan());
        assert_eq!(result.get(1), None);
    }
}

#[test]
fn non_finite_inputs_do_not_poison_derived_bounds() {
    let values = Array1::from(vec![f64::NAN, 2.0, 4.0, 6.0]);
    let result = normalize(&values, &NormalizationConfig::linear()).unwrap();
    assert!(result.mask[0]);
    assert_eq!(result.values[1], 0.0);
    assert_eq!(result.values[2], 0.5);
    assert_eq!(result.values[3], 1.0);
}

#[test]
fn clipping_saturates_out_of_range_values() {
    let values = Array1::from(vec![-50.0, 150.0]);
    let bounds = RangeBounds::new(0.0, 100.0);

    let unclipped = normalize(&values, &NormalizationConfig::linear().with_bounds(bounds)).unwrap();
    assert!((unclipped.values[0] + 0.5).abs() < TOL);
    assert!((unclipped.values[1] - 1.5).abs() < TOL);

    let clipped = normalize(
        &values,
        &NormalizationConfig::linear().with_bounds(bounds).with_clip(true),
    )
    .unwrap();
    assert_eq!(clipped.values.to_vec(), vec![0.0, 1.0]);
}

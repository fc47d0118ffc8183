//! Property-based tests for the Hyndman & Fan estimators
//!
//! These check that both estimators agree and that every method behaves like
//! a quantile function over arbitrary small samples.

use hf_quantile::{hyndman_fan, percentile, unified_hyndman_fan, Method, QuantileEstimator, Sample};
use proptest::prelude::*;

fn sample_strategy() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1e3..1e3f64, 1..50)
}

fn method_strategy() -> impl Strategy<Value = Method> {
    prop::sample::select(Method::ALL.to_vec())
}

proptest! {
    // Property: both estimators compute the same quantile
    #[test]
    fn prop_estimators_agree(
        data in sample_strategy(),
        method in method_strategy(),
        p in 0.0..=1.0f64,
    ) {
        let sample = Sample::new(&data).unwrap();
        let fast = hyndman_fan(method).quantile_sorted(&sample, p).unwrap();
        let slow = unified_hyndman_fan(method).quantile_sorted(&sample, p).unwrap();
        prop_assert!(
            (fast - slow).abs() <= 1e-9 * 1e3,
            "{}: {} vs {} at p = {}", method, fast, slow, p
        );
    }

    // Property: estimates never decrease as p grows
    #[test]
    fn prop_monotone_in_probability(
        data in sample_strategy(),
        method in method_strategy(),
        mut ps in prop::collection::vec(0.0..=1.0f64, 2..20),
    ) {
        ps.sort_by(f64::total_cmp);
        let sample = Sample::new(&data).unwrap();
        for estimator in [
            Box::new(hyndman_fan(method)) as Box<dyn QuantileEstimator>,
            Box::new(unified_hyndman_fan(method)),
        ] {
            let qs = estimator.quantiles_sorted(&sample, &ps).unwrap();
            for pair in qs.windows(2) {
                prop_assert!(pair[0] <= pair[1] + 1e-9, "{}: {:?}", method, qs);
            }
        }
    }

    // Property: every estimate lies within the sample range
    #[test]
    fn prop_bounded_by_sample(
        data in sample_strategy(),
        method in method_strategy(),
        p in 0.0..=1.0f64,
    ) {
        let sample = Sample::new(&data).unwrap();
        let q = hyndman_fan(method).quantile_sorted(&sample, p).unwrap();
        prop_assert!(q >= sample.min() - 1e-9 && q <= sample.max() + 1e-9);
    }

    // Property: 0% and 100% are the sample minimum and maximum
    #[test]
    fn prop_extremes_are_min_and_max(data in sample_strategy(), method in 1u8..=9) {
        let sample = Sample::new(&data).unwrap();
        let [low, high] = percentile(&data, [0.0, 100.0], method).unwrap();
        prop_assert_eq!(low, sample.min());
        prop_assert_eq!(high, sample.max());
    }

    // Property: input order does not matter
    #[test]
    fn prop_order_invariant(
        data in sample_strategy(),
        method in 1u8..=9,
        percent in 0.0..=100.0f64,
    ) {
        let mut reversed = data.clone();
        reversed.reverse();
        prop_assert_eq!(
            percentile(&data, percent, method).unwrap(),
            percentile(&reversed, percent, method).unwrap()
        );
    }

    // Property: a single observation is every quantile
    #[test]
    fn prop_single_observation(
        x in -1e6..1e6f64,
        method in method_strategy(),
        p in 0.0..=1.0f64,
    ) {
        prop_assert_eq!(hyndman_fan(method).quantile(&[x], p).unwrap(), x);
        // (1 - γ)·x + γ·x may round away from x by an ulp
        let unified = unified_hyndman_fan(method).quantile(&[x], p).unwrap();
        prop_assert!((unified - x).abs() <= 1e-9 * x.abs().max(1.0));
    }
}

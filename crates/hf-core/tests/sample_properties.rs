//! Property-based tests for sample construction and probability scales

use approx::assert_relative_eq;
use hf_core::{Error, ProbabilityScale, Sample};
use proptest::prelude::*;

proptest! {
    // Property: a sample holds the input values in ascending order
    #[test]
    fn prop_sample_is_sorted_permutation(data in prop::collection::vec(-1e6..1e6f64, 1..200)) {
        let sample = Sample::new(&data).unwrap();
        prop_assert_eq!(sample.len(), data.len());
        prop_assert!(sample.as_slice().windows(2).all(|w| w[0] <= w[1]));

        let mut expected = data.clone();
        expected.sort_by(f64::total_cmp);
        prop_assert_eq!(sample.as_slice(), expected.as_slice());
    }

    // Property: order statistics are clamped to the sample
    #[test]
    fn prop_order_statistic_clamps(
        data in prop::collection::vec(-1e6..1e6f64, 1..50),
        k in 0usize..100,
    ) {
        let sample = Sample::new(&data).unwrap();
        let x = sample.order_statistic(k);
        prop_assert!(x >= sample.min() && x <= sample.max());
        if k == 0 {
            prop_assert_eq!(x, sample.min());
        }
        if k >= sample.len() {
            prop_assert_eq!(x, sample.max());
        }
    }

    // Property: a sorted copy is accepted as is
    #[test]
    fn prop_from_sorted_accepts_sorted(data in prop::collection::vec(-1e6..1e6f64, 1..100)) {
        let sample = Sample::new(&data).unwrap();
        let again = Sample::from_sorted(sample.as_slice()).unwrap();
        prop_assert_eq!(sample, again);
    }

    // Property: the scales agree on the same probability
    #[test]
    fn prop_scales_agree(fraction in 0.0..=1.0f64) {
        let from_percent = ProbabilityScale::Percent.to_fraction(fraction * 100.0).unwrap();
        let from_fraction = ProbabilityScale::Fraction.to_fraction(fraction).unwrap();
        assert_relative_eq!(from_percent, from_fraction, epsilon = 1e-15);
    }

    // Property: anything outside [0, upper] is rejected with the offending value
    #[test]
    fn prop_out_of_range_rejected(excess in 1e-6..1e6f64) {
        for scale in [ProbabilityScale::Percent, ProbabilityScale::Fraction] {
            let high = scale.upper() + excess;
            prop_assert_eq!(scale.to_fraction(high), Err(Error::InvalidProbability { p: high }));
            prop_assert_eq!(scale.to_fraction(-excess), Err(Error::InvalidProbability { p: -excess }));
        }
    }
}

#[test]
fn test_non_finite_rejected_at_first_offender() {
    let data = [1.0, 2.0, f64::INFINITY, f64::NAN];
    assert_eq!(Sample::new(&data), Err(Error::NonFiniteSample { index: 2 }));
    assert_eq!(
        Sample::from_sorted(&[1.0, 3.0, 2.0]),
        Err(Error::UnsortedSample { index: 2 })
    );
}

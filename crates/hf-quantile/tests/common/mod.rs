//! Shared utilities for integration tests

#![allow(dead_code)]

use hf_quantile::Method;

/// Absolute tolerance for comparing estimates on unit-scale data
pub const EPSILON: f64 = 1e-9;

/// Percentages every reference table is evaluated at
pub const PERCENTS: [f64; 7] = [0.0, 10.0, 25.0, 50.0, 75.0, 90.0, 100.0];

/// Assert two estimates agree to within `EPSILON`, scaled by the data range
pub fn assert_close(actual: f64, expected: f64, scale: f64, context: &str) {
    let tolerance = EPSILON * scale.max(1.0);
    assert!(
        (actual - expected).abs() <= tolerance,
        "{context}: {actual} vs {expected} (diff {:e}, tolerance {:e})",
        (actual - expected).abs(),
        tolerance
    );
}

/// Largest magnitude in `data`, used to scale tolerances
pub fn magnitude(data: &[f64]) -> f64 {
    data.iter().fold(0.0_f64, |acc, x| acc.max(x.abs()))
}

/// Generate test data with various characteristics
pub fn generate_test_datasets() -> Vec<(&'static str, Vec<f64>)> {
    vec![
        // Small datasets
        ("single", vec![42.0]),
        ("pair", vec![2.0, 1.0]),
        ("tiny", vec![1.0, 2.0, 3.0]),
        // Regular patterns
        ("uniform_10", (1..=10).map(f64::from).collect()),
        ("uniform_100", (1..=100).map(f64::from).collect()),
        ("reversed_11", (0..11).rev().map(f64::from).collect()),
        // Random data (with fixed seed)
        ("random_normal", generate_normal(100, 0.0, 1.0, 42)),
        ("random_uniform", generate_uniform(97, 0.0, 10.0, 42)),
        // Edge cases
        ("duplicates", vec![1.0, 1.0, 2.0, 2.0, 3.0, 3.0]),
        ("constant", vec![7.0; 9]),
        ("with_outliers", {
            let mut data = generate_normal(100, 0.0, 1.0, 7);
            data[0] = -100.0;
            data[99] = 100.0;
            data
        }),
        // Different scales
        ("large_values", (1000..1100).map(f64::from).collect()),
        ("small_values", (0..100).map(|x| f64::from(x) * 0.001).collect()),
        // Neighbours whose difference overflows f64
        ("huge_values", vec![1e308, -1e308, -1.5e308, 1.5e308]),
    ]
}

/// Generate normal distribution data
pub fn generate_normal(n: usize, mean: f64, std_dev: f64, seed: u64) -> Vec<f64> {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use rand_distr::{Distribution, Normal};

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let normal = Normal::new(mean, std_dev).unwrap();

    (0..n).map(|_| normal.sample(&mut rng)).collect()
}

/// Generate uniform distribution data
pub fn generate_uniform(n: usize, min: f64, max: f64, seed: u64) -> Vec<f64> {
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n).map(|_| rng.gen_range(min..max)).collect()
}

/// Every method paired with its type number, for readable failure messages
pub fn all_methods() -> impl Iterator<Item = (u8, Method)> {
    Method::ALL.into_iter().map(|m| (m.type_number(), m))
}

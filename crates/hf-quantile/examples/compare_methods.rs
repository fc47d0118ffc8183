//! Compare the nine Hyndman & Fan definitions on one sample
//!
//! Run with: RUST_LOG=hf_quantile=trace cargo run -p hf-quantile --example compare_methods

use hf_quantile::{percentile, percentile_unified, Method, PercentileConfig, Strategy};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Hyndman & Fan Sample Quantiles ===\n");

    let data = vec![7.5, -2.0, 3.25, 11.0, 0.5, 4.0, 9.75];
    let percents = [10.0, 25.0, 50.0, 75.0, 90.0];
    println!("Sample: {data:?}\n");

    println!("{:<36} {:>8} {:>8} {:>8} {:>8} {:>8}", "method", "10%", "25%", "50%", "75%", "90%");
    for method in Method::ALL {
        let k = method.type_number();
        let fast = percentile(&data, percents, k)?;
        let slow = percentile_unified(&data, percents, k)?;
        let row: Vec<String> = fast.iter().map(|q| format!("{q:8.4}")).collect();
        let label = format!("{} ({})", method, method.name());
        println!("{label:<36} {}", row.join(" "));

        let drift = fast
            .iter()
            .zip(slow.iter())
            .fold(0.0_f64, |acc, (a, b)| acc.max((a - b).abs()));
        if drift > 0.0 {
            println!("{:<36} unified differs by up to {drift:e}", "");
        }
    }

    // Fractions through a configuration
    println!("\nMedian-unbiased quartiles on the fraction scale:");
    let config = PercentileConfig::new()
        .with_method(Method::MedianUnbiased)
        .with_scale(hf_quantile::ProbabilityScale::Fraction)
        .with_strategy(Strategy::Unified);
    let quartiles = config.compute(&data, [0.25, 0.5, 0.75])?;
    println!("  {quartiles:?}");

    // Errors are reported, never panicked on
    println!("\nInvalid requests:");
    if let Err(e) = percentile(&data, 50.0, 10) {
        println!("  {e}");
    }
    if let Err(e) = percentile(&data, 150.0, 7) {
        println!("  {e}");
    }

    Ok(())
}

//! Compare command implementation
//!
//! Generates a sorted dataset, runs the same queries through every strategy
//! and reports probe statistics side by side. Half of the queries hit stored
//! values, the other half fall strictly between two neighbours.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use search_core::search::{InterpolationSearch, SearchConfig, SearchStrategy};
use tracing::info;

use crate::{CliError, Result};

/// Probe statistics of one strategy over the whole query set
#[derive(Debug, Clone, PartialEq)]
pub struct CompareRow {
    /// Strategy measured
    pub strategy: SearchStrategy,
    /// Queries that found their target
    pub found: usize,
    /// Mean probes per query
    pub mean_probes: f64,
    /// Largest probe count of any query
    pub max_probes: usize,
}

/// Generate `size` sorted values following `distribution`.
fn generate(distribution: &str, size: usize, rng: &mut StdRng) -> Result<Vec<f64>> {
    match distribution {
        "uniform" => {
            let mut value = 0.0;
            Ok((0..size)
                .map(|_| {
                    value += rng.gen_range(0.5..1.5);
                    value
                })
                .collect())
        }
        "exponential" => Ok((0..size)
            .map(|i| (i as f64 * 40.0 / size as f64).exp())
            .collect()),
        other => Err(CliError::invalid_argument(format!(
            "Unknown distribution: {}. Supported: uniform, exponential",
            other
        ))),
    }
}

/// Run the compare command
pub fn run(
    size: usize,
    distribution: &str,
    queries: usize,
    seed: u64,
    base: SearchConfig,
) -> Result<Vec<CompareRow>> {
    if size < 2 {
        return Err(CliError::invalid_argument("size must be at least 2"));
    }
    if queries == 0 {
        return Err(CliError::invalid_argument("queries must be greater than 0"));
    }

    info!("Starting comparison...");
    info!("  Size: {}", size);
    info!("  Distribution: {}", distribution);
    info!("  Queries: {}", queries);
    info!("  Seed: {}", seed);

    let mut rng = StdRng::seed_from_u64(seed);
    let data = generate(distribution, size, &mut rng)?;

    let targets: Vec<f64> = (0..queries)
        .map(|q| {
            let i = rng.gen_range(0..size - 1);
            if q % 2 == 0 {
                data[i]
            } else {
                (data[i] + data[i + 1]) / 2.0
            }
        })
        .collect();

    let rows: Vec<CompareRow> = SearchStrategy::ALL
        .iter()
        .map(|&strategy| {
            let engine = InterpolationSearch::new(SearchConfig { strategy, ..base });
            let mut found = 0;
            let mut total = 0;
            let mut max_probes = 0;
            for &target in &targets {
                let report = engine.search_traced(&data, target);
                found += usize::from(report.found());
                total += report.probe_count();
                max_probes = max_probes.max(report.probe_count());
            }
            CompareRow {
                strategy,
                found,
                mean_probes: total as f64 / queries as f64,
                max_probes,
            }
        })
        .collect();

    println!("\n┌────────────────┬────────────┬────────────┬────────────┐");
    println!("│ Strategy       │ Found      │ Mean probes│ Max probes │");
    println!("├────────────────┼────────────┼────────────┼────────────┤");
    for row in &rows {
        println!(
            "│ {:<14} │ {:>10} │ {:>10.2} │ {:>10} │",
            row.strategy, row.found, row.mean_probes, row.max_probes
        );
    }
    println!("└────────────────┴────────────┴────────────┴────────────┘");

    info!("Comparison complete");
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(rows: &[CompareRow], strategy: SearchStrategy) -> &CompareRow {
        rows.iter().find(|r| r.strategy == strategy).unwrap()
    }

    #[test]
    fn test_compare_uniform() {
        let rows = run(10_000, "uniform", 200, 7, SearchConfig::default()).unwrap();
        assert_eq!(rows.len(), 3);

        // Every strategy finds exactly the stored half of the queries
        for r in &rows {
            assert_eq!(r.found, 100);
        }

        let interpolation = row(&rows, SearchStrategy::Interpolation);
        let binary = row(&rows, SearchStrategy::Binary);
        assert!(interpolation.mean_probes < binary.mean_probes);
        assert!(binary.max_probes <= 14);
    }

    #[test]
    fn test_compare_exponential() {
        let rows = run(2_000, "exponential", 100, 11, SearchConfig::default()).unwrap();

        let interpolation = row(&rows, SearchStrategy::Interpolation);
        let binary = row(&rows, SearchStrategy::Binary);
        let hybrid = row(&rows, SearchStrategy::Hybrid);

        assert_eq!(interpolation.found, 50);
        assert_eq!(binary.found, 50);
        assert_eq!(hybrid.found, 50);
        assert!(binary.max_probes <= 11);
        assert!(hybrid.mean_probes < interpolation.mean_probes);
    }

    #[test]
    fn test_compare_is_reproducible() {
        let first = run(500, "uniform", 50, 42, SearchConfig::default()).unwrap();
        let second = run(500, "uniform", 50, 42, SearchConfig::default()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_compare_rejects_bad_arguments() {
        let config = SearchConfig::default();
        assert!(matches!(
            run(1, "uniform", 10, 0, config),
            Err(CliError::InvalidArgument(_))
        ));
        assert!(matches!(
            run(10, "uniform", 0, 0, config),
            Err(CliError::InvalidArgument(_))
        ));
        assert!(matches!(
            run(10, "zipf", 10, 0, config),
            Err(CliError::InvalidArgument(_))
        ));
    }
}

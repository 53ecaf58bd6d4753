//! Demo command: the classic interpolation search walkthrough.
//!
//! Searches `[2, 4, 8, 16, 32, 64, 128, 256]` for `256` and prints every
//! probe, then repeats the search with each strategy to show how the probe
//! paths differ on geometric data.
//!
//! # Expected Output
//!
//! ```text
//! probe: 7
//! element found at index: 7
//! ```

use search_core::search::{InterpolationSearch, SearchConfig, SearchReport, SearchStrategy};

use crate::Result;

/// Sequence searched by the demo.
pub const DEMO_VALUES: [i64; 8] = [2, 4, 8, 16, 32, 64, 128, 256];

/// Value searched for by the demo.
pub const DEMO_TARGET: i64 = 256;

/// Runs the demonstration with the configured engine.
///
/// # Returns
///
/// The report of the configured engine's search.
pub fn run(engine: &InterpolationSearch) -> Result<SearchReport> {
    println!("========================================");
    println!("Interpolation Search Demo");
    println!("========================================");
    println!();
    println!("[Demo] Sequence: {:?}", DEMO_VALUES);
    println!("[Demo] Target:   {}", DEMO_TARGET);
    println!("[Demo] Strategy: {}", engine.config().strategy);
    println!();

    let report = engine.search_traced(&DEMO_VALUES, DEMO_TARGET);
    for probe in &report.probes {
        println!("probe: {}", probe);
    }
    match report.index {
        Some(index) => println!("element found at index: {}", index),
        None => println!("NOT found"),
    }
    println!();

    println!("[Demo] Probe paths for every target:");
    println!("----------------------------------------");
    println!("{:<8} {:<16} {:<16}", "Target", "Strategy", "Probes");
    println!("----------------------------------------");
    for &target in &DEMO_VALUES {
        for strategy in SearchStrategy::ALL {
            let config = SearchConfig {
                strategy,
                ..*engine.config()
            };
            let path = InterpolationSearch::new(config).search_traced(&DEMO_VALUES, target);
            println!("{:<8} {:<16} {:?}", target, strategy, path.probes);
        }
    }
    println!("----------------------------------------");

    Ok(report)
}

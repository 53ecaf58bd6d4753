//! isearch - Command Line Front End for search_core
//!
//! # Commands
//!
//! - `isearch find --values <list> --target <value>` - Search a sorted sequence
//! - `isearch demo` - Walk through the classic powers-of-two example
//! - `isearch compare --size <n> --distribution <name>` - Compare strategies
//! - `isearch config` - Print the effective configuration
//!
//! # Output
//!
//! Results go to stdout; logs go to stderr, filtered by `RUST_LOG` or else by
//! the configured `log_level`. `--verbose` lowers the default to `debug`,
//! which also prints every probe of a `find`.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use search_core::search::{InterpolationSearch, SearchStrategy};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;
mod input;

use commands::find::{FindRequest, ValueSource};
use config::CliConfig;
pub use error::{CliError, Result};

/// Interpolation search over sorted numeric sequences
#[derive(Parser)]
#[command(name = "isearch")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "isearch.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search a sorted sequence for a value
    Find {
        /// Values separated by commas or whitespace (e.g. "2,4,8,16")
        #[arg(long, allow_hyphen_values = true, required_unless_present = "file", conflicts_with = "file")]
        values: Option<String>,

        /// File of values separated by commas, whitespace or newlines
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Value to search for
        #[arg(short, long, allow_hyphen_values = true)]
        target: String,

        /// Parse values as floating point instead of integers
        #[arg(long)]
        float: bool,

        /// Report the lowest matching index among duplicates
        #[arg(long)]
        first: bool,

        /// Reject unsorted input instead of searching it
        #[arg(long)]
        check: bool,

        /// Override the configured strategy (interpolation, binary, hybrid)
        #[arg(short, long)]
        strategy: Option<String>,
    },

    /// Run the classic powers-of-two walkthrough
    Demo {
        /// Override the configured strategy (interpolation, binary, hybrid)
        #[arg(short, long)]
        strategy: Option<String>,
    },

    /// Compare probe counts of all strategies on generated data
    Compare {
        /// Number of values to generate
        #[arg(short = 'n', long, default_value = "100000")]
        size: usize,

        /// Value distribution (uniform, exponential)
        #[arg(short, long, default_value = "uniform")]
        distribution: String,

        /// Number of queries to run per strategy
        #[arg(short, long, default_value = "1000")]
        queries: usize,

        /// Random seed for data and query generation
        #[arg(long, default_value = "42")]
        seed: u64,
    },

    /// Print the effective configuration
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = CliConfig::load_with_env_and_validate(&cli.config)?;
    init_tracing(&config.log_level, cli.verbose)?;

    if cli.verbose {
        info!("Verbose mode enabled");
    }
    debug!("Configuration loaded from {}", cli.config.display());

    match cli.command {
        Commands::Find {
            values,
            file,
            target,
            float,
            first,
            check,
            strategy,
        } => {
            let engine = engine_for(&config, strategy.as_deref())?;
            let source = match (values.as_deref(), file.as_deref()) {
                (Some(text), _) => ValueSource::Inline(text),
                (None, Some(path)) => ValueSource::File(path),
                (None, None) => {
                    return Err(CliError::invalid_argument(
                        "either --values or --file is required",
                    ))
                }
            };
            let request = FindRequest {
                source,
                target: &target,
                float,
                first,
                check,
            };
            commands::find::run(&request, &engine).map(|_| ())
        }
        Commands::Demo { strategy } => {
            let engine = engine_for(&config, strategy.as_deref())?;
            commands::demo::run(&engine).map(|_| ())
        }
        Commands::Compare {
            size,
            distribution,
            queries,
            seed,
        } => commands::compare::run(size, &distribution, queries, seed, config.search).map(|_| ()),
        Commands::Config => commands::show_config::run(&config).map(|_| ()),
    }
}

/// Build the engine from the configuration and an optional strategy flag.
fn engine_for(config: &CliConfig, strategy: Option<&str>) -> Result<InterpolationSearch> {
    let mut search = config.search;
    if let Some(name) = strategy {
        search.strategy = name.parse::<SearchStrategy>()?;
    }
    Ok(InterpolationSearch::new(search))
}

/// Install the stderr fmt layer with `RUST_LOG` or the configured level.
fn init_tracing(log_level: &str, verbose: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { log_level };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .map_err(|e| CliError::Logging(e.to_string()))?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init()
        .map_err(|e| CliError::Logging(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::path::Path;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_find_with_negative_target() {
        let cli = Cli::try_parse_from(["isearch", "find", "--values", "-5,-1,3", "--target", "-1"])
            .unwrap();
        match cli.command {
            Commands::Find { values, target, .. } => {
                assert_eq!(values.as_deref(), Some("-5,-1,3"));
                assert_eq!(target, "-1");
            }
            _ => panic!("Expected Find command"),
        }
        assert_eq!(cli.config, Path::new("isearch.toml"));
    }

    #[test]
    fn test_parse_find_requires_a_source() {
        assert!(Cli::try_parse_from(["isearch", "find", "--target", "1"]).is_err());
        assert!(Cli::try_parse_from([
            "isearch", "find", "--values", "1", "--file", "x.txt", "--target", "1"
        ])
        .is_err());
    }

    #[test]
    fn test_engine_for_strategy_override() {
        let config = CliConfig::default();
        let engine = engine_for(&config, Some("binary")).unwrap();
        assert_eq!(engine.config().strategy, SearchStrategy::Binary);

        let engine = engine_for(&config, None).unwrap();
        assert_eq!(engine.config().strategy, SearchStrategy::Interpolation);

        assert!(matches!(
            engine_for(&config, Some("linear")),
            Err(CliError::Search(_))
        ));
    }
}

//! Find command implementation
//!
//! Searches a user-supplied sorted sequence for a target value.

use std::fmt::Display;
use std::path::Path;
use std::str::FromStr;

use search_core::search::{check_sorted, InterpolationSearch};
use search_core::types::SearchKey;
use tracing::{debug, info};

use crate::input;
use crate::Result;

/// Where the sequence comes from
#[derive(Debug, Clone, Copy)]
pub enum ValueSource<'a> {
    /// Numbers given directly on the command line
    Inline(&'a str),
    /// Path to a file of numbers
    File(&'a Path),
}

/// Parsed arguments of one `find` invocation
#[derive(Debug, Clone, Copy)]
pub struct FindRequest<'a> {
    /// Sequence to search
    pub source: ValueSource<'a>,
    /// Target value, parsed with the same numeric type as the sequence
    pub target: &'a str,
    /// Parse values as `f64` instead of `i64`
    pub float: bool,
    /// Report the lowest matching index among duplicates
    pub first: bool,
    /// Reject unsorted input instead of searching it
    pub check: bool,
}

/// Run the find command
///
/// Prints the result line and returns the index found, if any.
pub fn run(request: &FindRequest<'_>, engine: &InterpolationSearch) -> Result<Option<usize>> {
    info!("Starting search...");
    info!("  Strategy: {}", engine.config().strategy);
    info!("  Numeric type: {}", if request.float { "f64" } else { "i64" });

    let index = if request.float {
        find_typed::<f64>(request, engine)?
    } else {
        find_typed::<i64>(request, engine)?
    };

    match index {
        Some(index) => println!("element found at index: {}", index),
        None => println!("NOT found"),
    }

    Ok(index)
}

fn find_typed<K>(request: &FindRequest<'_>, engine: &InterpolationSearch) -> Result<Option<usize>>
where
    K: SearchKey + FromStr + Display,
    K::Err: Display,
{
    let values: Vec<K> = match request.source {
        ValueSource::Inline(text) => input::parse_values(text)?,
        ValueSource::File(path) => {
            info!("  Input file: {}", path.display());
            input::read_values_file(path)?
        }
    };
    let target: K = input::parse_target(request.target)?;
    info!("  Sequence length: {}", values.len());

    if request.check {
        check_sorted(&values)?;
    }

    let report = engine.search_traced(&values, target);
    for &probe in &report.probes {
        debug!("probe: {} (value {})", probe, values[probe]);
    }

    let index = if request.first {
        engine.search_first(&values, target)
    } else {
        report.index
    };

    info!("Search complete after {} probes", report.probe_count());
    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CliError;
    use search_core::search::SearchConfig;
    use search_core::types::SearchError;
    use std::io::Write;

    fn request<'a>(values: &'a str, target: &'a str) -> FindRequest<'a> {
        FindRequest {
            source: ValueSource::Inline(values),
            target,
            float: false,
            first: false,
            check: false,
        }
    }

    #[test]
    fn test_find_original_scenario() {
        let engine = InterpolationSearch::with_defaults();
        let values = "2,4,8,16,32,64,128,256";
        assert_eq!(run(&request(values, "256"), &engine).unwrap(), Some(7));
        assert_eq!(run(&request(values, "5"), &engine).unwrap(), None);
    }

    #[test]
    fn test_find_first_duplicate() {
        let engine = InterpolationSearch::new(SearchConfig::binary());
        let req = FindRequest {
            first: true,
            ..request("1,3,3,3,3,3,3,9", "3")
        };
        assert_eq!(run(&req, &engine).unwrap(), Some(1));
    }

    #[test]
    fn test_find_floats() {
        let engine = InterpolationSearch::with_defaults();
        let req = FindRequest {
            float: true,
            ..request("-1.5, 0.25, 3.75", "0.25")
        };
        assert_eq!(run(&req, &engine).unwrap(), Some(1));
    }

    #[test]
    fn test_find_empty_sequence() {
        let engine = InterpolationSearch::with_defaults();
        assert_eq!(run(&request("", "1"), &engine).unwrap(), None);
    }

    #[test]
    fn test_find_checked_rejects_unsorted() {
        let engine = InterpolationSearch::with_defaults();
        let req = FindRequest {
            check: true,
            ..request("5,1,3", "3")
        };
        match run(&req, &engine) {
            Err(CliError::Search(SearchError::UnsortedInput { index })) => assert_eq!(index, 0),
            other => panic!("Expected UnsortedInput error, got {:?}", other),
        }
    }

    #[test]
    fn test_find_bad_target() {
        let engine = InterpolationSearch::with_defaults();
        let result = run(&request("1,2,3", "two"), &engine);
        assert!(matches!(result, Err(CliError::Parse(_))));
    }

    #[test]
    fn test_find_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "100\n200\n300\n400").unwrap();

        let engine = InterpolationSearch::with_defaults();
        let req = FindRequest {
            source: ValueSource::File(file.path()),
            target: "300",
            float: false,
            first: false,
            check: true,
        };
        assert_eq!(run(&req, &engine).unwrap(), Some(2));
    }
}

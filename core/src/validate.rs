//! Structural validation for option tables.
//!
//! The parser itself never validates the table it is handed; a malformed
//! table degrades to first-match-wins behavior. Callers that build tables
//! programmatically (or load them from JSON) can run [`validate_table`] to
//! catch the structural problems before they reach the parser.
//!
//! # Examples
//!
//! ```
//! use optline_core::{Opt, validate_table};
//!
//! let good = vec![Opt::switch("-h", "--help", "Show help")];
//! assert!(validate_table(&good).is_empty());
//!
//! // Short flag missing its leading dash
//! let bad = vec![Opt::switch("h", "--help", "Show help")];
//! assert!(!validate_table(&bad).is_empty());
//! ```

use std::collections::HashSet;

use thiserror::Error;

use crate::Opt;

/// Option table validation errors.
///
/// Each variant describes a specific structural problem found during
/// validation. The `Display` impl provides a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// Short flag is not a single-dash form (e.g. `"v"` instead of `"-v"`).
    #[error("invalid short flag format: {0}")]
    InvalidShortFlag(String),
    /// Long flag does not start with `--` or has nothing after the prefix.
    #[error("invalid long flag format: {0}")]
    InvalidLongFlag(String),
    /// Two options in the table derive the same storage key.
    #[error("duplicate option key: {0}")]
    DuplicateKey(String),
    /// One option's flag is a literal prefix of another's, so table order
    /// alone decides which one a token selects.
    #[error("ambiguous flags: {0} is a prefix of {1}")]
    AmbiguousPrefix(String, String),
}

/// Validates an ordered option table.
///
/// Returns every problem found; an empty vector means the table is
/// well-formed. Checks short/long flag formats, duplicate derived keys, and
/// prefix overlaps between flags (the parser matches on prefix, so an
/// overlap makes matching order-dependent).
///
/// # Examples
///
/// ```
/// use optline_core::{Opt, TableError, validate_table};
///
/// let table = vec![
///     Opt::switch("-v", "--version", "Show version"),
///     Opt::switch("-V", "--version", "Show verbose version"),
/// ];
/// let errors = validate_table(&table);
/// assert!(errors.iter().any(|e| matches!(e, TableError::DuplicateKey(_))));
/// ```
pub fn validate_table(opts: &[Opt]) -> Vec<TableError> {
    let mut errors = Vec::new();

    for opt in opts {
        if !is_short_form(&opt.flag) {
            errors.push(TableError::InvalidShortFlag(opt.flag.clone()));
        }
        if !is_long_form(&opt.flag_long) {
            errors.push(TableError::InvalidLongFlag(opt.flag_long.clone()));
        }
    }

    let mut seen_keys: HashSet<&str> = HashSet::new();
    for opt in opts {
        let key = opt.key();
        if !key.is_empty() && !seen_keys.insert(key) {
            errors.push(TableError::DuplicateKey(key.to_string()));
        }
    }

    for (i, a) in opts.iter().enumerate() {
        for b in opts.iter().skip(i + 1) {
            for (x, y) in flag_pairs(a, b) {
                if !x.is_empty() && y.starts_with(x) {
                    errors.push(TableError::AmbiguousPrefix(x.to_string(), y.to_string()));
                } else if !y.is_empty() && x.starts_with(y) {
                    errors.push(TableError::AmbiguousPrefix(y.to_string(), x.to_string()));
                }
            }
        }
    }

    errors
}

fn is_short_form(flag: &str) -> bool {
    flag.len() >= 2 && flag.starts_with('-') && !flag.starts_with("--")
}

fn is_long_form(flag: &str) -> bool {
    flag.len() > 2 && flag.starts_with("--")
}

/// Cross-option flag combinations that must not overlap on prefix.
fn flag_pairs<'a>(a: &'a Opt, b: &'a Opt) -> [(&'a str, &'a str); 4] {
    [
        (a.flag.as_str(), b.flag.as_str()),
        (a.flag.as_str(), b.flag_long.as_str()),
        (a.flag_long.as_str(), b.flag.as_str()),
        (a.flag_long.as_str(), b.flag_long.as_str()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> Vec<Opt> {
        vec![
            Opt::switch("-h", "--help", "Show help"),
            Opt::switch("-q", "--quiet", "Be quiet"),
            Opt::with_value("-l", "--log", "Set the logging verbosity", "LEVEL")
                .with_choices(["error", "warning", "info", "trace"]),
        ]
    }

    #[test]
    fn test_well_formed_table() {
        assert!(validate_table(&sample_table()).is_empty());
    }

    #[test]
    fn test_invalid_short_flag() {
        let table = vec![Opt::switch("h", "--help", "Show help")];
        let errors = validate_table(&table);

        assert!(
            errors
                .iter()
                .any(|e| matches!(e, TableError::InvalidShortFlag(f) if f == "h"))
        );
    }

    #[test]
    fn test_invalid_long_flag() {
        let table = vec![Opt::switch("-h", "-help", "Show help")];
        let errors = validate_table(&table);

        assert!(
            errors
                .iter()
                .any(|e| matches!(e, TableError::InvalidLongFlag(f) if f == "-help"))
        );
    }

    #[test]
    fn test_duplicate_key() {
        let mut table = sample_table();
        table.push(Opt::with_value("-L", "--log", "Log to file", "FILE"));
        let errors = validate_table(&table);

        assert!(
            errors
                .iter()
                .any(|e| matches!(e, TableError::DuplicateKey(k) if k == "log"))
        );
    }

    #[test]
    fn test_long_flag_prefix_overlap() {
        let table = vec![
            Opt::with_value("-l", "--log", "Verbosity", "LEVEL"),
            Opt::with_value("-f", "--logfile", "Log file", "FILE"),
        ];
        let errors = validate_table(&table);

        assert!(errors.iter().any(
            |e| matches!(e, TableError::AmbiguousPrefix(a, b) if a == "--log" && b == "--logfile")
        ));
    }

    #[test]
    fn test_own_forms_do_not_overlap() {
        // -l vs --log within one option is fine; the long prefix is --, not -l.
        let table = vec![Opt::with_value("-l", "--log", "Verbosity", "LEVEL")];
        assert!(validate_table(&table).is_empty());
    }
}

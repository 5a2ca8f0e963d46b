//! Core option descriptor types and table validation.
//!
//! This crate defines the leaf data model consumed by `optline-parser`:
//!
//! - [`Opt`] — a single option descriptor with short/long forms, help text,
//!   an optional value placeholder, and an optional closed choice set.
//! - [`validate_table`] — structural checks for a table of descriptors
//!   (duplicate keys, malformed flags, ambiguous prefixes).
//!
//! An option table is nothing more than an ordered `Vec<Opt>`. Order matters
//! twice: it is the display order of the usage block, and it is the match
//! precedence during parsing (first structural match wins).
//!
//! # Example
//!
//! ```
//! use optline_core::{Opt, validate_table};
//!
//! let opts = vec![
//!     Opt::switch("-h", "--help", "Display this help and exit"),
//!     Opt::with_value("-c", "--config", "Path to the configuration file", "FILE"),
//!     Opt::with_value("-l", "--log", "Set the logging verbosity", "LEVEL")
//!         .with_choices(["error", "warning", "info", "trace"]),
//! ];
//!
//! assert_eq!(opts[1].key(), "config");
//! assert!(opts[2].takes_value());
//! assert!(validate_table(&opts).is_empty());
//! ```

mod types;
mod validate;

pub use types::Opt;
pub use validate::{TableError, validate_table};

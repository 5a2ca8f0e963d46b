//! Table-driven command-line argument parsing.
//!
//! This crate consumes an ordered option table from [`optline_core`] and
//! parses a raw token sequence against it in a single left-to-right pass
//! with one-token lookahead. It also renders the table as an aligned usage
//! block.
//!
//! # Main entry points
//!
//! - [`Parser::new`] — take ownership of a synopsis and an option table.
//! - [`Parser::process_input`] — consume the token sequence once.
//! - [`Parser::has`] / [`Parser::get`] / [`Parser::compare`] — query parsed
//!   values by option key.
//! - [`Parser::usage`] — render the usage block at any time.
//!
//! # Example
//!
//! ```
//! use optline_core::Opt;
//! use optline_parser::Parser;
//!
//! let opts = vec![
//!     Opt::switch("-q", "--quiet", "Be quiet"),
//!     Opt::with_value("-l", "--log", "Set the logging verbosity", "LEVEL")
//!         .with_choices(["error", "warning", "info", "trace"]),
//! ];
//!
//! let mut parser = Parser::new("Usage: mytool [OPTION...]", opts);
//! let argv: Vec<String> = vec!["--log".into(), "info".into(), "-q".into()];
//! parser.process_input(&argv)?;
//!
//! assert!(parser.has("quiet"));
//! assert_eq!(parser.get("log"), "info");
//! assert!(parser.compare("log", "info"));
//! # Ok::<(), optline_parser::ParseError>(())
//! ```
//!
//! # Crate type
//!
//! This is a **library-only crate** with no binary targets. The
//! `optline-cli` crate provides the `optline` binary built on top of it.

mod error;
mod parse;
mod usage;

pub use error::ParseError;
pub use parse::Parser;

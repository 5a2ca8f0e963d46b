//! Parse error kinds.

use thiserror::Error;

/// Errors raised while processing an input token sequence.
///
/// All three kinds are fatal to the parsing pass: the parser stops at the
/// offending token and propagates the error to whatever drives the parse.
/// Tokens that do not look like flags and match no option are never an
/// error; they pass through silently as positional arguments.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A value-bearing option was matched, but neither a following token
    /// nor an inline `=value` suffix supplied a value.
    #[error("missing value for {0}")]
    MissingValue(String),
    /// The extracted value is not a member of the option's choice set.
    #[error("invalid argument '{value}' for {option}")]
    InvalidChoice {
        /// The option token as it appeared on the input.
        option: String,
        /// The rejected value.
        value: String,
    },
    /// A dash-prefixed token matched no option in the table.
    #[error("unrecognized option {0}")]
    UnrecognizedOption(String),
}

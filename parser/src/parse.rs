//! Single-pass token matching and value extraction.

use std::collections::BTreeMap;

use tracing::debug;

use optline_core::Opt;

use crate::ParseError;

/// One-token lookahead state carried across scan positions.
///
/// `ValueConsumed` means the previous match already took the following
/// token as its value, so that token must not be re-examined as a fresh
/// argument. The state transitions back to `Ready` as soon as the next
/// position is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lookahead {
    Ready,
    ValueConsumed,
}

/// Table-driven argument parser.
///
/// Owns a synopsis line and an ordered option table, both immutable after
/// construction. [`process_input`](Parser::process_input) populates the
/// key→value mapping; the query methods and
/// [`usage`](Parser::usage) read it and the table respectively.
///
/// # Examples
///
/// ```
/// use optline_core::Opt;
/// use optline_parser::Parser;
///
/// let opts = vec![Opt::switch("-h", "--help", "Show help")];
/// let mut parser = Parser::new("Usage: mytool [OPTION...]", opts);
///
/// let argv: Vec<String> = vec!["-h".into()];
/// parser.process_input(&argv)?;
/// assert!(parser.has("help"));
/// assert_eq!(parser.get("help"), "");
/// # Ok::<(), optline_parser::ParseError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Parser {
    synopsis: String,
    opts: Vec<Opt>,
    keys: Vec<String>,
    values: BTreeMap<String, String>,
    lookahead: Lookahead,
}

impl Parser {
    /// Creates a parser from a synopsis line and an ordered option table.
    ///
    /// Storage keys are derived from the long flags once, here; lookup
    /// never strips prefixes again.
    pub fn new(synopsis: impl Into<String>, opts: Vec<Opt>) -> Self {
        let keys = opts.iter().map(|opt| opt.key().to_string()).collect();
        Self {
            synopsis: synopsis.into(),
            opts,
            keys,
            values: BTreeMap::new(),
            lookahead: Lookahead::Ready,
        }
    }

    /// The synopsis line supplied at construction.
    pub fn synopsis(&self) -> &str {
        &self.synopsis
    }

    /// The option table, in display and match-precedence order.
    pub fn opts(&self) -> &[Opt] {
        &self.opts
    }

    /// Processes a raw token sequence left to right.
    ///
    /// Each position is matched against the table in order; the first
    /// option whose short or long flag is a prefix of the token wins. A
    /// value-bearing option prefers a non-empty following token as its
    /// value, falling back to an inline `=value` suffix on a long-form
    /// token. Dash-prefixed tokens matching nothing are an error;
    /// anything else passes through silently.
    ///
    /// Repeated invocations accumulate into the same mapping; the parser
    /// is meant to see its input exactly once. For a repeated option the
    /// first recorded value wins.
    ///
    /// # Errors
    ///
    /// Stops at the offending token with [`ParseError::MissingValue`],
    /// [`ParseError::InvalidChoice`], or [`ParseError::UnrecognizedOption`].
    ///
    /// # Examples
    ///
    /// ```
    /// use optline_core::Opt;
    /// use optline_parser::Parser;
    ///
    /// let opts = vec![Opt::with_value("-c", "--config", "Config file", "FILE")];
    /// let mut parser = Parser::new("Usage: mytool [OPTION...]", opts);
    ///
    /// let argv: Vec<String> = vec!["--config=/etc/rc".into()];
    /// parser.process_input(&argv)?;
    /// assert_eq!(parser.get("config"), "/etc/rc");
    /// # Ok::<(), optline_parser::ParseError>(())
    /// ```
    pub fn process_input(&mut self, values: &[String]) -> Result<(), ParseError> {
        for i in 0..values.len() {
            let next = values.get(i + 1).map(String::as_str);
            self.parse(&values[i], next)?;
        }
        Ok(())
    }

    /// Whether a value (possibly empty) was recorded under `key`.
    pub fn has(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// The value recorded under `key`, or the empty string if absent.
    ///
    /// Absence is indistinguishable from an explicit empty value here; use
    /// [`has`](Parser::has) when the distinction matters.
    pub fn get(&self, key: &str) -> &str {
        self.values.get(key).map(String::as_str).unwrap_or("")
    }

    /// Compares the value recorded under `key` with `expected`.
    pub fn compare(&self, key: &str, expected: &str) -> bool {
        self.get(key) == expected
    }

    /// Matches a single token, with the following token as lookahead.
    fn parse(&mut self, input: &str, input_next: Option<&str>) -> Result<(), ParseError> {
        if self.lookahead == Lookahead::ValueConsumed {
            self.lookahead = Lookahead::Ready;
            if input_next.is_some() {
                debug!(token = input, "skipping token already consumed as a value");
                return Ok(());
            }
        }

        for (idx, opt) in self.opts.iter().enumerate() {
            if !opt.matches(input) {
                continue;
            }

            let key = self.keys[idx].clone();
            if !opt.takes_value() {
                debug!(option = %opt.flag_long, key = %key, "matched switch");
                self.values.entry(key).or_default();
            } else {
                let (value, consumed_next) = parse_value(input, input_next, &opt.choices)?;
                if consumed_next {
                    self.lookahead = Lookahead::ValueConsumed;
                }
                debug!(
                    option = %opt.flag_long,
                    key = %key,
                    value = %value,
                    from_next = consumed_next,
                    "matched option"
                );
                self.values.entry(key).or_insert(value);
            }
            return Ok(());
        }

        if input.starts_with('-') {
            return Err(ParseError::UnrecognizedOption(input.to_string()));
        }

        debug!(token = input, "ignoring token that does not look like a flag");
        Ok(())
    }
}

/// Extracts the value for a matched value-bearing option.
///
/// Returns the value and whether it was taken from the following token. A
/// non-empty following token is always preferred; otherwise the current
/// token must be long-form and carry an inline `=value` suffix. Everything
/// else is a missing value.
fn parse_value(
    input: &str,
    input_next: Option<&str>,
    choices: &[String],
) -> Result<(String, bool), ParseError> {
    let next = input_next.filter(|s| !s.is_empty());

    let (option, value, consumed_next) = match next {
        Some(v) => (input, v.to_string(), true),
        None => {
            if !input.starts_with("--") {
                return Err(ParseError::MissingValue(input.to_string()));
            }
            let Some((option, value)) = input.split_once('=') else {
                return Err(ParseError::MissingValue(input.to_string()));
            };
            (option, value.to_string(), false)
        }
    };

    if !choices.is_empty() && !choices.iter().any(|c| *c == value) {
        return Err(ParseError::InvalidChoice {
            option: option.to_string(),
            value,
        });
    }

    Ok((value, consumed_next))
}

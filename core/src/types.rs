//! Option descriptor type.
//!
//! [`Opt`] is immutable leaf data with no parsing behavior of its own. The
//! descriptors serialize with [`serde`] so that whole option tables can
//! round-trip through JSON.

use serde::{Deserialize, Serialize};

/// A single command-line option descriptor.
///
/// An option always carries both a short form (e.g. `-l`) and a long form
/// (e.g. `--log`). The text of the long form after its `--` prefix is the
/// canonical **key** under which a parsed value is stored and later queried.
///
/// A descriptor with an empty [`token`](Opt::token) is a boolean switch: it
/// takes no value and is recorded with an empty string when encountered. A
/// non-empty `token` names the value placeholder shown in the usage block
/// (e.g. `--log=LEVEL`), and a non-empty [`choices`](Opt::choices) list
/// closes the set of values the parser will accept.
///
/// # Examples
///
/// ```
/// use optline_core::Opt;
///
/// let quiet = Opt::switch("-q", "--quiet", "Be quiet");
/// assert_eq!(quiet.key(), "quiet");
/// assert!(!quiet.takes_value());
///
/// let log = Opt::with_value("-l", "--log", "Set the logging verbosity", "LEVEL")
///     .with_choices(["error", "warning", "info", "trace"]);
/// assert!(log.takes_value());
/// assert_eq!(log.choices, vec!["error", "warning", "info", "trace"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Opt {
    /// Short form (e.g. "-l")
    pub flag: String,
    /// Long form (e.g. "--log"); its suffix after `--` is the storage key
    pub flag_long: String,
    /// Description shown in the usage block
    pub description: String,
    /// Value placeholder name; empty means the option is a boolean switch
    #[serde(default)]
    pub token: String,
    /// Allowed literal values; empty means any value is accepted
    #[serde(default)]
    pub choices: Vec<String>,
}

impl Opt {
    /// Creates a boolean switch taking no value.
    ///
    /// # Examples
    ///
    /// ```
    /// use optline_core::Opt;
    ///
    /// let opt = Opt::switch("-h", "--help", "Display this help and exit");
    /// assert!(!opt.takes_value());
    /// assert!(opt.matches("--help"));
    /// ```
    pub fn switch(flag: &str, flag_long: &str, description: &str) -> Self {
        Self {
            flag: flag.to_string(),
            flag_long: flag_long.to_string(),
            description: description.to_string(),
            token: String::new(),
            choices: Vec::new(),
        }
    }

    /// Creates an option that takes a value, with `token` as the placeholder
    /// name rendered in the usage block.
    ///
    /// # Examples
    ///
    /// ```
    /// use optline_core::Opt;
    ///
    /// let opt = Opt::with_value("-c", "--config", "Path to the configuration file", "FILE");
    /// assert!(opt.takes_value());
    /// assert_eq!(opt.token, "FILE");
    /// ```
    pub fn with_value(flag: &str, flag_long: &str, description: &str, token: &str) -> Self {
        Self {
            flag: flag.to_string(),
            flag_long: flag_long.to_string(),
            description: description.to_string(),
            token: token.to_string(),
            choices: Vec::new(),
        }
    }

    /// Restricts the accepted values to a closed choice set.
    pub fn with_choices<I, S>(mut self, choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.choices = choices.into_iter().map(Into::into).collect();
        self
    }

    /// Returns the canonical storage key: the long form stripped of its
    /// `--` prefix.
    ///
    /// This is the one place key derivation happens; the parser computes
    /// every key once when it takes ownership of the table.
    ///
    /// # Examples
    ///
    /// ```
    /// use optline_core::Opt;
    ///
    /// assert_eq!(Opt::switch("-h", "--help", "").key(), "help");
    /// ```
    pub fn key(&self) -> &str {
        self.flag_long
            .strip_prefix("--")
            .unwrap_or(&self.flag_long)
    }

    /// Whether this option expects a value.
    pub fn takes_value(&self) -> bool {
        !self.token.is_empty()
    }

    /// Checks whether an input token selects this option.
    ///
    /// Both forms match on prefix, so `--log=info` selects `--log`. A short
    /// flag that is a literal prefix of an unrelated long flag therefore
    /// causes ambiguous matches; [`validate_table`](crate::validate_table)
    /// flags such tables.
    ///
    /// # Examples
    ///
    /// ```
    /// use optline_core::Opt;
    ///
    /// let opt = Opt::with_value("-l", "--log", "", "LEVEL");
    /// assert!(opt.matches("-l"));
    /// assert!(opt.matches("--log"));
    /// assert!(opt.matches("--log=info"));
    /// assert!(!opt.matches("--quiet"));
    /// ```
    pub fn matches(&self, input: &str) -> bool {
        input.starts_with(self.flag.as_str()) || input.starts_with(self.flag_long.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_switch_creation() {
        let opt = Opt::switch("-q", "--quiet", "Be quiet");

        assert_eq!(opt.flag, "-q");
        assert_eq!(opt.flag_long, "--quiet");
        assert_eq!(opt.token, "");
        assert!(!opt.takes_value());
        assert_eq!(opt.key(), "quiet");
    }

    #[test]
    fn test_with_value_and_choices() {
        let opt = Opt::with_value("-l", "--log", "Set the logging verbosity", "LEVEL")
            .with_choices(["error", "warning"]);

        assert!(opt.takes_value());
        assert_eq!(opt.token, "LEVEL");
        assert_eq!(opt.choices, vec!["error", "warning"]);
    }

    #[test]
    fn test_matches_on_prefix() {
        let opt = Opt::with_value("-c", "--config", "", "FILE");

        assert!(opt.matches("-c"));
        assert!(opt.matches("--config"));
        assert!(opt.matches("--config=/etc/rc"));
        assert!(!opt.matches("--log"));
    }

    #[test]
    fn test_json_round_trip() {
        let opt = Opt::with_value("-f", "--format", "Output format", "FORMAT")
            .with_choices(["plain", "json"]);

        let json = serde_json::to_string(&opt).unwrap();
        let back: Opt = serde_json::from_str(&json).unwrap();
        assert_eq!(back, opt);
    }

    #[test]
    fn test_switch_fields_default_when_absent() {
        let opt: Opt = serde_json::from_str(
            r#"{"flag":"-h","flag_long":"--help","description":"Show help"}"#,
        )
        .unwrap();

        assert!(!opt.takes_value());
        assert!(opt.choices.is_empty());
    }
}

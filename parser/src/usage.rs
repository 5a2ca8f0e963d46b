//! Usage block rendering.
//!
//! Pure formatting over the immutable option table: rendering never touches
//! parser state, so it can be interleaved freely with parsing and queries.

use std::io;

use crate::Parser;

impl Parser {
    /// Renders the usage block: the synopsis, a blank line, then one line
    /// per option in table order.
    ///
    /// Descriptions are aligned to a column computed from the widest flag
    /// definition. Value-bearing options render their placeholder as
    /// `--flag=TOKEN`, and a closed choice set adds an indented
    /// continuation line listing the accepted values.
    ///
    /// # Examples
    ///
    /// ```
    /// use optline_core::Opt;
    /// use optline_parser::Parser;
    ///
    /// let opts = vec![
    ///     Opt::switch("-h", "--help", "Show help"),
    ///     Opt::with_value("-l", "--log", "Set the logging verbosity", "LEVEL")
    ///         .with_choices(["error", "warning", "info", "trace"]),
    /// ];
    /// let parser = Parser::new("Usage: mytool [OPTION...]", opts);
    ///
    /// let text = parser.usage();
    /// assert!(text.starts_with("Usage: mytool [OPTION...]\n\n"));
    /// assert!(text.contains("  -l, --log=LEVEL"));
    /// assert!(text.contains("LEVEL is one of: error, warning, info, trace"));
    /// ```
    pub fn usage(&self) -> String {
        let mut out = String::new();
        out.push_str(self.synopsis());
        out.push_str("\n\n");

        // Widest flag column decides where descriptions start.
        let maxlen = self
            .opts()
            .iter()
            .map(|opt| opt.flag_long.len() + opt.flag.len() + 4)
            .max()
            .unwrap_or(0);

        for opt in self.opts() {
            let mut pad = maxlen.saturating_sub(opt.flag_long.len() + opt.token.len());

            out.push_str("  ");
            out.push_str(&opt.flag);
            out.push_str(", ");
            out.push_str(&opt.flag_long);

            if opt.takes_value() {
                out.push('=');
                out.push_str(&opt.token);
                pad = pad.saturating_sub(1);
            }

            out.push_str(&" ".repeat(pad));
            out.push_str(&opt.description);
            out.push('\n');

            if !opt.choices.is_empty() {
                let indent = pad + opt.flag_long.len() + opt.token.len() + 7;
                out.push_str(&" ".repeat(indent));
                out.push_str(&opt.token);
                out.push_str(" is one of: ");
                out.push_str(&opt.choices.join(", "));
                out.push('\n');
            }
        }

        out
    }

    /// Writes the usage block to a caller-visible output stream.
    ///
    /// # Errors
    ///
    /// Propagates any write error from the sink.
    pub fn write_usage<W: io::Write>(&self, mut writer: W) -> io::Result<()> {
        writer.write_all(self.usage().as_bytes())
    }
}

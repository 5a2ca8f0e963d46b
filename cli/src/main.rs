use std::env;
use std::io;
use std::process;

use optline_core::{Opt, validate_table};
use optline_parser::Parser;

const PACKAGE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Option table for the demo binary.
///
/// Debug builds assert the table is structurally sound; the parser itself
/// never checks.
fn build_opts() -> Vec<Opt> {
    let opts = vec![
        Opt::switch("-h", "--help", "Display this help and exit"),
        Opt::switch("-v", "--version", "Display build details and exit"),
        Opt::switch("-q", "--quiet", "Suppress the parse report"),
        Opt::with_value("-l", "--log", "Set the logging verbosity", "LEVEL")
            .with_choices(["error", "warning", "info", "debug", "trace"]),
        Opt::with_value("-c", "--config", "Path to the configuration file", "FILE"),
        Opt::with_value("-f", "--format", "Report output format", "FORMAT")
            .with_choices(["plain", "json"]),
    ];
    debug_assert!(validate_table(&opts).is_empty());
    opts
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    let mut parser = Parser::new("Usage: optline [OPTION...] [ARG...]", build_opts());

    if let Err(err) = parser.process_input(&args) {
        eprintln!("error: {err}");
        let _ = parser.write_usage(io::stderr());
        process::exit(1);
    }

    if let Err(err) = run(&parser) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

fn run(parser: &Parser) -> io::Result<()> {
    if parser.has("help") {
        return parser.write_usage(io::stdout());
    }

    if parser.has("version") {
        println!("optline {PACKAGE_VERSION}");
        return Ok(());
    }

    if !parser.has("quiet") {
        print_report(parser);
    }
    Ok(())
}

/// Prints every option recorded on the command line, keyed by its long form.
fn print_report(parser: &Parser) {
    if parser.compare("format", "json") {
        let mut report = serde_json::Map::new();
        for opt in parser.opts() {
            let key = opt.key();
            if parser.has(key) {
                report.insert(key.to_string(), parser.get(key).into());
            }
        }
        println!("{}", serde_json::Value::Object(report));
        return;
    }

    for opt in parser.opts() {
        let key = opt.key();
        if parser.has(key) {
            println!("{key}={}", parser.get(key));
        }
    }
}

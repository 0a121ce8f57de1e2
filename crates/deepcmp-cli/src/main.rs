//! Command-line interface for the deepcmp structural comparison toolkit.
//!
//! `dcmp` reads two documents, compares them with `deepcmp-core`, and prints
//! the difference report. The exit code tells scripts what happened: 0 when
//! the documents are deeply equal, 1 when differences were found, and 2 when
//! the comparison could not run at all.

use std::fmt;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use deepcmp_core::{compare, from_json_str, from_yaml_str, ParseError, RenderStyle, Report};
use serde_json::Value;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
enum OutputFormat {
    /// Human-readable difference lines.
    Text,
    /// The report as a JSON array.
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Text
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "dcmp",
    version,
    about = "Deeply compare two JSON or YAML documents",
    after_help = "Exit codes:\n  0  the documents are deeply equal\n  1  differences were found\n  2  the comparison could not run"
)]
struct Cli {
    /// File holding the expected document.
    expected: PathBuf,

    /// File holding the actual document; read from STDIN when omitted.
    actual: Option<PathBuf>,

    /// Parse the inputs as YAML instead of JSON.
    #[arg(long = "yaml")]
    yaml: bool,

    /// Report output format.
    #[arg(short = 'f', long = "format", value_enum, default_value = "text")]
    format: OutputFormat,

    /// Render the report using ANSI colors.
    #[arg(long = "color")]
    color: bool,

    /// Write the report to FILE instead of STDOUT.
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    output: Option<PathBuf>,
}

fn main() {
    match try_main() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            let _ = writeln!(io::stderr(), "dcmp: {err:#}");
            std::process::exit(2);
        }
    }
}

fn try_main() -> Result<i32> {
    init_tracing();
    let cli = Cli::parse();

    let expected_source = InputSource::File(cli.expected.clone());
    let actual_source = match &cli.actual {
        Some(path) => InputSource::File(path.clone()),
        None => InputSource::Stdin,
    };

    let expected_text = read_input(&expected_source)?;
    let actual_text = read_input(&actual_source)?;
    debug!(expected = %expected_source, actual = %actual_source, "inputs loaded");

    let expected = parse_document(&expected_text, cli.yaml)
        .with_context(|| format!("failed to parse {expected_source}"))?;
    let actual = parse_document(&actual_text, cli.yaml)
        .with_context(|| format!("failed to parse {actual_source}"))?;

    let report = compare(&expected, &actual)?;
    debug!(differences = report.len(), "comparison finished");

    let rendered = render_report(&report, cli.format, cli.color)?;
    write_output(cli.output.as_deref(), &rendered)?;

    Ok(if report.is_empty() { 0 } else { 1 })
}

#[derive(Debug)]
enum InputSource {
    File(PathBuf),
    Stdin,
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Stdin => f.write_str("<stdin>"),
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();
}

fn read_input(source: &InputSource) -> Result<String> {
    match source {
        InputSource::File(path) => {
            fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
        }
        InputSource::Stdin => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer).context("failed to read STDIN")?;
            Ok(buffer)
        }
    }
}

fn parse_document(input: &str, yaml: bool) -> Result<Value, ParseError> {
    if yaml {
        from_yaml_str(input)
    } else {
        from_json_str(input)
    }
}

fn render_report(report: &Report, format: OutputFormat, color: bool) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(report.render_styled(&RenderStyle::new().with_color(color))),
        OutputFormat::Json => {
            let mut rendered =
                serde_json::to_string(report).context("failed to serialize the report")?;
            rendered.push('\n');
            Ok(rendered)
        }
    }
}

fn write_output(path: Option<&Path>, rendered: &str) -> Result<()> {
    match path {
        Some(path) => fs::write(path, rendered.as_bytes())
            .with_context(|| format!("failed to write output to {}", path.display())),
        None => {
            print!("{rendered}");
            io::stdout().flush().ok();
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_format_default_is_text() {
        assert_eq!(OutputFormat::default(), OutputFormat::Text);
    }

    #[test]
    fn input_sources_display_for_error_messages() {
        assert_eq!(InputSource::Stdin.to_string(), "<stdin>");
        assert_eq!(InputSource::File(PathBuf::from("a.json")).to_string(), "a.json");
    }

    #[test]
    fn json_format_serializes_the_report() {
        let report = compare(&serde_json::json!(1), &serde_json::json!(2)).unwrap();
        let rendered = render_report(&report, OutputFormat::Json, false).unwrap();
        assert!(rendered.ends_with('\n'));
        let value: Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value[0]["kind"], "value");
    }
}

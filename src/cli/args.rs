/*!
 * Command-Line Arguments
 */

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output rendering for the result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Metrics table, averages and a text Gantt line
    #[default]
    #[value(alias = "text")]
    Table,
    /// Pretty-printed SimulationResult
    Json,
}

/// Where the JSON request is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Stdin,
    File(PathBuf),
}

/// Simulate a CPU scheduling policy over a JSON request
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "sched-sim", version)]
pub struct Args {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Shorthand for `--format json`
    #[arg(long, conflicts_with = "format")]
    pub json: bool,

    /// Request file; `-` or no path reads stdin
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,
}

impl Args {
    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            self.format
        }
    }

    pub fn input(&self) -> Input {
        match &self.path {
            Some(path) if path.as_os_str() != "-" => Input::File(path.clone()),
            _ => Input::Stdin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("sched-sim").chain(args.iter().copied()))
    }

    #[test]
    fn test_defaults() {
        let args = parse(&[]).unwrap();
        assert_eq!(args.output_format(), OutputFormat::Table);
        assert_eq!(args.input(), Input::Stdin);
    }

    #[test]
    fn test_format_and_path() {
        let args = parse(&["--format", "json", "request.json"]).unwrap();
        assert_eq!(args.output_format(), OutputFormat::Json);
        assert_eq!(args.input(), Input::File(PathBuf::from("request.json")));

        let args = parse(&["--json", "-"]).unwrap();
        assert_eq!(args.output_format(), OutputFormat::Json);
        assert_eq!(args.input(), Input::Stdin);

        assert_eq!(
            parse(&["-f", "text"]).unwrap().output_format(),
            OutputFormat::Table
        );
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(parse(&["--format", "xml"]).is_err());
        assert!(parse(&["--verbose"]).is_err());
        assert!(parse(&["a.json", "b.json"]).is_err());
        assert!(parse(&["--json", "--format", "table"]).is_err());
    }

    #[test]
    fn test_command_definition() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}

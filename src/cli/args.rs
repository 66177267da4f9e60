//! Command-line argument parsing.

use std::path::PathBuf;

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Aggregate stored event logs into hourly reports
    Report { log_dir: PathBuf, output_dir: PathBuf },
    /// Print per-product totals for a date range
    Sales {
        output_dir: PathBuf,
        start: String,
        end: String,
    },
    /// Run the terminal UI (default)
    RunTui,
    /// Arguments could not be understood
    Invalid(String),
}

/// Parse command-line arguments, program name first.
///
/// ```
/// use storefront::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["storefront".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut args = args.skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--report" => {
                return match (args.next(), args.next()) {
                    (Some(log_dir), Some(output_dir)) => CliCommand::Report {
                        log_dir: log_dir.into(),
                        output_dir: output_dir.into(),
                    },
                    _ => CliCommand::Invalid("--report needs <log_dir> <output_dir>".to_string()),
                };
            }
            "--sales" => {
                return match (args.next(), args.next(), args.next()) {
                    (Some(output_dir), Some(start), Some(end)) => CliCommand::Sales {
                        output_dir: output_dir.into(),
                        start,
                        end,
                    },
                    _ => CliCommand::Invalid(
                        "--sales needs <output_dir> <start> <end> (dates as YYYY-MM-DD)".to_string(),
                    ),
                };
            }
            _ => {}
        }
    }
    CliCommand::RunTui
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliCommand {
        let mut all = vec!["storefront".to_string()];
        all.extend(args.iter().map(|a| a.to_string()));
        parse_args(all.into_iter())
    }

    #[test]
    fn test_parse_version_flags() {
        assert_eq!(parse(&["--version"]), CliCommand::Version);
        assert_eq!(parse(&["-V"]), CliCommand::Version);
    }

    #[test]
    fn test_parse_no_args() {
        assert_eq!(parse(&[]), CliCommand::RunTui);
    }

    #[test]
    fn test_parse_unknown_flag() {
        assert_eq!(parse(&["--unknown"]), CliCommand::RunTui);
    }

    #[test]
    fn test_parse_report() {
        assert_eq!(
            parse(&["--report", "logs", "out"]),
            CliCommand::Report {
                log_dir: PathBuf::from("logs"),
                output_dir: PathBuf::from("out"),
            }
        );
        assert!(matches!(parse(&["--report", "logs"]), CliCommand::Invalid(_)));
    }

    #[test]
    fn test_parse_sales() {
        assert_eq!(
            parse(&["--sales", "out", "2024-05-01", "2024-05-31"]),
            CliCommand::Sales {
                output_dir: PathBuf::from("out"),
                start: "2024-05-01".to_string(),
                end: "2024-05-31".to_string(),
            }
        );
        assert!(matches!(parse(&["--sales", "out"]), CliCommand::Invalid(_)));
    }
}

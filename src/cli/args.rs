//! Command-line argument parsing.

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Probe the API and report
    Check,
    /// Show usage
    Help,
    /// Run the TUI application (default)
    RunTui,
}

/// Usage text for `--help`.
pub const USAGE: &str = "\
Usage: job-organizer [OPTIONS]

Terminal dashboard for the job-organizer API.

Options:
  --check          Check that the API is reachable, then exit
  -V, --version    Print version
  -h, --help       Print this help

Environment:
  API_BASE_URL     API base URL (default http://localhost:8000/api)
  API_TIMEOUT      Request timeout in seconds (default 5.0)
  LOG_LEVEL        Log level (default DEBUG in development, INFO in production)
  LOG_DIR          Log directory (default logs)";

/// Parse command-line arguments; the first recognised flag wins.
///
/// # Examples
///
/// ```
/// use job_organizer::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["job-organizer".to_string(), "--check".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Check);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    for arg in args.skip(1) {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--check" => return CliCommand::Check,
            "--help" | "-h" => return CliCommand::Help,
            _ => {}
        }
    }
    CliCommand::RunTui
}

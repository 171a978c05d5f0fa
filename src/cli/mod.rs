//! CLI flags handled before the TUI starts.
//!
//! ```ignore
//! use job_organizer::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args());
//! if let Some(result) = run_cli_command(command, &config) {
//!     if let Err(e) = result {
//!         eprintln!("Error: {}", e);
//!         std::process::exit(1);
//!     }
//!     std::process::exit(0);
//! }
//! // No CLI command, continue to TUI
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, CliCommand, USAGE};
pub use version::{handle_version_command, VERSION};

use color_eyre::eyre::eyre;
use color_eyre::Result;

use crate::client::JobApiClient;
use crate::config::Config;
use crate::health_check::{display_health_check_results, run_health_check};

/// Run a CLI command if applicable.
///
/// Returns `None` for `RunTui`. `Version` exits the process directly.
pub fn run_cli_command(command: CliCommand, config: &Config) -> Option<Result<()>> {
    match command {
        CliCommand::Version => handle_version_command(),
        CliCommand::Help => {
            println!("{}", USAGE);
            Some(Ok(()))
        }
        CliCommand::Check => Some(handle_check_command(config)),
        CliCommand::RunTui => None,
    }
}

/// `--check`: probe the API, print the outcome, fail when unreachable.
pub fn handle_check_command(config: &Config) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    let client = JobApiClient::new(config);

    let result = runtime.block_on(run_health_check(&client));
    display_health_check_results(&result);

    if result.api_healthy {
        Ok(())
    } else {
        Err(eyre!("API unreachable at {}", result.api_url))
    }
}

//! Command-line interface.
//!
//! The dispatcher runs before the terminal UI starts:
//!
//! ```ignore
//! use storefront::cli::{parse_args, run_cli_command};
//!
//! if let Some(result) = run_cli_command(parse_args(std::env::args())) {
//!     if let Err(e) = result {
//!         eprintln!("Error: {}", e);
//!         std::process::exit(1);
//!     }
//!     std::process::exit(0);
//! }
//! ```

pub mod args;
pub mod report;
pub mod version;

pub use args::{parse_args, CliCommand};
pub use report::{handle_report_command, handle_sales_command};
pub use version::{handle_version_command, version_string, VERSION};

use color_eyre::{eyre::eyre, Result};

/// Run a CLI command. Returns `None` for [`CliCommand::RunTui`].
///
/// `Version` never returns.
pub fn run_cli_command(command: CliCommand) -> Option<Result<()>> {
    match command {
        CliCommand::Version => handle_version_command(),
        CliCommand::Report { log_dir, output_dir } => {
            Some(handle_report_command(&log_dir, &output_dir))
        }
        CliCommand::Sales {
            output_dir,
            start,
            end,
        } => Some(handle_sales_command(&output_dir, &start, &end)),
        CliCommand::Invalid(message) => Some(Err(eyre!(message))),
        CliCommand::RunTui => None,
    }
}

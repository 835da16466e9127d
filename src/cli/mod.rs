//! Command-line handling, run before the terminal UI starts.
//!
//! ```ignore
//! match parse_args(std::env::args()) {
//!     CliCommand::Run(options) => run_tui(options),
//!     other => print_and_exit(other),
//! }
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, CliCommand, RunOptions};
pub use version::{usage, version_line, VERSION};

/// Text to print for commands that exit without starting the UI.
///
/// Returns `None` for [`CliCommand::Run`].
pub fn command_output(command: &CliCommand) -> Option<String> {
    match command {
        CliCommand::Version => Some(version_line()),
        CliCommand::Help => Some(usage()),
        CliCommand::Run(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_has_no_output() {
        assert!(command_output(&CliCommand::Run(RunOptions::default())).is_none());
    }

    #[test]
    fn test_version_output() {
        assert_eq!(command_output(&CliCommand::Version), Some(version_line()));
    }
}

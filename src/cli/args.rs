//! Command-line argument parsing.

/// What the binary should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Print the version and exit.
    Version,
    /// Print usage and exit.
    Help,
    /// Start the terminal site.
    Run(RunOptions),
}

/// Options for [`CliCommand::Run`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Use the built-in sample content even if Firestore is configured.
    pub offline: bool,
}

/// Parse arguments (program name first). Unknown flags are ignored.
///
/// ```
/// use resort_site::cli::{parse_args, CliCommand};
///
/// let args = vec!["resort".to_string(), "-V".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut options = RunOptions::default();
    for arg in args.skip(1) {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            "--offline" => options.offline = true,
            _ => {}
        }
    }
    CliCommand::Run(options)
}

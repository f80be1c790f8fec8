//! Command-line argument parsing.

/// What the process should do.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Print the version and exit
    Version,
    /// Print usage and exit
    Help,
    /// Run the TUI (default)
    RunTui,
}

/// Parse command-line arguments (program name first).
///
/// # Examples
///
/// ```
/// use recipe_browser::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["recipe-browser".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    for arg in args.skip(1) {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            _ => {}
        }
    }
    CliCommand::RunTui
}

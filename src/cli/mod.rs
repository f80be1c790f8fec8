//! Command-line flags.
//!
//! The browser has no subcommands. Flags are checked before the terminal is
//! taken over so `--version` and `--help` print plainly.

pub mod args;

pub use args::{parse_args, CliCommand};

/// The current version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Usage text printed by `--help`.
pub const USAGE: &str = "\
recipe-browser - search recipes and read them in the terminal

USAGE:
    recipe-browser [--version | --help]

ENVIRONMENT:
    RECIPE_API_KEY       API key (required; SPOONACULAR_API_KEY also accepted)
    RECIPE_API_URL       API base URL
    RECIPE_LOG           log filter, e.g. debug or recipe_browser=trace
    RECIPE_LOG_FILE      log file path
    RECIPE_LATEST_WINS   set to 1 to ignore out-of-order search results

KEYS:
    Enter   search / open recipe     Tab    switch focus or tab
    Esc     back                     Ctrl+C quit";

/// Version line printed by `--version`.
pub fn version_line() -> String {
    format!("recipe-browser {}", VERSION)
}

pub mod cli;
pub mod commands;
pub mod state_paths;

pub use cli::{cli_help_lines, parse_cli_verb, CliVerb};
pub use commands::run_cli;

pub mod config;
pub mod domain;
pub mod error;
pub mod message;
pub mod protect;
pub mod rewrite;
pub mod template;

pub(crate) mod cli;
pub(crate) mod git;

pub use error::Error;

use std::path::Path;

/// Rewrite the commit message given as `input` (a file path or the message
/// itself) for the current branch.
///
/// This is the binary entry point. Library callers that already know the
/// branch should use [`rewrite::evaluate`] with a [`config::Config`].
pub fn run(input: Option<&str>, config_path: Option<&Path>) -> Result<(), Error> {
    cli::commit::run(input, config_path)
}

/// Print the effective branch rules as JSON.
pub fn show_rules(config_path: Option<&Path>) -> Result<(), Error> {
    cli::show::run(config_path)
}

pub mod shell;

pub use shell::*;

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("command not found: {0}")]
    NotFound(String),

    #[error("failed to run {command}: {source}")]
    Io {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{command} exited with status {code:?}: {stderr}")]
    Failed {
        command: String,
        code: Option<i32>,
        stderr: String,
    },
}

/// Everything a segment may ask of the outside world.
///
/// Segments never touch `std::env` or spawn processes directly; they go
/// through this trait so a render can be driven by a fake in tests.
pub trait Environment {
    /// Value of an environment variable, `None` when unset.
    fn getenv(&self, key: &str) -> Option<String>;

    /// Whether `command` resolves to an executable.
    fn has_command(&self, command: &str) -> bool;

    /// Run `command` with `args` and return its captured stdout.
    fn run_command(&self, command: &str, args: &[&str]) -> Result<String, CommandError>;

    /// Working directory of the shell being prompted for.
    fn current_dir(&self) -> Option<PathBuf>;

    /// Like [`Environment::getenv`] but treats an empty value as unset.
    fn getenv_non_empty(&self, key: &str) -> Option<String> {
        self.getenv(key).filter(|value| !value.is_empty())
    }
}

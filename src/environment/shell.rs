use crate::environment::{CommandError, Environment};
use crate::utils::{debug_with_context, Cache};
use std::env;
use std::path::PathBuf;
use std::process::Command;
use std::time::Duration;

/// [`Environment`] backed by the current process: real environment
/// variables, `PATH` lookups and child processes.
pub struct ShellEnvironment {
    commands: Cache<String, PathBuf>,
}

impl ShellEnvironment {
    pub fn new() -> Self {
        Self {
            commands: Cache::new(Duration::from_secs(60)),
        }
    }

    fn resolve(&self, command: &str) -> Option<PathBuf> {
        let key = command.to_string();
        if let Some(path) = self.commands.get(&key) {
            return Some(path);
        }

        match which::which(command) {
            Ok(path) => {
                debug_with_context("env", &format!("Resolved {} to {}", command, path.display()));
                self.commands.insert(key, path.clone());
                Some(path)
            }
            Err(e) => {
                debug_with_context("env", &format!("Command {} not found: {}", command, e));
                None
            }
        }
    }
}

impl Default for ShellEnvironment {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment for ShellEnvironment {
    fn getenv(&self, key: &str) -> Option<String> {
        env::var(key).ok()
    }

    fn has_command(&self, command: &str) -> bool {
        self.resolve(command).is_some()
    }

    fn run_command(&self, command: &str, args: &[&str]) -> Result<String, CommandError> {
        let path = self
            .resolve(command)
            .ok_or_else(|| CommandError::NotFound(command.to_string()))?;

        debug_with_context("env", &format!("Running {} {}", command, args.join(" ")));

        let output = Command::new(&path)
            .args(args)
            .output()
            .map_err(|source| CommandError::Io {
                command: command.to_string(),
                source,
            })?;

        if !output.status.success() {
            return Err(CommandError::Failed {
                command: command.to_string(),
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn current_dir(&self) -> Option<PathBuf> {
        env::current_dir().ok()
    }
}

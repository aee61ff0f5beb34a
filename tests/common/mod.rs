#![allow(dead_code)]

use prompt_powerline::{CommandError, Environment};
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::PathBuf;

/// Deterministic [`Environment`] for tests: canned variables, a fixed set of
/// installed commands and scripted command output.
#[derive(Default)]
pub struct MockEnvironment {
    vars: HashMap<String, String>,
    commands: HashMap<String, bool>,
    outputs: HashMap<String, Result<String, String>>,
    cwd: Option<PathBuf>,
    pub calls: RefCell<Vec<String>>,
}

impl MockEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn var(mut self, key: &str, value: &str) -> Self {
        self.vars.insert(key.to_string(), value.to_string());
        self
    }

    pub fn command(mut self, name: &str, installed: bool) -> Self {
        self.commands.insert(name.to_string(), installed);
        self
    }

    pub fn output(mut self, command: &str, args: &[&str], stdout: &str) -> Self {
        self.outputs
            .insert(Self::key(command, args), Ok(stdout.to_string()));
        self
    }

    pub fn failure(mut self, command: &str, args: &[&str], stderr: &str) -> Self {
        self.outputs
            .insert(Self::key(command, args), Err(stderr.to_string()));
        self
    }

    pub fn cwd(mut self, path: &str) -> Self {
        self.cwd = Some(PathBuf::from(path));
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    fn key(command: &str, args: &[&str]) -> String {
        format!("{} {}", command, args.join(" "))
    }
}

impl Environment for MockEnvironment {
    fn getenv(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }

    fn has_command(&self, command: &str) -> bool {
        self.commands.get(command).copied().unwrap_or(false)
    }

    fn run_command(&self, command: &str, args: &[&str]) -> Result<String, CommandError> {
        let key = Self::key(command, args);
        self.calls.borrow_mut().push(key.clone());

        if !self.has_command(command) {
            return Err(CommandError::NotFound(command.to_string()));
        }

        match self.outputs.get(&key) {
            Some(Ok(stdout)) => Ok(stdout.clone()),
            Some(Err(stderr)) => Err(CommandError::Failed {
                command: command.to_string(),
                code: Some(1),
                stderr: stderr.clone(),
            }),
            None => Ok(String::new()),
        }
    }

    fn current_dir(&self) -> Option<PathBuf> {
        self.cwd.clone()
    }
}

// src/commands/types.rs
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

use crate::fs::ArchiveFs;

/// Callback draining the external standard-input stream to
/// end-of-stream (used by `uniq -` and `tac -`).
pub type StdinFn = Arc<dyn Fn() -> String + Send + Sync>;

/// Errors surfaced at the command boundary.
///
/// `Display` produces the exact user-facing message; rendering happens
/// only at the presentation layer, so callers can branch on the kind
/// without parsing text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("{command}: missing operand")]
    MissingOperand { command: &'static str },

    #[error("{command}: extra operand `{operand}'")]
    ExtraOperand {
        command: &'static str,
        operand: String,
    },

    #[error("{command}: {path}: No such file")]
    NoSuchFile {
        command: &'static str,
        path: String,
    },

    #[error("cd: no such file or directory: {path}")]
    NoSuchDirectory { path: String },

    #[error("ls: cannot access '{path}': No such file or directory")]
    CannotAccess { path: String },

    #[error("{command}: binary file")]
    BinaryFile { command: &'static str },

    #[error("command not found: {command}")]
    CommandNotFound { command: String },
}

/// Command execution result
#[derive(Debug, Clone)]
pub struct CommandResult {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

impl CommandResult {
    pub fn success(stdout: String) -> Self {
        Self {
            stdout,
            stderr: String::new(),
            exit_code: 0,
        }
    }

    pub fn error(stderr: String) -> Self {
        Self {
            stdout: String::new(),
            stderr,
            exit_code: 1,
        }
    }

    pub fn with_exit_code(stdout: String, stderr: String, exit_code: i32) -> Self {
        Self {
            stdout,
            stderr,
            exit_code,
        }
    }
}

/// Command execution context
pub struct CommandContext {
    pub args: Vec<String>,
    pub cwd: String,
    pub fs: Arc<ArchiveFs>,
    pub stdin: Option<StdinFn>,
}

impl CommandContext {
    /// Drain the external stdin collaborator; empty when none is wired.
    pub fn read_stdin(&self) -> String {
        self.stdin.as_ref().map(|read| read()).unwrap_or_default()
    }
}

/// Command trait
#[async_trait]
pub trait Command: Send + Sync {
    fn name(&self) -> &'static str;
    async fn execute(&self, ctx: CommandContext) -> Result<String, CommandError>;
}

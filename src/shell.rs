//! Shell Session
//!
//! Ties the command registry to a mounted archive and owns the single
//! piece of session state: the current working directory. Sessions are
//! independent; any number of them may share one [`ArchiveFs`] without
//! observing each other's working directory.

use std::sync::Arc;

use crate::commands::registry::{create_default_registry, CommandRegistry};
use crate::commands::types::{CommandContext, CommandError, CommandResult, StdinFn};
use crate::fs::{resolve_path, ArchiveFs};

/// Options for creating a shell session.
#[derive(Default)]
pub struct ShellOptions {
    /// User name shown in the prompt
    pub user: Option<String>,
    /// Initial working directory within the archive
    pub cwd: Option<String>,
    /// Source for `uniq -` / `tac -` standard input
    pub stdin: Option<StdinFn>,
}

/// One interactive session over a mounted archive.
pub struct Shell {
    fs: Arc<ArchiveFs>,
    registry: CommandRegistry,
    user: String,
    cwd: String,
    stdin: Option<StdinFn>,
}

impl Shell {
    /// Create a session. A requested working directory that does not
    /// exist in the archive falls back to the root, so `cwd` denotes a
    /// valid directory from the first prompt on.
    pub fn new(fs: Arc<ArchiveFs>, options: ShellOptions) -> Self {
        let cwd = options
            .cwd
            .map(|dir| resolve_path("/", &dir))
            .filter(|dir| fs.exists_as_directory(dir))
            .unwrap_or_else(|| "/".to_string());

        Self {
            fs,
            registry: create_default_registry(),
            user: options.user.unwrap_or_else(|| "user".to_string()),
            cwd,
            stdin: options.stdin,
        }
    }

    /// Current working directory, always a normalized absolute path.
    pub fn cwd(&self) -> &str {
        &self.cwd
    }

    /// Prompt rendered before each line of input.
    pub fn prompt(&self) -> String {
        format!("{}:{} $ ", self.user, self.cwd)
    }

    /// Execute one line of input: a command word plus whitespace-split
    /// arguments. Blank input is an empty success; `exit` produces no
    /// output and leaves termination to the caller's loop.
    pub async fn exec(&mut self, line: &str) -> CommandResult {
        let mut words = line.split_whitespace().map(String::from);
        let cmd_name = match words.next() {
            Some(word) => word,
            None => return CommandResult::success(String::new()),
        };
        let args: Vec<String> = words.collect();

        match cmd_name.as_str() {
            "cd" => match self.change_directory(&args) {
                Ok(()) => CommandResult::success(String::new()),
                Err(err) => CommandResult::error(format!("{}\n", err)),
            },
            "exit" => CommandResult::success(String::new()),
            _ => match self.registry.get(&cmd_name) {
                Some(cmd) => {
                    let ctx = CommandContext {
                        args,
                        cwd: self.cwd.clone(),
                        fs: Arc::clone(&self.fs),
                        stdin: self.stdin.clone(),
                    };
                    match cmd.execute(ctx).await {
                        Ok(stdout) => CommandResult::success(stdout),
                        Err(err) => CommandResult::error(format!("{}\n", err)),
                    }
                }
                None => {
                    let err = CommandError::CommandNotFound { command: cmd_name };
                    CommandResult::with_exit_code(String::new(), format!("{}\n", err), 127)
                }
            },
        }
    }

    /// `cd` builtin, the only operation that mutates session state.
    fn change_directory(&mut self, args: &[String]) -> Result<(), CommandError> {
        let target = match args.first() {
            Some(arg) => arg,
            None => {
                self.cwd = "/".to_string();
                return Ok(());
            }
        };

        if target == ".." {
            // Parents of a valid directory are themselves valid, so no
            // existence re-check is needed; at the root this is a no-op.
            if self.cwd != "/" {
                let parent = self.cwd.rfind('/').unwrap_or(0);
                self.cwd.truncate(parent.max(1));
            }
            return Ok(());
        }

        let resolved = resolve_path(&self.cwd, target);
        if self.fs.exists_as_directory(&resolved) {
            self.cwd = resolved;
            Ok(())
        } else {
            Err(CommandError::NoSuchDirectory {
                path: target.clone(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::ZipSource;
    use std::io::{Cursor, Write};
    use zip::write::SimpleFileOptions;

    fn sample_fs() -> Arc<ArchiveFs> {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default();
        writer.start_file("notes.txt", options).unwrap();
        writer.write_all(b"b\na\nb\na\n").unwrap();
        writer.start_file("docs/readme.txt", options).unwrap();
        writer.write_all(b"hello archive\n").unwrap();
        writer.add_directory("logs", options).unwrap();
        writer.start_file("logs/app.log", options).unwrap();
        writer.write_all(b"boot\nshutdown\n").unwrap();
        let cursor = writer.finish().unwrap();
        Arc::new(ArchiveFs::new(Box::new(ZipSource::new(cursor).unwrap())))
    }

    fn sample_shell() -> Shell {
        Shell::new(sample_fs(), ShellOptions::default())
    }

    #[tokio::test]
    async fn test_prompt_tracks_cwd() {
        let mut shell = Shell::new(
            sample_fs(),
            ShellOptions {
                user: Some("alice".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(shell.prompt(), "alice:/ $ ");
        shell.exec("cd logs").await;
        assert_eq!(shell.prompt(), "alice:/logs $ ");
    }

    #[tokio::test]
    async fn test_cd_implicit_directory_and_back() {
        let mut shell = sample_shell();
        let result = shell.exec("cd docs").await;
        assert_eq!(result.exit_code, 0);
        assert_eq!(shell.cwd(), "/docs");

        let listing = shell.exec("ls").await;
        assert_eq!(listing.stdout, "readme.txt");

        shell.exec("cd ..").await;
        assert_eq!(shell.cwd(), "/");
    }

    #[tokio::test]
    async fn test_cd_parent_at_root_is_noop() {
        let mut shell = sample_shell();
        let result = shell.exec("cd ..").await;
        assert_eq!(result.exit_code, 0);
        assert_eq!(shell.cwd(), "/");
    }

    #[tokio::test]
    async fn test_cd_without_args_resets_to_root() {
        let mut shell = sample_shell();
        shell.exec("cd logs").await;
        assert_eq!(shell.cwd(), "/logs");
        shell.exec("cd").await;
        assert_eq!(shell.cwd(), "/");
    }

    #[tokio::test]
    async fn test_cd_missing_leaves_cwd_unchanged() {
        let mut shell = sample_shell();
        let result = shell.exec("cd nope").await;
        assert_eq!(result.exit_code, 1);
        assert_eq!(result.stderr, "cd: no such file or directory: nope\n");
        assert_eq!(shell.cwd(), "/");
    }

    #[tokio::test]
    async fn test_cd_to_file_fails() {
        let mut shell = sample_shell();
        let result = shell.exec("cd notes.txt").await;
        assert_eq!(result.exit_code, 1);
        assert_eq!(
            result.stderr,
            "cd: no such file or directory: notes.txt\n"
        );
        assert_eq!(shell.cwd(), "/");
    }

    #[tokio::test]
    async fn test_relative_paths_resolve_against_cwd() {
        let mut shell = sample_shell();
        shell.exec("cd docs").await;
        let result = shell.exec("cat ../notes.txt").await;
        assert_eq!(result.stdout, "b\na\nb\na\n");
        let absolute = shell.exec("cat /logs/app.log").await;
        assert_eq!(absolute.stdout, "boot\nshutdown\n");
    }

    #[tokio::test]
    async fn test_round_trip_uniq_and_tac() {
        let mut shell = sample_shell();
        let uniq = shell.exec("uniq notes.txt").await;
        assert_eq!(uniq.stdout, "a\nb");
        let tac = shell.exec("tac notes.txt").await;
        assert_eq!(tac.stdout, "a\nb\na\nb\n");
    }

    #[tokio::test]
    async fn test_unknown_command() {
        let mut shell = sample_shell();
        let result = shell.exec("foo bar").await;
        assert_eq!(result.exit_code, 127);
        assert_eq!(result.stderr, "command not found: foo\n");
        assert_eq!(shell.cwd(), "/");
    }

    #[tokio::test]
    async fn test_blank_line_is_a_noop() {
        let mut shell = sample_shell();
        let result = shell.exec("   ").await;
        assert_eq!(result.exit_code, 0);
        assert_eq!(result.stdout, "");
        assert_eq!(result.stderr, "");
    }

    #[tokio::test]
    async fn test_exit_produces_no_output() {
        let mut shell = sample_shell();
        let result = shell.exec("exit").await;
        assert_eq!(result.exit_code, 0);
        assert_eq!(result.stdout, "");
    }

    #[tokio::test]
    async fn test_sessions_do_not_share_cwd() {
        let fs = sample_fs();
        let mut first = Shell::new(Arc::clone(&fs), ShellOptions::default());
        let mut second = Shell::new(fs, ShellOptions::default());
        first.exec("cd logs").await;
        second.exec("cd docs").await;
        assert_eq!(first.cwd(), "/logs");
        assert_eq!(second.cwd(), "/docs");
    }

    #[tokio::test]
    async fn test_invalid_initial_cwd_falls_back_to_root() {
        let shell = Shell::new(
            sample_fs(),
            ShellOptions {
                cwd: Some("nowhere".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(shell.cwd(), "/");
    }

    #[tokio::test]
    async fn test_initial_cwd_is_normalized() {
        let shell = Shell::new(
            sample_fs(),
            ShellOptions {
                cwd: Some("logs/".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(shell.cwd(), "/logs");
    }
}

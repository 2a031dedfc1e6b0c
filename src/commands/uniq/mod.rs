// src/commands/uniq/mod.rs
use std::collections::BTreeSet;

use async_trait::async_trait;

use crate::commands::{Command, CommandContext, CommandError};

pub struct UniqCommand;

#[async_trait]
impl Command for UniqCommand {
    fn name(&self) -> &'static str {
        "uniq"
    }

    async fn execute(&self, ctx: CommandContext) -> Result<String, CommandError> {
        if ctx.args.is_empty() {
            return Err(CommandError::MissingOperand { command: "uniq" });
        }

        let input = if ctx.args[0] == "-" {
            ctx.read_stdin()
        } else if ctx.args.len() > 1 {
            return Err(CommandError::ExtraOperand {
                command: "uniq",
                operand: ctx.args[1].clone(),
            });
        } else {
            let path = ctx.fs.resolve_path(&ctx.cwd, &ctx.args[0]);
            match ctx.fs.read_file(&path).await {
                Ok(content) => content,
                Err(_) => {
                    return Err(CommandError::NoSuchFile {
                        command: "uniq",
                        path: ctx.args[0].clone(),
                    })
                }
            }
        };

        // Set semantics: original line order is discarded, output is
        // sorted lexicographically.
        let unique: BTreeSet<&str> = input.lines().map(|line| line.trim_end()).collect();
        Ok(unique.into_iter().collect::<Vec<_>>().join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::{ArchiveFs, ZipSource};
    use std::io::{Cursor, Write};
    use std::sync::Arc;
    use zip::write::SimpleFileOptions;

    fn make_ctx(args: Vec<&str>, entries: Vec<(&str, &[u8])>) -> CommandContext {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default();
        for (name, content) in entries {
            writer.start_file(name, options).unwrap();
            writer.write_all(content).unwrap();
        }
        let cursor = writer.finish().unwrap();
        let fs = Arc::new(ArchiveFs::new(Box::new(ZipSource::new(cursor).unwrap())));
        CommandContext {
            args: args.into_iter().map(String::from).collect(),
            cwd: "/".to_string(),
            fs,
            stdin: None,
        }
    }

    #[tokio::test]
    async fn test_uniq_sorts_and_deduplicates() {
        let ctx = make_ctx(vec!["notes.txt"], vec![("notes.txt", b"b\na\nb\na\n")]);
        let output = UniqCommand.execute(ctx).await.unwrap();
        assert_eq!(output, "a\nb");
    }

    #[tokio::test]
    async fn test_uniq_strips_trailing_whitespace() {
        let ctx = make_ctx(vec!["notes.txt"], vec![("notes.txt", b"a  \na\nb\t\n")]);
        let output = UniqCommand.execute(ctx).await.unwrap();
        assert_eq!(output, "a\nb");
    }

    #[tokio::test]
    async fn test_uniq_missing_operand() {
        let ctx = make_ctx(vec![], vec![]);
        let err = UniqCommand.execute(ctx).await.unwrap_err();
        assert_eq!(err.to_string(), "uniq: missing operand");
    }

    #[tokio::test]
    async fn test_uniq_extra_operand() {
        let ctx = make_ctx(vec!["a", "b"], vec![("a", b"x\n")]);
        let err = UniqCommand.execute(ctx).await.unwrap_err();
        assert_eq!(err.to_string(), "uniq: extra operand `b'");
    }

    #[tokio::test]
    async fn test_uniq_missing_file() {
        let ctx = make_ctx(vec!["missing.txt"], vec![]);
        let err = UniqCommand.execute(ctx).await.unwrap_err();
        assert_eq!(err.to_string(), "uniq: missing.txt: No such file");
    }

    #[tokio::test]
    async fn test_uniq_binary_file_is_not_found() {
        let ctx = make_ctx(vec!["data.bin"], vec![("data.bin", &[0xff, 0xfe, 0x00])]);
        let err = UniqCommand.execute(ctx).await.unwrap_err();
        assert_eq!(err.to_string(), "uniq: data.bin: No such file");
    }

    #[tokio::test]
    async fn test_uniq_stdin() {
        let mut ctx = make_ctx(vec!["-"], vec![]);
        ctx.stdin = Some(Arc::new(|| "c\nb\nc\na\n".to_string()));
        let output = UniqCommand.execute(ctx).await.unwrap();
        assert_eq!(output, "a\nb\nc");
    }

    #[tokio::test]
    async fn test_uniq_stdin_without_source_is_empty() {
        let ctx = make_ctx(vec!["-"], vec![]);
        let output = UniqCommand.execute(ctx).await.unwrap();
        assert_eq!(output, "");
    }
}

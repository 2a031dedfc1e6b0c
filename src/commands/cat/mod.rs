// src/commands/cat/mod.rs
use async_trait::async_trait;

use crate::commands::{Command, CommandContext, CommandError};
use crate::fs::FsError;

pub struct CatCommand;

#[async_trait]
impl Command for CatCommand {
    fn name(&self) -> &'static str {
        "cat"
    }

    async fn execute(&self, ctx: CommandContext) -> Result<String, CommandError> {
        let operand = match ctx.args.first() {
            Some(arg) => arg,
            None => return Err(CommandError::MissingOperand { command: "cat" }),
        };

        let path = ctx.fs.resolve_path(&ctx.cwd, operand);
        match ctx.fs.read_file(&path).await {
            Ok(content) => Ok(content),
            Err(FsError::NotText { .. }) => Err(CommandError::BinaryFile { command: "cat" }),
            Err(_) => Err(CommandError::NoSuchFile {
                command: "cat",
                path: operand.clone(),
            }),
        }
    }
}

// src/commands/ls/mod.rs
use async_trait::async_trait;

use crate::commands::{Command, CommandContext, CommandError};

pub struct LsCommand;

#[async_trait]
impl Command for LsCommand {
    fn name(&self) -> &'static str {
        "ls"
    }

    async fn execute(&self, ctx: CommandContext) -> Result<String, CommandError> {
        let operand = ctx.args.first();
        let target = match operand {
            Some(arg) => ctx.fs.resolve_path(&ctx.cwd, arg),
            None => ctx.cwd.clone(),
        };

        if ctx.fs.exists_as_directory(&target) {
            let names: Vec<String> = ctx
                .fs
                .list_children(&target)
                .into_iter()
                .map(|entry| entry.name)
                .collect();
            return Ok(names.join("\n"));
        }
        if ctx.fs.exists_as_file(&target) {
            // Listing a file prints the operand itself.
            return Ok(operand.cloned().unwrap_or(target));
        }
        Err(CommandError::CannotAccess {
            path: operand.cloned().unwrap_or(target),
        })
    }
}

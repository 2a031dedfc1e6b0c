use async_trait::async_trait;

use crate::commands::{Command, CommandContext, CommandError};

pub struct TacCommand;

#[async_trait]
impl Command for TacCommand {
    fn name(&self) -> &'static str {
        "tac"
    }

    async fn execute(&self, ctx: CommandContext) -> Result<String, CommandError> {
        if ctx.args.is_empty() {
            return Err(CommandError::MissingOperand { command: "tac" });
        }

        let content = if ctx.args[0] == "-" {
            ctx.read_stdin()
        } else if ctx.args.len() > 1 {
            return Err(CommandError::ExtraOperand {
                command: "tac",
                operand: ctx.args[1].clone(),
            });
        } else {
            let path = ctx.fs.resolve_path(&ctx.cwd, &ctx.args[0]);
            match ctx.fs.read_file(&path).await {
                Ok(content) => content,
                Err(_) => {
                    return Err(CommandError::NoSuchFile {
                        command: "tac",
                        path: ctx.args[0].clone(),
                    })
                }
            }
        };

        // Reverse whole lines, keeping each line's own terminator.
        let mut lines: Vec<&str> = content.split_inclusive('\n').collect();
        lines.reverse();
        Ok(lines.concat())
    }
}

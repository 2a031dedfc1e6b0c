use std::fs::File;
use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;

use zip_shell::commands::StdinFn;
use zip_shell::fs::{ArchiveFs, ZipSource};
use zip_shell::shell::{Shell, ShellOptions};

#[derive(Parser)]
#[command(name = "zip-shell")]
#[command(about = "An interactive read-only shell over a zip archive")]
#[command(version)]
struct Cli {
    /// Zip archive mounted as the filesystem root
    archive: PathBuf,

    /// Execute a single command line and exit
    #[arg(short = 'c')]
    command: Option<String>,

    /// User name shown in the prompt
    #[arg(long, default_value = "user")]
    user: String,

    /// Initial working directory within the archive
    #[arg(long = "cwd")]
    cwd: Option<String>,

    /// Output results as JSON (stdout, stderr, exitCode)
    #[arg(long = "json")]
    json: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let file = match File::open(&cli.archive) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Error: cannot open archive {}: {}", cli.archive.display(), e);
            std::process::exit(1);
        }
    };
    let source = match ZipSource::new(file) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error: cannot read archive {}: {}", cli.archive.display(), e);
            std::process::exit(1);
        }
    };
    let fs = Arc::new(ArchiveFs::new(Box::new(source)));

    let stdin_fn: StdinFn = Arc::new(|| {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer).unwrap_or_default();
        buffer
    });

    let mut shell = Shell::new(
        fs,
        ShellOptions {
            user: Some(cli.user),
            cwd: cli.cwd,
            stdin: Some(stdin_fn),
        },
    );

    if let Some(line) = cli.command {
        let result = shell.exec(&line).await;
        if cli.json {
            println!(
                "{}",
                serde_json::json!({
                    "stdout": result.stdout,
                    "stderr": result.stderr,
                    "exitCode": result.exit_code,
                })
            );
        } else {
            if !result.stdout.is_empty() {
                println!("{}", result.stdout);
            }
            if !result.stderr.is_empty() {
                eprint!("{}", result.stderr);
            }
        }
        std::process::exit(result.exit_code);
    }

    run_repl(&mut shell).await;
}

/// Interactive loop: render the prompt, read one line, execute it.
/// Blank input re-prompts; `exit`, EOF end the session; Ctrl-C only
/// discards the current line.
async fn run_repl(shell: &mut Shell) {
    let mut rl: Editor<(), DefaultHistory> = match Editor::new() {
        Ok(editor) => editor,
        Err(e) => {
            eprintln!("Error: cannot initialize line editor: {}", e);
            std::process::exit(1);
        }
    };

    loop {
        match rl.readline(&shell.prompt()) {
            Ok(line) => {
                let input = line.trim();
                if input.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(input);
                if input == "exit" {
                    break;
                }
                let result = shell.exec(input).await;
                if !result.stdout.is_empty() {
                    println!("{}", result.stdout);
                }
                if !result.stderr.is_empty() {
                    eprint!("{}", result.stderr);
                }
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("Error: {}", e);
                break;
            }
        }
    }
}

//! fileops CLI
//!
//! Shell entry point to the file store used by the project automation
//! scripts.

mod cli;
mod commands;
mod context;
mod error;
mod logging;

use std::io::Write;

use clap::Parser;
use colored::Colorize;

use cli::Cli;
use commands::Outcome;
use context::Context;
use error::Result;

fn main() {
    match run() {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            std::process::exit(1);
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("{}: failed to set up logging: {}", "warning".yellow().bold(), e);
    }
    tracing::debug!(?cli, "parsed arguments");

    let Some(command) = cli.command.clone() else {
        println!("{} file operations for project scripts", "fileops".green().bold());
        println!();
        println!("Run {} for available commands.", "fileops --help".cyan());
        return Ok(0);
    };

    let ctx = Context::from_cli(&cli)?;
    let outcome = commands::execute(&ctx, command)?;
    print_outcome(&ctx, &outcome)?;
    Ok(outcome.exit_code())
}

fn print_outcome(ctx: &Context, outcome: &Outcome) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    if ctx.json {
        serde_json::to_writer_pretty(&mut stdout, outcome)?;
        writeln!(stdout)?;
    } else if let Some(content) = &outcome.content {
        stdout.write_all(content.as_bytes())?;
    }
    stdout.flush()?;
    Ok(())
}

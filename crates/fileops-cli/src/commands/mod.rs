//! Command implementations for fileops-cli
//!
//! Each command runs one store operation and turns its result into an
//! [`Outcome`]. Store failures are outcomes with `success: false`; only
//! problems around the operation (stdin, output) are `CliError`s.

mod outcome;

use std::io::Read;
use std::path::Path;

use fileops_store::{NormalizedPath, Replacement, Status, UpdateMode};

use crate::cli::Commands;
use crate::context::Context;
use crate::error::Result;

pub use outcome::Outcome;

/// Run `command` against the context's store.
pub fn execute(ctx: &Context, command: Commands) -> Result<Outcome> {
    let name = command.name();
    let outcome = match command {
        Commands::Create { path, content, stdin } => {
            let content = content_from(content, stdin)?;
            run_create(ctx, &path, &content)
        }
        Commands::Read { path } => run_read(ctx, &path),
        Commands::Update {
            path,
            content,
            append,
            stdin,
        } => {
            let content = content_from(content, stdin)?;
            let mode = if append {
                UpdateMode::Append
            } else {
                UpdateMode::Overwrite
            };
            run_update(ctx, &path, &content, mode)
        }
        Commands::Delete { path } => run_delete(ctx, &path),
        Commands::Replace { path, old, new } => run_replace(ctx, &path, &old, &new),
        Commands::Exists { path } => run_exists(ctx, &path),
    };
    tracing::debug!(command = name, success = outcome.success, "command finished");
    Ok(outcome)
}

fn content_from(content: Option<String>, stdin: bool) -> Result<String> {
    if stdin {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        Ok(content.unwrap_or_default())
    }
}

pub fn run_create(ctx: &Context, path: &Path, content: &str) -> Outcome {
    Outcome::from_result("create", path, ctx.store.create(path, content))
}

pub fn run_read(ctx: &Context, path: &Path) -> Outcome {
    match ctx.store.read(path) {
        Ok(content) => Outcome::success("read", path).with_content(content),
        Err(e) => Outcome::failure("read", path, &e),
    }
}

pub fn run_update(ctx: &Context, path: &Path, content: &str, mode: UpdateMode) -> Outcome {
    Outcome::from_result("update", path, ctx.store.update(path, content, mode))
}

pub fn run_delete(ctx: &Context, path: &Path) -> Outcome {
    Outcome::from_result("delete", path, ctx.store.delete(path))
}

pub fn run_replace(ctx: &Context, path: &Path, old: &str, new: &str) -> Outcome {
    match ctx.store.replace(path, old, new) {
        Ok(Replacement::Unchanged) => Outcome::success("replace", path).with_occurrences(0),
        Ok(Replacement::Replaced { occurrences }) => {
            Outcome::success("replace", path).with_occurrences(occurrences)
        }
        Err(e) => Outcome::failure("replace", path, &e),
    }
}

pub fn run_exists(ctx: &Context, path: &Path) -> Outcome {
    let shown = NormalizedPath::new(path);
    if ctx.store.exists(path) {
        ctx.reporter
            .report(Status::Info, &format!("File '{}' exists.", shown));
        Outcome::success("exists", path)
    } else {
        let message = format!("File '{}' does not exist.", shown);
        ctx.reporter.report(Status::Info, &message);
        Outcome {
            success: false,
            message: Some(message),
            ..Outcome::success("exists", path)
        }
    }
}

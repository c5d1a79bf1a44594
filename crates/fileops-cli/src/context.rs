//! Store construction from command-line flags
//!
//! Precedence for the base directory: `--base-dir`, then the config file's
//! `base_dir`, then the current working directory.

use std::sync::Arc;

use fileops_store::{FileStore, NormalizedPath, Reporter, SilentReporter, StdoutReporter, StoreConfig};

use crate::cli::Cli;
use crate::error::{CliError, Result};

/// Everything a command needs to run.
pub struct Context {
    pub store: FileStore,
    pub reporter: Arc<dyn Reporter>,
    pub json: bool,
}

impl Context {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let mut config = match &cli.config {
            Some(path) => StoreConfig::load(&NormalizedPath::new(path))?,
            None => StoreConfig::default(),
        };
        if let Some(base_dir) = &cli.base_dir {
            config.base_dir = Some(base_dir.clone());
        }

        if let Some(base_dir) = &config.base_dir {
            if base_dir.exists() && !base_dir.is_dir() {
                return Err(CliError::user(format!(
                    "Base directory '{}' is not a directory",
                    NormalizedPath::new(base_dir)
                )));
            }
        }

        let reporter: Arc<dyn Reporter> = if cli.quiet || cli.json {
            Arc::new(SilentReporter)
        } else {
            Arc::new(StdoutReporter)
        };

        let store = FileStore::from_config(&config)?.with_reporter(reporter.clone());
        tracing::debug!(base_dir = %store.base_dir().display(), "store ready");

        Ok(Self {
            store,
            reporter,
            json: cli.json,
        })
    }
}

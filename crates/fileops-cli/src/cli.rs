//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// fileops - Create, read, update, delete and rewrite project files
#[derive(Parser, Debug)]
#[command(name = "fileops")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory every path is resolved against (overrides the config file)
    #[arg(short = 'C', long, global = true, value_name = "DIR", env = "FILEOPS_BASE_DIR")]
    pub base_dir: Option<PathBuf>,

    /// Store configuration file (.toml, .json, .yaml)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress status lines
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Print the outcome as a JSON object instead of status lines
    #[arg(long, global = true)]
    pub json: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Create a new file; fails if it already exists
    Create {
        path: PathBuf,

        /// Initial content (empty if omitted)
        #[arg(allow_hyphen_values = true, conflicts_with = "stdin")]
        content: Option<String>,

        /// Read the content from standard input
        #[arg(long)]
        stdin: bool,
    },

    /// Print a file's content
    Read { path: PathBuf },

    /// Write to an existing file; fails if it does not exist
    Update {
        path: PathBuf,

        #[arg(
            allow_hyphen_values = true,
            required_unless_present = "stdin",
            conflicts_with = "stdin"
        )]
        content: Option<String>,

        /// Append instead of overwriting
        #[arg(short, long)]
        append: bool,

        /// Read the content from standard input
        #[arg(long)]
        stdin: bool,
    },

    /// Delete a file
    Delete { path: PathBuf },

    /// Replace every literal occurrence of OLD with NEW
    ///
    /// Finding no occurrence is not an error.
    Replace {
        path: PathBuf,

        #[arg(allow_hyphen_values = true)]
        old: String,

        #[arg(allow_hyphen_values = true)]
        new: String,
    },

    /// Exit successfully if the path exists
    Exists { path: PathBuf },
}

impl Commands {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Create { .. } => "create",
            Self::Read { .. } => "read",
            Self::Update { .. } => "update",
            Self::Delete { .. } => "delete",
            Self::Replace { .. } => "replace",
            Self::Exists { .. } => "exists",
        }
    }
}

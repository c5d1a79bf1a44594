//! File CRUD for project automation scripts
//!
//! [`FileStore`] resolves every path against a base directory and reports
//! the outcome of each operation both as a `Result` and as a tagged status
//! line for the operator.

pub mod config;
pub mod error;
pub mod io;
pub mod path;
pub mod report;
pub mod store;

pub use config::StoreConfig;
pub use error::{Error, Result};
pub use io::RobustnessConfig;
pub use path::NormalizedPath;
pub use report::{RecordingReporter, Reporter, SilentReporter, Status, StdoutReporter};
pub use store::{FileStore, Replacement, UpdateMode};

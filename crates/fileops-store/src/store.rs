//! Base-directory rooted file CRUD

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::report::{Reporter, Status, StdoutReporter};
use crate::{Error, NormalizedPath, Result, RobustnessConfig, StoreConfig, io};

/// How [`FileStore::update`] writes new content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UpdateMode {
    /// Replace the whole file body.
    #[default]
    Overwrite,
    /// Concatenate after the existing body.
    Append,
}

impl UpdateMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Overwrite => "overwrite",
            Self::Append => "append",
        }
    }
}

impl fmt::Display for UpdateMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a successful [`FileStore::replace`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Replacement {
    /// The search text did not change the content; nothing was written.
    Unchanged,
    /// The file was rewritten.
    Replaced { occurrences: usize },
}

/// File CRUD rooted at a base directory.
///
/// Every path argument is resolved against the base directory. Operations
/// never panic: failures come back as [`Error`] values and are also
/// announced through the store's [`Reporter`]. Nothing is cached between
/// calls.
#[derive(Clone)]
pub struct FileStore {
    base_dir: PathBuf,
    robustness: RobustnessConfig,
    reporter: Arc<dyn Reporter>,
}

impl fmt::Debug for FileStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileStore")
            .field("base_dir", &self.base_dir)
            .field("robustness", &self.robustness)
            .finish_non_exhaustive()
    }
}

impl FileStore {
    /// Create a store rooted at `base_dir`, reporting to stdout.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            robustness: RobustnessConfig::default(),
            reporter: Arc::new(StdoutReporter),
        }
    }

    /// Create a store rooted at the current working directory.
    pub fn at_cwd() -> Result<Self> {
        let cwd = std::env::current_dir().map_err(|e| Error::io(".", e))?;
        Ok(Self::new(dunce::simplified(&cwd)))
    }

    /// Create a store from loaded configuration.
    ///
    /// Falls back to the current working directory when no base is set.
    pub fn from_config(config: &StoreConfig) -> Result<Self> {
        let store = match &config.base_dir {
            Some(base_dir) => Self::new(base_dir),
            None => Self::at_cwd()?,
        };
        Ok(store.with_robustness(config.robustness))
    }

    pub fn with_reporter(mut self, reporter: Arc<dyn Reporter>) -> Self {
        self.reporter = reporter;
        self
    }

    pub fn with_robustness(mut self, robustness: RobustnessConfig) -> Self {
        self.robustness = robustness;
        self
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Join `path` with the base directory. Absolute paths replace the base.
    pub fn resolve(&self, path: impl AsRef<Path>) -> PathBuf {
        self.base_dir.join(path)
    }

    pub fn exists(&self, path: impl AsRef<Path>) -> bool {
        self.resolve(path).exists()
    }

    /// Create a new file holding `content`.
    ///
    /// Never overwrites: an existing target fails with
    /// [`Error::AlreadyExists`] and keeps its content. Missing parent
    /// directories are created.
    pub fn create(&self, path: impl AsRef<Path>, content: &str) -> Result<()> {
        let path = path.as_ref();
        let shown = NormalizedPath::new(path);
        let full_path = self.resolve(path);
        tracing::debug!(path = %shown, resolved = %full_path.display(), "create");

        if full_path.exists() {
            self.already_exists(&shown);
            return Err(Error::AlreadyExists { path: full_path });
        }

        match io::create_new(&full_path, content.as_bytes(), self.robustness) {
            Ok(()) => {
                self.report(Status::Success, format!("Created file '{}'", shown));
                Ok(())
            }
            Err(e) if e.is_already_exists() => {
                self.already_exists(&shown);
                Err(e)
            }
            Err(e) => {
                tracing::warn!(path = %shown, error = %e, "create failed");
                self.report(
                    Status::Error,
                    format!("Failed to create file '{}'. Reason: {}", shown, e.reason()),
                );
                Err(e)
            }
        }
    }

    /// Create a new empty file.
    pub fn create_empty(&self, path: impl AsRef<Path>) -> Result<()> {
        self.create(path, "")
    }

    /// Read the full text of a file. Re-reads from disk on every call.
    pub fn read(&self, path: impl AsRef<Path>) -> Result<String> {
        let path = path.as_ref();
        let shown = NormalizedPath::new(path);
        let full_path = self.resolve(path);
        tracing::debug!(path = %shown, resolved = %full_path.display(), "read");

        if !full_path.exists() {
            self.report(Status::Error, format!("File '{}' not found.", shown));
            return Err(Error::NotFound { path: full_path });
        }

        io::read_text(&full_path).inspect_err(|e| {
            tracing::warn!(path = %shown, error = %e, "read failed");
            self.report(
                Status::Error,
                format!("Failed to read file '{}'. Reason: {}", shown, e.reason()),
            );
        })
    }

    /// Write `content` to an existing file.
    ///
    /// A missing target fails with [`Error::NotFound`] and nothing is
    /// written.
    pub fn update(&self, path: impl AsRef<Path>, content: &str, mode: UpdateMode) -> Result<()> {
        let path = path.as_ref();
        let shown = NormalizedPath::new(path);
        let full_path = self.resolve(path);
        tracing::debug!(path = %shown, resolved = %full_path.display(), %mode, "update");

        if !full_path.exists() {
            self.report(
                Status::Error,
                format!("File '{}' not found. Use create to create it.", shown),
            );
            return Err(Error::NotFound { path: full_path });
        }

        let bytes = content.as_bytes();
        let result = match mode {
            UpdateMode::Overwrite if self.robustness.atomic_overwrite => {
                io::write_atomic(&full_path, bytes, self.robustness)
            }
            UpdateMode::Overwrite => io::write_in_place(&full_path, bytes, self.robustness),
            UpdateMode::Append => io::append(&full_path, bytes, self.robustness),
        };

        match &result {
            Ok(()) => self.report(
                Status::Success,
                format!("Updated file '{}' (mode='{}')", shown, mode),
            ),
            Err(e) => {
                tracing::warn!(path = %shown, error = %e, "update failed");
                self.report(
                    Status::Error,
                    format!("Failed to update file '{}'. Reason: {}", shown, e.reason()),
                );
            }
        }
        result
    }

    /// Remove a file.
    pub fn delete(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let shown = NormalizedPath::new(path);
        let full_path = self.resolve(path);
        tracing::debug!(path = %shown, resolved = %full_path.display(), "delete");

        if !full_path.exists() {
            self.report(Status::Error, format!("File '{}' not found.", shown));
            return Err(Error::NotFound { path: full_path });
        }

        match fs::remove_file(&full_path) {
            Ok(()) => {
                self.report(Status::Success, format!("Deleted file '{}'", shown));
                Ok(())
            }
            Err(source) => {
                let e = Error::io(&full_path, source);
                tracing::warn!(path = %shown, error = %e, "delete failed");
                self.report(
                    Status::Error,
                    format!("Failed to delete file '{}'. Reason: {}", shown, e.reason()),
                );
                Err(e)
            }
        }
    }

    /// Replace every literal occurrence of `old` with `new`.
    ///
    /// Content left unchanged by the substitution is a successful no-op and
    /// the file is not rewritten.
    pub fn replace(&self, path: impl AsRef<Path>, old: &str, new: &str) -> Result<Replacement> {
        let path = path.as_ref();
        let content = self.read(path)?;

        let replaced = content.replace(old, new);
        if replaced == content {
            self.report(
                Status::Info,
                format!(
                    "No occurrences of '{}' found in '{}'.",
                    old,
                    NormalizedPath::new(path)
                ),
            );
            return Ok(Replacement::Unchanged);
        }

        let occurrences = content.matches(old).count();
        self.update(path, &replaced, UpdateMode::Overwrite)?;
        Ok(Replacement::Replaced { occurrences })
    }

    fn already_exists(&self, shown: &NormalizedPath) {
        self.report(
            Status::Warning,
            format!(
                "File '{}' already exists. Use update to modify content.",
                shown
            ),
        );
    }

    fn report(&self, status: Status, message: String) {
        self.reporter.report(status, &message);
    }
}

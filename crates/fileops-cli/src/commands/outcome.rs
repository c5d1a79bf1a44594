//! Result of a single command, printable as JSON

use std::path::Path;

use fileops_store::NormalizedPath;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub operation: &'static str,
    pub path: String,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occurrences: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl Outcome {
    pub fn success(operation: &'static str, path: &Path) -> Self {
        Self {
            operation,
            path: NormalizedPath::new(path).to_string(),
            success: true,
            message: None,
            occurrences: None,
            content: None,
        }
    }

    pub fn failure(operation: &'static str, path: &Path, error: &fileops_store::Error) -> Self {
        Self {
            success: false,
            message: Some(error.to_string()),
            ..Self::success(operation, path)
        }
    }

    pub fn from_result(
        operation: &'static str,
        path: &Path,
        result: fileops_store::Result<()>,
    ) -> Self {
        match result {
            Ok(()) => Self::success(operation, path),
            Err(e) => Self::failure(operation, path, &e),
        }
    }

    pub fn with_content(mut self, content: String) -> Self {
        self.content = Some(content);
        self
    }

    pub fn with_occurrences(mut self, occurrences: usize) -> Self {
        self.occurrences = Some(occurrences);
        self
    }

    /// Process exit code for this outcome.
    pub fn exit_code(&self) -> i32 {
        if self.success { 0 } else { 1 }
    }
}

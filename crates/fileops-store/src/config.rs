//! Store configuration, loadable from TOML, JSON or YAML

use std::path::PathBuf;

use serde::Deserialize;

use crate::{Error, NormalizedPath, Result, io};

/// Settings a script passes to [`crate::FileStore::from_config`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoreConfig {
    /// Directory all paths are resolved against. Current directory if unset.
    pub base_dir: Option<PathBuf>,
    pub robustness: io::RobustnessConfig,
}

impl StoreConfig {
    /// Load configuration from a file.
    ///
    /// Format is detected from file extension:
    /// - `.toml` -> TOML
    /// - `.json` -> JSON
    /// - `.yaml`, `.yml` -> YAML
    pub fn load(path: &NormalizedPath) -> Result<Self> {
        let extension = path.extension().unwrap_or("").to_lowercase();
        let parse_error = |format: &str, message: String| Error::ConfigParse {
            path: path.to_native(),
            format: format.into(),
            message,
        };

        // Reject the format before touching the file.
        if !matches!(extension.as_str(), "toml" | "json" | "yaml" | "yml") {
            return Err(Error::UnsupportedFormat { extension });
        }

        let content = io::read_text(&path.to_native())?;
        let config: Self = match extension.as_str() {
            "toml" => toml::from_str(&content).map_err(|e| parse_error("TOML", e.to_string()))?,
            "json" => {
                serde_json::from_str(&content).map_err(|e| parse_error("JSON", e.to_string()))?
            }
            _ => serde_yaml::from_str(&content).map_err(|e| parse_error("YAML", e.to_string()))?,
        };

        tracing::debug!(path = %path, "loaded store config");
        Ok(config)
    }
}

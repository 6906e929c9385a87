//! Input files for `freefall run`.
//!
//! A file holds any subset of the raw input fields under their wire names:
//!
//! ```toml
//! gravity = 1.62
//! initialHeight = "250"
//! velocityDirection = "up"
//! ```

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use freefall::RawInputs;
use thiserror::Error;
use tracing::debug;

/// Syntax of an input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Toml,
    Yaml,
    Json,
}

impl FileFormat {
    /// Picks the format from a path's extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "toml" => Some(Self::Toml),
            "yaml" | "yml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum InputFileError {
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unsupported input file {}: expected .toml, .yaml, .yml or .json", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("invalid TOML input")]
    Toml(#[from] toml::de::Error),

    #[error("invalid YAML input")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid JSON input")]
    Json(#[from] serde_json::Error),
}

/// Parses raw inputs from file contents.
pub fn parse(text: &str, format: FileFormat) -> Result<RawInputs, InputFileError> {
    let raw = match format {
        FileFormat::Toml => toml::from_str(text)?,
        FileFormat::Yaml => serde_yaml::from_str(text)?,
        FileFormat::Json => serde_json::from_str(text)?,
    };
    Ok(raw)
}

/// Reads and parses an input file, choosing the format by extension.
pub fn load(path: &Path) -> Result<RawInputs, InputFileError> {
    let format =
        FileFormat::from_path(path).ok_or_else(|| InputFileError::UnsupportedFormat(path.into()))?;

    let text = fs::read_to_string(path).map_err(|source| InputFileError::Read {
        path: path.into(),
        source,
    })?;

    debug!(path = %path.display(), ?format, "loaded input file");
    parse(&text, format)
}

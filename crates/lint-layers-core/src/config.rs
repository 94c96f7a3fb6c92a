//! Configuration file for chain requests.
//!
//! ```toml
//! [typescript]
//! root_dir = "."
//!
//! [customize]
//! source_type = "module"
//! rules = { "no-console" = "warn" }
//! remove_rules = ["sonarjs/no-duplicate-string"]
//! ```

use crate::error::ChainError;
use crate::request::{ChainRequest, Customization, LayerPatch, TypedLayerOptions};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Parsed request configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Typed-language layer options; `None` leaves the layer out.
    pub typescript: Option<TypedLayerOptions>,
    /// Declarative customization of the base layer.
    pub customize: Option<LayerPatch>,
}

impl Config {
    /// Creates an empty configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid, or
    /// [`ConfigError::Chain`] wrapping [`ChainError::MalformedCustomization`]
    /// if `customize` is not a valid patch.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        #[derive(Deserialize)]
        struct RawConfig {
            #[serde(default)]
            typescript: Option<TypedLayerOptions>,
            #[serde(default)]
            customize: Option<toml::Value>,
        }

        let raw: RawConfig = toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })?;
        let customize = raw.customize.map(LayerPatch::from_value).transpose()?;

        Ok(Self {
            typescript: raw.typescript,
            customize,
        })
    }

    /// Resolves a relative `typescript.root_dir` against `base`, the
    /// directory the configuration belongs to.
    #[must_use]
    pub fn rooted_at(mut self, base: &Path) -> Self {
        if let Some(options) = self.typescript.as_mut() {
            if let Some(root) = options.root_dir.as_ref().filter(|r| r.is_relative()) {
                let joined: PathBuf = if root.as_os_str().is_empty() {
                    root.clone()
                } else {
                    base.join(root)
                };
                options.root_dir = Some(joined);
            }
        }
        self
    }

    /// Converts the configuration into a chain request.
    #[must_use]
    pub fn into_request(self) -> ChainRequest {
        ChainRequest {
            typescript: self.typescript,
            customize: self.customize.map(Customization::Patch),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in config file.
    #[error("Failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },

    /// The configuration parsed but describes an invalid request.
    #[error(transparent)]
    Chain(#[from] ChainError),
}

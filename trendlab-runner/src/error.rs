//! Error taxonomy for the runner's I/O and orchestration layer.

use thiserror::Error;

/// Errors from the CSV bar loader.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open '{path}': {source}")]
    Open { path: String, source: std::io::Error },
}

/// Errors surfaced from run configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    Read { path: String, source: std::io::Error },

    #[error("failed to parse toml in '{path}': {source}")]
    Parse { path: String, source: toml::de::Error },
}

/// Errors from orchestrating a full run.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("data error: {0}")]
    Data(#[from] LoadError),
}

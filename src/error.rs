//! Error types for the analysis run

use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigLoadError;
use crate::io::LoadError;

/// Anything that aborts an analysis run
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// A trajectory log could not be read
    #[error("Load error: {0}")]
    Load(#[from] LoadError),

    /// The config file could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigLoadError),

    /// An SVG plot could not be written
    #[error("Failed to write plot {path}: {source}")]
    Render {
        /// Output file
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
}

/// Result alias for analysis operations
pub type Result<T> = std::result::Result<T, AnalysisError>;

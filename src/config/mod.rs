//! Analysis configuration.
//!
//! Loads all settings from a single YAML file with defaults matching the
//! recorded experiments. Every value is passed explicitly into the pipeline;
//! nothing is read from global state.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use hand_accuracy::config::AnalysisConfig;
//!
//! // Load from default path (configs/accuracy.yaml), or built-in defaults
//! let config = AnalysisConfig::load_default()?;
//!
//! let predicate = config.validity.to_predicate();
//! ```
//!
//! ## Example YAML
//!
//! ```yaml
//! frame_range:
//!   start: 200
//!   end: 250
//!
//! # Reference (x, y, z) -> tracker (y, -x, z)
//! reference_rotation: [[0, 1, 0], [-1, 0, 0], [0, 0, 1]]
//!
//! validity:
//!   sentinels:
//!     - [8.720749, 56.646088, -85.070961]
//!     - [8.720749, -56.646088, -85.070961]
//!   tolerance: 0.1
//!
//! plot:
//!   output_dir: ./plots
//!   extent: 75.0
//!   paired_errors: false
//! ```

mod analysis;
mod defaults;
mod error;
mod files;
mod plot;
mod validity;

pub use analysis::{AnalysisConfig, DEFAULT_CONFIG_PATH};
pub use error::ConfigLoadError;
pub use files::FileSection;
pub use plot::PlotSection;
pub use validity::ValiditySettings;

//! Main AnalysisConfig and loading.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::{FrameRange, RotationMatrix3};

use super::error::ConfigLoadError;
use super::files::FileSection;
use super::plot::PlotSection;
use super::validity::ValiditySettings;

/// Default config file location
pub const DEFAULT_CONFIG_PATH: &str = "configs/accuracy.yaml";

/// Full analysis configuration loaded from YAML
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
pub struct AnalysisConfig {
    /// Rows `[start, end)` analysed in every log
    #[serde(default)]
    pub frame_range: FrameRange,

    /// Applied to reference samples before comparison
    #[serde(default)]
    pub reference_rotation: RotationMatrix3,

    /// Optical tracker sentinel detection
    #[serde(default)]
    pub validity: ValiditySettings,

    /// Input file names
    #[serde(default)]
    pub files: FileSection,

    /// SVG output
    #[serde(default)]
    pub plot: PlotSection,
}

impl AnalysisConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io(e.to_string()))?;
        Self::from_yaml(&contents)
    }

    /// Load from the default path, falling back to built-in defaults
    pub fn load_default() -> Result<Self, ConfigLoadError> {
        let path = Path::new(DEFAULT_CONFIG_PATH);
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse and validate a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: Self =
            serde_yaml::from_str(yaml).map_err(|e| ConfigLoadError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        if self.frame_range.start > self.frame_range.end {
            return Err(ConfigLoadError::Invalid(format!(
                "frame_range start {} is after end {}",
                self.frame_range.start, self.frame_range.end
            )));
        }
        if self.validity.tolerance.is_nan() || self.validity.tolerance < 0.0 {
            return Err(ConfigLoadError::Invalid(format!(
                "validity tolerance must be >= 0, got {}",
                self.validity.tolerance
            )));
        }
        if self.plot.extent.is_nan() || self.plot.extent <= 0.0 {
            return Err(ConfigLoadError::Invalid(format!(
                "plot extent must be > 0, got {}",
                self.plot.extent
            )));
        }
        Ok(())
    }
}

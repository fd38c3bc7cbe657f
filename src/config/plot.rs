//! Plot output section.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Plot output settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlotSection {
    /// Write SVG plots at all
    #[serde(default = "defaults::enabled")]
    pub enabled: bool,

    /// Root directory; each folder gets its own subdirectory
    #[serde(default = "defaults::output_dir")]
    pub output_dir: String,

    /// Half-width of the 2D trace axes (cm)
    #[serde(default = "defaults::extent")]
    pub extent: f32,

    /// Also write one left/right error plot per source
    #[serde(default)]
    pub paired_errors: bool,
}

impl Default for PlotSection {
    fn default() -> Self {
        Self {
            enabled: true,
            output_dir: defaults::output_dir(),
            extent: defaults::extent(),
            paired_errors: false,
        }
    }
}

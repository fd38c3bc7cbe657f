//! Input file names inside an experiment folder.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Log file names, relative to the experiment folder
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FileSection {
    /// Optical tracker, left hand
    #[serde(default = "defaults::leap_left")]
    pub leap_left: String,

    /// Optical tracker, right hand
    #[serde(default = "defaults::leap_right")]
    pub leap_right: String,

    /// Inertial suit, left hand
    #[serde(default = "defaults::neuron_left")]
    pub neuron_left: String,

    /// Inertial suit, right hand
    #[serde(default = "defaults::neuron_right")]
    pub neuron_right: String,

    /// Fused estimate, left hand
    #[serde(default = "defaults::fused_left")]
    pub fused_left: String,

    /// Fused estimate, right hand
    #[serde(default = "defaults::fused_right")]
    pub fused_right: String,

    /// Motion-capture reference, left hand
    #[serde(default = "defaults::reference_left")]
    pub reference_left: String,

    /// Motion-capture reference, right hand
    #[serde(default = "defaults::reference_right")]
    pub reference_right: String,
}

impl Default for FileSection {
    fn default() -> Self {
        Self {
            leap_left: defaults::leap_left(),
            leap_right: defaults::leap_right(),
            neuron_left: defaults::neuron_left(),
            neuron_right: defaults::neuron_right(),
            fused_left: defaults::fused_left(),
            fused_right: defaults::fused_right(),
            reference_left: defaults::reference_left(),
            reference_right: defaults::reference_right(),
        }
    }
}

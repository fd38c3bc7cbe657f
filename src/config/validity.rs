//! Tracker validity section.

use serde::{Deserialize, Serialize};

use crate::core::Point3;
use crate::evaluation::SentinelValidity;

use super::defaults;

/// "No detection" sentinel settings for the optical tracker
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ValiditySettings {
    /// Off-points as `[x, y, z]` (cm)
    #[serde(default = "leap_sentinels")]
    pub sentinels: Vec<[f32; 3]>,

    /// Match radius (cm)
    #[serde(default = "defaults::tolerance")]
    pub tolerance: f32,
}

fn leap_sentinels() -> Vec<[f32; 3]> {
    SentinelValidity::leap_motion()
        .sentinels
        .iter()
        .map(|p| p.to_array())
        .collect()
}

impl Default for ValiditySettings {
    fn default() -> Self {
        Self {
            sentinels: leap_sentinels(),
            tolerance: defaults::tolerance(),
        }
    }
}

impl ValiditySettings {
    /// Build the per-sample predicate
    pub fn to_predicate(&self) -> SentinelValidity {
        SentinelValidity::new(
            self.sentinels.iter().map(|&p| Point3::from(p)).collect(),
            self.tolerance,
        )
    }
}

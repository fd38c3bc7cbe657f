//! Per-sample validity predicates.

use serde::{Deserialize, Serialize};

use crate::core::Point3;

/// Flags samples that sit on a tracker's "no detection" position.
///
/// The optical hand tracker parks a lost hand at a fixed off-point; a sample
/// within `tolerance` of any sentinel is invalid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SentinelValidity {
    /// Positions reported when the hand is not detected
    pub sentinels: Vec<Point3>,
    /// Match radius around each sentinel (cm)
    pub tolerance: f32,
}

impl SentinelValidity {
    /// Create a predicate for the given off-points
    pub fn new(sentinels: Vec<Point3>, tolerance: f32) -> Self {
        Self {
            sentinels,
            tolerance,
        }
    }

    /// Off-points used by the optical tracker for the left and right hands.
    pub fn leap_motion() -> Self {
        Self::new(
            vec![
                Point3::new(8.720749, 56.646088, -85.070961),
                Point3::new(8.720749, -56.646088, -85.070961),
            ],
            0.1,
        )
    }

    /// True when `p` is strictly farther than `tolerance` from every sentinel.
    pub fn is_valid(&self, p: &Point3) -> bool {
        self.sentinels
            .iter()
            .all(|s| p.distance(s) > self.tolerance)
    }
}

impl Default for SentinelValidity {
    fn default() -> Self {
        Self::leap_motion()
    }
}

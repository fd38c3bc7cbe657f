//! Fixed 3x3 rotation used to re-express reference-system axes.
//!
//! The motion-capture reference records in a right-handed frame whose x/y
//! axes differ from the hand trackers'. Reference trajectories must be passed
//! through [`RotationMatrix3::transform`] before any error is computed.

use serde::{Deserialize, Serialize};

use super::{Point3, Trajectory};

/// Row-major 3x3 matrix applied as `R · p`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RotationMatrix3 {
    /// Matrix rows
    pub rows: [[f32; 3]; 3],
}

impl RotationMatrix3 {
    /// Identity (no remapping)
    pub const IDENTITY: RotationMatrix3 = RotationMatrix3 {
        rows: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
    };

    /// Maps `(x, y, z)` to `(y, -x, z)`.
    pub const REFERENCE_TO_TRACKER: RotationMatrix3 = RotationMatrix3 {
        rows: [[0.0, 1.0, 0.0], [-1.0, 0.0, 0.0], [0.0, 0.0, 1.0]],
    };

    /// Create from row-major entries
    pub const fn new(rows: [[f32; 3]; 3]) -> Self {
        Self { rows }
    }

    /// Matrix-vector product `R · p`.
    #[inline]
    pub fn apply(&self, p: Point3) -> Point3 {
        let [r0, r1, r2] = self.rows;
        Point3::new(
            r0[0] * p.x + r0[1] * p.y + r0[2] * p.z,
            r1[0] * p.x + r1[1] * p.y + r1[2] * p.z,
            r2[0] * p.x + r2[1] * p.y + r2[2] * p.z,
        )
    }

    /// Rotate every sample of a trajectory.
    ///
    /// Returns a new trajectory with the same length and ordering; the input
    /// is left untouched.
    pub fn transform(&self, trajectory: &Trajectory) -> Trajectory {
        trajectory.iter().map(|&p| self.apply(p)).collect()
    }
}

impl Default for RotationMatrix3 {
    fn default() -> Self {
        Self::REFERENCE_TO_TRACKER
    }
}

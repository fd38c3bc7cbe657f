//! 3D position sample type.

use serde::{Deserialize, Serialize};

/// A tracked position in centimeters.
///
/// Axes follow the tracker convention: x forward, y left, z up.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Point3 {
    /// Forward (cm)
    pub x: f32,
    /// Left (cm)
    pub y: f32,
    /// Up (cm)
    pub z: f32,
}

impl Point3 {
    /// Create a new point
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Origin
    pub const ZERO: Point3 = Point3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Euclidean distance to another point
    #[inline]
    pub fn distance(&self, other: &Point3) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    /// Components as an array `[x, y, z]`
    #[inline]
    pub fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
}

impl From<[f32; 3]> for Point3 {
    #[inline]
    fn from(v: [f32; 3]) -> Self {
        Point3::new(v[0], v[1], v[2])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_pythagorean() {
        let a = Point3::ZERO;
        let b = Point3::new(3.0, 4.0, 0.0);
        assert!((a.distance(&b) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_distance_3d() {
        let a = Point3::new(1.0, 2.0, 3.0);
        let b = Point3::new(3.0, 5.0, 9.0);
        // (2, 3, 6) -> 7
        assert!((a.distance(&b) - 7.0).abs() < 1e-6);
        assert!((b.distance(&a) - 7.0).abs() < 1e-6);
    }

    #[test]
    fn test_array_conversion() {
        let p = Point3::from([4.0, 5.0, 6.0]);
        assert_eq!(p.to_array(), [4.0, 5.0, 6.0]);
    }
}

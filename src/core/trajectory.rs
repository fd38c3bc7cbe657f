//! Trajectory container and frame-range selection.

use serde::{Deserialize, Serialize};

use super::Point3;

/// Ordered sequence of position samples, one per recorded frame.
///
/// Index order is temporal order. Frame indices mean "i-th sample taken";
/// streams are only comparable because they share a sample rate and start.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Trajectory {
    points: Vec<Point3>,
}

impl Trajectory {
    /// Wrap a list of samples
    pub fn new(points: Vec<Point3>) -> Self {
        Self { points }
    }

    /// Number of samples
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when no samples were recorded
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// All samples as a slice
    #[inline]
    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    /// Sample at `index`
    #[inline]
    pub fn get(&self, index: usize) -> Option<Point3> {
        self.points.get(index).copied()
    }

    /// Iterate samples in frame order
    pub fn iter(&self) -> std::slice::Iter<'_, Point3> {
        self.points.iter()
    }

    /// Copy out the frames selected by `range`.
    pub fn frames(&self, range: FrameRange) -> Trajectory {
        Trajectory::new(self.points[range.clamped(self.len())].to_vec())
    }

    /// Take the first `n` samples (or all, if shorter).
    pub fn truncated(&self, n: usize) -> &[Point3] {
        &self.points[..n.min(self.len())]
    }
}

impl FromIterator<Point3> for Trajectory {
    fn from_iter<I: IntoIterator<Item = Point3>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl From<Vec<Point3>> for Trajectory {
    fn from(points: Vec<Point3>) -> Self {
        Self::new(points)
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a Point3;
    type IntoIter = std::slice::Iter<'a, Point3>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Half-open row range `[start, end)` applied to every loaded trajectory.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameRange {
    /// First row kept
    pub start: usize,
    /// First row dropped
    pub end: usize,
}

impl FrameRange {
    /// Create a new range
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Index range clamped to a sequence of `len` rows.
    ///
    /// Rows past the end simply do not exist, like slicing a short array.
    pub fn clamped(&self, len: usize) -> std::ops::Range<usize> {
        let end = self.end.min(len);
        let start = self.start.min(end);
        start..end
    }
}

impl Default for FrameRange {
    fn default() -> Self {
        Self::new(200, 250)
    }
}

//! Per-frame positional error against a reference trajectory.
//!
//! Frames are paired by index only: candidate sample `i` is compared with
//! reference sample `i` for `i < min(len(candidate), len(reference))`.
//! Length mismatches are truncated away rather than reported as errors; the
//! aggregation helpers log a warning when that happens so desynchronized
//! recordings do not go unnoticed.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::core::Trajectory;

/// Summary statistics over a list of errors.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorStats {
    /// Root mean square error
    pub rmse: f32,

    /// Mean error
    pub mean: f32,

    /// Standard deviation
    pub std: f32,

    /// Minimum error
    pub min: f32,

    /// Maximum error
    pub max: f32,

    /// Median error
    pub median: f32,

    /// Number of samples
    pub count: usize,
}

impl ErrorStats {
    /// Compute statistics from a list of errors.
    pub fn from_errors(errors: &[f32]) -> Self {
        if errors.is_empty() {
            return Self::default();
        }

        let count = errors.len();
        let n = count as f32;

        let mean = errors.iter().sum::<f32>() / n;

        let sum_sq: f32 = errors.iter().map(|e| e * e).sum();
        let rmse = (sum_sq / n).sqrt();

        let variance = errors.iter().map(|e| (e - mean).powi(2)).sum::<f32>() / n;
        let std = variance.sqrt();

        let min = errors.iter().cloned().fold(f32::INFINITY, f32::min);
        let max = errors.iter().cloned().fold(f32::NEG_INFINITY, f32::max);

        let mut sorted = errors.to_vec();
        sorted.sort_by(|a, b| a.total_cmp(b));
        let median = if count.is_multiple_of(2) {
            (sorted[count / 2 - 1] + sorted[count / 2]) / 2.0
        } else {
            sorted[count / 2]
        };

        Self {
            rmse,
            mean,
            std,
            min,
            max,
            median,
            count,
        }
    }

    /// Format as a single-line summary.
    pub fn summary(&self) -> String {
        format!(
            "rmse: {:.4}, mean: {:.4}, std: {:.4}, min: {:.4}, max: {:.4}, median: {:.4}, n: {}",
            self.rmse, self.mean, self.std, self.min, self.max, self.median, self.count
        )
    }
}

/// Euclidean distance per compared frame (cm).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorSeries {
    errors: Vec<f32>,
}

impl ErrorSeries {
    /// Pair `candidate[i]` with `reference[i]` over the shared prefix.
    pub fn compute(candidate: &Trajectory, reference: &Trajectory) -> Self {
        let n = candidate.len().min(reference.len());
        let errors = candidate
            .truncated(n)
            .iter()
            .zip(reference.truncated(n))
            .map(|(c, r)| c.distance(r))
            .collect();
        Self { errors }
    }

    /// Per-frame errors
    pub fn errors(&self) -> &[f32] {
        &self.errors
    }

    /// Number of compared frames
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// True when nothing was compared
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Arithmetic mean. `NaN` for an empty series, as there is no mean.
    pub fn mean(&self) -> f32 {
        if self.errors.is_empty() {
            return f32::NAN;
        }
        self.errors.iter().sum::<f32>() / self.errors.len() as f32
    }

    /// Full summary statistics
    pub fn stats(&self) -> ErrorStats {
        ErrorStats::from_errors(&self.errors)
    }
}

/// Error series for one labeled candidate.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SourceError {
    /// Candidate name (e.g. "LP")
    pub label: String,
    /// Per-frame error against the reference
    pub series: ErrorSeries,
}

impl SourceError {
    /// Mean error for this candidate
    pub fn mean(&self) -> f32 {
        self.series.mean()
    }

    /// Console line in the form `Mean error (<label>) = <mean>`.
    ///
    /// The mean always keeps its decimal point (`3.0`, not `3`).
    pub fn mean_line(&self) -> String {
        format!("Mean error ({}) = {:?}", self.label, self.mean())
    }
}

/// Compare each labeled candidate with one shared reference.
///
/// Output order follows input order.
pub fn aggregate_errors<'l, 't, I>(candidates: I, reference: &Trajectory) -> Vec<SourceError>
where
    I: IntoIterator<Item = (&'l str, &'t Trajectory)>,
{
    candidates
        .into_iter()
        .map(|(label, candidate)| {
            warn_on_truncation(label, candidate, reference);
            let series = ErrorSeries::compute(candidate, reference);
            debug!("{}: {}", label, series.stats().summary());
            SourceError {
                label: label.to_string(),
                series,
            }
        })
        .collect()
}

/// Left/right error series for a single source.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PairedErrors {
    /// Left hand vs left reference
    pub left: ErrorSeries,
    /// Right hand vs right reference
    pub right: ErrorSeries,
}

impl PairedErrors {
    /// Each side is paired with its own reference and truncated independently.
    ///
    /// Does not log length mismatches; [`aggregate_errors`] already reports
    /// them per labeled candidate.
    pub fn compute(
        left: &Trajectory,
        right: &Trajectory,
        left_reference: &Trajectory,
        right_reference: &Trajectory,
    ) -> Self {
        Self {
            left: ErrorSeries::compute(left, left_reference),
            right: ErrorSeries::compute(right, right_reference),
        }
    }
}

fn warn_on_truncation(label: &str, candidate: &Trajectory, reference: &Trajectory) {
    if candidate.len() != reference.len() {
        warn!(
            "{}: length mismatch ({} vs reference {}), comparing first {} frames",
            label,
            candidate.len(),
            reference.len(),
            candidate.len().min(reference.len())
        );
    }
}

//! Contiguous validity run detection.
//!
//! Scans a sample sequence once and reports every maximal run of samples that
//! satisfy a predicate as a half-open index range.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Half-open index range `[start, end)` over which a predicate held.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ValiditySection {
    /// First valid index
    pub start: usize,
    /// First invalid index after the run (or the sequence length)
    pub end: usize,
}

impl ValiditySection {
    /// Create a new section
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

impl fmt::Display for ValiditySection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

/// Find all maximal runs where `valid` holds.
///
/// Sections come back ascending and non-overlapping, with at least one
/// invalid sample between consecutive sections. A run still open at the end
/// of the input is closed at `samples.len()`.
pub fn find_valid_sections<T, P>(samples: &[T], valid: P) -> Vec<ValiditySection>
where
    P: Fn(&T) -> bool,
{
    let mut sections = Vec::new();
    let mut in_run = false;
    let mut start = 0;

    for (i, sample) in samples.iter().enumerate() {
        let v = valid(sample);
        if v && !in_run {
            start = i;
        }
        if !v && in_run {
            sections.push(ValiditySection::new(start, i));
        }
        in_run = v;
    }

    if in_run {
        sections.push(ValiditySection::new(start, samples.len()));
    }

    sections
}

/// Render sections as `[[a, b], [c, d]]`.
pub fn format_sections(sections: &[ValiditySection]) -> String {
    let inner: Vec<String> = sections.iter().map(|s| s.to_string()).collect();
    format!("[{}]", inner.join(", "))
}

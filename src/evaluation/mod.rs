//! Accuracy evaluation against a reference tracking system.
//!
//! ## Overview
//!
//! 1. **Validity** - [`find_valid_sections`] reports contiguous runs where a
//!    per-sample predicate such as [`SentinelValidity`] holds. These are
//!    diagnostics only and never filter the error computation.
//! 2. **Accuracy** - [`ErrorSeries`] pairs candidate and reference frames by
//!    index and measures the Euclidean distance. [`aggregate_errors`] does this
//!    for several labeled candidates; [`PairedErrors`] for a left/right pair.
//!
//! ## Example
//!
//! ```rust,ignore
//! use hand_accuracy::evaluation::{aggregate_errors, find_valid_sections, SentinelValidity};
//!
//! let validity = SentinelValidity::leap_motion();
//! let sections = find_valid_sections(leap_right.points(), |p| validity.is_valid(p));
//!
//! let errors = aggregate_errors([("LP", &leap), ("FT", &fused)], &reference);
//! for e in &errors {
//!     println!("{}", e.mean_line());
//! }
//! ```

mod accuracy;
mod segments;
mod validity;

pub use accuracy::{ErrorSeries, ErrorStats, PairedErrors, SourceError, aggregate_errors};
pub use segments::{ValiditySection, find_valid_sections, format_sections};
pub use validity::SentinelValidity;

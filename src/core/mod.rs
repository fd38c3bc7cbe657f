//! Core types for hand-position accuracy analysis.
//!
//! - [`Point3`]: a single position sample (centimeters)
//! - [`Trajectory`]: time-ordered samples for one tracked point from one source
//! - [`FrameRange`]: the fixed row window analysed in every log
//! - [`RotationMatrix3`]: reference-to-tracker axis remapping
//!
//! All positions use the tracker convention:
//! - **X-axis**: Forward
//! - **Y-axis**: Left
//! - **Z-axis**: Up

mod point;
mod rotation;
mod trajectory;

pub use point::Point3;
pub use rotation::RotationMatrix3;
pub use trajectory::{FrameRange, Trajectory};

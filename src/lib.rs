//! # hand-accuracy
//!
//! Offline positional accuracy analysis for hand tracking.
//!
//! ## Overview
//!
//! Recorded hand positions from several tracking sources are compared with
//! a motion-capture reference:
//!
//! - **LP** - optical hand tracker (Leap Motion)
//! - **PN** - inertial suit (Perception Neuron)
//! - **FT** - fused estimate of the two
//! - **GT** - reference (OptiTrack), rotated into the trackers' axes
//!
//! For every experiment folder the logs are cut to a fixed frame window, the
//! per-frame Euclidean error of each source is computed against the
//! reference, and the results are printed and plotted as SVG.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use hand_accuracy::{AnalysisConfig, process_folder};
//! use std::path::Path;
//!
//! let config = AnalysisConfig::load_default()?;
//! let report = process_folder(Path::new("test1"), &config)?;
//! report.print();
//! ```
//!
//! ## Coordinate System
//!
//! All samples are in centimeters:
//! - X: Forward
//! - Y: Left
//! - Z: Up

#![warn(missing_docs)]

// Core types
pub mod core;

// Configuration
pub mod config;

// Validity detection and error metrics
pub mod evaluation;

// Log loading and SVG output
pub mod io;

// Per-folder pipeline
pub mod experiment;

pub mod error;

pub use crate::core::{FrameRange, Point3, RotationMatrix3, Trajectory};

pub use config::{AnalysisConfig, ConfigLoadError};

pub use evaluation::{
    ErrorSeries, ErrorStats, PairedErrors, SentinelValidity, SourceError, ValiditySection,
    aggregate_errors, find_valid_sections,
};

pub use error::{AnalysisError, Result};

pub use experiment::{
    ExperimentData, FolderReport, Hand, Source, analyze, process_folder, render_plots,
};

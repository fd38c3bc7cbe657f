//! Per-folder accuracy experiment.
//!
//! One experiment folder holds left/right hand logs from three tracked
//! sources plus the motion-capture reference. Processing a folder is:
//!
//! 1. [`ExperimentData::load`] - read the eight logs, cut the frame range,
//!    rotate the reference into tracker axes
//! 2. [`analyze`] - validity sections and per-source errors
//! 3. [`render_plots`] - trace overlays and error curves (optional)
//!
//! Folders are independent and processed one at a time; a failure in any
//! step aborts the folder.

mod data;
mod plots;
mod report;
mod source;

use std::path::Path;

use crate::config::AnalysisConfig;
use crate::error::Result;

pub use data::{ExperimentData, HandPair, folder_label};
pub use plots::render_plots;
pub use report::{FolderReport, HandErrors, SourcePairErrors, analyze};
pub use source::{Hand, Source};

/// Load, analyse and (if enabled) plot one folder.
pub fn process_folder(folder: &Path, config: &AnalysisConfig) -> Result<FolderReport> {
    let data = ExperimentData::load(folder, config)?;
    let report = analyze(&data, config);
    if config.plot.enabled {
        render_plots(&data, &report, &config.plot)?;
    }
    Ok(report)
}

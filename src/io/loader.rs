//! Whitespace-delimited trajectory log reader.
//!
//! Each non-comment row holds at least three numeric columns (x, y, z in
//! centimeters); extra columns are ignored. `#` starts a comment that runs to
//! the end of the line. Blank lines are skipped.

use std::path::{Path, PathBuf};

use log::debug;
use thiserror::Error;

use crate::core::{Point3, Trajectory};

/// Comment marker
pub const COMMENT_MARKER: char = '#';

/// Failure to read a trajectory log.
#[derive(Error, Debug)]
pub enum LoadError {
    /// File missing or unreadable
    #[error("failed to read {path}: {source}")]
    Io {
        /// File that was being read
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// A column could not be parsed as a number
    #[error("{path}:{line}: column {column}: invalid number {value:?}")]
    Parse {
        /// File that was being read
        path: PathBuf,
        /// 1-based line number
        line: usize,
        /// 1-based column number
        column: usize,
        /// Offending text
        value: String,
    },

    /// Row has fewer than three columns
    #[error("{path}:{line}: expected at least 3 columns, found {found}")]
    TooFewColumns {
        /// File that was being read
        path: PathBuf,
        /// 1-based line number
        line: usize,
        /// Columns present
        found: usize,
    },
}

/// Read a trajectory log from disk.
pub fn load_trajectory(path: &Path) -> Result<Trajectory, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let trajectory = parse_trajectory(&text, path)?;
    debug!("Loaded {} samples from {}", trajectory.len(), path.display());
    Ok(trajectory)
}

/// Parse log text. `origin` is only used in error messages.
pub fn parse_trajectory(text: &str, origin: &Path) -> Result<Trajectory, LoadError> {
    let mut points = Vec::new();

    for (idx, raw) in text.lines().enumerate() {
        let line = match raw.find(COMMENT_MARKER) {
            Some(pos) => &raw[..pos],
            None => raw,
        };

        let columns: Vec<&str> = line.split_whitespace().collect();
        if columns.is_empty() {
            continue;
        }
        if columns.len() < 3 {
            return Err(LoadError::TooFewColumns {
                path: origin.to_path_buf(),
                line: idx + 1,
                found: columns.len(),
            });
        }

        let mut xyz = [0.0f32; 3];
        for (col, (slot, value)) in xyz.iter_mut().zip(&columns).enumerate() {
            *slot = value.parse().map_err(|_| LoadError::Parse {
                path: origin.to_path_buf(),
                line: idx + 1,
                column: col + 1,
                value: value.to_string(),
            })?;
        }

        points.push(Point3::from(xyz));
    }

    Ok(Trajectory::new(points))
}

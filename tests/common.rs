//! Test utilities for hand-accuracy integration tests.
//!
//! Writes synthetic experiment folders whose errors are known exactly.

#![allow(dead_code)]

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use hand_accuracy::config::FileSection;
use hand_accuracy::{Hand, Source};

/// Leap Motion "hand not detected" sample
pub const SENTINEL: [f32; 3] = [8.720749, -56.646088, -85.070961];

/// Raw reference sample for `frame`, before rotation into tracker axes.
///
/// Rotated, this becomes `(0, -frame, 0)`.
pub fn reference_sample(frame: usize) -> [f32; 3] {
    [frame as f32, 0.0, 0.0]
}

/// Candidate sample at a fixed offset from the rotated reference.
///
/// Offsets: LP = 1 cm along x, PN = 2 cm along z, FT = (3, 4, 0) = 5 cm.
pub fn offset_sample(source: Source, frame: usize) -> [f32; 3] {
    let y = -(frame as f32);
    match source {
        Source::Leap => [1.0, y, 0.0],
        Source::PerceptionNeuron => [0.0, y, 2.0],
        Source::Fused => [3.0, y + 4.0, 0.0],
        Source::Reference => reference_sample(frame),
    }
}

/// Format rows the way the recorders do: a header comment, then `x y z`.
pub fn log_text(rows: impl IntoIterator<Item = [f32; 3]>) -> String {
    let mut text = String::from("# x y z (cm)\n");
    for [x, y, z] in rows {
        let _ = writeln!(text, "{} {} {}", x, y, z);
    }
    text
}

/// Write all eight logs with `rows` samples each into `dir`.
///
/// `sample(source, hand, frame)` produces the raw row for each file.
pub fn write_experiment<F>(dir: &Path, rows: usize, sample: F)
where
    F: Fn(Source, Hand, usize) -> [f32; 3],
{
    std::fs::create_dir_all(dir).unwrap();
    let files = FileSection::default();
    let sources = [
        Source::Leap,
        Source::PerceptionNeuron,
        Source::Fused,
        Source::Reference,
    ];
    for source in sources {
        for hand in Hand::BOTH {
            let path = dir.join(source.file_name(hand, &files));
            let text = log_text((0..rows).map(|i| sample(source, hand, i)));
            std::fs::write(path, text).unwrap();
        }
    }
}

/// Experiment with fixed per-source offsets and Leap right-hand dropouts at
/// absolute frames `dropouts`.
pub fn write_offset_experiment(dir: &Path, rows: usize, dropouts: std::ops::Range<usize>) {
    write_experiment(dir, rows, |source, hand, frame| {
        if source == Source::Leap && hand == Hand::Right && dropouts.contains(&frame) {
            SENTINEL
        } else {
            offset_sample(source, frame)
        }
    });
}

/// Create `<root>/<name>` and return its path.
pub fn folder(root: &Path, name: &str) -> PathBuf {
    let dir = root.join(name);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

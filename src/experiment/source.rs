//! Tracking sources and hands.

use serde::{Deserialize, Serialize};

use crate::config::FileSection;

/// Which hand a trajectory belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Hand {
    /// Left hand
    Left,
    /// Right hand
    Right,
}

impl Hand {
    /// Both hands, left first
    pub const BOTH: [Hand; 2] = [Hand::Left, Hand::Right];

    /// "Left" / "Right"
    pub fn name(self) -> &'static str {
        match self {
            Hand::Left => "Left",
            Hand::Right => "Right",
        }
    }

    /// Chart title, e.g. "Left Hand"
    pub fn title(self) -> String {
        format!("{} Hand", self.name())
    }
}

/// A tracking system that produced a pair of hand logs
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Source {
    /// Optical hand tracker (Leap Motion)
    Leap,
    /// Inertial motion-capture suit (Perception Neuron)
    PerceptionNeuron,
    /// Fused estimate of the two above
    Fused,
    /// Optical motion-capture ground truth (OptiTrack)
    Reference,
}

impl Source {
    /// Sources compared against the reference, in report order
    pub const CANDIDATES: [Source; 3] = [Source::Leap, Source::PerceptionNeuron, Source::Fused];

    /// Short label used in plots and the report
    pub fn label(self) -> &'static str {
        match self {
            Source::Leap => "LP",
            Source::PerceptionNeuron => "PN",
            Source::Fused => "FT",
            Source::Reference => "GT",
        }
    }

    /// Log file name for `hand`
    pub fn file_name(self, hand: Hand, files: &FileSection) -> &str {
        match (self, hand) {
            (Source::Leap, Hand::Left) => &files.leap_left,
            (Source::Leap, Hand::Right) => &files.leap_right,
            (Source::PerceptionNeuron, Hand::Left) => &files.neuron_left,
            (Source::PerceptionNeuron, Hand::Right) => &files.neuron_right,
            (Source::Fused, Hand::Left) => &files.fused_left,
            (Source::Fused, Hand::Right) => &files.fused_right,
            (Source::Reference, Hand::Left) => &files.reference_left,
            (Source::Reference, Hand::Right) => &files.reference_right,
        }
    }
}

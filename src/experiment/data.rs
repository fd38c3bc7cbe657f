//! Loading one experiment folder.

use std::path::{Path, PathBuf};

use log::info;

use crate::config::AnalysisConfig;
use crate::core::Trajectory;
use crate::error::Result;
use crate::io::load_trajectory;

use super::source::{Hand, Source};

/// Left and right trajectories from one source
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HandPair {
    /// Left hand
    pub left: Trajectory,
    /// Right hand
    pub right: Trajectory,
}

impl HandPair {
    /// Create from both hands
    pub fn new(left: Trajectory, right: Trajectory) -> Self {
        Self { left, right }
    }

    /// Trajectory for `hand`
    pub fn hand(&self, hand: Hand) -> &Trajectory {
        match hand {
            Hand::Left => &self.left,
            Hand::Right => &self.right,
        }
    }
}

/// All trajectories of one experiment, cut to the configured frame range.
///
/// The reference pair is already rotated into the trackers' axes.
#[derive(Clone, Debug, PartialEq)]
pub struct ExperimentData {
    /// Folder the logs were read from
    pub folder: PathBuf,
    /// Optical hand tracker
    pub leap: HandPair,
    /// Inertial suit
    pub neuron: HandPair,
    /// Fused estimate
    pub fused: HandPair,
    /// Aligned ground truth
    pub reference: HandPair,
}

impl ExperimentData {
    /// Read all eight logs. The first failure aborts the load.
    pub fn load(folder: &Path, config: &AnalysisConfig) -> Result<Self> {
        info!("Loading experiment from {}", folder.display());

        let read = |source: Source| -> Result<HandPair> {
            let load = |hand: Hand| -> Result<Trajectory> {
                let path = folder.join(source.file_name(hand, &config.files));
                Ok(load_trajectory(&path)?.frames(config.frame_range))
            };
            Ok(HandPair::new(load(Hand::Left)?, load(Hand::Right)?))
        };

        let leap = read(Source::Leap)?;
        let neuron = read(Source::PerceptionNeuron)?;
        let fused = read(Source::Fused)?;
        let raw_reference = read(Source::Reference)?;

        Ok(Self::from_raw(
            folder.to_path_buf(),
            leap,
            neuron,
            fused,
            raw_reference,
            config,
        ))
    }

    /// Assemble from already loaded and range-cut trajectories, aligning the
    /// reference pair with `config.reference_rotation`.
    pub fn from_raw(
        folder: PathBuf,
        leap: HandPair,
        neuron: HandPair,
        fused: HandPair,
        raw_reference: HandPair,
        config: &AnalysisConfig,
    ) -> Self {
        let rotation = &config.reference_rotation;
        let reference = HandPair::new(
            rotation.transform(&raw_reference.left),
            rotation.transform(&raw_reference.right),
        );

        Self {
            folder,
            leap,
            neuron,
            fused,
            reference,
        }
    }

    /// Trajectories of `source`
    pub fn source(&self, source: Source) -> &HandPair {
        match source {
            Source::Leap => &self.leap,
            Source::PerceptionNeuron => &self.neuron,
            Source::Fused => &self.fused,
            Source::Reference => &self.reference,
        }
    }

    /// Folder name used to label output
    pub fn name(&self) -> String {
        folder_label(&self.folder)
    }
}

/// Last component of `folder` after resolving `.`, `..` and symlinks.
///
/// Falls back to the path as given when it cannot be resolved (e.g. the
/// folder does not exist) or has no final component (`/`).
pub fn folder_label(folder: &Path) -> String {
    let resolved = std::fs::canonicalize(folder).unwrap_or_else(|_| folder.to_path_buf());
    resolved
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| resolved.display().to_string())
}

//! Per-folder analysis and console report.

use log::info;
use serde::{Deserialize, Serialize};

use crate::config::AnalysisConfig;
use crate::evaluation::{
    PairedErrors, SourceError, ValiditySection, aggregate_errors, find_valid_sections,
    format_sections,
};

use super::data::ExperimentData;
use super::source::{Hand, Source};

/// Candidate errors for one hand, in [`Source::CANDIDATES`] order
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HandErrors {
    /// Which hand
    pub hand: Hand,
    /// One entry per candidate source
    pub sources: Vec<SourceError>,
}

/// Left/right errors for one source
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SourcePairErrors {
    /// Which source
    pub source: Source,
    /// Errors per hand
    pub errors: PairedErrors,
}

/// Everything computed for one experiment folder
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FolderReport {
    /// Folder name
    pub folder: String,
    /// Runs where the right optical-tracker hand was detected
    pub validity_sections: Vec<ValiditySection>,
    /// Per-hand candidate errors (left, then right)
    pub hands: Vec<HandErrors>,
    /// Per-source left/right errors
    pub paired: Vec<SourcePairErrors>,
}

impl FolderReport {
    /// Errors for `hand`
    pub fn hand(&self, hand: Hand) -> Option<&HandErrors> {
        self.hands.iter().find(|h| h.hand == hand)
    }

    /// Mean error of `source` on `hand`
    pub fn mean_error(&self, hand: Hand, source: Source) -> Option<f32> {
        self.hand(hand)?
            .sources
            .iter()
            .find(|e| e.label == source.label())
            .map(SourceError::mean)
    }

    /// Console report lines
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![format!(
            "Valid sections ({} Right): {}",
            Source::Leap.label(),
            format_sections(&self.validity_sections)
        )];
        for hand in &self.hands {
            lines.push(format!("Error analysis ({})", hand.hand.title()));
            lines.extend(hand.sources.iter().map(SourceError::mean_line));
        }
        lines
    }

    /// Print the report to stdout
    pub fn print(&self) {
        println!("=== {} ===", self.folder);
        for line in self.lines() {
            println!("{}", line);
        }
    }
}

/// Run the full comparison for one loaded folder.
///
/// Pure function of `data` and `config`.
pub fn analyze(data: &ExperimentData, config: &AnalysisConfig) -> FolderReport {
    let predicate = config.validity.to_predicate();
    let validity_sections =
        find_valid_sections(data.leap.right.points(), |p| predicate.is_valid(p));

    let hands = Hand::BOTH
        .iter()
        .map(|&hand| HandErrors {
            hand,
            sources: aggregate_errors(
                Source::CANDIDATES
                    .iter()
                    .map(|&s| (s.label(), data.source(s).hand(hand))),
                data.reference.hand(hand),
            ),
        })
        .collect();

    let paired = Source::CANDIDATES
        .iter()
        .map(|&source| {
            let pair = data.source(source);
            SourcePairErrors {
                source,
                errors: PairedErrors::compute(
                    &pair.left,
                    &pair.right,
                    &data.reference.left,
                    &data.reference.right,
                ),
            }
        })
        .collect();

    let report = FolderReport {
        folder: data.name(),
        validity_sections,
        hands,
        paired,
    };
    info!(
        "{}: {} valid section(s), {} sources compared",
        report.folder,
        report.validity_sections.len(),
        Source::CANDIDATES.len()
    );
    report
}

//! Fixed set of SVG plots for one experiment folder.

use std::path::{Path, PathBuf};

use log::info;

use crate::config::PlotSection;
use crate::error::{AnalysisError, Result};
use crate::io::{ErrorPlot, TracePlot};
use crate::io::plot::colors;

use super::data::ExperimentData;
use super::report::FolderReport;
use super::source::Source;

/// Write trace overlays and error curves under `<output_dir>/<folder>/`.
///
/// The folder label is reduced to a single path component, so output never
/// leaves `output_dir`. Returns the files written, in render order.
pub fn render_plots(
    data: &ExperimentData,
    report: &FolderReport,
    settings: &PlotSection,
) -> Result<Vec<PathBuf>> {
    let dir = Path::new(&settings.output_dir).join(output_component(&report.folder));
    let mut written = Vec::new();

    let mut save = |name: String, render: &dyn Fn(&Path) -> std::io::Result<()>| -> Result<()> {
        let path = dir.join(name);
        render(&path).map_err(|source| AnalysisError::Render {
            path: path.clone(),
            source,
        })?;
        written.push(path);
        Ok(())
    };

    let reference = &data.reference;

    for source in Source::CANDIDATES {
        let pair = data.source(source);
        let plot = TracePlot::new(settings.extent)
            .with_title(source.label())
            .with_reference(&reference.left, &reference.right)
            .with_hands(source.label(), &pair.left, &pair.right);
        save(trace_file(source), &|p: &Path| plot.save(p))?;
    }

    let gt = TracePlot::new(settings.extent)
        .with_title(Source::Reference.label())
        .with_hands(Source::Reference.label(), &reference.left, &reference.right);
    save(trace_file(Source::Reference), &|p: &Path| gt.save(p))?;

    for hand in &report.hands {
        let plot = hand
            .sources
            .iter()
            .fold(ErrorPlot::new().with_title(hand.hand.title()), |plot, e| {
                plot.with_palette_series(e.label.clone(), &e.series)
            });
        let name = format!("errors_{}.svg", hand.hand.name().to_lowercase());
        save(name, &|p: &Path| plot.save(p))?;
    }

    if settings.paired_errors {
        for paired in &report.paired {
            let label = paired.source.label();
            let plot = ErrorPlot::new()
                .with_title(format!("{} Left/Right", label))
                .with_series(format!("{} L", label), &paired.errors.left, colors::HAND_LEFT)
                .with_series(format!("{} R", label), &paired.errors.right, colors::HAND_RIGHT);
            let name = format!("paired_errors_{}.svg", label.to_lowercase());
            save(name, &|p: &Path| plot.save(p))?;
        }
    }

    info!("Wrote {} plot(s) to {}", written.len(), dir.display());
    Ok(written)
}

/// Directory name for a folder label: separators replaced, `.`/`..`/empty
/// mapped to a fixed name.
fn output_component(label: &str) -> String {
    let name: String = label
        .chars()
        .map(|c| if matches!(c, '/' | '\\' | ':') { '_' } else { c })
        .collect();
    let name = name.trim_matches('_');
    match name {
        "" | "." | ".." => "experiment".to_string(),
        _ => name.to_string(),
    }
}

fn trace_file(source: Source) -> String {
    format!("trace_{}.svg", source.label().to_lowercase())
}

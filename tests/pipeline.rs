//! End-to-end tests: experiment folder on disk to report and plots.

mod common;

use hand_accuracy::io::LoadError;
use hand_accuracy::{
    AnalysisConfig, AnalysisError, ExperimentData, FrameRange, Hand, Source, ValiditySection,
    analyze, process_folder, render_plots,
};
use tempfile::TempDir;

fn no_plots() -> AnalysisConfig {
    let mut config = AnalysisConfig::default();
    config.plot.enabled = false;
    config
}

fn assert_close(actual: Option<f32>, expected: f32) {
    let actual = actual.expect("source missing from report");
    assert!(
        (actual - expected).abs() < 1e-5,
        "expected mean {}, got {}",
        expected,
        actual
    );
}

// ============================================================================
// Analysis
// ============================================================================

#[test]
fn test_offset_experiment_means() {
    let tmp = TempDir::new().unwrap();
    let dir = common::folder(tmp.path(), "test1");
    common::write_offset_experiment(&dir, 300, 0..0);

    let report = process_folder(&dir, &no_plots()).unwrap();

    assert_eq!(report.folder, "test1");
    for hand in Hand::BOTH {
        assert_close(report.mean_error(hand, Source::Leap), 1.0);
        assert_close(report.mean_error(hand, Source::PerceptionNeuron), 2.0);
        assert_close(report.mean_error(hand, Source::Fused), 5.0);
    }

    // Default window is 50 frames
    let left = report.hand(Hand::Left).unwrap();
    assert!(left.sources.iter().all(|e| e.series.len() == 50));

    // No dropouts: one section covering the whole window
    assert_eq!(report.validity_sections, vec![ValiditySection::new(0, 50)]);
}

#[test]
fn test_dropouts_split_validity_sections() {
    let tmp = TempDir::new().unwrap();
    let dir = common::folder(tmp.path(), "balltest");
    // Absolute frames 210..215 are window frames 10..15
    common::write_offset_experiment(&dir, 300, 210..215);

    let report = process_folder(&dir, &no_plots()).unwrap();

    assert_eq!(
        report.validity_sections,
        vec![ValiditySection::new(0, 10), ValiditySection::new(15, 50)]
    );
    assert_eq!(report.lines()[0], "Valid sections (LP Right): [[0, 10], [15, 50]]");

    // Dropouts only affect the right Leap hand
    assert_close(report.mean_error(Hand::Left, Source::Leap), 1.0);
    let right_lp = report.mean_error(Hand::Right, Source::Leap).unwrap();
    assert!(right_lp > 1.0);
}

#[test]
fn test_short_logs_are_truncated() {
    let tmp = TempDir::new().unwrap();
    let dir = common::folder(tmp.path(), "short");
    common::write_offset_experiment(&dir, 220, 0..0);

    let report = process_folder(&dir, &no_plots()).unwrap();

    let right = report.hand(Hand::Right).unwrap();
    assert!(right.sources.iter().all(|e| e.series.len() == 20));
    assert_close(report.mean_error(Hand::Right, Source::Fused), 5.0);
}

#[test]
fn test_logs_shorter_than_window_start_are_empty() {
    let tmp = TempDir::new().unwrap();
    let dir = common::folder(tmp.path(), "tiny");
    common::write_offset_experiment(&dir, 100, 0..0);

    let report = process_folder(&dir, &no_plots()).unwrap();

    assert!(report.validity_sections.is_empty());
    let mean = report.mean_error(Hand::Left, Source::Leap).unwrap();
    assert!(mean.is_nan());
}

#[test]
fn test_custom_frame_range() {
    let tmp = TempDir::new().unwrap();
    let dir = common::folder(tmp.path(), "test2");
    common::write_offset_experiment(&dir, 300, 0..0);

    let mut config = no_plots();
    config.frame_range = FrameRange::new(0, 10);

    let data = ExperimentData::load(&dir, &config).unwrap();
    assert_eq!(data.leap.left.len(), 10);
    // Reference rotated: raw (i, 0, 0) -> (0, -i, 0)
    assert_eq!(
        data.reference.left.get(3).map(|p| p.to_array()),
        Some([0.0, -3.0, 0.0])
    );

    let report = analyze(&data, &config);
    assert_eq!(report.validity_sections, vec![ValiditySection::new(0, 10)]);
}

#[test]
fn test_repeated_runs_match() {
    let tmp = TempDir::new().unwrap();
    let dir = common::folder(tmp.path(), "test1");
    common::write_offset_experiment(&dir, 260, 230..231);

    let config = no_plots();
    let first = process_folder(&dir, &config).unwrap();
    let second = process_folder(&dir, &config).unwrap();

    assert_eq!(first, second);
}

// ============================================================================
// Failures
// ============================================================================

#[test]
fn test_missing_log_aborts_folder() {
    let tmp = TempDir::new().unwrap();
    let dir = common::folder(tmp.path(), "test1");
    common::write_offset_experiment(&dir, 300, 0..0);

    let files = AnalysisConfig::default().files;
    std::fs::remove_file(dir.join(&files.fused_right)).unwrap();

    let result = process_folder(&dir, &no_plots());

    match result {
        Err(AnalysisError::Load(LoadError::Io { path, .. })) => {
            assert!(path.ends_with(&files.fused_right));
        }
        other => panic!("expected missing-file error, got {:?}", other),
    }
}

#[test]
fn test_malformed_row_aborts_folder() {
    let tmp = TempDir::new().unwrap();
    let dir = common::folder(tmp.path(), "test1");
    common::write_offset_experiment(&dir, 300, 0..0);

    let files = AnalysisConfig::default().files;
    std::fs::write(dir.join(&files.neuron_left), "1.0 2.0 abc\n").unwrap();

    let result = process_folder(&dir, &no_plots());

    assert!(matches!(
        result,
        Err(AnalysisError::Load(LoadError::Parse { line: 1, column: 3, .. }))
    ));
}

// ============================================================================
// Plots
// ============================================================================

#[test]
fn test_plots_written_per_folder() {
    let tmp = TempDir::new().unwrap();
    let dir = common::folder(tmp.path(), "test1");
    common::write_offset_experiment(&dir, 300, 210..215);

    let mut config = AnalysisConfig::default();
    config.plot.output_dir = tmp.path().join("plots").display().to_string();
    config.plot.paired_errors = true;

    let data = ExperimentData::load(&dir, &config).unwrap();
    let report = analyze(&data, &config);
    let written = render_plots(&data, &report, &config.plot).unwrap();

    let out = tmp.path().join("plots").join("test1");
    let expected = [
        "trace_lp.svg",
        "trace_pn.svg",
        "trace_ft.svg",
        "trace_gt.svg",
        "errors_left.svg",
        "errors_right.svg",
        "paired_errors_lp.svg",
        "paired_errors_pn.svg",
        "paired_errors_ft.svg",
    ];
    assert_eq!(written.len(), expected.len());
    for name in expected {
        let path = out.join(name);
        assert!(path.exists(), "missing {}", path.display());
        let svg = std::fs::read_to_string(&path).unwrap();
        assert!(svg.contains("<svg"));
    }

    let errors = std::fs::read_to_string(out.join("errors_left.svg")).unwrap();
    assert!(errors.contains("Left Hand"));
    assert!(errors.contains("FT"));
}

#[test]
fn test_process_folder_skips_plots_when_disabled() {
    let tmp = TempDir::new().unwrap();
    let dir = common::folder(tmp.path(), "test1");
    common::write_offset_experiment(&dir, 300, 0..0);

    let mut config = no_plots();
    config.plot.output_dir = tmp.path().join("plots").display().to_string();

    process_folder(&dir, &config).unwrap();

    assert!(!tmp.path().join("plots").exists());
}

#[test]
fn test_plots_stay_inside_output_dir() {
    let tmp = TempDir::new().unwrap();
    let data_dir = common::folder(tmp.path(), "data");
    common::write_offset_experiment(&data_dir, 300, 0..0);
    std::fs::create_dir_all(data_dir.join("sub")).unwrap();

    let plots = tmp.path().join("plots");
    let mut config = AnalysisConfig::default();
    config.plot.output_dir = plots.display().to_string();

    // Resolves to `data`, which has no usable name before resolution
    let folder = data_dir.join("sub").join("..");
    let data = ExperimentData::load(&folder, &config).unwrap();
    let report = analyze(&data, &config);
    assert_eq!(report.folder, "data");

    let written = render_plots(&data, &report, &config.plot).unwrap();
    assert!(!written.is_empty());
    for path in &written {
        assert_eq!(path.parent(), Some(plots.join("data").as_path()));
    }
    assert!(!data_dir.join("trace_lp.svg").exists());
}

//! hand-accuracy - compare tracked hand positions against motion capture.
//!
//! # Usage
//!
//! ```bash
//! # Default folders: test1 test2 balltest
//! hand-accuracy
//!
//! # Explicit folders, custom config, extra left/right plots
//! hand-accuracy runs/a runs/b --config configs/accuracy.yaml --paired
//! ```

use std::collections::HashSet;
use std::io::Write;
use std::path::{Path, PathBuf};

use clap::Parser;

use hand_accuracy::experiment::folder_label;
use hand_accuracy::{AnalysisConfig, AnalysisError, process_folder};

#[derive(Parser)]
#[command(name = "hand-accuracy")]
#[command(about = "Positional error of fused hand tracking against a reference system")]
#[command(version)]
struct Args {
    /// Experiment folders, processed in order
    #[arg(default_values_t = ["test1".to_string(), "test2".to_string(), "balltest".to_string()])]
    folders: Vec<String>,

    /// YAML config file (default: configs/accuracy.yaml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override plot output directory
    #[arg(short, long)]
    output: Option<String>,

    /// Skip SVG output
    #[arg(long)]
    no_plots: bool,

    /// Also plot left/right errors per source
    #[arg(long)]
    paired: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {} - {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();

    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn load_config(args: &Args) -> Result<AnalysisConfig, AnalysisError> {
    let mut config = match &args.config {
        Some(path) => {
            log::info!("Loading configuration from {}", path.display());
            AnalysisConfig::load(path)?
        }
        None => AnalysisConfig::load_default()?,
    };

    if let Some(ref dir) = args.output {
        config.plot.output_dir = dir.clone();
    }
    if args.no_plots {
        config.plot.enabled = false;
    }
    if args.paired {
        config.plot.paired_errors = true;
    }

    Ok(config)
}

fn run(args: &Args) -> Result<(), AnalysisError> {
    let config = load_config(args)?;

    log::info!("hand-accuracy v{}", env!("CARGO_PKG_VERSION"));
    log::info!(
        "  Frames: [{}, {})",
        config.frame_range.start,
        config.frame_range.end
    );
    if config.plot.enabled {
        log::info!("  Plots: {}", config.plot.output_dir);

        let mut labels = HashSet::new();
        for folder in &args.folders {
            let label = folder_label(Path::new(folder));
            if !labels.insert(label.clone()) {
                log::warn!(
                    "{}: another folder is also named {:?}, its plots will be overwritten",
                    folder,
                    label
                );
            }
        }
    }

    for folder in &args.folders {
        let report = process_folder(Path::new(folder), &config)?;
        report.print();
        println!();
    }

    Ok(())
}

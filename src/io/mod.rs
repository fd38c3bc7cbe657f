//! File input and plot output.
//!
//! - **Trajectory logs**: whitespace-delimited text, `#` comments, one sample
//!   per row ([`load_trajectory`])
//! - **SVG plots**: 2D hand trace overlays ([`TracePlot`]) and error-over-time
//!   curves ([`ErrorPlot`])
//!
//! ```rust,ignore
//! use hand_accuracy::io::{load_trajectory, ErrorPlot, TracePlot};
//! use std::path::Path;
//!
//! let left = load_trajectory(Path::new("test1/Fused_hand_l.csv"))?;
//! let right = load_trajectory(Path::new("test1/Fused_hand_r.csv"))?;
//!
//! TracePlot::new(75.0)
//!     .with_title("FT")
//!     .with_hands("FT", &left, &right)
//!     .save(Path::new("plots/test1/trace_ft.svg"))?;
//! ```

pub mod loader;
pub mod plot;

pub use loader::{COMMENT_MARKER, LoadError, load_trajectory, parse_trajectory};
pub use plot::{ErrorPlot, Palette, PlotStyle, TracePlot};

//! SVG comparison plots.
//!
//! Two fixed chart types are produced for each experiment folder:
//! - [`TracePlot`]: top-down 2D overlay of left/right hand traces, optionally
//!   over the reference traces
//! - [`ErrorPlot`]: error-over-time curves, one line per series

use std::path::Path;

use svg::Document;
use svg::node::element::{Circle, ClipPath, Definitions, Group, Line, Polyline, Rectangle, Text};

use crate::core::{Point3, Trajectory};
use crate::evaluation::ErrorSeries;

/// Fixed colours shared by all plots.
pub mod colors {
    /// Left hand trace
    pub const HAND_LEFT: &str = "#1f77b4";
    /// Right hand trace
    pub const HAND_RIGHT: &str = "#ff7f0e";
    /// Head forward (x) axis stub
    pub const HEAD_X_AXIS: &str = "red";
    /// Head left (y) axis stub
    pub const HEAD_Y_AXIS: &str = "green";
    /// Head origin marker
    pub const HEAD: &str = "black";
    /// Axis frame and tick marks
    pub const FRAME: &str = "#333333";
    /// Grid lines
    pub const GRID: &str = "#E5E5E5";
}

/// Opacity of reference traces drawn under a candidate overlay.
const REFERENCE_OPACITY: f32 = 0.5;

/// Length of the head axis stubs (cm).
const HEAD_AXIS_LENGTH: f32 = 10.0;

/// Ordered three-colour palette for error series.
///
/// ColorBrewer qualitative Set2, n = 3.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Palette {
    /// `#66c2a5`
    Green,
    /// `#8da0cb`
    Blue,
    /// `#fc8d62`
    Orange,
}

impl Palette {
    /// Palette order
    pub const ALL: [Palette; 3] = [Palette::Green, Palette::Blue, Palette::Orange];

    /// Colour for the `index`-th series, cycling every three.
    pub fn for_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    /// Hex colour code
    pub fn hex(self) -> &'static str {
        match self {
            Palette::Green => "#66c2a5",
            Palette::Blue => "#8da0cb",
            Palette::Orange => "#fc8d62",
        }
    }
}

/// Canvas geometry
#[derive(Clone, Debug)]
pub struct PlotStyle {
    /// Plot area width in pixels
    pub width: f32,
    /// Plot area height in pixels
    pub height: f32,
    /// Space around the plot area for labels
    pub margin: f32,
    /// Line width for data series
    pub line_width: f32,
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            width: 480.0,
            height: 480.0,
            margin: 60.0,
            line_width: 1.5,
        }
    }
}

impl PlotStyle {
    /// Wide layout used for time series
    pub fn wide() -> Self {
        Self {
            width: 640.0,
            height: 360.0,
            ..Self::default()
        }
    }
}

/// Data-to-pixel mapping for one plot area.
#[derive(Clone, Debug)]
struct Axes {
    style: PlotStyle,
    x_min: f32,
    x_max: f32,
    y_min: f32,
    y_max: f32,
}

impl Axes {
    fn new(style: PlotStyle, x: (f32, f32), y: (f32, f32)) -> Self {
        Self {
            style,
            x_min: x.0,
            x_max: x.1,
            y_min: y.0,
            y_max: y.1,
        }
    }

    fn canvas_size(&self) -> (f32, f32) {
        (
            self.style.width + 2.0 * self.style.margin,
            self.style.height + 2.0 * self.style.margin,
        )
    }

    /// SVG y grows downwards.
    fn to_px(&self, x: f32, y: f32) -> (f32, f32) {
        let sx = self.style.margin + (x - self.x_min) / (self.x_max - self.x_min) * self.style.width;
        let sy = self.style.margin + (self.y_max - y) / (self.y_max - self.y_min) * self.style.height;
        (sx, sy)
    }

    fn document(&self) -> Document {
        let (w, h) = self.canvas_size();
        let clip = ClipPath::new().set("id", "plot-area").add(
            Rectangle::new()
                .set("x", self.style.margin)
                .set("y", self.style.margin)
                .set("width", self.style.width)
                .set("height", self.style.height),
        );

        Document::new()
            .set("width", w)
            .set("height", h)
            .set("viewBox", (0.0, 0.0, w, h))
            .add(Definitions::new().add(clip))
            .add(
                Rectangle::new()
                    .set("width", "100%")
                    .set("height", "100%")
                    .set("fill", "white"),
            )
    }

    fn frame(&self, x_label: &str, y_label: &str, title: Option<&str>) -> Group {
        let m = self.style.margin;
        let (w, h) = (self.style.width, self.style.height);
        let mut group = Group::new().set("id", "axes");

        for x in ticks(self.x_min, self.x_max) {
            let (px, _) = self.to_px(x, self.y_min);
            group = group
                .add(grid_line(px, m, px, m + h))
                .add(label(&tick_text(x), px, m + h + 16.0, "middle", 11));
        }
        for y in ticks(self.y_min, self.y_max) {
            let (_, py) = self.to_px(self.x_min, y);
            group = group
                .add(grid_line(m, py, m + w, py))
                .add(label(&tick_text(y), m - 6.0, py + 4.0, "end", 11));
        }

        group = group.add(
            Rectangle::new()
                .set("x", m)
                .set("y", m)
                .set("width", w)
                .set("height", h)
                .set("fill", "none")
                .set("stroke", colors::FRAME)
                .set("stroke-width", 1),
        );

        group = group.add(label(x_label, m + w / 2.0, m + h + 40.0, "middle", 13));
        group = group.add(
            label(y_label, 0.0, 0.0, "middle", 13).set(
                "transform",
                format!("translate({:.1}, {:.1}) rotate(-90)", m - 42.0, m + h / 2.0),
            ),
        );

        if let Some(title) = title {
            group = group.add(
                label(title, m + w / 2.0, m - 20.0, "middle", 15).set("font-weight", "bold"),
            );
        }

        group
    }

    fn polyline(&self, points: impl Iterator<Item = (f32, f32)>, color: &str) -> Polyline {
        let coords: Vec<String> = points
            .filter(|(x, y)| x.is_finite() && y.is_finite())
            .map(|(x, y)| {
                let (sx, sy) = self.to_px(x, y);
                format!("{:.2},{:.2}", sx, sy)
            })
            .collect();

        Polyline::new()
            .set("points", coords.join(" "))
            .set("fill", "none")
            .set("stroke", color.to_string())
            .set("stroke-width", self.style.line_width)
            .set("stroke-linecap", "round")
            .set("stroke-linejoin", "round")
            .set("clip-path", "url(#plot-area)")
    }

    fn legend(&self, entries: &[LegendEntry]) -> Group {
        let mut group = Group::new().set("id", "legend");
        if entries.is_empty() {
            return group;
        }

        let item_height = 16.0;
        let box_width = 150.0;
        let box_x = self.style.margin + self.style.width - box_width - 8.0;
        let box_y = self.style.margin + 8.0;

        group = group.add(
            Rectangle::new()
                .set("x", box_x)
                .set("y", box_y)
                .set("width", box_width)
                .set("height", entries.len() as f32 * item_height + 8.0)
                .set("fill", "white")
                .set("fill-opacity", 0.85)
                .set("stroke", "#CCCCCC")
                .set("rx", 3),
        );

        for (i, entry) in entries.iter().enumerate() {
            let y = box_y + 14.0 + i as f32 * item_height;
            group = group
                .add(
                    Line::new()
                        .set("x1", box_x + 8.0)
                        .set("y1", y - 4.0)
                        .set("x2", box_x + 28.0)
                        .set("y2", y - 4.0)
                        .set("stroke", entry.color.clone())
                        .set("stroke-width", 2.5)
                        .set("opacity", entry.opacity),
                )
                .add(label(&entry.label, box_x + 36.0, y, "start", 11));
        }

        group
    }
}

#[derive(Clone, Debug)]
struct LegendEntry {
    label: String,
    color: String,
    opacity: f32,
}

fn label(text: &str, x: f32, y: f32, anchor: &str, size: u32) -> Text {
    Text::new(text)
        .set("x", x)
        .set("y", y)
        .set("text-anchor", anchor.to_string())
        .set("font-size", size)
        .set("font-family", "sans-serif")
        .set("fill", colors::FRAME)
}

fn grid_line(x1: f32, y1: f32, x2: f32, y2: f32) -> Line {
    Line::new()
        .set("x1", x1)
        .set("y1", y1)
        .set("x2", x2)
        .set("y2", y2)
        .set("stroke", colors::GRID)
        .set("stroke-width", 1)
}

fn tick_text(v: f32) -> String {
    if v.fract().abs() < 1e-3 {
        format!("{:.0}", v)
    } else {
        format!("{:.1}", v)
    }
}

/// Roughly five ticks on a 1/2/5 step.
fn ticks(min: f32, max: f32) -> Vec<f32> {
    let span = max - min;
    if !(span.is_finite() && span > 0.0) {
        return vec![min];
    }
    let raw = span / 5.0;
    let magnitude = 10f32.powf(raw.log10().floor());
    let step = [1.0, 2.0, 2.5, 5.0, 10.0]
        .iter()
        .map(|m| m * magnitude)
        .find(|s| *s >= raw)
        .unwrap_or(10.0 * magnitude);

    let first = (min / step).ceil() as i64;
    let last = (max / step).floor() as i64;
    (first..=last).map(|k| k as f32 * step).collect()
}

fn save_document(doc: &Document, path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    svg::save(path, doc)
}

struct Trace {
    label: String,
    points: Vec<Point3>,
    color: &'static str,
    opacity: f32,
}

/// Top-down 2D overlay of hand traces around the head.
///
/// Samples are drawn at `(x, -y)` so the viewer's right matches the subject's
/// right; the head sits at the origin with a red forward stub and a green
/// lateral stub.
pub struct TracePlot {
    axes: Axes,
    title: Option<String>,
    reference: Vec<Trace>,
    traces: Vec<Trace>,
}

impl TracePlot {
    /// New plot spanning `[-extent, extent]` cm on both axes
    pub fn new(extent: f32) -> Self {
        Self::with_style(extent, PlotStyle::default())
    }

    /// New plot with explicit canvas geometry
    pub fn with_style(extent: f32, style: PlotStyle) -> Self {
        Self {
            axes: Axes::new(style, (-extent, extent), (-extent, extent)),
            title: None,
            reference: Vec::new(),
            traces: Vec::new(),
        }
    }

    /// Set a title to display
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Draw the reference hands faintly underneath as "GT Left"/"GT Right"
    pub fn with_reference(mut self, left: &Trajectory, right: &Trajectory) -> Self {
        self.reference = vec![
            Trace {
                label: "GT Left".to_string(),
                points: left.points().to_vec(),
                color: colors::HAND_LEFT,
                opacity: REFERENCE_OPACITY,
            },
            Trace {
                label: "GT Right".to_string(),
                points: right.points().to_vec(),
                color: colors::HAND_RIGHT,
                opacity: REFERENCE_OPACITY,
            },
        ];
        self
    }

    /// Add a source's hands as "<name> Left"/"<name> Right"
    pub fn with_hands(mut self, name: &str, left: &Trajectory, right: &Trajectory) -> Self {
        self.traces.push(Trace {
            label: format!("{} Left", name),
            points: left.points().to_vec(),
            color: colors::HAND_LEFT,
            opacity: 1.0,
        });
        self.traces.push(Trace {
            label: format!("{} Right", name),
            points: right.points().to_vec(),
            color: colors::HAND_RIGHT,
            opacity: 1.0,
        });
        self
    }

    /// Build the SVG document
    pub fn render(&self) -> Document {
        let mut doc = self.axes.document();
        doc = doc.add(self.axes.frame("x (cm)", "y (cm)", self.title.as_deref()));
        doc = doc.add(self.render_head());

        let mut data = Group::new().set("id", "traces");
        for trace in self.reference.iter().chain(&self.traces) {
            let line = self
                .axes
                .polyline(trace.points.iter().map(|p| (p.x, -p.y)), trace.color)
                .set("opacity", trace.opacity);
            data = data.add(line);
        }
        doc = doc.add(data);

        let entries: Vec<LegendEntry> = self
            .reference
            .iter()
            .chain(&self.traces)
            .map(|t| LegendEntry {
                label: t.label.clone(),
                color: t.color.to_string(),
                opacity: t.opacity,
            })
            .collect();
        doc.add(self.axes.legend(&entries))
    }

    /// Write the SVG file, creating parent directories
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        save_document(&self.render(), path)
    }

    fn render_head(&self) -> Group {
        let (ox, oy) = self.axes.to_px(0.0, 0.0);
        let (fx, fy) = self.axes.to_px(HEAD_AXIS_LENGTH, 0.0);
        let (lx, ly) = self.axes.to_px(0.0, HEAD_AXIS_LENGTH);

        let stub = |x2: f32, y2: f32, color: &str| {
            Line::new()
                .set("x1", ox)
                .set("y1", oy)
                .set("x2", x2)
                .set("y2", y2)
                .set("stroke", color.to_string())
                .set("stroke-width", 2)
        };

        Group::new()
            .set("id", "head")
            .add(stub(fx, fy, colors::HEAD_X_AXIS))
            .add(stub(lx, ly, colors::HEAD_Y_AXIS))
            .add(
                Circle::new()
                    .set("cx", ox)
                    .set("cy", oy)
                    .set("r", 4)
                    .set("fill", colors::HEAD),
            )
    }
}

struct Curve {
    label: String,
    values: Vec<f32>,
    color: String,
}

/// Error-over-time chart: x = frame index, y = error (cm).
pub struct ErrorPlot {
    style: PlotStyle,
    title: Option<String>,
    curves: Vec<Curve>,
}

impl Default for ErrorPlot {
    fn default() -> Self {
        Self::new()
    }
}

impl ErrorPlot {
    /// Empty plot with the wide layout
    pub fn new() -> Self {
        Self {
            style: PlotStyle::wide(),
            title: None,
            curves: Vec::new(),
        }
    }

    /// Set a title to display
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Add a curve in an explicit colour
    pub fn with_series(
        mut self,
        label: impl Into<String>,
        series: &ErrorSeries,
        color: impl Into<String>,
    ) -> Self {
        self.curves.push(Curve {
            label: label.into(),
            values: series.errors().to_vec(),
            color: color.into(),
        });
        self
    }

    /// Add a curve coloured by its position in the palette
    pub fn with_palette_series(self, label: impl Into<String>, series: &ErrorSeries) -> Self {
        let color = Palette::for_index(self.curves.len()).hex();
        self.with_series(label, series, color)
    }

    fn axes(&self) -> Axes {
        let frames = self.curves.iter().map(|c| c.values.len()).max().unwrap_or(0);
        let x_max = frames.saturating_sub(1).max(1) as f32;

        let peak = self
            .curves
            .iter()
            .flat_map(|c| c.values.iter().copied())
            .filter(|v| v.is_finite())
            .fold(0.0f32, f32::max);
        let y_max = if peak > 0.0 { peak * 1.05 } else { 1.0 };

        Axes::new(self.style.clone(), (0.0, x_max), (0.0, y_max))
    }

    /// Build the SVG document
    pub fn render(&self) -> Document {
        let axes = self.axes();
        let mut doc = axes.document();
        doc = doc.add(axes.frame("Frame", "Error (cm)", self.title.as_deref()));

        let mut data = Group::new().set("id", "errors");
        for curve in &self.curves {
            let points = curve.values.iter().enumerate().map(|(i, &e)| (i as f32, e));
            data = data.add(axes.polyline(points, &curve.color));
        }
        doc = doc.add(data);

        let entries: Vec<LegendEntry> = self
            .curves
            .iter()
            .map(|c| LegendEntry {
                label: c.label.clone(),
                color: c.color.clone(),
                opacity: 1.0,
            })
            .collect();
        doc.add(axes.legend(&entries))
    }

    /// Write the SVG file, creating parent directories
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        save_document(&self.render(), path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(n: usize, y: f32) -> Trajectory {
        (0..n).map(|i| Point3::new(i as f32, y, 0.0)).collect()
    }

    #[test]
    fn test_palette_cycles() {
        assert_eq!(Palette::for_index(0).hex(), "#66c2a5");
        assert_eq!(Palette::for_index(1).hex(), "#8da0cb");
        assert_eq!(Palette::for_index(2).hex(), "#fc8d62");
        assert_eq!(Palette::for_index(3), Palette::Green);
        assert_eq!(Palette::for_index(7), Palette::Blue);
    }

    #[test]
    fn test_ticks_symmetric_extent() {
        let t = ticks(-75.0, 75.0);
        assert!(t.contains(&0.0));
        assert!(t.contains(&-75.0) || t.contains(&-50.0));
        assert!(t.iter().all(|v| (-75.0..=75.0).contains(v)));
    }

    #[test]
    fn test_ticks_degenerate() {
        assert_eq!(ticks(3.0, 3.0), vec![3.0]);
    }

    /// Pixel coordinates of every `<polyline>` in document order.
    fn polyline_points(svg: &str) -> Vec<Vec<(f32, f32)>> {
        svg.split("<polyline")
            .skip(1)
            .map(|element| {
                let element = &element[..element.find('>').unwrap_or(element.len())];
                let start = element.find("points=\"").map(|i| i + 8).unwrap();
                let end = start + element[start..].find('"').unwrap();
                element[start..end]
                    .split_whitespace()
                    .map(|pair| {
                        let (x, y) = pair.split_once(',').unwrap();
                        (x.parse().unwrap(), y.parse().unwrap())
                    })
                    .collect()
            })
            .collect()
    }

    #[test]
    fn test_trace_plot_flips_y() {
        // Left of the subject (y = +10) is drawn below the head in the top view
        let left: Trajectory = vec![Point3::new(0.0, 10.0, 0.0); 2].into();
        let plot = TracePlot::new(75.0).with_hands("LP", &left, &Trajectory::default());

        let traces = polyline_points(&plot.render().to_string());
        let (ox, oy) = plot.axes.to_px(0.0, 0.0);

        assert_eq!(traces.len(), 2);
        assert_eq!(traces[0].len(), 2);
        for &(px, py) in &traces[0] {
            assert!((px - ox).abs() < 0.01);
            assert!(py > oy, "sample at y=+10 drawn at {py}, head at {oy}");
        }
        assert!(traces[1].is_empty());
    }

    #[test]
    fn test_trace_plot_render() {
        let plot = TracePlot::new(75.0)
            .with_title("FT")
            .with_reference(&line(5, 1.0), &line(5, -1.0))
            .with_hands("FT", &line(5, 2.0), &line(5, -2.0));

        let svg = plot.render().to_string();
        assert!(svg.contains("GT Left"));
        assert!(svg.contains("FT Right"));
        assert!(svg.contains(colors::HAND_LEFT));
        assert_eq!(svg.matches("<polyline").count(), 4);
    }

    #[test]
    fn test_error_plot_render() {
        let reference = line(4, 0.0);
        let series = ErrorSeries::compute(&line(4, 3.0), &reference);

        let plot = ErrorPlot::new()
            .with_title("Left Hand")
            .with_palette_series("LP", &series)
            .with_palette_series("PN", &series);

        let svg = plot.render().to_string();
        assert_eq!(svg.matches("<polyline").count(), 2);
        assert!(svg.contains("Error (cm)"));
        assert!(svg.contains("Left Hand"));
        assert!(svg.contains("#66c2a5"));
        assert!(svg.contains("#8da0cb"));
    }

    #[test]
    fn test_error_plot_empty_series() {
        let svg = ErrorPlot::new()
            .with_palette_series("LP", &ErrorSeries::default())
            .render()
            .to_string();
        assert!(svg.contains("Frame"));
    }

    #[test]
    fn test_save_creates_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("trace.svg");

        TracePlot::new(75.0)
            .with_hands("GT", &line(3, 1.0), &line(3, -1.0))
            .save(&path)
            .unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("<svg"));
    }
}

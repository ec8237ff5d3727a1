//! SVG pie chart
//!
//! Slices run counter-clockwise from a configurable start angle, measured in
//! degrees from the 3 o'clock position. Each slice carries its name outside
//! the rim and its percentage inside.

use std::f64::consts::PI;
use std::path::PathBuf;

use svg::node::element::{path::Data, Circle, Path as SvgPath, Text};
use svg::node::Text as TextNode;
use svg::Document;
use tracing::info;

use super::ChartRenderer;
use crate::error::{ExpenseError, ExpenseResult};

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 600.0;
const RADIUS: f64 = 200.0;
const CENTER: (f64, f64) = (WIDTH / 2.0, HEIGHT / 2.0 + 30.0);

const COLORS: &[&str] = &[
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];

/// One computed slice of the pie
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    /// Slice name
    pub label: String,
    /// Share of the whole, between 0 and 1
    pub fraction: f64,
    /// Start angle in degrees
    pub start_angle: f64,
    /// End angle in degrees (greater than the start angle)
    pub end_angle: f64,
}

impl PieSlice {
    /// Percentage label, one decimal
    pub fn percent_label(&self) -> String {
        format!("{:.1}%", self.fraction * 100.0)
    }
}

/// Lay out slices for the given values
///
/// Values that are zero or negative get no slice. Returns an empty list when
/// nothing positive remains.
pub fn layout_slices(values: &[(String, f64)], start_angle: f64) -> Vec<PieSlice> {
    let total: f64 = values.iter().map(|(_, v)| *v).filter(|v| *v > 0.0).sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut angle = start_angle;
    values
        .iter()
        .filter(|(_, v)| *v > 0.0)
        .map(|(label, value)| {
            let fraction = value / total;
            let slice = PieSlice {
                label: label.clone(),
                fraction,
                start_angle: angle,
                end_angle: angle + fraction * 360.0,
            };
            angle = slice.end_angle;
            slice
        })
        .collect()
}

/// Point on a circle around the chart center; y grows downward in SVG
fn point_at(radius: f64, degrees: f64) -> (f64, f64) {
    let radians = degrees * PI / 180.0;
    (
        CENTER.0 + radius * radians.cos(),
        CENTER.1 - radius * radians.sin(),
    )
}

fn label(text: &str, position: (f64, f64), anchor: &str) -> Text {
    Text::new()
        .set("x", position.0)
        .set("y", position.1)
        .set("text-anchor", anchor)
        .set("dominant-baseline", "middle")
        .set("font-family", "sans-serif")
        .set("font-size", 14)
        .add(TextNode::new(text))
}

/// Build the SVG document for a pie chart
pub fn pie_document(title: &str, slices: &[PieSlice]) -> Document {
    let mut document = Document::new()
        .set("viewBox", (0.0, 0.0, WIDTH, HEIGHT))
        .set("width", WIDTH)
        .set("height", HEIGHT)
        .add(
            label(title, (WIDTH / 2.0, 40.0), "middle")
                .set("font-size", 20)
                .set("font-weight", "bold"),
        );

    for (i, slice) in slices.iter().enumerate() {
        let color = COLORS[i % COLORS.len()];

        if slices.len() == 1 {
            document = document.add(
                Circle::new()
                    .set("cx", CENTER.0)
                    .set("cy", CENTER.1)
                    .set("r", RADIUS)
                    .set("fill", color),
            );
        } else {
            let start = point_at(RADIUS, slice.start_angle);
            let end = point_at(RADIUS, slice.end_angle);
            let large_arc = if slice.end_angle - slice.start_angle > 180.0 {
                1.0
            } else {
                0.0
            };

            // Sweep flag 0 draws the arc counter-clockwise on screen
            let data = Data::new()
                .move_to(CENTER)
                .line_to(start)
                .elliptical_arc_to((RADIUS, RADIUS, 0.0, large_arc, 0.0, end.0, end.1))
                .close();

            document = document.add(
                SvgPath::new()
                    .set("fill", color)
                    .set("stroke", "white")
                    .set("stroke-width", 1)
                    .set("d", data),
            );
        }

        let middle = (slice.start_angle + slice.end_angle) / 2.0;
        let outside = point_at(RADIUS * 1.12, middle);
        let anchor = if outside.0 >= CENTER.0 { "start" } else { "end" };
        document = document
            .add(label(&slice.label, outside, anchor))
            .add(label(&slice.percent_label(), point_at(RADIUS * 0.6, middle), "middle"));
    }

    document
}

/// Renders pie charts to an SVG file
#[derive(Debug, Clone)]
pub struct SvgPieChart {
    path: PathBuf,
    start_angle: f64,
}

impl SvgPieChart {
    /// Create a renderer writing to `path`
    pub fn new(path: PathBuf, start_angle: f64) -> Self {
        Self { path, start_angle }
    }
}

impl ChartRenderer for SvgPieChart {
    fn render(&self, title: &str, values: &[(String, f64)]) -> ExpenseResult<PathBuf> {
        let slices = layout_slices(values, self.start_angle);
        if slices.is_empty() {
            return Err(ExpenseError::Chart(
                "Nothing to plot: no category has a positive total".into(),
            ));
        }

        let document = pie_document(title, &slices);
        svg::save(&self.path, &document).map_err(|e| {
            ExpenseError::Chart(format!("Failed to write {}: {}", self.path.display(), e))
        })?;

        info!(path = %self.path.display(), slices = slices.len(), "pie chart rendered");
        Ok(self.path.clone())
    }
}

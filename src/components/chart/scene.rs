//! Render output: positioned shapes, legend, hit regions and table cells.
//!
//! A [`Scene`] is plain data. The Leptos component turns it into SVG nodes and
//! [`super::svg`] turns it into a standalone document; neither adds geometry.

use std::f64::consts::TAU;

use super::state::{ChartMode, DataPoint};

/// Horizontal text alignment, mirroring SVG's `text-anchor`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
	/// Anchor at the start of the text.
	Start,
	/// Center the text.
	Middle,
	/// Anchor at the end of the text.
	End,
}

impl TextAnchor {
	/// SVG `text-anchor` value.
	pub fn as_str(self) -> &'static str {
		match self {
			TextAnchor::Start => "start",
			TextAnchor::Middle => "middle",
			TextAnchor::End => "end",
		}
	}
}

/// A drawable primitive. `hit` indexes into [`Scene::hit_regions`].
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
	/// Bar.
	Rect {
		/// Left edge.
		x: f64,
		/// Top edge.
		y: f64,
		/// Bar width.
		width: f64,
		/// Bar height.
		height: f64,
		/// CSS fill color.
		fill: String,
		/// Outline, if any.
		stroke: Option<String>,
		/// Opacity in `0..=1`.
		opacity: f64,
		/// Hit region index.
		hit: Option<usize>,
	},
	/// Line series.
	Polyline {
		/// Vertices in category order.
		points: Vec<(f64, f64)>,
		/// CSS stroke color.
		stroke: String,
		/// Stroke width.
		width: f64,
		/// Opacity in `0..=1`.
		opacity: f64,
	},
	/// Line marker or full pie.
	Circle {
		/// Center x.
		cx: f64,
		/// Center y.
		cy: f64,
		/// Radius.
		r: f64,
		/// CSS fill color.
		fill: String,
		/// Outline, if any.
		stroke: Option<String>,
		/// Opacity in `0..=1`.
		opacity: f64,
		/// Hit region index.
		hit: Option<usize>,
	},
	/// SVG path data, used for pie slices.
	Path {
		/// Path data.
		d: String,
		/// CSS fill color.
		fill: String,
		/// Outline, if any.
		stroke: Option<String>,
		/// Opacity in `0..=1`.
		opacity: f64,
		/// Hit region index.
		hit: Option<usize>,
	},
	/// Axis or grid line.
	Line {
		/// Start x.
		x1: f64,
		/// Start y.
		y1: f64,
		/// End x.
		x2: f64,
		/// End y.
		y2: f64,
		/// CSS stroke color.
		stroke: String,
		/// Stroke width.
		width: f64,
	},
	/// Tick or category label.
	Text {
		/// Anchor x.
		x: f64,
		/// Baseline y.
		y: f64,
		/// Label text.
		text: String,
		/// Horizontal anchor.
		anchor: TextAnchor,
		/// CSS fill color.
		fill: String,
		/// Font size in pixels.
		size: f64,
	},
}

impl Shape {
	/// Index of the hit region this shape reacts through.
	pub fn hit(&self) -> Option<usize> {
		match self {
			Shape::Rect { hit, .. } | Shape::Circle { hit, .. } | Shape::Path { hit, .. } => *hit,
			_ => None,
		}
	}
}

/// Area that reacts to the pointer for one data point.
#[derive(Clone, Debug, PartialEq)]
pub enum Region {
	/// Axis-aligned rectangle.
	Rect {
		/// Left edge.
		x: f64,
		/// Top edge.
		y: f64,
		/// Width.
		width: f64,
		/// Height.
		height: f64,
	},
	/// Disc.
	Circle {
		/// Center x.
		cx: f64,
		/// Center y.
		cy: f64,
		/// Radius.
		r: f64,
	},
	/// Pie slice; angles in radians, clockwise from 12 o'clock.
	Sector {
		/// Center x.
		cx: f64,
		/// Center y.
		cy: f64,
		/// Radius.
		r: f64,
		/// Start angle, radians clockwise from 12 o'clock.
		start: f64,
		/// End angle, radians clockwise from 12 o'clock.
		end: f64,
	},
}

impl Region {
	/// True when `(px, py)` lies inside the region.
	pub fn contains(&self, px: f64, py: f64) -> bool {
		match *self {
			Region::Rect {
				x,
				y,
				width,
				height,
			} => px >= x && px <= x + width && py >= y && py <= y + height,
			Region::Circle { cx, cy, r } => {
				let (dx, dy) = (px - cx, py - cy);
				(dx * dx + dy * dy).sqrt() <= r
			}
			Region::Sector {
				cx,
				cy,
				r,
				start,
				end,
			} => {
				let (dx, dy) = (px - cx, py - cy);
				if (dx * dx + dy * dy).sqrt() > r || end <= start {
					return false;
				}
				let angle = dx.atan2(-dy).rem_euclid(TAU);
				angle >= start && angle < end
			}
		}
	}
}

/// Content shown while a data point is hovered.
#[derive(Clone, Debug, PartialEq)]
pub struct Tooltip {
	/// Series name; pie tooltips omit it.
	pub series: Option<String>,
	/// Category label.
	pub category: String,
	/// Raw value, locale formatted.
	pub value: String,
	/// Share of the total, pie only.
	pub percent: Option<String>,
	/// Anchor point in chart coordinates.
	pub x: f64,
	/// Anchor y in chart coordinates.
	pub y: f64,
}

/// A data point's reactive area plus its tooltip.
#[derive(Clone, Debug, PartialEq)]
pub struct HitRegion {
	/// Data point the region belongs to.
	pub point: DataPoint,
	/// Reactive area.
	pub region: Region,
	/// Content shown on hover.
	pub tooltip: Tooltip,
}

/// What hovering a legend entry highlights.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LegendTarget {
	/// Isolate a whole series (bar and line).
	Series(usize),
	/// Show one slice's tooltip (pie).
	Point(DataPoint),
}

/// One legend row.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
	/// Series or category name.
	pub label: String,
	/// Swatch color.
	pub color: String,
	/// What hovering the entry highlights.
	pub target: LegendTarget,
	/// Entry opacity.
	pub opacity: f64,
}

/// One formatted table value.
#[derive(Clone, Debug, PartialEq)]
pub struct TableCell {
	/// Formatted value.
	pub text: String,
	/// Hover text for the cell.
	pub title: String,
}

/// One series in the table.
#[derive(Clone, Debug, PartialEq)]
pub struct TableRow {
	/// Series name.
	pub label: String,
	/// Series color.
	pub color: String,
	/// One cell per category.
	pub cells: Vec<TableCell>,
}

/// Table mode output.
#[derive(Clone, Debug, PartialEq)]
pub struct TableView {
	/// First entry names the row-label column, the rest are category labels.
	pub header: Vec<String>,
	/// One row per series.
	pub rows: Vec<TableRow>,
}

/// Everything needed to draw one chart in one mode.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
	/// Chart title.
	pub title: String,
	/// Mode the scene was built for.
	pub mode: ChartMode,
	/// Canvas width.
	pub width: f64,
	/// Canvas height.
	pub height: f64,
	/// Drawing primitives in paint order.
	pub shapes: Vec<Shape>,
	/// Legend entries, empty for single-series bar and line charts.
	pub legend: Vec<LegendEntry>,
	/// Hover targets, later entries on top.
	pub hit_regions: Vec<HitRegion>,
	/// Tooltip for the hovered point.
	pub tooltip: Option<Tooltip>,
	/// Table content in table mode.
	pub table: Option<TableView>,
}

impl Scene {
	/// Empty scene for a chart of the given size.
	pub fn new(title: &str, mode: ChartMode, width: f64, height: f64) -> Self {
		Self {
			title: title.to_string(),
			mode,
			width,
			height,
			shapes: Vec::new(),
			legend: Vec::new(),
			hit_regions: Vec::new(),
			tooltip: None,
			table: None,
		}
	}

	/// True when nothing would be drawn.
	pub fn is_empty(&self) -> bool {
		self.shapes.is_empty() && self.table.is_none()
	}

	/// Register a hit region and return its index for [`Shape`] `hit` fields.
	pub fn push_hit(&mut self, hit: HitRegion) -> usize {
		self.hit_regions.push(hit);
		self.hit_regions.len() - 1
	}

	/// Topmost data point under `(x, y)`.
	pub fn point_at(&self, x: f64, y: f64) -> Option<DataPoint> {
		self.hit_regions
			.iter()
			.rev()
			.find(|h| h.region.contains(x, y))
			.map(|h| h.point)
	}

	/// Hit region of `point`, if it was drawn.
	pub fn hit_for(&self, point: DataPoint) -> Option<&HitRegion> {
		self.hit_regions.iter().find(|h| h.point == point)
	}
}

//! Layout and scale configuration for chart geometry.
//!
//! This module centralizes every size the renderers use, and the two mappings
//! that turn data into pixels:
//!
//! - [`LinearScale`] maps a value domain onto the vertical extent of the plot.
//! - [`CategoryAxis`] spreads category labels evenly along the horizontal extent,
//!   either as bands (bar charts) or as points (line charts).
//!
//! # Coordinate Space
//!
//! All values are SVG user units with the origin at the top-left of the chart,
//! so a larger value maps to a *smaller* `y`.

/// Sizes and spacing shared by every chart mode.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartLayout {
	/// Total chart width.
	pub width: f64,
	/// Total chart height.
	pub height: f64,
	/// Room above the plot.
	pub padding_top: f64,
	/// Room right of the plot.
	pub padding_right: f64,
	/// Room for category labels.
	pub padding_bottom: f64,
	/// Room for tick labels.
	pub padding_left: f64,
	/// Fraction of each bar group left empty around its bars (split evenly
	/// between both sides).
	pub group_padding: f64,
	/// Line chart marker radius.
	pub marker_radius: f64,
	/// Line chart stroke width.
	pub line_width: f64,
	/// Number of value ticks on the vertical axis (including both ends).
	pub tick_count: usize,
	/// Opacity applied to series that are not the hovered legend entry.
	pub dim_opacity: f64,
	/// Opacity of pie legend entries other than the hovered slice.
	pub legend_fade_opacity: f64,
	/// Pie radius as a fraction of the smaller plot dimension.
	pub pie_radius: f64,
}

impl Default for ChartLayout {
	fn default() -> Self {
		Self {
			width: 600.0,
			height: 320.0,
			padding_top: 20.0,
			padding_right: 20.0,
			padding_bottom: 40.0,
			padding_left: 56.0,
			group_padding: 0.2,
			marker_radius: 4.0,
			line_width: 2.0,
			tick_count: 5,
			dim_opacity: 0.3,
			legend_fade_opacity: 0.6,
			pie_radius: 0.45,
		}
	}
}

impl ChartLayout {
	/// The rectangle data marks are drawn into.
	pub fn plot_area(&self) -> PlotArea {
		PlotArea {
			left: self.padding_left,
			top: self.padding_top,
			width: (self.width - self.padding_left - self.padding_right).max(0.0),
			height: (self.height - self.padding_top - self.padding_bottom).max(0.0),
		}
	}

	/// Map a pointer position in client pixels onto chart coordinates.
	///
	/// `screen` is the on-screen box of the rendered chart element. The chart
	/// is scaled uniformly to fit that box and centered in it, so points in
	/// the letterbox margins fall outside `0..width` / `0..height`. Returns
	/// `None` for a collapsed box.
	pub fn client_to_chart(&self, client_x: f64, client_y: f64, screen: &ScreenRect) -> Option<(f64, f64)> {
		if screen.width <= 0.0 || screen.height <= 0.0 || self.width <= 0.0 || self.height <= 0.0 {
			return None;
		}
		let scale = (screen.width / self.width).min(screen.height / self.height);
		let offset_x = (screen.width - self.width * scale) / 2.0;
		let offset_y = (screen.height - self.height * scale) / 2.0;
		Some((
			(client_x - screen.left - offset_x) / scale,
			(client_y - screen.top - offset_y) / scale,
		))
	}
}

/// Client-pixel box of an element, as reported by `getBoundingClientRect`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenRect {
	/// Left edge in client pixels.
	pub left: f64,
	/// Top edge in client pixels.
	pub top: f64,
	/// Width in client pixels.
	pub width: f64,
	/// Height in client pixels.
	pub height: f64,
}

/// Rectangle inside the chart reserved for data marks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotArea {
	/// Left edge in chart coordinates.
	pub left: f64,
	/// Top edge in chart coordinates.
	pub top: f64,
	/// Width of the plot.
	pub width: f64,
	/// Height of the plot.
	pub height: f64,
}

impl PlotArea {
	/// Right edge.
	pub fn right(&self) -> f64 {
		self.left + self.width
	}

	/// Bottom edge, where zero-height bars sit.
	pub fn bottom(&self) -> f64 {
		self.top + self.height
	}

	/// Center point, used as the pie center.
	pub fn center(&self) -> (f64, f64) {
		(self.left + self.width / 2.0, self.top + self.height / 2.0)
	}
}

/// Linear mapping from a value domain onto a vertical pixel range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
	/// Value mapped to the plot bottom.
	pub domain_min: f64,
	/// Value mapped to the plot top.
	pub domain_max: f64,
	/// Pixel position of `domain_min`.
	pub range_bottom: f64,
	/// Pixel position of `domain_max`.
	pub range_top: f64,
}

impl LinearScale {
	/// Scale spanning `[min, max]` across the full height of `plot`.
	pub fn new(min: f64, max: f64, plot: &PlotArea) -> Self {
		Self {
			domain_min: min.min(max),
			domain_max: max.max(min),
			range_bottom: plot.bottom(),
			range_top: plot.top,
		}
	}

	/// Width of the value domain.
	pub fn span(&self) -> f64 {
		self.domain_max - self.domain_min
	}

	/// Pixel position of `value`. A zero-width domain maps everything onto
	/// the bottom of the range.
	pub fn apply(&self, value: f64) -> f64 {
		let span = self.span();
		if span <= 0.0 || !value.is_finite() {
			return self.range_bottom;
		}
		let t = (value - self.domain_min) / span;
		self.range_bottom + (self.range_top - self.range_bottom) * t
	}

	/// `count` evenly spaced domain values from min to max.
	///
	/// A zero-width domain yields a single tick.
	pub fn ticks(&self, count: usize) -> Vec<f64> {
		if count < 2 || self.span() <= 0.0 {
			return vec![self.domain_min];
		}
		let step = self.span() / (count - 1) as f64;
		(0..count)
			.map(|i| self.domain_min + step * i as f64)
			.collect()
	}
}

/// How categories share the horizontal extent of the plot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CategoryPlacement {
	/// Each category owns an equal-width band (bar charts).
	Band,
	/// Categories are points from the left edge to the right edge (line charts).
	Point,
}

/// Evenly distributes `count` categories along the plot's horizontal extent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CategoryAxis {
	/// Left edge of the first category.
	pub left: f64,
	/// Distance between neighbouring categories.
	pub step: f64,
	/// Band or point placement.
	pub placement: CategoryPlacement,
}

impl CategoryAxis {
	/// Lay out `count` categories across `plot`.
	pub fn new(count: usize, plot: &PlotArea, placement: CategoryPlacement) -> Self {
		// A single category must not divide by zero.
		let denominator = match placement {
			CategoryPlacement::Band => count.max(1),
			CategoryPlacement::Point => count.saturating_sub(1).max(1),
		};
		Self {
			left: plot.left,
			step: plot.width / denominator as f64,
			placement,
		}
	}

	/// Left edge of the band (or the point itself) for category `index`.
	pub fn position(&self, index: usize) -> f64 {
		self.left + self.step * index as f64
	}

	/// Where the category label is centered.
	pub fn label_position(&self, index: usize) -> f64 {
		match self.placement {
			CategoryPlacement::Band => self.position(index) + self.step / 2.0,
			CategoryPlacement::Point => self.position(index),
		}
	}

	/// Horizontal slot for one bar inside a category band.
	///
	/// `padding` is the fraction of the band left empty, half on each side.
	/// Returns `(x, width)`.
	pub fn bar_slot(&self, index: usize, series: usize, series_count: usize, padding: f64) -> (f64, f64) {
		let padding = padding.clamp(0.0, 1.0);
		let inner = self.step * (1.0 - padding);
		let bar_width = inner / series_count.max(1) as f64;
		let x = self.position(index) + self.step * padding / 2.0 + bar_width * series as f64;
		(x, bar_width)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn plot() -> PlotArea {
		PlotArea {
			left: 50.0,
			top: 10.0,
			width: 400.0,
			height: 200.0,
		}
	}

	#[test]
	fn plot_area_subtracts_padding() {
		let layout = ChartLayout::default();
		let area = layout.plot_area();
		assert_eq!(area.left, 56.0);
		assert_eq!(area.right(), 580.0);
		assert_eq!(area.bottom(), 280.0);
	}

	#[test]
	fn plot_area_never_negative() {
		let layout = ChartLayout {
			width: 10.0,
			height: 10.0,
			..Default::default()
		};
		let area = layout.plot_area();
		assert_eq!(area.width, 0.0);
		assert_eq!(area.height, 0.0);
	}

	#[test]
	fn scale_maps_domain_ends_to_plot_edges() {
		let scale = LinearScale::new(-10.0, 30.0, &plot());
		assert_eq!(scale.apply(-10.0), 210.0);
		assert_eq!(scale.apply(30.0), 10.0);
		assert_eq!(scale.apply(10.0), 110.0);
	}

	#[test]
	fn scale_stays_inside_plot_for_domain_values() {
		let area = plot();
		let scale = LinearScale::new(-3.5, 17.25, &area);
		for i in 0..=100 {
			let v = -3.5 + 20.75 * i as f64 / 100.0;
			let y = scale.apply(v);
			assert!(y >= area.top - 1e-9 && y <= area.bottom() + 1e-9, "{v} -> {y}");
		}
	}

	#[test]
	fn zero_span_maps_to_bottom() {
		let scale = LinearScale::new(5.0, 5.0, &plot());
		assert_eq!(scale.apply(5.0), 210.0);
		assert_eq!(scale.ticks(5), vec![5.0]);
	}

	#[test]
	fn ticks_are_evenly_spaced() {
		let scale = LinearScale::new(0.0, 100.0, &plot());
		assert_eq!(scale.ticks(5), vec![0.0, 25.0, 50.0, 75.0, 100.0]);
	}

	#[test]
	fn point_axis_spans_full_width() {
		let axis = CategoryAxis::new(5, &plot(), CategoryPlacement::Point);
		assert_eq!(axis.position(0), 50.0);
		assert_eq!(axis.position(4), 450.0);
	}

	#[test]
	fn single_point_does_not_divide_by_zero() {
		let axis = CategoryAxis::new(1, &plot(), CategoryPlacement::Point);
		assert_eq!(axis.step, 400.0);
		assert_eq!(axis.position(0), 50.0);
	}

	#[test]
	fn bar_slots_share_padded_band() {
		let axis = CategoryAxis::new(4, &plot(), CategoryPlacement::Band);
		assert_eq!(axis.step, 100.0);
		let (x0, w0) = axis.bar_slot(1, 0, 2, 0.2);
		let (x1, w1) = axis.bar_slot(1, 1, 2, 0.2);
		assert_eq!(w0, 40.0);
		assert_eq!(w1, 40.0);
		assert_eq!(x0, 160.0);
		assert_eq!(x1, 200.0);
		assert_eq!(axis.label_position(1), 200.0);
	}

	#[test]
	fn client_mapping_is_relative_to_chart_box() {
		let layout = ChartLayout::default();
		// Chart pushed to the right edge of a wider container.
		let screen = ScreenRect {
			left: 300.0,
			top: 50.0,
			width: 600.0,
			height: 320.0,
		};
		assert_eq!(layout.client_to_chart(300.0, 50.0, &screen), Some((0.0, 0.0)));
		assert_eq!(layout.client_to_chart(900.0, 370.0, &screen), Some((600.0, 320.0)));
	}

	#[test]
	fn client_mapping_undoes_uniform_scaling() {
		let layout = ChartLayout::default();
		let half = ScreenRect {
			left: 0.0,
			top: 0.0,
			width: 300.0,
			height: 160.0,
		};
		assert_eq!(layout.client_to_chart(150.0, 80.0, &half), Some((300.0, 160.0)));

		// Taller box than the chart: content is centered vertically.
		let tall = ScreenRect {
			left: 0.0,
			top: 0.0,
			width: 600.0,
			height: 520.0,
		};
		assert_eq!(layout.client_to_chart(0.0, 100.0, &tall), Some((0.0, 0.0)));
	}

	#[test]
	fn collapsed_box_maps_nowhere() {
		let screen = ScreenRect {
			left: 10.0,
			top: 10.0,
			width: 0.0,
			height: 320.0,
		};
		assert_eq!(ChartLayout::default().client_to_chart(10.0, 10.0, &screen), None);
	}
}

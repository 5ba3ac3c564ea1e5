//! Rendering mode selection and hover tracking.
//!
//! Both are plain values handed to the renderer on every call, so a scene is a
//! pure function of `(data, mode, interaction)`.

use super::types::{ChartData, ChartType};

/// Rendering the user has selected for a chart.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ChartMode {
	/// Grouped bars.
	#[default]
	Bar,
	/// Polyline per series.
	Line,
	/// Pie of the first series.
	Pie,
	/// Table of values.
	Table,
}

impl ChartMode {
	/// Every mode, in switcher order.
	pub const ALL: [ChartMode; 4] = [ChartMode::Bar, ChartMode::Line, ChartMode::Pie, ChartMode::Table];

	/// First mode to show for `data`: the suggested type, unless that is a pie
	/// the data cannot support.
	pub fn initial(data: &ChartData) -> Self {
		let suggested = Self::from(data.chart_type);
		if suggested.is_available(data) {
			suggested
		} else {
			ChartMode::Bar
		}
	}

	/// Whether `data` can be shown in this mode.
	pub fn is_available(self, data: &ChartData) -> bool {
		self != ChartMode::Pie || data.is_pie_available()
	}

	/// Switcher caption.
	pub fn label(self) -> &'static str {
		match self {
			ChartMode::Bar => "Bar",
			ChartMode::Line => "Line",
			ChartMode::Pie => "Pie",
			ChartMode::Table => "Table",
		}
	}
}

impl From<ChartType> for ChartMode {
	fn from(chart_type: ChartType) -> Self {
		match chart_type {
			ChartType::Bar => ChartMode::Bar,
			ChartType::Line => ChartMode::Line,
			ChartType::Pie => ChartMode::Pie,
			ChartType::Table => ChartMode::Table,
		}
	}
}

/// Switch to `requested` if `data` supports it.
///
/// Returns the mode now in effect; an unavailable pie leaves `current` as is.
pub fn select_mode(current: ChartMode, requested: ChartMode, data: &ChartData) -> ChartMode {
	if requested.is_available(data) {
		requested
	} else {
		log::debug!("pie unavailable for {} datasets", data.datasets.len());
		current
	}
}

/// One value in the chart: series index plus category index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DataPoint {
	/// Dataset index.
	pub series: usize,
	/// Category index.
	pub category: usize,
}

/// What the pointer is currently over.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InteractionState {
	/// Legend entry under the pointer (bar and line modes).
	pub hovered_series: Option<usize>,
	/// Mark or pie legend entry under the pointer; drives the tooltip.
	pub hovered_point: Option<DataPoint>,
}

impl InteractionState {
	/// Set or clear the isolated series.
	pub fn hover_series(&mut self, series: Option<usize>) {
		self.hovered_series = series;
	}

	/// Set or clear the hovered point.
	pub fn hover_point(&mut self, point: Option<DataPoint>) {
		self.hovered_point = point;
	}

	/// Forget all hover state.
	pub fn clear(&mut self) {
		*self = Self::default();
	}

	/// Opacity for marks of `series`: full unless another series is isolated.
	pub fn series_opacity(&self, series: usize, dim: f64) -> f64 {
		match self.hovered_series {
			Some(hovered) if hovered != series => dim,
			_ => 1.0,
		}
	}

	/// True when `point` is hovered.
	pub fn is_point_hovered(&self, point: DataPoint) -> bool {
		self.hovered_point == Some(point)
	}
}

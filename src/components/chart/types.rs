//! Chart data structures for input to the chart component.

use serde::Deserialize;

use super::theme::palette_color;

/// Suggested rendering for a chart, as delivered by the upstream result.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
	/// Grouped bars.
	#[default]
	Bar,
	/// Line chart.
	Line,
	/// Pie chart.
	Pie,
	/// Table.
	Table,
}

/// One named series of values sharing the chart's category axis.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ChartDataset {
	/// Series name, unique within a chart.
	pub label: String,
	/// One value per category label.
	#[serde(default)]
	pub data: Vec<f64>,
	/// Optional CSS color override. Falls back to the palette by position.
	#[serde(default)]
	pub color: Option<String>,
}

/// Complete chart payload: categories plus one or more series.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ChartData {
	/// Display title.
	#[serde(default)]
	pub title: String,
	/// Suggested initial rendering.
	#[serde(rename = "type", default)]
	pub chart_type: ChartType,
	/// Category names.
	#[serde(default)]
	pub labels: Vec<String>,
	/// Series sharing the categories.
	#[serde(default)]
	pub datasets: Vec<ChartDataset>,
}

impl ChartData {
	/// Parse a chart payload from its JSON representation.
	pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(json)
	}

	/// Value of `dataset` at `category`.
	///
	/// Short series, missing datasets and non-finite numbers all read as 0.
	pub fn value_at(&self, dataset: usize, category: usize) -> f64 {
		self.datasets
			.get(dataset)
			.and_then(|d| d.data.get(category))
			.copied()
			.filter(|v| v.is_finite())
			.unwrap_or(0.0)
	}

	/// Pie needs a single series; with more than one it is not offered.
	pub fn is_pie_available(&self) -> bool {
		self.datasets.len() <= 1
	}

	/// Largest value across all series, never below 0.
	pub fn max_value(&self) -> f64 {
		self.values().fold(0.0_f64, f64::max)
	}

	/// Smallest value across all series. 0 when there is no data.
	pub fn min_value(&self) -> f64 {
		self.values()
			.reduce(f64::min)
			.unwrap_or(0.0)
	}

	/// Resolved CSS color for the dataset at `index`.
	pub fn dataset_color(&self, index: usize) -> String {
		self.datasets
			.get(index)
			.and_then(|d| d.color.clone())
			.filter(|c| !c.trim().is_empty())
			.unwrap_or_else(|| palette_color(index).to_css_rgb())
	}

	/// Iterate every value the renderers will read, padded by label count.
	fn values(&self) -> impl Iterator<Item = f64> + '_ {
		let categories = self.labels.len();
		(0..self.datasets.len())
			.flat_map(move |d| (0..categories).map(move |c| self.value_at(d, c)))
	}
}

//! Tabular view: one row per series, one column per category.

use super::format::{NumberLocale, format_value};
use super::scene::{TableCell, TableRow, TableView};
use super::types::ChartData;

pub(super) fn build_table(data: &ChartData, locale: NumberLocale) -> TableView {
	let corner = if data.datasets.len() > 1 {
		"Series"
	} else {
		"Category"
	};
	let header = std::iter::once(corner.to_string())
		.chain(data.labels.iter().cloned())
		.collect();

	let rows = data
		.datasets
		.iter()
		.enumerate()
		.map(|(series, dataset)| TableRow {
			label: dataset.label.clone(),
			color: data.dataset_color(series),
			cells: data
				.labels
				.iter()
				.enumerate()
				.map(|(category, label)| {
					let text = format_value(data.value_at(series, category), locale);
					TableCell {
						title: format!("{} / {}: {}", dataset.label, label, text),
						text,
					}
				})
				.collect(),
		})
		.collect();

	TableView { header, rows }
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::chart::types::{ChartDataset, ChartType};

	fn data(series: usize) -> ChartData {
		ChartData {
			title: "Budget".into(),
			chart_type: ChartType::Table,
			labels: vec!["Q1".into(), "Q2".into()],
			datasets: (0..series)
				.map(|i| ChartDataset {
					label: format!("Dept {i}"),
					data: vec![1500.0 * (i + 1) as f64],
					color: None,
				})
				.collect(),
		}
	}

	#[test]
	fn corner_header_depends_on_series_count() {
		assert_eq!(build_table(&data(1), NumberLocale::Latin).header[0], "Category");
		assert_eq!(build_table(&data(2), NumberLocale::Latin).header[0], "Series");
	}

	#[test]
	fn one_row_per_series_one_cell_per_label() {
		let table = build_table(&data(2), NumberLocale::Latin);
		assert_eq!(table.header, vec!["Series", "Q1", "Q2"]);
		assert_eq!(table.rows.len(), 2);
		assert_eq!(table.rows[1].label, "Dept 1");
		assert_eq!(table.rows[1].cells[0].text, "3,000");
		// Short series pad with zero.
		assert_eq!(table.rows[1].cells[1].text, "0");
		assert_eq!(table.rows[0].cells[0].title, "Dept 0 / Q1: 1,500");
	}

	#[test]
	fn cells_follow_locale() {
		let table = build_table(&data(1), NumberLocale::Persian);
		assert_eq!(table.rows[0].cells[0].text, "۱٬۵۰۰");
	}
}

//! Pie slices for single-series charts.

use std::f64::consts::TAU;
use std::fmt::Write;

use log::debug;

use super::format::{format_percent, format_value};
use super::render::ChartConfig;
use super::scene::{HitRegion, LegendEntry, LegendTarget, Region, Scene, Shape, Tooltip};
use super::state::{DataPoint, InteractionState};
use super::theme::palette_color;
use super::types::ChartData;

/// Slices at or above this share are drawn as a full circle; an SVG arc whose
/// endpoints coincide draws nothing.
const FULL_CIRCLE_PERCENT: f64 = 99.9999;

/// Each category's share of the series total, in percent.
///
/// Negative values count as 0. An all-zero series yields 0% everywhere.
pub fn slice_percentages(data: &ChartData, series: usize) -> Vec<f64> {
	let values: Vec<f64> = (0..data.labels.len())
		.map(|c| data.value_at(series, c).max(0.0))
		.collect();
	let total: f64 = values.iter().sum();
	if total <= 0.0 {
		return vec![0.0; values.len()];
	}
	values.iter().map(|v| v / total * 100.0).collect()
}

/// Point on the circle at `angle` radians clockwise from 12 o'clock.
fn polar(cx: f64, cy: f64, r: f64, angle: f64) -> (f64, f64) {
	(cx + r * angle.sin(), cy - r * angle.cos())
}

fn slice_path(cx: f64, cy: f64, r: f64, start: f64, end: f64) -> String {
	let (x0, y0) = polar(cx, cy, r, start);
	let (x1, y1) = polar(cx, cy, r, end);
	let large_arc = u8::from(end - start > TAU / 2.0);
	let mut d = String::new();
	let _ = write!(
		d,
		"M{cx:.2} {cy:.2} L{x0:.2} {y0:.2} A{r:.2} {r:.2} 0 {large_arc} 1 {x1:.2} {y1:.2} Z"
	);
	d
}

pub(super) fn draw_pie(scene: &mut Scene, data: &ChartData, interaction: &InteractionState, config: &ChartConfig) {
	if data.datasets.len() > 1 {
		debug!(
			"pie requested with {} datasets, drawing the first only",
			data.datasets.len()
		);
	}

	let series = 0;
	let plot = config.layout.plot_area();
	let (cx, cy) = plot.center();
	let r = plot.width.min(plot.height) * config.layout.pie_radius;
	let theme = &config.theme;
	let border = theme.slice_border.to_css();

	let mut cumulative = 0.0;
	for (category, percent) in slice_percentages(data, series).into_iter().enumerate() {
		let point = DataPoint { series, category };
		let start = cumulative / 100.0 * TAU;
		cumulative += percent;
		let end = cumulative / 100.0 * TAU;

		let base = palette_color(category);
		let hovered = interaction.is_point_hovered(point);
		let fill = if hovered {
			base.lighten(theme.hover_lighten)
		} else {
			base
		};
		let (tx, ty) = polar(cx, cy, r * 0.6, (start + end) / 2.0);
		let label = data.labels.get(category).cloned().unwrap_or_default();

		let hit = scene.push_hit(HitRegion {
			point,
			region: Region::Sector { cx, cy, r, start, end },
			tooltip: Tooltip {
				series: None,
				category: label.clone(),
				value: format_value(data.value_at(series, category), config.locale),
				percent: Some(format_percent(percent, config.locale)),
				x: tx,
				y: ty,
			},
		});

		if percent >= FULL_CIRCLE_PERCENT {
			scene.shapes.push(Shape::Circle {
				cx,
				cy,
				r,
				fill: fill.to_css(),
				stroke: Some(border.clone()),
				opacity: 1.0,
				hit: Some(hit),
			});
		} else if percent > 0.0 {
			scene.shapes.push(Shape::Path {
				d: slice_path(cx, cy, r, start, end),
				fill: fill.to_css(),
				stroke: Some(border.clone()),
				opacity: 1.0,
				hit: Some(hit),
			});
		}

		scene.legend.push(LegendEntry {
			label,
			color: base.to_css_rgb(),
			target: LegendTarget::Point(point),
			opacity: legend_opacity(interaction, point, config.layout.legend_fade_opacity),
		});
	}
}

/// Legend swatches stay opaque; a hovered slice's neighbours fade slightly.
fn legend_opacity(interaction: &InteractionState, point: DataPoint, fade: f64) -> f64 {
	match interaction.hovered_point {
		Some(p) if p != point => fade,
		_ => 1.0,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::chart::render::render_chart;
	use crate::components::chart::state::ChartMode;
	use crate::components::chart::types::{ChartDataset, ChartType};

	fn pie(values: &[f64]) -> ChartData {
		ChartData {
			title: "Share".into(),
			chart_type: ChartType::Pie,
			labels: (0..values.len()).map(|i| format!("c{i}")).collect(),
			datasets: vec![ChartDataset {
				label: "v".into(),
				data: values.to_vec(),
				color: None,
			}],
		}
	}

	#[test]
	fn percentages_sum_to_one_hundred() {
		let cases: [&[f64]; 4] = [
			&[1.0, 2.0, 3.0],
			&[0.1, 0.2, 0.7, 13.0, 5.5],
			&[1e9, 3.0, 0.001],
			&[7.0, 7.0, 7.0, 7.0, 7.0, 7.0, 7.0],
		];
		for values in cases {
			let sum: f64 = slice_percentages(&pie(values), 0).iter().sum();
			assert!((sum - 100.0).abs() < 0.01, "{values:?} -> {sum}");
		}
	}

	#[test]
	fn all_zero_series_is_zero_percent() {
		let shares = slice_percentages(&pie(&[0.0, 0.0, 0.0]), 0);
		assert_eq!(shares, vec![0.0, 0.0, 0.0]);
		let scene = render_chart(
			&pie(&[0.0, 0.0]),
			ChartMode::Pie,
			&InteractionState::default(),
			&ChartConfig::default(),
		);
		assert!(scene.hit_regions.iter().all(|h| h.tooltip.percent.as_deref() == Some("0.0%")));
	}

	#[test]
	fn single_full_slice_is_a_circle() {
		let scene = render_chart(
			&pie(&[0.0, 42.0]),
			ChartMode::Pie,
			&InteractionState::default(),
			&ChartConfig::default(),
		);
		let circles = scene
			.shapes
			.iter()
			.filter(|s| matches!(s, Shape::Circle { .. }))
			.count();
		assert_eq!(circles, 1);
		assert_eq!(scene.legend.len(), 2);
	}

	#[test]
	fn large_slice_uses_large_arc_flag() {
		assert!(slice_path(0.0, 0.0, 10.0, 0.0, TAU * 0.75).contains(" 0 1 1 "));
		assert!(slice_path(0.0, 0.0, 10.0, 0.0, TAU * 0.25).contains(" 0 0 1 "));
	}

	#[test]
	fn legend_hover_shows_slice_tooltip() {
		let data = pie(&[1.0, 3.0]);
		let point = DataPoint {
			series: 0,
			category: 1,
		};
		let interaction = InteractionState {
			hovered_series: None,
			hovered_point: Some(point),
		};
		let scene = render_chart(&data, ChartMode::Pie, &interaction, &ChartConfig::default());
		assert_eq!(scene.legend[1].target, LegendTarget::Point(point));
		let tooltip = scene.tooltip.expect("tooltip");
		assert_eq!(tooltip.category, "c1");
		assert_eq!(tooltip.value, "3");
		assert_eq!(tooltip.percent.as_deref(), Some("75.0%"));
	}

	#[test]
	fn slices_are_hit_tested_by_angle() {
		let data = pie(&[1.0, 1.0]);
		let scene = render_chart(
			&data,
			ChartMode::Pie,
			&InteractionState::default(),
			&ChartConfig::default(),
		);
		let (cx, cy) = ChartConfig::default().layout.plot_area().center();
		// First half is on the right (clockwise from 12 o'clock).
		assert_eq!(scene.point_at(cx + 20.0, cy).map(|p| p.category), Some(0));
		assert_eq!(scene.point_at(cx - 20.0, cy).map(|p| p.category), Some(1));
	}

	#[test]
	fn legend_fade_follows_layout() {
		let mut config = ChartConfig::default();
		config.layout.legend_fade_opacity = 0.25;
		let interaction = InteractionState {
			hovered_series: None,
			hovered_point: Some(DataPoint {
				series: 0,
				category: 0,
			}),
		};
		let scene = render_chart(&pie(&[1.0, 2.0, 3.0]), ChartMode::Pie, &interaction, &config);
		let opacities: Vec<f64> = scene.legend.iter().map(|e| e.opacity).collect();
		assert_eq!(opacities, vec![1.0, 0.25, 0.25]);
	}
}

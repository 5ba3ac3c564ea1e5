//! Scene construction for every chart mode.
//!
//! Builds geometry in layers for correct z-ordering:
//! 1. Grid lines and tick labels
//! 2. Data marks (bars, lines and markers, or pie slices)
//! 3. Category labels
//!
//! Bar and line live here; pie and table have their own modules.

use log::debug;

use super::format::{NumberLocale, format_value};
use super::pie;
use super::scale::{CategoryAxis, CategoryPlacement, ChartLayout, LinearScale, PlotArea};
use super::scene::{HitRegion, LegendEntry, LegendTarget, Region, Scene, Shape, TextAnchor, Tooltip};
use super::state::{ChartMode, DataPoint, InteractionState};
use super::table;
use super::theme::{ChartTheme, Color};
use super::types::ChartData;

const TICK_FONT_SIZE: f64 = 11.0;
const LABEL_FONT_SIZE: f64 = 12.0;

/// Layout, colors and number formatting for one chart.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChartConfig {
	/// Canvas size, padding and mark sizes.
	pub layout: ChartLayout,
	/// Colors.
	pub theme: ChartTheme,
	/// Digits and separators for printed numbers.
	pub locale: NumberLocale,
}

/// Pie is only offered for charts with at most one series.
pub fn is_pie_available(data: &ChartData) -> bool {
	data.is_pie_available()
}

/// Builds the scene for `data` drawn as `mode`.
///
/// Never fails: charts without datasets produce an empty scene, and every
/// division-by-zero case collapses to a flat but valid shape.
pub fn render_chart(
	data: &ChartData,
	mode: ChartMode,
	interaction: &InteractionState,
	config: &ChartConfig,
) -> Scene {
	let layout = &config.layout;
	let mut scene = Scene::new(&data.title, mode, layout.width, layout.height);

	if data.datasets.is_empty() {
		debug!("chart {:?} has no datasets, nothing to render", data.title);
		return scene;
	}

	match mode {
		ChartMode::Bar => draw_bars(&mut scene, data, interaction, config),
		ChartMode::Line => draw_lines(&mut scene, data, interaction, config),
		ChartMode::Pie => pie::draw_pie(&mut scene, data, interaction, config),
		ChartMode::Table => scene.table = Some(table::build_table(data, config.locale)),
	}

	scene.tooltip = interaction
		.hovered_point
		.and_then(|p| scene.hit_for(p))
		.map(|h| h.tooltip.clone());

	debug!(
		"chart {:?} as {:?}: {} shapes, {} hit regions",
		data.title,
		mode,
		scene.shapes.len(),
		scene.hit_regions.len()
	);
	scene
}

/// Tooltip text shared by bar and line marks.
fn series_tooltip(data: &ChartData, point: DataPoint, locale: NumberLocale, x: f64, y: f64) -> Tooltip {
	Tooltip {
		series: data.datasets.get(point.series).map(|d| d.label.clone()),
		category: data.labels.get(point.category).cloned().unwrap_or_default(),
		value: format_value(data.value_at(point.series, point.category), locale),
		percent: None,
		x,
		y,
	}
}

/// Grid lines with value labels to the left of the plot.
fn draw_value_axis(scene: &mut Scene, scale: &LinearScale, plot: &PlotArea, config: &ChartConfig) {
	let theme = &config.theme;
	for tick in scale.ticks(config.layout.tick_count) {
		let y = scale.apply(tick);
		scene.shapes.push(Shape::Line {
			x1: plot.left,
			y1: y,
			x2: plot.right(),
			y2: y,
			stroke: theme.grid.to_css(),
			width: 1.0,
		});
		scene.shapes.push(Shape::Text {
			x: plot.left - 8.0,
			y: y + TICK_FONT_SIZE / 3.0,
			text: format_value(tick, config.locale),
			anchor: TextAnchor::End,
			fill: theme.text.to_css(),
			size: TICK_FONT_SIZE,
		});
	}
	scene.shapes.push(Shape::Line {
		x1: plot.left,
		y1: plot.bottom(),
		x2: plot.right(),
		y2: plot.bottom(),
		stroke: theme.axis.to_css(),
		width: 1.0,
	});
}

fn draw_category_labels(scene: &mut Scene, data: &ChartData, axis: &CategoryAxis, plot: &PlotArea, theme: &ChartTheme) {
	for (i, label) in data.labels.iter().enumerate() {
		scene.shapes.push(Shape::Text {
			x: axis.label_position(i),
			y: plot.bottom() + 18.0,
			text: label.clone(),
			anchor: TextAnchor::Middle,
			fill: theme.text.to_css(),
			size: LABEL_FONT_SIZE,
		});
	}
}

/// One legend entry per series, only when there is more than one.
fn series_legend(scene: &mut Scene, data: &ChartData, interaction: &InteractionState, dim: f64) {
	if data.datasets.len() <= 1 {
		return;
	}
	scene.legend = data
		.datasets
		.iter()
		.enumerate()
		.map(|(i, d)| LegendEntry {
			label: d.label.clone(),
			color: data.dataset_color(i),
			target: LegendTarget::Series(i),
			opacity: interaction.series_opacity(i, dim),
		})
		.collect();
}

/// Fill and outline of a data mark. Hovered marks are lightened; a color that
/// cannot be parsed keeps its fill and is outlined instead.
fn mark_paint(base: &str, hovered: bool, theme: &ChartTheme) -> (String, Option<String>) {
	if !hovered {
		return (base.to_string(), None);
	}
	match Color::parse(base) {
		Some(color) => (color.lighten(theme.hover_lighten).to_css(), None),
		None => (base.to_string(), Some(theme.text.to_css())),
	}
}

fn draw_bars(scene: &mut Scene, data: &ChartData, interaction: &InteractionState, config: &ChartConfig) {
	let layout = &config.layout;
	let plot = layout.plot_area();
	let max_value = data.max_value();
	let scale = LinearScale::new(0.0, max_value, &plot);
	let axis = CategoryAxis::new(data.labels.len(), &plot, CategoryPlacement::Band);
	let series_count = data.datasets.len();

	draw_value_axis(scene, &scale, &plot, config);

	for category in 0..data.labels.len() {
		for series in 0..series_count {
			let point = DataPoint { series, category };
			let value = data.value_at(series, category);
			let height = if max_value > 0.0 && value > 0.0 {
				(value / max_value * plot.height).min(plot.height)
			} else {
				0.0
			};
			let (x, width) = axis.bar_slot(category, series, series_count, layout.group_padding);
			let y = plot.bottom() - height;

			let hit = scene.push_hit(HitRegion {
				point,
				region: Region::Rect { x, y, width, height },
				tooltip: series_tooltip(data, point, config.locale, x + width / 2.0, y),
			});
			let (fill, stroke) =
				mark_paint(&data.dataset_color(series), interaction.is_point_hovered(point), &config.theme);
			scene.shapes.push(Shape::Rect {
				x,
				y,
				width,
				height,
				fill,
				stroke,
				opacity: interaction.series_opacity(series, layout.dim_opacity),
				hit: Some(hit),
			});
		}
	}

	draw_category_labels(scene, data, &axis, &plot, &config.theme);
	series_legend(scene, data, interaction, layout.dim_opacity);
}

fn draw_lines(scene: &mut Scene, data: &ChartData, interaction: &InteractionState, config: &ChartConfig) {
	let layout = &config.layout;
	let plot = layout.plot_area();
	let scale = LinearScale::new(data.min_value(), data.max_value(), &plot);
	let axis = CategoryAxis::new(data.labels.len(), &plot, CategoryPlacement::Point);

	draw_value_axis(scene, &scale, &plot, config);

	for series in 0..data.datasets.len() {
		let color = data.dataset_color(series);
		let opacity = interaction.series_opacity(series, layout.dim_opacity);
		let points: Vec<(f64, f64)> = (0..data.labels.len())
			.map(|category| (axis.position(category), scale.apply(data.value_at(series, category))))
			.collect();

		scene.shapes.push(Shape::Polyline {
			points: points.clone(),
			stroke: color.clone(),
			width: layout.line_width,
			opacity,
		});

		for (category, (cx, cy)) in points.into_iter().enumerate() {
			let point = DataPoint { series, category };
			let hovered = interaction.is_point_hovered(point);
			let (fill, outline) = mark_paint(&color, hovered, &config.theme);
			let hit = scene.push_hit(HitRegion {
				point,
				region: Region::Circle {
					cx,
					cy,
					r: layout.marker_radius * 2.0,
				},
				tooltip: series_tooltip(data, point, config.locale, cx, cy),
			});
			scene.shapes.push(Shape::Circle {
				cx,
				cy,
				r: if hovered {
					layout.marker_radius * 1.5
				} else {
					layout.marker_radius
				},
				fill,
				stroke: outline.or_else(|| Some(config.theme.slice_border.to_css())),
				opacity,
				hit: Some(hit),
			});
		}
	}

	draw_category_labels(scene, data, &axis, &plot, &config.theme);
	series_legend(scene, data, interaction, layout.dim_opacity);
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::chart::types::{ChartDataset, ChartType};

	fn chart(labels: &[&str], series: &[(&str, &[f64])]) -> ChartData {
		ChartData {
			title: "Exports".into(),
			chart_type: ChartType::Bar,
			labels: labels.iter().map(|l| l.to_string()).collect(),
			datasets: series
				.iter()
				.map(|(label, data)| ChartDataset {
					label: label.to_string(),
					data: data.to_vec(),
					color: None,
				})
				.collect(),
		}
	}

	fn rects(scene: &Scene) -> Vec<(f64, f64, f64, f64, f64)> {
		scene
			.shapes
			.iter()
			.filter_map(|s| match s {
				Shape::Rect {
					x,
					y,
					width,
					height,
					opacity,
					..
				} => Some((*x, *y, *width, *height, *opacity)),
				_ => None,
			})
			.collect()
	}

	fn circles(scene: &Scene) -> Vec<(f64, f64)> {
		scene
			.shapes
			.iter()
			.filter_map(|s| match s {
				Shape::Circle { cx, cy, .. } => Some((*cx, *cy)),
				_ => None,
			})
			.collect()
	}

	fn render(data: &ChartData, mode: ChartMode) -> Scene {
		render_chart(data, mode, &InteractionState::default(), &ChartConfig::default())
	}

	#[test]
	fn empty_datasets_render_nothing() {
		let data = chart(&["a", "b"], &[]);
		for mode in ChartMode::ALL {
			let scene = render(&data, mode);
			assert!(scene.is_empty(), "{mode:?}");
			assert!(scene.legend.is_empty());
			assert!(scene.hit_regions.is_empty());
		}
	}

	#[test]
	fn bar_heights_scale_to_max_value() {
		let data = chart(&["a", "b"], &[("s", &[50.0, 100.0])]);
		let scene = render(&data, ChartMode::Bar);
		let plot = ChartLayout::default().plot_area();
		let bars = rects(&scene);
		assert_eq!(bars.len(), 2);
		assert!((bars[0].3 - plot.height / 2.0).abs() < 1e-9);
		assert!((bars[1].3 - plot.height).abs() < 1e-9);
		assert!((bars[1].1 - plot.top).abs() < 1e-9);
	}

	#[test]
	fn bars_stay_inside_plot_area() {
		let data = chart(
			&["a", "b", "c", "d"],
			&[("x", &[3.0, -2.0, 17.5, 0.0]), ("y", &[9.0, 1.0]), ("z", &[4.0, 4.0, 4.0, 4.0])],
		);
		let scene = render(&data, ChartMode::Bar);
		let plot = ChartLayout::default().plot_area();
		for (x, y, w, h, _) in rects(&scene) {
			assert!(x >= plot.left - 1e-9 && x + w <= plot.right() + 1e-9);
			assert!(y >= plot.top - 1e-9 && y + h <= plot.bottom() + 1e-9);
			assert!(h >= 0.0);
		}
	}

	#[test]
	fn all_zero_bars_are_flat() {
		let data = chart(&["a", "b"], &[("s", &[0.0, 0.0])]);
		let scene = render(&data, ChartMode::Bar);
		assert!(rects(&scene).iter().all(|r| r.3 == 0.0 && r.1.is_finite()));
	}

	#[test]
	fn line_points_stay_inside_plot_area() {
		let data = chart(&["a", "b", "c"], &[("x", &[-5.0, 12.0, 3.0]), ("y", &[7.0, 0.0, 20.0])]);
		let scene = render(&data, ChartMode::Line);
		let plot = ChartLayout::default().plot_area();
		let points = circles(&scene);
		assert_eq!(points.len(), 6);
		for (cx, cy) in points {
			assert!(cx >= plot.left - 1e-9 && cx <= plot.right() + 1e-9);
			assert!(cy >= plot.top - 1e-9 && cy <= plot.bottom() + 1e-9);
		}
	}

	#[test]
	fn single_category_renders_for_bar_and_line() {
		let data = chart(&["X"], &[("s", &[5.0])]);
		for mode in [ChartMode::Bar, ChartMode::Line] {
			let scene = render(&data, mode);
			assert_eq!(scene.hit_regions.len(), 1);
			for shape in &scene.shapes {
				if let Shape::Circle { cx, cy, .. } = shape {
					assert!(cx.is_finite() && cy.is_finite());
				}
			}
		}
		let bars = rects(&render(&data, ChartMode::Bar));
		assert!(bars[0].0.is_finite() && bars[0].2 > 0.0);
	}

	#[test]
	fn mismatched_lengths_read_missing_as_zero() {
		let data = chart(&["a", "b", "c"], &[("s", &[10.0])]);
		let scene = render(&data, ChartMode::Bar);
		let bars = rects(&scene);
		assert_eq!(bars.len(), 3);
		assert_eq!(bars[1].3, 0.0);
		assert_eq!(bars[2].3, 0.0);
	}

	#[test]
	fn legend_only_for_multiple_series() {
		let single = chart(&["a"], &[("s", &[1.0])]);
		assert!(render(&single, ChartMode::Bar).legend.is_empty());
		let multi = chart(&["a"], &[("s", &[1.0]), ("t", &[2.0])]);
		let legend = render(&multi, ChartMode::Line).legend;
		assert_eq!(legend.len(), 2);
		assert_eq!(legend[1].target, LegendTarget::Series(1));
	}

	#[test]
	fn legend_hover_dims_other_series_bars() {
		let data = chart(&["a"], &[("s", &[1.0]), ("t", &[2.0])]);
		let interaction = InteractionState {
			hovered_series: Some(1),
			hovered_point: None,
		};
		let config = ChartConfig::default();
		let scene = render_chart(&data, ChartMode::Bar, &interaction, &config);
		let bars = rects(&scene);
		assert_eq!(bars[0].4, config.layout.dim_opacity);
		assert_eq!(bars[1].4, 1.0);
		assert_eq!(scene.legend[0].opacity, config.layout.dim_opacity);
	}

	#[test]
	fn hovered_point_produces_tooltip() {
		let data = chart(&["1401", "1402"], &[("Oil", &[1200.0, 2500.5])]);
		let point = DataPoint {
			series: 0,
			category: 1,
		};
		let interaction = InteractionState {
			hovered_series: None,
			hovered_point: Some(point),
		};
		let scene = render_chart(&data, ChartMode::Line, &interaction, &ChartConfig::default());
		let tooltip = scene.tooltip.expect("tooltip");
		assert_eq!(tooltip.series.as_deref(), Some("Oil"));
		assert_eq!(tooltip.category, "1402");
		assert_eq!(tooltip.value, "2,500.5");
	}

	#[test]
	fn hit_regions_resolve_back_to_points() {
		let data = chart(&["a", "b"], &[("s", &[10.0, 20.0])]);
		let scene = render(&data, ChartMode::Bar);
		let region = &scene.hit_regions[1];
		let Region::Rect { x, y, width, height } = region.region else {
			panic!("bar regions are rectangles");
		};
		assert_eq!(
			scene.point_at(x + width / 2.0, y + height / 2.0),
			Some(DataPoint {
				series: 0,
				category: 1
			})
		);
	}

	#[test]
	fn hovered_hex_bar_is_lightened() {
		let mut data = chart(&["a"], &[("s", &[5.0])]);
		data.datasets[0].color = Some("#000000".into());
		let interaction = InteractionState {
			hovered_series: None,
			hovered_point: Some(DataPoint {
				series: 0,
				category: 0,
			}),
		};
		let config = ChartConfig::default();
		let scene = render_chart(&data, ChartMode::Bar, &interaction, &config);
		let Some(Shape::Rect { fill, stroke, .. }) = scene.shapes.iter().find(|s| matches!(s, Shape::Rect { .. })) else {
			panic!("expected a bar");
		};
		assert_eq!(*fill, Color::rgb(0, 0, 0).lighten(config.theme.hover_lighten).to_css());
		assert_eq!(*stroke, None);
	}

	#[test]
	fn hovered_named_color_keeps_fill_and_gets_outline() {
		let mut data = chart(&["a", "b"], &[("s", &[5.0, 7.0])]);
		data.datasets[0].color = Some("red".into());
		let interaction = InteractionState {
			hovered_series: None,
			hovered_point: Some(DataPoint {
				series: 0,
				category: 1,
			}),
		};
		let config = ChartConfig::default();
		let outline = Some(config.theme.text.to_css());

		let bars = render_chart(&data, ChartMode::Bar, &interaction, &config);
		let bar_paint: Vec<_> = bars
			.shapes
			.iter()
			.filter_map(|s| match s {
				Shape::Rect { fill, stroke, .. } => Some((fill.clone(), stroke.clone())),
				_ => None,
			})
			.collect();
		assert_eq!(bar_paint, vec![("red".to_string(), None), ("red".to_string(), outline.clone())]);

		let lines = render_chart(&data, ChartMode::Line, &interaction, &config);
		let marker_paint: Vec<_> = lines
			.shapes
			.iter()
			.filter_map(|s| match s {
				Shape::Circle { fill, stroke, .. } => Some((fill.clone(), stroke.clone())),
				_ => None,
			})
			.collect();
		assert_eq!(marker_paint[0], ("red".to_string(), Some(config.theme.slice_border.to_css())));
		assert_eq!(marker_paint[1], ("red".to_string(), outline));
	}
}

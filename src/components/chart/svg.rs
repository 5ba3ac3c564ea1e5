//! Standalone SVG export of a [`Scene`].

use std::fmt::Write;

use super::render::{ChartConfig, render_chart};
use super::scene::{Scene, Shape, Tooltip};
use super::state::{ChartMode, InteractionState};
use super::types::ChartData;

const TABLE_ROW_HEIGHT: f64 = 24.0;
const TABLE_FIRST_COLUMN: f64 = 140.0;

/// Render `data` as `mode` straight to an SVG document.
pub fn render_chart_svg(
	data: &ChartData,
	mode: ChartMode,
	interaction: &InteractionState,
	config: &ChartConfig,
) -> String {
	to_svg(&render_chart(data, mode, interaction, config), config)
}

/// Serialize a scene. Table scenes are laid out as a text grid.
pub fn to_svg(scene: &Scene, config: &ChartConfig) -> String {
	let theme = &config.theme;
	let mut svg = String::new();

	let _ = writeln!(
		svg,
		"<svg xmlns='http://www.w3.org/2000/svg' width='{w:.0}' height='{h:.0}' viewBox='0 0 {w:.0} {h:.0}' direction='ltr' role='img'>",
		w = scene.width,
		h = scene.height,
	);
	let _ = writeln!(svg, "  <title>{}</title>", escape_text(&scene.title));
	let _ = writeln!(
		svg,
		"  <rect width='{:.0}' height='{:.0}' fill='{}'/>",
		scene.width,
		scene.height,
		theme.background.to_css()
	);

	for shape in &scene.shapes {
		write_shape(&mut svg, shape);
	}

	if let Some(table) = &scene.table {
		let text = theme.text.to_css();
		let columns = table.header.len().saturating_sub(1).max(1) as f64;
		let column_width = (scene.width - TABLE_FIRST_COLUMN) / columns;
		let column_x = |i: usize| {
			if i == 0 {
				8.0
			} else {
				TABLE_FIRST_COLUMN + column_width * (i - 1) as f64
			}
		};

		for (i, cell) in table.header.iter().enumerate() {
			let _ = writeln!(
				svg,
				"  <text x='{:.2}' y='{:.2}' fill='{}' font-size='12' font-weight='600'>{}</text>",
				column_x(i),
				TABLE_ROW_HEIGHT,
				text,
				escape_text(cell)
			);
		}
		for (r, row) in table.rows.iter().enumerate() {
			let y = TABLE_ROW_HEIGHT * (r + 2) as f64;
			let _ = writeln!(
				svg,
				"  <text x='{:.2}' y='{:.2}' fill='{}' font-size='12'>{}</text>",
				column_x(0),
				y,
				escape_text(&row.color),
				escape_text(&row.label)
			);
			for (c, cell) in row.cells.iter().enumerate() {
				let _ = writeln!(
					svg,
					"  <text x='{:.2}' y='{:.2}' fill='{}' font-size='12'><title>{}</title>{}</text>",
					column_x(c + 1),
					y,
					text,
					escape_text(&cell.title),
					escape_text(&cell.text)
				);
			}
		}
	}

	if let Some(tooltip) = &scene.tooltip {
		write_tooltip(&mut svg, tooltip, config);
	}

	let _ = writeln!(svg, "</svg>");
	svg
}

fn write_shape(svg: &mut String, shape: &Shape) {
	match shape {
		Shape::Rect {
			x,
			y,
			width,
			height,
			fill,
			stroke,
			opacity,
			..
		} => {
			let _ = writeln!(
				svg,
				"  <rect x='{x:.2}' y='{y:.2}' width='{width:.2}' height='{height:.2}' fill='{}'{} opacity='{opacity}'/>",
				escape_text(fill),
				stroke_attr(stroke.as_deref())
			);
		}
		Shape::Polyline {
			points,
			stroke,
			width,
			opacity,
		} => {
			let points = points
				.iter()
				.map(|(x, y)| format!("{x:.2},{y:.2}"))
				.collect::<Vec<_>>()
				.join(" ");
			let _ = writeln!(
				svg,
				"  <polyline points='{points}' fill='none' stroke='{}' stroke-width='{width}' opacity='{opacity}'/>",
				escape_text(stroke)
			);
		}
		Shape::Circle {
			cx,
			cy,
			r,
			fill,
			stroke,
			opacity,
			..
		} => {
			let _ = writeln!(
				svg,
				"  <circle cx='{cx:.2}' cy='{cy:.2}' r='{r:.2}' fill='{}'{} opacity='{opacity}'/>",
				escape_text(fill),
				stroke_attr(stroke.as_deref())
			);
		}
		Shape::Path {
			d,
			fill,
			stroke,
			opacity,
			..
		} => {
			let _ = writeln!(
				svg,
				"  <path d='{d}' fill='{}'{} opacity='{opacity}'/>",
				escape_text(fill),
				stroke_attr(stroke.as_deref())
			);
		}
		Shape::Line {
			x1,
			y1,
			x2,
			y2,
			stroke,
			width,
		} => {
			let _ = writeln!(
				svg,
				"  <line x1='{x1:.2}' y1='{y1:.2}' x2='{x2:.2}' y2='{y2:.2}' stroke='{}' stroke-width='{width}'/>",
				escape_text(stroke)
			);
		}
		Shape::Text {
			x,
			y,
			text,
			anchor,
			fill,
			size,
		} => {
			let _ = writeln!(
				svg,
				"  <text x='{x:.2}' y='{y:.2}' text-anchor='{}' fill='{}' font-size='{size}'>{}</text>",
				anchor.as_str(),
				escape_text(fill),
				escape_text(text)
			);
		}
	}
}

fn stroke_attr(stroke: Option<&str>) -> String {
	stroke
		.map(|s| format!(" stroke='{}'", escape_text(s)))
		.unwrap_or_default()
}

fn write_tooltip(svg: &mut String, tooltip: &Tooltip, config: &ChartConfig) {
	let theme = &config.theme;
	let lines = tooltip_lines(tooltip);
	let height = 8.0 + 16.0 * lines.len() as f64;
	let width = 12.0 + 7.0 * lines.iter().map(|l| l.chars().count()).max().unwrap_or(0) as f64;
	let x = (tooltip.x + 10.0).min(config.layout.width - width).max(0.0);
	let y = (tooltip.y - height - 6.0).max(0.0);

	let _ = writeln!(svg, "  <g transform='translate({x:.2} {y:.2})'>");
	let _ = writeln!(
		svg,
		"    <rect width='{width:.2}' height='{height:.2}' rx='6' fill='{}'/>",
		theme.tooltip_background.to_css()
	);
	for (i, line) in lines.iter().enumerate() {
		let _ = writeln!(
			svg,
			"    <text x='6' y='{:.2}' fill='{}' font-size='12'>{}</text>",
			18.0 + 16.0 * i as f64,
			theme.tooltip_text.to_css(),
			escape_text(line)
		);
	}
	let _ = writeln!(svg, "  </g>");
}

/// Tooltip content as display lines: series, then category, then value.
pub fn tooltip_lines(tooltip: &Tooltip) -> Vec<String> {
	let mut lines = Vec::with_capacity(3);
	if let Some(series) = &tooltip.series {
		lines.push(series.clone());
	}
	lines.push(tooltip.category.clone());
	match &tooltip.percent {
		Some(percent) => lines.push(format!("{} ({})", tooltip.value, percent)),
		None => lines.push(tooltip.value.clone()),
	}
	lines
}

fn escape_text(input: &str) -> String {
	input
		.replace('&', "&amp;")
		.replace('<', "&lt;")
		.replace('>', "&gt;")
		.replace('"', "&quot;")
		.replace('\'', "&apos;")
}

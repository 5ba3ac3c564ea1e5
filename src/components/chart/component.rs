//! Leptos component wrapping the chart renderer.
//!
//! The component owns the selected mode and hover state. Each change rebuilds
//! the scene, which is serialized to inline SVG; pointer positions are mapped
//! back into chart coordinates and hit-tested against the scene.

use leptos::prelude::*;
use web_sys::MouseEvent;

use super::render::{ChartConfig, render_chart};
use super::scale::ScreenRect;
use super::scene::LegendTarget;
use super::state::{ChartMode, InteractionState, select_mode};
use super::svg::to_svg;
use super::types::ChartData;

/// Renders a chart with a mode switcher, legend and hover tooltips.
///
/// Charts without datasets render nothing. The pie button is disabled while
/// the data has more than one series.
#[component]
pub fn ChartView(
	#[prop(into)] data: Signal<ChartData>,
	#[prop(optional)] config: Option<ChartConfig>,
) -> impl IntoView {
	let config = StoredValue::new(config.unwrap_or_default());
	let mode = RwSignal::new(data.with_untracked(ChartMode::initial));
	let interaction = RwSignal::new(InteractionState::default());
	let chart_ref = NodeRef::<leptos::html::Div>::new();

	// New data may not support the current mode.
	Effect::new(move |_| {
		data.with(|d| {
			if !mode.get_untracked().is_available(d) {
				mode.set(ChartMode::initial(d));
			}
		});
		interaction.update(InteractionState::clear);
	});

	let has_data = Memo::new(move |_| data.with(|d| !d.datasets.is_empty()));
	let scene = Memo::new(move |_| {
		let mode = mode.get();
		data.with(|d| interaction.with(|i| config.with_value(|c| render_chart(d, mode, i, c))))
	});
	let markup = Memo::new(move |_| scene.with(|s| config.with_value(|c| to_svg(s, c))));

	let on_mousemove = move |ev: MouseEvent| {
		// Measure the chart itself; the wrapper is as wide as its container.
		let Some(svg) = chart_ref.get_untracked().and_then(|el| el.first_element_child()) else {
			return;
		};
		let rect = svg.get_bounding_client_rect();
		let screen = ScreenRect {
			left: rect.left(),
			top: rect.top(),
			width: rect.width(),
			height: rect.height(),
		};
		let Some((x, y)) = config.with_value(|c| {
			c.layout
				.client_to_chart(ev.client_x() as f64, ev.client_y() as f64, &screen)
		}) else {
			return;
		};
		let point = scene.with_untracked(|s| s.point_at(x, y));
		if interaction.with_untracked(|i| i.hovered_point) != point {
			interaction.update(|i| i.hover_point(point));
		}
	};
	let on_mouseleave = move |_: MouseEvent| {
		if interaction.with_untracked(|i| i.hovered_point.is_some()) {
			interaction.update(|i| i.hover_point(None));
		}
	};

	let switcher = move || {
		ChartMode::ALL
			.into_iter()
			.map(|m| {
				view! {
					<button
						class="chart-mode"
						class:active=move || mode.get() == m
						disabled=move || !data.with(|d| m.is_available(d))
						on:click=move |_| {
							let next = data.with_untracked(|d| select_mode(mode.get_untracked(), m, d));
							if next != mode.get_untracked() {
								mode.set(next);
								interaction.update(InteractionState::clear);
							}
						}
					>
						{m.label()}
					</button>
				}
			})
			.collect_view()
	};

	let legend = move || {
		scene
			.with(|s| s.legend.clone())
			.into_iter()
			.map(|entry| {
				let target = entry.target;
				view! {
					<li
						class="chart-legend-entry"
						style:opacity=entry.opacity.to_string()
						on:mouseenter=move |_| {
							interaction.update(|i| match target {
								LegendTarget::Series(series) => i.hover_series(Some(series)),
								LegendTarget::Point(point) => i.hover_point(Some(point)),
							})
						}
						on:mouseleave=move |_| interaction.update(InteractionState::clear)
					>
						<span class="chart-legend-swatch" style:background-color=entry.color></span>
						{entry.label}
					</li>
				}
			})
			.collect_view()
	};

	let table = move || {
		scene.with(|s| s.table.clone()).map(|t| {
			view! {
				<table class="chart-table">
					<thead>
						<tr>{t.header.into_iter().map(|h| view! { <th>{h}</th> }).collect_view()}</tr>
					</thead>
					<tbody>
						{t
							.rows
							.into_iter()
							.map(|row| {
								view! {
									<tr>
										<th style:color=row.color>{row.label}</th>
										{row
											.cells
											.into_iter()
											.map(|cell| view! { <td title=cell.title>{cell.text}</td> })
											.collect_view()}
									</tr>
								}
							})
							.collect_view()}
					</tbody>
				</table>
			}
		})
	};

	view! {
		<Show when=move || has_data.get()>
			<figure class="chart">
				<figcaption>{move || data.with(|d| d.title.clone())}</figcaption>
				<div class="chart-modes">{switcher}</div>
				<Show
					when=move || mode.get() != ChartMode::Table
					fallback=table
				>
					<div
						class="chart-canvas"
						node_ref=chart_ref
						inner_html=move || markup.get()
						on:mousemove=on_mousemove
						on:mouseleave=on_mouseleave
					></div>
				</Show>
				<ul class="chart-legend">{legend}</ul>
			</figure>
		</Show>
	}
}

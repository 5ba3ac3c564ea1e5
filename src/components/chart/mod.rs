//! Data chart component with switchable renderings.
//!
//! A chart is a set of category labels plus one or more numeric series. It can
//! be shown as:
//! - grouped bars
//! - one polyline per series with point markers
//! - a pie of the first series (only offered for single-series data)
//! - a table of formatted values
//!
//! Rendering is split in two steps. [`render_chart`] turns `(data, mode,
//! interaction)` into a [`Scene`] of positioned shapes, legend entries and
//! hit regions; [`to_svg`] serializes a scene. The [`ChartView`] component
//! drives both from signals.
//!
//! # Example
//!
//! ```ignore
//! use insight_viz::components::chart::{ChartData, ChartView};
//!
//! let data = ChartData::from_json(r#"{
//!     "title": "Oil exports",
//!     "type": "line",
//!     "labels": ["1400", "1401", "1402"],
//!     "datasets": [{ "label": "kbpd", "data": [700, 1100, 1400] }]
//! }"#)?;
//!
//! view! { <ChartView data=Signal::derive(move || data.clone()) /> }
//! ```

mod component;
mod format;
mod pie;
mod render;
mod scale;
mod scene;
mod state;
mod svg;
mod table;
mod theme;
mod types;

pub use component::ChartView;
pub use format::{NumberLocale, format_percent, format_value};
pub use pie::slice_percentages;
pub use render::{ChartConfig, is_pie_available, render_chart};
pub use scale::{ChartLayout, ScreenRect};
pub use scene::{
	HitRegion, LegendEntry, LegendTarget, Region, Scene, Shape, TableCell, TableRow, TableView, TextAnchor,
	Tooltip,
};
pub use state::{ChartMode, DataPoint, InteractionState, select_mode};
pub use svg::{render_chart_svg, to_svg, tooltip_lines};
pub use theme::{ChartTheme, Color, PALETTE, palette_color};
pub use types::{ChartData, ChartDataset, ChartType};

//! insight-viz: result rendering for a Persian news assistant.
//!
//! This crate parses the assistant's search answers (delimited text blocks and
//! tagged JSON) and renders them as result cards and interactive data charts
//! in a WASM client.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use serde::de::DeserializeOwned;
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;
pub mod response;

pub use components::chart::{ChartConfig, ChartData, ChartDataset, ChartMode, ChartType, ChartView};
pub use components::results::{SearchResults, StructuredResultView};
pub use response::{
	GroundingCitation, ParserConfig, StructuredResult, WebSearchResponse, parse_delimited_response,
};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("insight-viz: logging initialized");
}

/// Text content of the script element with the given id.
fn load_text(id: &str) -> Option<String> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id(id)?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	script.text().ok()
}

/// Parse the JSON payload of the script element with the given id.
fn load_json<T: DeserializeOwned>(id: &str) -> Option<T> {
	let json_text = load_text(id)?;
	match serde_json::from_str::<T>(&json_text) {
		Ok(data) => {
			info!("insight-viz: loaded #{id}");
			Some(data)
		}
		Err(e) => {
			warn!("insight-viz: failed to parse #{id}: {}", e);
			None
		}
	}
}

/// Main application component.
/// Loads any chart, structured result and web search payloads embedded in the
/// page and renders them.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let chart = load_json::<ChartData>("chart-data");
	let structured = load_json::<StructuredResult>("result-data");
	let web = load_text("search-response").map(|raw| {
		let citations = load_json::<Vec<GroundingCitation>>("search-citations").unwrap_or_default();
		let response = WebSearchResponse::assemble(&raw, citations, &ParserConfig::default());
		info!(
			"insight-viz: {} web results, {} suggestions",
			response.results.len(),
			response.suggestions.len()
		);
		response
	});

	view! {
		<Html attr:lang="fa" attr:dir="rtl" attr:data-theme="dark" />
		<Title text="Insight" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<main class="insight">
			{chart.map(|data| view! { <ChartView data=Signal::derive(move || data.clone()) /> })}
			{structured
				.map(|result| {
					view! { <StructuredResultView result=Signal::derive(move || result.clone()) /> }
				})}
			{web.map(|response| {
				view! { <SearchResults response=Signal::derive(move || response.clone()) /> }
			})}
		</main>
	}
}

//! Result list for web and structured search answers.

use leptos::prelude::*;

use super::chart::ChartView;
use crate::response::{StructuredResult, WebResult, WebSearchResponse};

/// Web search result cards, follow-up suggestions and grounding sources.
///
/// `on_suggestion` fires with the suggestion text when one is clicked.
#[component]
pub fn SearchResults(
	#[prop(into)] response: Signal<WebSearchResponse>,
	#[prop(optional, into)] on_suggestion: Option<Callback<String>>,
) -> impl IntoView {
	let results = move || {
		response
			.with(|r| r.results.clone())
			.into_iter()
			.map(|result| view! { <ResultCard result /> })
			.collect_view()
	};

	let suggestions = move || {
		response
			.with(|r| r.suggestions.clone())
			.into_iter()
			.map(|text| {
				let query = text.clone();
				view! {
					<li>
						<button
							class="suggestion"
							on:click=move |_| {
								if let Some(cb) = on_suggestion {
									cb.run(query.clone());
								}
							}
						>
							{text}
						</button>
					</li>
				}
			})
			.collect_view()
	};

	let citations = move || {
		response
			.with(|r| r.citations.clone())
			.into_iter()
			.map(|c| {
				let label = if c.title.is_empty() { c.uri.clone() } else { c.title };
				view! {
					<li>
						<a href=c.uri target="_blank" rel="noopener noreferrer">
							{label}
						</a>
					</li>
				}
			})
			.collect_view()
	};

	view! {
		<section class="search-results" class:synthetic=move || response.with(|r| r.synthetic)>
			<Show
				when=move || !response.with(WebSearchResponse::is_empty)
				fallback=|| view! { <p class="empty">"No results"</p> }
			>
				<div class="result-cards">{results}</div>
				<Show when=move || response.with(|r| !r.suggestions.is_empty())>
					<ul class="suggestions">{suggestions}</ul>
				</Show>
				<Show when=move || response.with(|r| !r.citations.is_empty())>
					<h4>"Sources"</h4>
					<ol class="citations">{citations}</ol>
				</Show>
			</Show>
		</section>
	}
}

#[component]
fn ResultCard(result: WebResult) -> impl IntoView {
	let WebResult {
		title,
		link,
		source,
		description,
		image_url,
	} = result;
	let heading = if link.is_empty() {
		view! { <h3>{title}</h3> }.into_any()
	} else {
		view! {
			<h3>
				<a href=link target="_blank" rel="noopener noreferrer">
					{title}
				</a>
			</h3>
		}
		.into_any()
	};

	view! {
		<article class="result-card">
			{image_url.map(|src| view! { <img class="result-image" src=src alt="" loading="lazy" /> })}
			{heading}
			<p class="result-source">{source}</p>
			<p class="result-description">{description}</p>
		</article>
	}
}

/// A structured search result, with its chart when it carries one.
#[component]
pub fn StructuredResultView(#[prop(into)] result: Signal<StructuredResult>) -> impl IntoView {
	let chart = Memo::new(move |_| result.with(|r| r.chart().cloned()));

	let details = move || {
		result.with(|r| match r {
			StructuredResult::Statistics(stats) => stats.source_title.clone().map(|source| {
				view! { <p class="result-source">{source}</p> }.into_any()
			}),
			StructuredResult::ScientificArticle(article) => {
				let mut meta = article.authors.join(", ");
				if let Some(journal) = &article.journal {
					meta.push_str(&format!(" · {journal}"));
				}
				if let Some(year) = article.year {
					meta.push_str(&format!(" ({year})"));
				}
				Some(view! { <p class="result-source">{meta}</p> }.into_any())
			}
		})
	};

	view! {
		<article class="result-card structured">
			<h3>
				{move || match result.with(|r| r.link().map(str::to_string)) {
					Some(href) => {
						view! {
							<a href=href target="_blank" rel="noopener noreferrer">
								{move || result.with(|r| r.title().to_string())}
							</a>
						}
							.into_any()
					}
					None => result.with(|r| r.title().to_string()).into_any(),
				}}
			</h3>
			{details}
			<p class="result-description">{move || result.with(|r| r.summary().to_string())}</p>
			{move || {
				chart
					.get()
					.map(|data| {
						view! { <ChartView data=Signal::derive(move || data.clone()) /> }
					})
			}}
		</article>
	}
}

//! Web search responses: parsed result blocks plus grounding citations.
//!
//! Citations do not come from the text body; the search call reports them
//! separately and they are merged here.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::delimited::{ParserConfig, Record, parse_delimited_response_with};

/// A typed web result block.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebResult {
	/// Headline.
	pub title: String,
	/// Empty only for the synthetic answer when no citation supplied a link.
	pub link: String,
	/// Publisher name.
	pub source: String,
	/// Short summary.
	pub description: String,
	/// Preview image.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub image_url: Option<String>,
}

impl WebResult {
	/// Typed view of a parsed record. Needs at least a title and description.
	pub fn from_record(record: &Record) -> Option<Self> {
		let field = |key: &str| record.get(key).cloned().unwrap_or_default();
		let title = field("title");
		let description = field("description");
		if title.is_empty() || description.is_empty() {
			return None;
		}
		Some(Self {
			title,
			link: field("link"),
			source: field("source"),
			description,
			image_url: record.get("imageUrl").filter(|u| !u.is_empty()).cloned(),
		})
	}
}

/// A source page the search grounded its answer on.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroundingCitation {
	/// Page address.
	#[serde(alias = "url")]
	pub uri: String,
	/// Page title, may be empty.
	#[serde(default)]
	pub title: String,
}

/// Drop citations without a URI and repeated URIs, keeping first occurrence order.
pub fn dedupe_citations(citations: impl IntoIterator<Item = GroundingCitation>) -> Vec<GroundingCitation> {
	let mut seen = HashSet::new();
	citations
		.into_iter()
		.filter(|c| !c.uri.trim().is_empty())
		.filter(|c| seen.insert(c.uri.trim().to_string()))
		.collect()
}

/// Everything a web search result list displays.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WebSearchResponse {
	/// Typed result cards.
	pub results: Vec<WebResult>,
	/// Follow-up suggestions.
	pub suggestions: Vec<String>,
	/// De-duplicated grounding sources.
	pub citations: Vec<GroundingCitation>,
	/// The only result is a synthetic answer built from unstructured text.
	pub synthetic: bool,
}

impl WebSearchResponse {
	/// Parse the text body and attach the side-channel citations.
	pub fn assemble(raw: &str, citations: Vec<GroundingCitation>, config: &ParserConfig) -> Self {
		let parsed = parse_delimited_response_with(raw, config);
		let citations = dedupe_citations(citations);

		let mut results: Vec<WebResult> = parsed.records.iter().filter_map(WebResult::from_record).collect();

		// A synthetic answer has no link of its own; point it at the top citation.
		if parsed.synthetic {
			if let (Some(answer), Some(top)) = (results.first_mut(), citations.first()) {
				answer.link = top.uri.clone();
				answer.source = top.title.clone();
			}
		}

		Self {
			results,
			suggestions: parsed.suggestions,
			citations,
			synthetic: parsed.synthetic,
		}
	}

	/// True when there is nothing to show.
	pub fn is_empty(&self) -> bool {
		self.results.is_empty() && self.suggestions.is_empty() && self.citations.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn citation(uri: &str, title: &str) -> GroundingCitation {
		GroundingCitation {
			uri: uri.into(),
			title: title.into(),
		}
	}

	#[test]
	fn assembles_results_with_citations() {
		let raw = "--- RESULT ---\n\
			title: Rial steadies\n\
			link: https://news.example/rial\n\
			source: Donya-e-Eqtesad\n\
			description: The currency held its ground.\n\
			imageUrl: https://img.example/rial.jpg\n\
			--- SUGGESTIONS ---\n\
			gold price, oil exports";
		let response = WebSearchResponse::assemble(
			raw,
			vec![citation("https://a", "A"), citation("https://a", "dup"), citation("", "blank")],
			&ParserConfig::default(),
		);
		assert_eq!(response.results.len(), 1);
		assert_eq!(
			response.results[0].image_url.as_deref(),
			Some("https://img.example/rial.jpg")
		);
		assert_eq!(response.suggestions, vec!["gold price", "oil exports"]);
		assert_eq!(response.citations, vec![citation("https://a", "A")]);
		assert!(!response.synthetic);
	}

	#[test]
	fn synthetic_answer_links_to_top_citation() {
		let response = WebSearchResponse::assemble(
			"Parliament approved the budget bill after a long session.",
			vec![citation("https://majlis.example", "Majlis")],
			&ParserConfig::default(),
		);
		assert!(response.synthetic);
		assert_eq!(response.results[0].link, "https://majlis.example");
		assert_eq!(response.results[0].source, "Majlis");
	}

	#[test]
	fn record_without_description_is_not_a_result() {
		let record = Record::from([("title".to_string(), "T".to_string())]);
		assert_eq!(WebResult::from_record(&record), None);
	}

	#[test]
	fn citations_accept_url_alias() {
		let parsed: Vec<GroundingCitation> =
			serde_json::from_str(r#"[{ "url": "https://x", "title": "X" }, { "uri": "https://y" }]"#).unwrap();
		assert_eq!(parsed, vec![citation("https://x", "X"), citation("https://y", "")]);
	}

	#[test]
	fn empty_response_reports_empty() {
		let response = WebSearchResponse::assemble("", Vec::new(), &ParserConfig::default());
		assert!(response.is_empty());
	}

	#[test]
	fn serializes_image_url_in_camel_case() {
		let result = WebResult {
			title: "t".into(),
			link: "l".into(),
			source: "s".into(),
			description: "d".into(),
			image_url: Some("i".into()),
		};
		let json = serde_json::to_string(&result).unwrap();
		assert!(json.contains(r#""imageUrl":"i""#));
	}
}

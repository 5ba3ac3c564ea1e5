//! JSON results from structured search, discriminated by an explicit `kind` tag.

use serde::Deserialize;

use crate::components::chart::ChartData;

/// A statistics answer, optionally with a chart to render.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsResult {
	/// Headline.
	pub title: String,
	/// Short summary.
	#[serde(default)]
	pub summary: String,
	/// Chart to render with the result.
	#[serde(default)]
	pub chart: Option<ChartData>,
	/// Publisher of the figures.
	#[serde(default)]
	pub source_title: Option<String>,
	/// Link to the figures.
	#[serde(default)]
	pub source_url: Option<String>,
}

/// A pointer to a scientific paper.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScientificArticleResult {
	/// Paper title.
	pub title: String,
	/// Author names in byline order.
	#[serde(default)]
	pub authors: Vec<String>,
	/// Abstract or summary.
	#[serde(default)]
	pub summary: String,
	/// Link to the paper.
	#[serde(default)]
	pub link: Option<String>,
	/// Journal name.
	#[serde(default)]
	pub journal: Option<String>,
	/// Publication year.
	#[serde(default)]
	pub year: Option<u16>,
}

/// Structured search result.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum StructuredResult {
	/// Statistics answer.
	Statistics(StatisticsResult),
	/// Scientific paper.
	ScientificArticle(ScientificArticleResult),
}

impl StructuredResult {
	/// Parse a result from JSON.
	pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(json)
	}

	/// Headline of either variant.
	pub fn title(&self) -> &str {
		match self {
			StructuredResult::Statistics(s) => &s.title,
			StructuredResult::ScientificArticle(a) => &a.title,
		}
	}

	/// Summary of either variant.
	pub fn summary(&self) -> &str {
		match self {
			StructuredResult::Statistics(s) => &s.summary,
			StructuredResult::ScientificArticle(a) => &a.summary,
		}
	}

	/// Chart attached to a statistics result.
	pub fn chart(&self) -> Option<&ChartData> {
		match self {
			StructuredResult::Statistics(s) => s.chart.as_ref(),
			StructuredResult::ScientificArticle(_) => None,
		}
	}

	/// Where the result came from, if known.
	pub fn link(&self) -> Option<&str> {
		match self {
			StructuredResult::Statistics(s) => s.source_url.as_deref(),
			StructuredResult::ScientificArticle(a) => a.link.as_deref(),
		}
	}
}

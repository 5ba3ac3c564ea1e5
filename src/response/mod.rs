//! Parsing of assistant responses into typed results.
//!
//! Web search answers arrive as delimited text (see [`parse_delimited_response`]); structured
//! search answers arrive as tagged JSON (see [`structured`]).

mod delimited;
mod structured;
mod web;

pub use delimited::{
	ParsedResponse, ParserConfig, RESULT_MARKER, Record, RecordSchema, SUGGESTIONS_MARKER, WEB_RESULT,
	parse_delimited_response, parse_delimited_response_with,
};
pub use structured::{ScientificArticleResult, StatisticsResult, StructuredResult};
pub use web::{GroundingCitation, WebResult, WebSearchResponse, dedupe_citations};

//! Parser for the `--- RESULT ---` / `--- SUGGESTIONS ---` text format.
//!
//! Used when the upstream generator cannot be held to strict JSON. The format
//! is a contract made by prompt only, so nothing here fails: blocks missing a
//! required key are dropped, and a response with no usable block may degrade
//! into a single synthetic answer record.

use std::collections::BTreeMap;

use log::debug;

/// Starts each record block.
pub const RESULT_MARKER: &str = "--- RESULT ---";
/// Separates the record blocks from the comma-separated follow-up suggestions.
pub const SUGGESTIONS_MARKER: &str = "--- SUGGESTIONS ---";

/// One recovered block, keyed by the schema's canonical key names.
pub type Record = BTreeMap<String, String>;

/// The closed key set of one record type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RecordSchema {
	/// Name used in log messages.
	pub name: &'static str,
	/// Keys that are collected; anything else in a block is ignored.
	pub keys: &'static [&'static str],
	/// Keys that must be present and non-empty for a block to be kept.
	pub required: &'static [&'static str],
}

/// Web search result blocks.
pub const WEB_RESULT: RecordSchema = RecordSchema {
	name: "web-result",
	keys: &["title", "link", "source", "description", "imageUrl"],
	required: &["title", "link", "source", "description"],
};

impl RecordSchema {
	/// Canonical spelling of `key`, matched case-insensitively.
	pub fn canonical_key(&self, key: &str) -> Option<&'static str> {
		self.keys.iter().copied().find(|k| k.eq_ignore_ascii_case(key))
	}

	/// First required key that is absent or empty.
	pub fn missing_key(&self, record: &Record) -> Option<&'static str> {
		self.required
			.iter()
			.copied()
			.find(|k| record.get(*k).is_none_or(|v| v.is_empty()))
	}

	/// True when every required key has a value.
	pub fn is_complete(&self, record: &Record) -> bool {
		self.missing_key(record).is_none()
	}
}

/// Parser settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParserConfig {
	/// Keys to collect and require.
	pub schema: RecordSchema,
	/// Minimum trimmed length (in chars) of the raw text before an answer with
	/// no usable block is turned into a synthetic record. `None` disables the
	/// fallback.
	pub fallback_min_chars: Option<usize>,
	/// Title of the synthetic record.
	pub fallback_title: String,
}

impl Default for ParserConfig {
	fn default() -> Self {
		Self {
			schema: WEB_RESULT,
			fallback_min_chars: Some(20),
			fallback_title: "Answer".to_string(),
		}
	}
}

/// Records and suggestions recovered from one response.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParsedResponse {
	/// Complete records in input order.
	pub records: Vec<Record>,
	/// Follow-up suggestions.
	pub suggestions: Vec<String>,
	/// Set when `records` holds the single synthetic answer record.
	pub synthetic: bool,
}

/// Parse `raw` as web result blocks with the default [`ParserConfig`].
pub fn parse_delimited_response(raw: &str) -> ParsedResponse {
	parse_delimited_response_with(raw, &ParserConfig::default())
}

/// Parse `raw` with an explicit schema and fallback policy.
pub fn parse_delimited_response_with(raw: &str, config: &ParserConfig) -> ParsedResponse {
	let (results_text, suggestions_text) = match raw.split_once(SUGGESTIONS_MARKER) {
		Some((results, suggestions)) => (results, Some(suggestions)),
		None => (raw, None),
	};

	let suggestions = suggestions_text.map(parse_suggestions).unwrap_or_default();

	let schema = &config.schema;
	let records: Vec<Record> = results_text
		.split(RESULT_MARKER)
		.skip(1)
		.map(|block| parse_block(block, schema))
		.filter(|record| match schema.missing_key(record) {
			Some(key) => {
				debug!("dropping {} block without {key:?}", schema.name);
				false
			}
			None => true,
		})
		.collect();

	if records.is_empty() {
		if let Some(record) = fallback_record(raw, results_text, config) {
			debug!("no complete {} block, using synthetic answer", schema.name);
			return ParsedResponse {
				records: vec![record],
				suggestions,
				synthetic: true,
			};
		}
	}

	debug!(
		"parsed {} {} records, {} suggestions",
		records.len(),
		schema.name,
		suggestions.len()
	);
	ParsedResponse {
		records,
		suggestions,
		synthetic: false,
	}
}

/// Comma-separated list, trimmed, empties removed.
fn parse_suggestions(text: &str) -> Vec<String> {
	text.split(',')
		.map(str::trim)
		.filter(|s| !s.is_empty())
		.map(str::to_string)
		.collect()
}

/// `key: value` lines split on the first colon. The first occurrence of a
/// key wins.
fn parse_block(block: &str, schema: &RecordSchema) -> Record {
	let mut record = Record::new();
	for line in block.lines() {
		let Some((key, value)) = line.split_once(':') else {
			continue;
		};
		let key = key.trim();
		if key.is_empty() {
			continue;
		}
		if let Some(canonical) = schema.canonical_key(key) {
			record
				.entry(canonical.to_string())
				.or_insert_with(|| value.trim().to_string());
		}
	}
	record
}

fn fallback_record(raw: &str, results_text: &str, config: &ParserConfig) -> Option<Record> {
	let min_chars = config.fallback_min_chars?;
	if raw.trim().chars().count() < min_chars {
		return None;
	}

	let summary = results_text
		.lines()
		.map(str::trim)
		.filter(|l| !l.is_empty() && *l != RESULT_MARKER)
		.collect::<Vec<_>>()
		.join("\n");
	if summary.is_empty() {
		return None;
	}

	Some(Record::from([
		("title".to_string(), config.fallback_title.clone()),
		("description".to_string(), summary),
	]))
}

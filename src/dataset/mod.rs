//! Abbreviation records and the immutable dataset that groups them.
//!
//! A [`Dataset`] is parsed once from a JSON document mapping category keys to
//! arrays of records. It exposes read-only accessors only; callers share it
//! behind an [`std::sync::Arc`] and project filtered views out of it.

mod category;
mod error;
mod loader;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub use category::{CATEGORIES, CategoryInfo, category_info, display_name, tab_label};
pub use error::LoadError;
pub use loader::{DEFAULT_DATASET_PATH, LoadResult, load_dataset, parse_dataset, spawn_dataset_load};

/// One abbreviation and its expansion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbbreviationRecord {
	pub abbr: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub alt_abbr: Option<String>,
	pub meaning: String,
}

impl AbbreviationRecord {
	pub fn new(abbr: impl Into<String>, meaning: impl Into<String>) -> Self {
		Self {
			abbr: abbr.into(),
			alt_abbr: None,
			meaning: meaning.into(),
		}
	}

	#[must_use]
	pub fn with_alt(mut self, alt_abbr: impl Into<String>) -> Self {
		self.alt_abbr = Some(alt_abbr.into());
		self
	}

	/// Alternate spelling, treating an empty string as absent.
	pub fn alt_abbr(&self) -> Option<&str> {
		self.alt_abbr.as_deref().filter(|alt| !alt.is_empty())
	}

	/// Text shown in the abbreviation column: `abbr` or `abbr or altAbbr`.
	pub fn display_abbreviation(&self) -> String {
		match self.alt_abbr() {
			Some(alt) => format!("{} or {}", self.abbr, alt),
			None => self.abbr.clone(),
		}
	}
}

/// Categorized abbreviation records in source-document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dataset {
	categories: IndexMap<String, Vec<AbbreviationRecord>>,
}

impl Dataset {
	/// Iterate categories in the order they appeared in the source document.
	pub fn categories(&self) -> impl Iterator<Item = (&str, &[AbbreviationRecord])> {
		self.categories
			.iter()
			.map(|(key, records)| (key.as_str(), records.as_slice()))
	}

	/// Category keys in source order.
	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.categories.keys().map(String::as_str)
	}

	pub fn get(&self, key: &str) -> Option<&[AbbreviationRecord]> {
		self.categories.get(key).map(Vec::as_slice)
	}

	pub fn contains_category(&self, key: &str) -> bool {
		self.categories.contains_key(key)
	}

	/// Number of categories.
	pub fn len(&self) -> usize {
		self.categories.len()
	}

	pub fn is_empty(&self) -> bool {
		self.categories.is_empty()
	}

	/// Total number of records across every category.
	pub fn record_count(&self) -> usize {
		self.categories.values().map(Vec::len).sum()
	}
}

impl<K> FromIterator<(K, Vec<AbbreviationRecord>)> for Dataset
where
	K: Into<String>,
{
	fn from_iter<I: IntoIterator<Item = (K, Vec<AbbreviationRecord>)>>(iter: I) -> Self {
		Self {
			categories: iter
				.into_iter()
				.map(|(key, records)| (key.into(), records))
				.collect(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_alternate_is_treated_as_absent() {
		let record = AbbreviationRecord::new("po", "by mouth").with_alt("");
		assert_eq!(record.alt_abbr(), None);
		assert_eq!(record.display_abbreviation(), "po");
	}

	#[test]
	fn display_joins_alternate_spelling() {
		let record = AbbreviationRecord::new("t.i.d.", "three times a day").with_alt("TID");
		assert_eq!(record.display_abbreviation(), "t.i.d. or TID");
	}

	#[test]
	fn categories_keep_source_order() {
		let dataset = parse_dataset(
			r#"{"routes": [], "patient": [{"abbr": "po", "meaning": "by mouth"}], "clinical": []}"#,
		)
		.expect("parses");
		let keys: Vec<_> = dataset.keys().collect();
		assert_eq!(keys, vec!["routes", "patient", "clinical"]);
		assert_eq!(dataset.record_count(), 1);
	}

	#[test]
	fn alternate_field_uses_camel_case() {
		let dataset =
			parse_dataset(r#"{"patient": [{"abbr": "t.i.d.", "altAbbr": "TID", "meaning": "three times a day"}]}"#)
				.expect("parses");
		let records = dataset.get("patient").expect("category");
		assert_eq!(records[0].alt_abbr(), Some("TID"));

		let json = serde_json::to_string(&dataset).expect("serializes");
		assert!(json.contains("\"altAbbr\":\"TID\""));
	}
}

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::dataset::{AbbreviationRecord, Dataset};

use super::{matches, normalize};

/// Reserved category key meaning "no category restriction".
pub const ALL_CATEGORIES: &str = "all";

/// Category selection: every category, or exactly one key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
	#[default]
	All,
	Only(String),
}

impl CategoryFilter {
	pub fn only(key: impl Into<String>) -> Self {
		Self::Only(key.into())
	}

	/// Whether the category `key` passes this filter.
	pub fn admits(&self, key: &str) -> bool {
		match self {
			Self::All => true,
			Self::Only(selected) => selected == key,
		}
	}

	pub fn key(&self) -> &str {
		match self {
			Self::All => ALL_CATEGORIES,
			Self::Only(key) => key,
		}
	}

	pub fn is_all(&self) -> bool {
		matches!(self, Self::All)
	}
}

impl FromStr for CategoryFilter {
	type Err = Infallible;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		let value = value.trim();
		if value.is_empty() || value == ALL_CATEGORIES {
			Ok(Self::All)
		} else {
			Ok(Self::Only(value.to_string()))
		}
	}
}

impl fmt::Display for CategoryFilter {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.key())
	}
}

impl Serialize for CategoryFilter {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_str(self.key())
	}
}

impl<'de> Deserialize<'de> for CategoryFilter {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let value = String::deserialize(deserializer)?;
		let Ok(filter) = value.parse::<CategoryFilter>();
		Ok(filter)
	}
}

/// Query text and category selection governing what is rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterState {
	pub query: String,
	pub category: CategoryFilter,
}

impl FilterState {
	pub fn new(query: impl Into<String>, category: CategoryFilter) -> Self {
		Self {
			query: query.into(),
			category,
		}
	}

	/// The query in the form used for comparisons.
	pub fn normalized_query(&self) -> String {
		normalize(&self.query)
	}
}

/// Records of one category that survived filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilteredGroup<'a> {
	pub key: &'a str,
	pub records: Vec<&'a AbbreviationRecord>,
}

/// Categories admitted by `category`, in dataset order.
pub fn filter_by_category<'a, 'b>(
	dataset: &'a Dataset,
	category: &'b CategoryFilter,
) -> impl Iterator<Item = (&'a str, &'a [AbbreviationRecord])> + use<'a, 'b> {
	dataset
		.categories()
		.filter(move |(key, _)| category.admits(key))
}

/// Apply both filters. Categories left without records are omitted.
pub fn filter_dataset<'a>(dataset: &'a Dataset, state: &FilterState) -> Vec<FilteredGroup<'a>> {
	let query = state.normalized_query();
	filter_by_category(dataset, &state.category)
		.filter_map(|(key, records)| {
			let records: Vec<_> = records
				.iter()
				.filter(|record| matches(record, &query))
				.collect();
			(!records.is_empty()).then_some(FilteredGroup { key, records })
		})
		.collect()
}

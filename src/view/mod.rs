//! Render-agnostic view tree and the adapters that print it.
//!
//! [`build_view`] turns a dataset and a [`crate::FilterState`] into a
//! [`TableView`]: groups with headers and highlighted rows, or a no-results
//! notice. The terminal UI and the [`html`] / [`plain`] printers only
//! translate this tree; none of them filter or highlight on their own.

mod builder;
pub mod html;
pub mod plain;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::highlight::Highlighted;

pub use builder::build_view;

/// How the abbreviation column presents its text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbbreviationDisplay {
	/// Original casing and punctuation; matches found in the normalized form
	/// are emphasized on the original characters.
	#[default]
	Original,
	/// Lowercased, period-stripped text.
	Normalized,
}

impl AbbreviationDisplay {
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Original => "original",
			Self::Normalized => "normalized",
		}
	}
}

impl FromStr for AbbreviationDisplay {
	type Err = String;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		match value.trim().to_ascii_lowercase().as_str() {
			"original" => Ok(Self::Original),
			"normalized" | "normalised" => Ok(Self::Normalized),
			other => Err(format!(
				"unknown abbreviation display `{other}` (expected `original` or `normalized`)"
			)),
		}
	}
}

impl fmt::Display for AbbreviationDisplay {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Column headings of every category table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnLabels {
	pub abbreviation: String,
	pub meaning: String,
}

impl Default for ColumnLabels {
	fn default() -> Self {
		Self {
			abbreviation: "Abbreviation".to_string(),
			meaning: "Meaning".to_string(),
		}
	}
}

/// Presentation knobs for [`build_view`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewOptions {
	pub abbreviation_display: AbbreviationDisplay,
	pub columns: ColumnLabels,
}

/// The rendered result of one filter pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TableView {
	Groups {
		columns: ColumnLabels,
		groups: Vec<GroupView>,
	},
	NoResults(NoResults),
}

impl TableView {
	pub fn groups(&self) -> &[GroupView] {
		match self {
			Self::Groups { groups, .. } => groups,
			Self::NoResults(_) => &[],
		}
	}

	pub fn no_results(&self) -> Option<&NoResults> {
		match self {
			Self::NoResults(notice) => Some(notice),
			Self::Groups { .. } => None,
		}
	}

	/// Number of rows across every group.
	pub fn row_count(&self) -> usize {
		self.groups().iter().map(|group| group.rows.len()).sum()
	}
}

/// One category's table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupView {
	pub key: String,
	/// `None` when the key has no display name.
	pub header: Option<String>,
	pub rows: Vec<RowView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowView {
	pub abbreviation: Highlighted,
	pub meaning: Highlighted,
}

/// Notice shown when nothing matched; echoes the query as typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoResults {
	pub query: String,
}

impl NoResults {
	/// `No results found for "<query>"` with the query emphasized.
	pub fn message(&self) -> Highlighted {
		let mut message = Highlighted::plain("No results found for \"");
		message.push(self.query.as_str(), true);
		message.push("\"", false);
		message
	}
}

//! Plain-text rendering of a [`TableView`] with aligned columns.

use std::fmt::Write;

use unicode_width::UnicodeWidthStr;

use crate::highlight::Highlighted;

use super::{ColumnLabels, GroupView, TableView};

/// Markers placed around emphasized fragments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Emphasis {
	pub open: &'static str,
	pub close: &'static str,
}

impl Default for Emphasis {
	fn default() -> Self {
		Self {
			open: "*",
			close: "*",
		}
	}
}

impl Emphasis {
	/// No markers at all.
	pub const NONE: Self = Self {
		open: "",
		close: "",
	};

	pub fn apply(&self, text: &Highlighted) -> String {
		let mut out = String::new();
		for fragment in text.fragments() {
			if fragment.emphasized {
				out.push_str(self.open);
				out.push_str(&fragment.text);
				out.push_str(self.close);
			} else {
				out.push_str(&fragment.text);
			}
		}
		out
	}
}

const INDENT: &str = "  ";
const COLUMN_GAP: usize = 2;

pub fn render(view: &TableView) -> String {
	render_with(view, Emphasis::default())
}

pub fn render_with(view: &TableView, emphasis: Emphasis) -> String {
	let mut out = String::new();
	match view {
		TableView::Groups { columns, groups } => {
			for (index, group) in groups.iter().enumerate() {
				if index > 0 {
					out.push('\n');
				}
				render_group(&mut out, columns, group, emphasis);
			}
		}
		TableView::NoResults(notice) => {
			let _ = writeln!(out, "{}", emphasis.apply(&notice.message()));
		}
	}
	out
}

fn render_group(out: &mut String, columns: &ColumnLabels, group: &GroupView, emphasis: Emphasis) {
	if let Some(header) = &group.header {
		let _ = writeln!(out, "{header}");
	}

	let cells: Vec<(String, String)> = group
		.rows
		.iter()
		.map(|row| (emphasis.apply(&row.abbreviation), emphasis.apply(&row.meaning)))
		.collect();
	let width = cells
		.iter()
		.map(|(abbreviation, _)| abbreviation.width())
		.chain([columns.abbreviation.width()])
		.max()
		.unwrap_or_default();

	write_row(out, &columns.abbreviation, &columns.meaning, width);
	write_row(
		out,
		&"-".repeat(columns.abbreviation.width()),
		&"-".repeat(columns.meaning.width()),
		width,
	);
	for (abbreviation, meaning) in &cells {
		write_row(out, abbreviation, meaning, width);
	}
}

fn write_row(out: &mut String, left: &str, right: &str, width: usize) {
	let padding = width.saturating_sub(left.width()) + COLUMN_GAP;
	let _ = writeln!(out, "{INDENT}{left}{:padding$}{right}", "");
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::dataset::{AbbreviationRecord, Dataset};
	use crate::search::{CategoryFilter, FilterState};
	use crate::view::{ViewOptions, build_view};

	fn dataset() -> Dataset {
		[(
			"patient",
			vec![
				AbbreviationRecord::new("po", "by mouth"),
				AbbreviationRecord::new("a.c.", "before meals"),
			],
		)]
		.into_iter()
		.collect()
	}

	#[test]
	fn renders_aligned_columns_with_markers() {
		let state = FilterState::new("po", CategoryFilter::All);
		let text = render(&build_view(&dataset(), &state, &ViewOptions::default()));
		let expected = "\
Patient Instructions
  Abbreviation  Meaning
  ------------  -------
  *po*          by mouth
";
		assert_eq!(text, expected);
	}

	#[test]
	fn markers_can_be_disabled() {
		let state = FilterState::new("xyz", CategoryFilter::All);
		let view = build_view(&dataset(), &state, &ViewOptions::default());
		assert_eq!(render_with(&view, Emphasis::NONE), "No results found for \"xyz\"\n");
		assert_eq!(render(&view), "No results found for \"*xyz*\"\n");
	}
}

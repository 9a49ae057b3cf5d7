//! HTML rendering of a [`TableView`].
//!
//! The markup mirrors the page the table is embedded in: one
//! `div.category` per group with a `div.category-header` and a two-column
//! table, matches wrapped in `span.highlight`, and a `div.no-results` notice.
//! All dataset and query text is escaped.

use std::fmt::Write;

use crate::highlight::Highlighted;

use super::{ColumnLabels, GroupView, NoResults, TableView};

/// Class applied to emphasized fragments.
pub const HIGHLIGHT_CLASS: &str = "highlight";

/// Render the view as an HTML fragment suitable for a container element.
pub fn render(view: &TableView) -> String {
	let mut out = String::new();
	match view {
		TableView::Groups { columns, groups } => {
			for group in groups {
				render_group(&mut out, columns, group);
			}
		}
		TableView::NoResults(notice) => render_no_results(&mut out, notice),
	}
	out
}

/// Markup-bearing form of a highlighted text.
pub fn highlighted(text: &Highlighted) -> String {
	let mut out = String::new();
	for fragment in text.fragments() {
		if fragment.emphasized {
			let _ = write!(
				out,
				"<span class=\"{HIGHLIGHT_CLASS}\">{}</span>",
				escape(&fragment.text)
			);
		} else {
			out.push_str(&escape(&fragment.text));
		}
	}
	out
}

fn render_group(out: &mut String, columns: &ColumnLabels, group: &GroupView) {
	out.push_str("<div class=\"category\">\n");
	let _ = writeln!(
		out,
		"  <div class=\"category-header\">{}</div>",
		escape(group.header.as_deref().unwrap_or_default())
	);
	out.push_str("  <table>\n");
	let _ = writeln!(
		out,
		"    <thead><tr><th>{}</th><th>{}</th></tr></thead>",
		escape(&columns.abbreviation),
		escape(&columns.meaning)
	);
	out.push_str("    <tbody>\n");
	for row in &group.rows {
		let _ = writeln!(
			out,
			"      <tr><td>{}</td><td>{}</td></tr>",
			highlighted(&row.abbreviation),
			highlighted(&row.meaning)
		);
	}
	out.push_str("    </tbody>\n  </table>\n</div>\n");
}

fn render_no_results(out: &mut String, notice: &NoResults) {
	let _ = writeln!(
		out,
		"<div class=\"no-results\">{}</div>",
		highlighted(&notice.message())
	);
}

/// Escape text for use in element content and quoted attributes.
pub fn escape(text: &str) -> String {
	let mut escaped = String::with_capacity(text.len());
	for ch in text.chars() {
		match ch {
			'&' => escaped.push_str("&amp;"),
			'<' => escaped.push_str("&lt;"),
			'>' => escaped.push_str("&gt;"),
			'"' => escaped.push_str("&quot;"),
			'\'' => escaped.push_str("&#39;"),
			other => escaped.push(other),
		}
	}
	escaped
}

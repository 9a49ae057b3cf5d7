//! Query highlighting as render-agnostic text fragments.
//!
//! [`Highlighted`] is a sequence of plain and emphasized fragments. Adapters
//! decide what emphasis looks like: a `<span class="highlight">` in HTML, a
//! styled span in the terminal, marker characters in plain text.

use log::warn;
use regex::{Regex, RegexBuilder};
use serde::Serialize;

use crate::search::{Projection, normalize};

/// A run of text that is either emphasized or not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fragment {
	pub text: String,
	pub emphasized: bool,
}

/// Text split into plain and emphasized fragments.
///
/// Concatenating the fragments always reproduces the source text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Highlighted {
	fragments: Vec<Fragment>,
}

impl Highlighted {
	/// Text without any emphasis.
	pub fn plain(text: impl Into<String>) -> Self {
		let mut highlighted = Self::default();
		highlighted.push(text, false);
		highlighted
	}

	/// Append a fragment, merging it into the previous one when the emphasis matches.
	pub fn push(&mut self, text: impl Into<String>, emphasized: bool) {
		let text = text.into();
		if text.is_empty() {
			return;
		}
		match self.fragments.last_mut() {
			Some(last) if last.emphasized == emphasized => last.text.push_str(&text),
			_ => self.fragments.push(Fragment { text, emphasized }),
		}
	}

	pub fn fragments(&self) -> &[Fragment] {
		&self.fragments
	}

	/// The underlying text with emphasis dropped.
	pub fn text(&self) -> String {
		self.fragments.iter().map(|f| f.text.as_str()).collect()
	}

	pub fn has_emphasis(&self) -> bool {
		self.fragments.iter().any(|f| f.emphasized)
	}

	/// Emphasized fragments, in order.
	pub fn emphasized_parts(&self) -> impl Iterator<Item = &str> {
		self.fragments
			.iter()
			.filter(|f| f.emphasized)
			.map(|f| f.text.as_str())
	}

	fn from_ranges(text: &str, ranges: impl IntoIterator<Item = (usize, usize)>) -> Self {
		let mut highlighted = Self::default();
		let mut cursor = 0;
		for (start, end) in ranges {
			let start = start.max(cursor);
			if start >= end {
				continue;
			}
			highlighted.push(&text[cursor..start], false);
			highlighted.push(&text[start..end], true);
			cursor = end;
		}
		highlighted.push(&text[cursor..], false);
		highlighted
	}
}

/// Emphasize every case-insensitive occurrence of `query` in `text`.
///
/// The query is a literal: pattern metacharacters such as `.` or `*` only
/// match themselves. An empty query leaves the text untouched.
pub fn highlight(text: &str, query: &str) -> Highlighted {
	Highlighter::new(query).highlight(text)
}

/// Compiled form of a query, reusable across many cells.
#[derive(Debug, Clone)]
pub struct Highlighter {
	pattern: Option<Regex>,
	needle: String,
}

impl Highlighter {
	pub fn new(query: &str) -> Self {
		let pattern = if query.is_empty() {
			None
		} else {
			RegexBuilder::new(&regex::escape(query))
				.case_insensitive(true)
				.build()
				.map_err(|err| warn!("cannot highlight query {query:?}: {err}"))
				.ok()
		};
		Self {
			pattern,
			needle: normalize(query),
		}
	}

	pub fn is_active(&self) -> bool {
		self.pattern.is_some()
	}

	/// Literal, case-insensitive highlighting that keeps the text as is.
	pub fn highlight(&self, text: &str) -> Highlighted {
		match &self.pattern {
			Some(pattern) => Highlighted::from_ranges(
				text,
				pattern.find_iter(text).map(|found| (found.start(), found.end())),
			),
			None => Highlighted::plain(text),
		}
	}

	/// Highlight occurrences found in the normalized form of `text`.
	///
	/// Matching ignores case and `.` separators, the same way records are
	/// matched, but the emphasis is applied to the original characters so the
	/// text keeps its casing and punctuation.
	pub fn highlight_normalized(&self, text: &str) -> Highlighted {
		if self.needle.is_empty() {
			return Highlighted::plain(text);
		}
		let projection = Projection::new(text);
		let ranges: Vec<_> = projection
			.normalized
			.match_indices(self.needle.as_str())
			.filter_map(|(start, found)| projection.source_range(start, start + found.len()))
			.collect();
		Highlighted::from_ranges(text, ranges)
	}
}

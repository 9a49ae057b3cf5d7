/// Separator stripped from abbreviations before comparison.
pub const SEPARATOR: char = '.';

/// Lowercase `text` and drop period separators so `T.I.D.` compares equal to `tid`.
pub fn normalize(text: &str) -> String {
	text.chars()
		.filter(|ch| *ch != SEPARATOR)
		.flat_map(char::to_lowercase)
		.collect()
}

/// Normalized form of a text that remembers where each character came from.
///
/// `sources[i]` is the byte range in the original text of the character that
/// produced the `i`-th character of `normalized`; `starts[i]` is where that
/// character begins inside `normalized`.
#[derive(Debug)]
pub(crate) struct Projection {
	pub(crate) normalized: String,
	starts: Vec<usize>,
	sources: Vec<(usize, usize)>,
}

impl Projection {
	pub(crate) fn new(text: &str) -> Self {
		let mut normalized = String::with_capacity(text.len());
		let mut starts = Vec::new();
		let mut sources = Vec::new();
		for (offset, ch) in text.char_indices() {
			if ch == SEPARATOR {
				continue;
			}
			let source = (offset, offset + ch.len_utf8());
			for lower in ch.to_lowercase() {
				starts.push(normalized.len());
				sources.push(source);
				normalized.push(lower);
			}
		}
		Self {
			normalized,
			starts,
			sources,
		}
	}

	/// Map a byte range of the normalized text back onto `text`.
	///
	/// The returned range covers every source character touched by the match,
	/// including separators between them.
	pub(crate) fn source_range(&self, start: usize, end: usize) -> Option<(usize, usize)> {
		if start >= end {
			return None;
		}
		let first = self.starts.partition_point(|&pos| pos <= start).checked_sub(1)?;
		let last = self.starts.partition_point(|&pos| pos < end).checked_sub(1)?;
		let (from, _) = *self.sources.get(first)?;
		let (_, to) = *self.sources.get(last)?;
		Some((from, to))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn strips_periods_and_lowercases() {
		assert_eq!(normalize("T.I.D."), "tid");
		assert_eq!(normalize("T.I.D."), normalize("tid"));
		assert_eq!(normalize("q.4h PRN"), "q4h prn");
	}

	#[test]
	fn normalization_is_idempotent() {
		for sample in ["a.c.", "NPO", "gtt.", "Ø.Å", "mg/kg", ""] {
			let once = normalize(sample);
			assert_eq!(normalize(&once), once, "sample {sample:?}");
		}
	}

	#[test]
	fn projection_maps_matches_across_separators() {
		let text = "t.i.d. or TID";
		let projection = Projection::new(text);
		assert_eq!(projection.normalized, "tid or tid");

		let (from, to) = projection.source_range(0, 3).unwrap();
		assert_eq!(&text[from..to], "t.i.d");

		let (from, to) = projection.source_range(7, 10).unwrap();
		assert_eq!(&text[from..to], "TID");
	}

	#[test]
	fn projection_handles_expanding_lowercase() {
		// U+0130 lowercases to two characters.
		let text = "\u{130}x";
		let projection = Projection::new(text);
		let end = projection.normalized.len();
		let (from, to) = projection.source_range(0, end).unwrap();
		assert_eq!(&text[from..to], text);
	}

	#[test]
	fn empty_range_has_no_source() {
		let projection = Projection::new("abc");
		assert_eq!(projection.source_range(1, 1), None);
	}
}

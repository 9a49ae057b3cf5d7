use crate::dataset::AbbreviationRecord;

use super::normalize;

/// Whether `record` matches an already normalized query.
///
/// An empty query matches everything. Otherwise the query must be a substring
/// of the normalized abbreviation, the normalized alternate spelling, or the
/// lowercased meaning.
pub fn matches(record: &AbbreviationRecord, normalized_query: &str) -> bool {
	if normalized_query.is_empty() {
		return true;
	}

	normalize(&record.abbr).contains(normalized_query)
		|| record
			.alt_abbr()
			.is_some_and(|alt| normalize(alt).contains(normalized_query))
		|| record.meaning.to_lowercase().contains(normalized_query)
}

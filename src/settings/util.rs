/// Trim a user supplied label, treating whitespace-only values as missing.
pub(super) fn sanitize_label(value: &str) -> Option<String> {
	let trimmed = value.trim();
	(!trimmed.is_empty()).then(|| trimmed.to_string())
}

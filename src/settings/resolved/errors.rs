use thiserror::Error;

use super::SettingSource;

/// A setting that failed validation, with where it came from.
#[derive(Debug, Error)]
#[error("{key} = {value:?} (set by {origin}) {reason}")]
pub(crate) struct ConfigError {
	pub(crate) key: &'static str,
	pub(crate) value: String,
	pub(crate) origin: SettingSource,
	pub(crate) reason: String,
}

impl ConfigError {
	pub(crate) fn invalid(
		key: &'static str,
		value: impl Into<String>,
		origin: SettingSource,
		reason: impl Into<String>,
	) -> Self {
		Self {
			key,
			value: value.into(),
			origin,
			reason: reason.into(),
		}
	}

	pub(crate) fn empty(key: &'static str, value: impl Into<String>, origin: SettingSource) -> Self {
		Self::invalid(key, value, origin, "must not be empty")
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn message_names_key_value_and_origin() {
		let err = ConfigError::empty(
			"ui.meaning_header",
			" ",
			SettingSource::Environment("ABBR_UI__MEANING_HEADER"),
		);
		assert_eq!(
			err.to_string(),
			"ui.meaning_header = \" \" (set by environment variable `ABBR_UI__MEANING_HEADER`) must not be empty"
		);
	}
}

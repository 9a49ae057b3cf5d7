use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(&'static str),
	ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
		}
	}
}

/// Where each validated setting came from, for error messages.
#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	pub(crate) category: Option<SettingSource>,
	pub(crate) theme: Option<SettingSource>,
	pub(crate) abbreviation_display: Option<SettingSource>,
	pub(crate) abbreviation_header: Option<SettingSource>,
	pub(crate) meaning_header: Option<SettingSource>,
}

impl ConfigSources {
	pub(crate) fn source_for_category(&self) -> SettingSource {
		self.category
			.clone()
			.unwrap_or(SettingSource::ConfigKey("filter.category"))
	}

	pub(crate) fn source_for_theme(&self) -> SettingSource {
		self.theme
			.clone()
			.unwrap_or(SettingSource::ConfigKey("ui.theme"))
	}

	pub(crate) fn source_for_abbreviation_display(&self) -> SettingSource {
		self.abbreviation_display
			.clone()
			.unwrap_or(SettingSource::ConfigKey("ui.abbreviation_display"))
	}

	pub(crate) fn source_for_abbreviation_header(&self) -> SettingSource {
		self.abbreviation_header
			.clone()
			.unwrap_or(SettingSource::ConfigKey("ui.abbreviation_header"))
	}

	pub(crate) fn source_for_meaning_header(&self) -> SettingSource {
		self.meaning_header
			.clone()
			.unwrap_or(SettingSource::ConfigKey("ui.meaning_header"))
	}
}

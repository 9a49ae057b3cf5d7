use abbr::tui::theme::DEFAULT_THEME_NAME;
use abbr::{AbbreviationDisplay, ColumnLabels, ViewOptions};
use serde::Deserialize;

use super::super::resolved::{ConfigError, ConfigSources, SettingSource};
use super::super::util::sanitize_label;
use crate::cli::CliArgs;

const DEFAULT_INPUT_TITLE: &str = "Search";

/// UI related configuration values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
	pub(super) theme: Option<String>,
	pub(super) input_title: Option<String>,
	pub(super) abbreviation_display: Option<String>,
	pub(super) abbreviation_header: Option<String>,
	pub(super) meaning_header: Option<String>,
}

pub(super) struct UiResolution {
	pub(super) theme: String,
	pub(super) input_title: String,
	pub(super) view: ViewOptions,
}

impl UiSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(theme) = cli.theme.clone() {
			self.theme = Some(theme);
		}
		if let Some(title) = cli.title.clone() {
			self.input_title = Some(title);
		}
		if let Some(display) = cli.abbreviation_display {
			self.abbreviation_display = Some(AbbreviationDisplay::from(display).as_str().to_string());
		}
	}

	pub(super) fn finalize(self, sources: &ConfigSources) -> Result<UiResolution, ConfigError> {
		let abbreviation_display = match self.abbreviation_display {
			Some(value) => value.parse::<AbbreviationDisplay>().map_err(|reason| {
				ConfigError::invalid(
					"ui.abbreviation_display",
					value.clone(),
					sources.source_for_abbreviation_display(),
					reason,
				)
			})?,
			None => AbbreviationDisplay::default(),
		};

		let defaults = ColumnLabels::default();
		let columns = ColumnLabels {
			abbreviation: header(
				self.abbreviation_header,
				defaults.abbreviation,
				"ui.abbreviation_header",
				sources.source_for_abbreviation_header(),
			)?,
			meaning: header(
				self.meaning_header,
				defaults.meaning,
				"ui.meaning_header",
				sources.source_for_meaning_header(),
			)?,
		};

		let input_title = self
			.input_title
			.as_deref()
			.and_then(sanitize_label)
			.unwrap_or_else(|| DEFAULT_INPUT_TITLE.to_string());
		let theme = self
			.theme
			.map(|theme| theme.trim().to_string())
			.unwrap_or_else(|| DEFAULT_THEME_NAME.to_string());

		Ok(UiResolution {
			theme,
			input_title,
			view: ViewOptions {
				abbreviation_display,
				columns,
			},
		})
	}
}

fn header(
	value: Option<String>,
	default: String,
	key: &'static str,
	origin: SettingSource,
) -> Result<String, ConfigError> {
	match value {
		None => Ok(default),
		Some(value) => sanitize_label(&value)
			.ok_or_else(|| ConfigError::empty(key, value, origin)),
	}
}

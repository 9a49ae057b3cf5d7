use std::env;

use anyhow::{Error, Result};
use serde::Deserialize;

use crate::cli::CliArgs;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};

mod data;
mod ui;

use data::{DatasetSection, FilterSection};
use ui::UiSection;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	dataset: DatasetSection,
	filter: FilterSection,
	ui: UiSection,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		self.dataset.apply_cli_overrides(cli);
		self.filter.apply_cli_overrides(cli);
		self.ui.apply_cli_overrides(cli);
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			category: detect_source(
				cli.category.is_some(),
				self.filter.category.is_some(),
				"ABBR_FILTER__CATEGORY",
				"--category",
				"filter.category",
			),
			theme: detect_source(
				cli.theme.is_some(),
				self.ui.theme.is_some(),
				"ABBR_UI__THEME",
				"--theme",
				"ui.theme",
			),
			abbreviation_display: detect_source(
				cli.abbreviation_display.is_some(),
				self.ui.abbreviation_display.is_some(),
				"ABBR_UI__ABBREVIATION_DISPLAY",
				"--abbreviation-display",
				"ui.abbreviation_display",
			),
			abbreviation_header: detect_source(
				false,
				self.ui.abbreviation_header.is_some(),
				"ABBR_UI__ABBREVIATION_HEADER",
				"",
				"ui.abbreviation_header",
			),
			meaning_header: detect_source(
				false,
				self.ui.meaning_header.is_some(),
				"ABBR_UI__MEANING_HEADER",
				"",
				"ui.meaning_header",
			),
		};

		let dataset_path = self.dataset.resolve()?;
		let initial = self.filter.finalize();
		let ui = self.ui.finalize(&sources).map_err(Error::new)?;

		let config = ResolvedConfig {
			dataset_path,
			initial,
			theme: ui.theme,
			input_title: ui.input_title,
			view: ui.view,
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}

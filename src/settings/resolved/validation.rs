use abbr::dataset::category_info;
use abbr::tui::theme;
use log::warn;

use super::{ConfigError, ConfigSources, ResolvedConfig};

pub(super) fn validate(config: &ResolvedConfig, sources: &ConfigSources) -> Result<(), ConfigError> {
	if theme::by_name(&config.theme).is_none() {
		return Err(ConfigError::invalid(
			"ui.theme",
			config.theme.clone(),
			sources.source_for_theme(),
			format!("unknown theme (available: {})", theme::names().join(", ")),
		));
	}

	let category = &config.initial.category;
	if !category.is_all() && category_info(category.key()).is_none() {
		// The dataset may still carry the key.
		warn!(
			"initial category `{category}` from {} has no display name",
			sources.source_for_category()
		);
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use std::path::PathBuf;

	use abbr::{CategoryFilter, FilterState, ViewOptions};

	use super::super::SettingSource;
	use super::*;

	fn config(theme: &str, category: CategoryFilter) -> ResolvedConfig {
		ResolvedConfig {
			dataset_path: PathBuf::from("/tmp/abbreviations.json"),
			initial: FilterState::new("", category),
			theme: theme.to_string(),
			input_title: "Search".to_string(),
			view: ViewOptions::default(),
		}
	}

	#[test]
	fn validation_rejects_unknown_theme() {
		let sources = ConfigSources {
			theme: Some(SettingSource::CliFlag("--theme")),
			..ConfigSources::default()
		};

		let err = validate(&config("neon", CategoryFilter::All), &sources).unwrap_err();
		assert_eq!(err.key, "ui.theme");
		let message = err.to_string();
		assert!(message.contains("\"neon\""));
		assert!(message.contains("CLI flag `--theme`"));
		assert!(message.contains("slate"));
	}

	#[test]
	fn theme_aliases_are_accepted() {
		let sources = ConfigSources::default();
		assert!(validate(&config("Dark", CategoryFilter::All), &sources).is_ok());
	}

	#[test]
	fn unknown_category_is_only_a_warning() {
		let sources = ConfigSources::default();
		let config = config("slate", CategoryFilter::only("compounding"));
		assert!(validate(&config, &sources).is_ok());
	}
}

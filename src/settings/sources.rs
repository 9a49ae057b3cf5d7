use std::env;
use std::path::PathBuf;

use abbr::app_dirs;
use anyhow::{Result, anyhow};
use config::{Config, ConfigError, Environment, File};

use crate::cli::CliArgs;

/// Prefix of configuration environment variables, e.g. `ABBR_UI__THEME`.
pub(super) const ENV_PREFIX: &str = "ABBR";

/// Build a [`Config`] instance by combining default locations with CLI overrides.
pub(super) fn build_config(cli: &CliArgs) -> Result<Config> {
	let mut builder = Config::builder();

	if !cli.no_config {
		for path in default_config_files() {
			builder = builder.add_source(File::from(path).required(false));
		}
	}

	for path in &cli.config {
		builder = builder.add_source(File::from(path.clone()).required(true));
	}

	builder = builder.add_source(environment());

	builder.build().map_err(|err| match err {
		ConfigError::Frozen => anyhow!("configuration builder is frozen"),
		other => other.into(),
	})
}

fn environment() -> Environment {
	Environment::with_prefix(ENV_PREFIX)
		.prefix_separator("_")
		.separator("__")
}

/// Discover the default configuration file locations that should be consulted.
pub(super) fn default_config_files() -> Vec<PathBuf> {
	let mut files = Vec::new();

	if let Ok(dir) = app_dirs::get_config_dir() {
		files.push(dir.join("config.toml"));
	}

	if let Ok(current_dir) = env::current_dir() {
		files.push(current_dir.join(".abbr.toml"));
		files.push(current_dir.join("abbr.toml"));
	}

	files
}

#[cfg(test)]
mod tests {
	use std::fs;

	use clap::Parser;
	use tempfile::tempdir;

	use super::*;

	#[test]
	fn default_files_include_current_directory_variants() {
		let files = default_config_files();
		assert!(files.iter().any(|path| path.ends_with(".abbr.toml")));
		assert!(files.iter().any(|path| path.ends_with("abbr.toml")));
	}

	#[test]
	fn explicit_config_files_are_merged_in_order() {
		let dir = tempdir().expect("tempdir");
		let first = dir.path().join("first.toml");
		let second = dir.path().join("second.toml");
		fs::write(&first, "[ui]\ntheme = \"light\"\n[filter]\nquery = \"po\"\n").expect("write");
		fs::write(&second, "[ui]\ntheme = \"solarized\"\n").expect("write");

		let cli = CliArgs::parse_from([
			"abbr",
			"--no-config",
			"-c",
			first.to_str().expect("utf-8 path"),
			"-c",
			second.to_str().expect("utf-8 path"),
		]);
		let config = build_config(&cli).expect("config");
		assert_eq!(config.get_string("ui.theme").expect("theme"), "solarized");
		assert_eq!(config.get_string("filter.query").expect("query"), "po");
	}

	#[test]
	fn environment_values_stay_text() {
		let vars = config::Map::from([
			("ABBR_FILTER__QUERY".to_string(), "0.50".to_string()),
			("ABBR_UI__INPUT_TITLE".to_string(), "007".to_string()),
			("ABBR_UI__THEME".to_string(), "light".to_string()),
		]);
		let config = Config::builder()
			.add_source(environment().source(Some(vars)))
			.build()
			.expect("config");
		assert_eq!(config.get_string("filter.query").expect("query"), "0.50");
		assert_eq!(config.get_string("ui.input_title").expect("title"), "007");
		assert_eq!(config.get_string("ui.theme").expect("theme"), "light");
	}

	#[test]
	fn missing_explicit_config_file_is_an_error() {
		let dir = tempdir().expect("tempdir");
		let missing = dir.path().join("missing.toml");
		let cli = CliArgs::parse_from(["abbr", "-n", "-c", missing.to_str().expect("utf-8 path")]);
		assert!(build_config(&cli).is_err());
	}
}

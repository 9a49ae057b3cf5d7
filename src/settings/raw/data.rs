use std::env;
use std::path::PathBuf;

use abbr::{CategoryFilter, DEFAULT_DATASET_PATH, FilterState};
use anyhow::{Context, Result};
use serde::Deserialize;

use crate::cli::CliArgs;

/// Where the abbreviations are read from.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct DatasetSection {
	pub(super) path: Option<PathBuf>,
}

/// The filter shown at startup and restored when a dataset arrives.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct FilterSection {
	pub(super) query: Option<String>,
	pub(super) category: Option<String>,
}

impl DatasetSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(path) = cli.data.clone() {
			self.path = Some(path);
		}
	}

	/// Absolute dataset path, relative paths taken from the working directory.
	pub(super) fn resolve(self) -> Result<PathBuf> {
		let path = self
			.path
			.unwrap_or_else(|| PathBuf::from(DEFAULT_DATASET_PATH));
		if path.is_absolute() {
			return Ok(path);
		}
		let cwd = env::current_dir().context("failed to resolve current directory for dataset path")?;
		Ok(cwd.join(path))
	}
}

impl FilterSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(query) = cli.query.clone() {
			self.query = Some(query);
		}
		if let Some(category) = cli.category.clone() {
			self.category = Some(category);
		}
	}

	pub(super) fn finalize(self) -> FilterState {
		let query = self.query.unwrap_or_default().trim().to_string();
		let category = match self.category {
			Some(key) => {
				let Ok(filter) = key.to_ascii_lowercase().parse::<CategoryFilter>();
				filter
			}
			None => CategoryFilter::All,
		};
		FilterState::new(query, category)
	}
}

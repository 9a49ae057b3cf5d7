use std::sync::Arc;

use abbr::{Controller, SessionOutcome, TableView, TerminalUi, load_dataset};
use anyhow::{Context, Result};
use log::error;

use crate::settings::ResolvedConfig;

/// Coordinates building and running the interactive session.
pub(crate) struct SessionWorkflow {
	terminal_ui: TerminalUi,
}

impl SessionWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Self {
		let terminal_ui = TerminalUiFactory::build(config);
		Self { terminal_ui }
	}

	pub(crate) fn run(self) -> Result<SessionOutcome> {
		self.terminal_ui.run()
	}
}

/// Helper for translating resolved configuration into a configured `TerminalUi`.
struct TerminalUiFactory;

impl TerminalUiFactory {
	fn build(config: ResolvedConfig) -> TerminalUi {
		let ResolvedConfig {
			dataset_path,
			initial,
			theme,
			input_title,
			view,
		} = config;

		TerminalUi::new(Controller::new(initial, view))
			.with_input_title(input_title)
			.with_theme_name(&theme)
			.with_dataset_path(dataset_path)
	}
}

/// Load the dataset synchronously and render the startup filter once.
pub(crate) fn render_once(config: &ResolvedConfig) -> Result<TableView> {
	let dataset = match load_dataset(&config.dataset_path) {
		Ok(dataset) => dataset,
		Err(err) => {
			let err = anyhow::Error::new(err);
			error!("{err:#}");
			return Err(err.context("cannot print the abbreviation table"));
		}
	};
	let controller =
		Controller::with_dataset(Arc::new(dataset), config.initial.clone(), config.view.clone());
	controller
		.render()
		.context("controller has no dataset to render")
}

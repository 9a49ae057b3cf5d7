//! Terminal front end.
//!
//! A prompt row with the query input and the `Search` / `Reset` buttons, a row
//! of category tabs, and the grouped results. Everything shown comes from the
//! [`crate::TableView`] handed back by the [`crate::Controller`].

mod app;
pub mod components;
pub mod input;
pub mod theme;

use std::path::PathBuf;
use std::sync::mpsc::Receiver;

use anyhow::Result;
use log::warn;

pub use app::{App, SessionOutcome, TuiConfig};
pub use theme::Theme;

use crate::controller::Controller;
use crate::dataset::LoadResult;

/// Builder for an interactive session.
pub struct TerminalUi {
	controller: Controller,
	config: TuiConfig,
	dataset_updates: Option<Receiver<LoadResult>>,
	dataset_path: Option<PathBuf>,
}

impl TerminalUi {
	pub fn new(controller: Controller) -> Self {
		Self {
			controller,
			config: TuiConfig::default(),
			dataset_updates: None,
			dataset_path: None,
		}
	}

	pub fn with_input_title(mut self, title: impl Into<String>) -> Self {
		self.config.input_title = title.into();
		self
	}

	pub fn with_theme(mut self, theme: Theme) -> Self {
		self.config.theme = theme;
		self
	}

	/// Look the theme up by name, keeping the current one if it is unknown.
	pub fn with_theme_name(mut self, name: &str) -> Self {
		match theme::by_name(name) {
			Some(theme) => self.config.theme = theme,
			None => warn!("unknown theme `{name}`; keeping the default"),
		}
		self
	}

	/// Load the dataset from `path` once the session starts.
	pub fn with_dataset_path(mut self, path: impl Into<PathBuf>) -> Self {
		self.dataset_path = Some(path.into());
		self
	}

	/// Use an already running load instead of starting one.
	pub fn with_dataset_updates(mut self, updates: Receiver<LoadResult>) -> Self {
		self.dataset_updates = Some(updates);
		self
	}

	pub fn into_app<'a>(self) -> App<'a> {
		let mut app = App::new(self.controller, self.config);
		if let Some(updates) = self.dataset_updates {
			app.set_dataset_updates(updates);
		} else if let Some(path) = self.dataset_path {
			app.load_dataset(path);
		}
		app
	}

	pub fn run(self) -> Result<SessionOutcome> {
		self.into_app().run()
	}
}

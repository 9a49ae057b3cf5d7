//! State of an interactive session.
//!
//! [`App`] owns the [`Controller`], the widgets' state and the screen areas
//! recorded by the last draw. Key and mouse handlers live in `actions`, drawing
//! in `render` and the event loop in `runtime`.

mod actions;
mod render;
mod runtime;

use std::sync::Arc;
use std::sync::mpsc::{Receiver, TryRecvError};

use log::{error, info, warn};
use ratatui::layout::Rect;
use serde::Serialize;
use throbber_widgets_tui::ThrobberState;

use crate::controller::{Controller, Interaction};
use crate::dataset::{LoadError, LoadResult, spawn_dataset_load};
use crate::search::FilterState;
use crate::tui::components::{CategoryTab, PromptAreas, ScrollMetrics};
use crate::tui::input::QueryInput;
use crate::tui::theme::Theme;
use crate::view::TableView;

/// How a session ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionOutcome {
	/// `true` when the user asked to print the current view.
	pub accepted: bool,
	pub state: FilterState,
	/// Current view; `None` if the dataset never loaded.
	pub view: Option<TableView>,
}

/// Presentation settings for the terminal app.
#[derive(Debug, Clone)]
pub struct TuiConfig {
	pub theme: Theme,
	pub input_title: String,
}

impl Default for TuiConfig {
	fn default() -> Self {
		Self {
			theme: Theme::default(),
			input_title: "Search".to_string(),
		}
	}
}

/// Screen areas from the last frame, used for mouse hit testing.
#[derive(Debug, Clone, Default)]
pub(crate) struct HitAreas {
	pub(crate) prompt: PromptAreas,
	pub(crate) tabs: Vec<Rect>,
	pub(crate) results: Rect,
}

pub struct App<'a> {
	controller: Controller,
	view: Option<TableView>,
	pub(crate) input: QueryInput<'a>,
	pub(crate) tabs: Vec<CategoryTab>,
	pub(crate) selected_tab: usize,
	pub(crate) scroll: usize,
	pub(crate) metrics: ScrollMetrics,
	pub(crate) config: TuiConfig,
	pub(crate) throbber_state: ThrobberState,
	pub(crate) hit: HitAreas,
	dataset_updates: Option<Receiver<LoadResult>>,
	load_error: Option<String>,
}

impl<'a> App<'a> {
	pub fn new(controller: Controller, config: TuiConfig) -> Self {
		let mut input = QueryInput::new(&controller.state().query);
		input.set_styles(config.theme.prompt_style(), config.theme.empty_style());
		let tabs = CategoryTab::tabs_for(controller.dataset().map(Arc::as_ref));
		let view = controller.render();

		let mut app = Self {
			controller,
			view,
			input,
			tabs,
			selected_tab: 0,
			scroll: 0,
			metrics: ScrollMetrics::default(),
			config,
			throbber_state: ThrobberState::default(),
			hit: HitAreas::default(),
			dataset_updates: None,
			load_error: None,
		};
		app.sync_tabs();
		app
	}

	/// Receive the dataset from a background load.
	pub fn set_dataset_updates(&mut self, updates: Receiver<LoadResult>) {
		self.dataset_updates = Some(updates);
	}

	/// Start loading `path` in the background.
	pub fn load_dataset(&mut self, path: std::path::PathBuf) {
		self.set_dataset_updates(spawn_dataset_load(path));
	}

	pub fn state(&self) -> &FilterState {
		self.controller.state()
	}

	pub fn view(&self) -> Option<&TableView> {
		self.view.as_ref()
	}

	/// Why the dataset failed to load. Only logged, never drawn.
	pub fn load_error(&self) -> Option<&str> {
		self.load_error.as_deref()
	}

	pub(crate) fn is_loading(&self) -> bool {
		self.dataset_updates.is_some() && !self.controller.is_loaded() && self.load_error.is_none()
	}

	/// Install a finished load, if one arrived.
	pub(crate) fn pump_dataset_updates(&mut self) {
		let Some(updates) = &self.dataset_updates else {
			return;
		};
		let result = match updates.try_recv() {
			Ok(result) => result,
			Err(TryRecvError::Empty) => return,
			Err(TryRecvError::Disconnected) => Err(LoadError::Disconnected),
		};
		self.dataset_updates = None;

		match result {
			Ok(dataset) => {
				info!(
					"showing {} abbreviations in {} categories",
					dataset.record_count(),
					dataset.len()
				);
				let dataset = Arc::new(dataset);
				self.tabs = CategoryTab::tabs_for(Some(dataset.as_ref()));
				let view = self.controller.dataset_loaded(dataset);
				self.show(view);
				self.sync_tabs();
			}
			Err(err) => {
				let message = format!("{:#}", anyhow::Error::new(err));
				error!("{message}");
				self.load_error = Some(message);
			}
		}
	}

	/// Hand an interaction to the controller and show the result.
	pub(crate) fn dispatch(&mut self, interaction: Interaction) {
		let reset = interaction == Interaction::Reset;
		if let Some(view) = self.controller.handle(interaction) {
			self.show(view);
		}
		if reset {
			self.input.clear();
		}
		self.sync_tabs();
	}

	pub(crate) fn outcome(&self, accepted: bool) -> SessionOutcome {
		SessionOutcome {
			accepted,
			state: self.controller.state().clone(),
			view: self.view.clone(),
		}
	}

	fn show(&mut self, view: TableView) {
		self.view = Some(view);
		self.scroll = 0;
	}

	/// Select the tab matching the controller's category, adding one for a
	/// category that no tab represents.
	fn sync_tabs(&mut self) {
		let category = &self.controller.state().category;
		match self.tabs.iter().position(|tab| &tab.filter == category) {
			Some(index) => self.selected_tab = index,
			None => {
				warn!("no tab for category `{category}`; adding one");
				self.tabs.push(CategoryTab::for_key(category.key()));
				self.selected_tab = self.tabs.len() - 1;
			}
		}
	}
}

#[cfg(test)]
mod tests;

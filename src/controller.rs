//! Interaction handling.
//!
//! Every user action becomes an [`Interaction`]. [`FilterState::apply`] turns
//! the current state and an interaction into the next state, and the
//! [`Controller`] rebuilds the whole view from it. Adapters only translate
//! their own events into interactions and draw the returned [`TableView`].

use std::sync::Arc;

use log::debug;

use crate::dataset::Dataset;
use crate::search::{CategoryFilter, FilterState};
use crate::view::{TableView, ViewOptions, build_view};

/// A user action that changes the filter state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Interaction {
	/// The search button was activated with the current input text.
	Search { input: String },
	/// The input's submit key was pressed. Behaves like [`Interaction::Search`].
	Submit { input: String },
	/// Clear the query and select every category.
	Reset,
	/// A category control was selected while the input held `input`.
	SelectCategory {
		category: CategoryFilter,
		input: String,
	},
}

impl FilterState {
	/// The state that follows `interaction`. Input text is trimmed.
	pub fn apply(&self, interaction: Interaction) -> FilterState {
		match interaction {
			Interaction::Search { input } | Interaction::Submit { input } => FilterState {
				query: input.trim().to_string(),
				category: self.category.clone(),
			},
			Interaction::Reset => FilterState::default(),
			Interaction::SelectCategory { category, input } => FilterState {
				query: input.trim().to_string(),
				category,
			},
		}
	}
}

/// Owns the filter state and renders it against the loaded dataset.
///
/// Until a dataset arrives interactions still move the state but nothing is
/// rendered. Once it arrives the state returns to the startup filter.
#[derive(Debug, Clone)]
pub struct Controller {
	dataset: Option<Arc<Dataset>>,
	state: FilterState,
	initial: FilterState,
	options: ViewOptions,
}

impl Controller {
	pub fn new(initial: FilterState, options: ViewOptions) -> Self {
		Self {
			dataset: None,
			state: initial.clone(),
			initial,
			options,
		}
	}

	/// A controller whose dataset is already available.
	pub fn with_dataset(dataset: Arc<Dataset>, initial: FilterState, options: ViewOptions) -> Self {
		let mut controller = Self::new(initial, options);
		controller.dataset = Some(dataset);
		controller
	}

	pub fn state(&self) -> &FilterState {
		&self.state
	}

	pub fn options(&self) -> &ViewOptions {
		&self.options
	}

	pub fn dataset(&self) -> Option<&Arc<Dataset>> {
		self.dataset.as_ref()
	}

	pub fn is_loaded(&self) -> bool {
		self.dataset.is_some()
	}

	/// Install the dataset and render the startup filter.
	pub fn dataset_loaded(&mut self, dataset: Arc<Dataset>) -> TableView {
		self.state = self.initial.clone();
		debug!("dataset installed; rendering {:?}", self.state);
		let view = build_view(&dataset, &self.state, &self.options);
		self.dataset = Some(dataset);
		view
	}

	/// Apply `interaction` and re-render. `None` while no dataset is loaded.
	pub fn handle(&mut self, interaction: Interaction) -> Option<TableView> {
		if self.dataset.is_none() {
			debug!("{interaction:?} arrived before the dataset; nothing to render");
		}
		self.state = self.state.apply(interaction);
		self.render()
	}

	/// Render the current state.
	pub fn render(&self) -> Option<TableView> {
		let dataset = self.dataset.as_ref()?;
		Some(build_view(dataset, &self.state, &self.options))
	}
}

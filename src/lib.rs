//! Searchable, filterable reference table of prescription abbreviations.
//!
//! The dataset is parsed once into an immutable [`Dataset`]. A [`FilterState`]
//! (query plus category) is applied to it by [`build_view`], which produces a
//! render-agnostic [`TableView`]. The terminal UI, plain text, JSON and HTML
//! outputs are adapters over that tree; interactions flow through the
//! [`Controller`].

pub mod app_dirs;
pub mod controller;
pub mod dataset;
pub mod highlight;
pub mod logging;
pub mod search;
pub mod tui;
pub mod view;

pub use controller::{Controller, Interaction};
pub use dataset::{
	AbbreviationRecord, DEFAULT_DATASET_PATH, Dataset, LoadError, LoadResult, load_dataset,
	parse_dataset, spawn_dataset_load,
};
pub use highlight::{Fragment, Highlighted, Highlighter, highlight};
pub use search::{ALL_CATEGORIES, CategoryFilter, FilterState, filter_by_category, filter_dataset, normalize};
pub use tui::{SessionOutcome, TerminalUi, Theme};
pub use view::{AbbreviationDisplay, ColumnLabels, TableView, ViewOptions, build_view};

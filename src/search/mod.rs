//! Query normalization, record matching and category filtering.
//!
//! Everything here is a pure projection over a borrowed [`crate::Dataset`];
//! nothing mutates the records.

mod filter;
mod matcher;
mod normalize;

pub use filter::{
	ALL_CATEGORIES, CategoryFilter, FilterState, FilteredGroup, filter_by_category, filter_dataset,
};
pub use matcher::matches;
pub use normalize::{SEPARATOR, normalize};

pub(crate) use normalize::Projection;

use crate::dataset::{AbbreviationRecord, Dataset, display_name};
use crate::highlight::Highlighter;
use crate::search::{FilterState, filter_dataset, normalize};

use super::{AbbreviationDisplay, GroupView, NoResults, RowView, TableView, ViewOptions};

/// Filter `dataset` by `state` and build the view tree.
pub fn build_view(dataset: &Dataset, state: &FilterState, options: &ViewOptions) -> TableView {
	let highlighter = Highlighter::new(&state.normalized_query());

	let groups: Vec<_> = filter_dataset(dataset, state)
		.into_iter()
		.map(|group| GroupView {
			key: group.key.to_string(),
			header: display_name(group.key).map(str::to_string),
			rows: group
				.records
				.into_iter()
				.map(|record| build_row(record, &highlighter, options.abbreviation_display))
				.collect(),
		})
		.collect();

	if groups.is_empty() {
		return TableView::NoResults(NoResults {
			query: state.query.clone(),
		});
	}

	TableView::Groups {
		columns: options.columns.clone(),
		groups,
	}
}

fn build_row(
	record: &AbbreviationRecord,
	highlighter: &Highlighter,
	display: AbbreviationDisplay,
) -> RowView {
	let abbreviation = record.display_abbreviation();
	let abbreviation = match display {
		AbbreviationDisplay::Original => highlighter.highlight_normalized(&abbreviation),
		AbbreviationDisplay::Normalized => highlighter.highlight(&normalize(&abbreviation)),
	};

	RowView {
		abbreviation,
		meaning: highlighter.highlight(&record.meaning),
	}
}

use std::sync::Arc;

use abbr::view::{html, plain};
use abbr::{
	AbbreviationDisplay, CategoryFilter, Controller, Dataset, FilterState, Interaction, TableView,
	ViewOptions, build_view, parse_dataset,
};

fn patient_dataset() -> Dataset {
	parse_dataset(r#"{"patient": [{"abbr": "po", "meaning": "by mouth"}]}"#).expect("dataset")
}

fn mixed_dataset() -> Dataset {
	parse_dataset(
		r#"{
			"prescription": [
				{"abbr": "t.i.d.", "altAbbr": "TID", "meaning": "three times a day"},
				{"abbr": "q.d.", "meaning": "every day"}
			],
			"patient": [{"abbr": "po", "meaning": "by mouth"}],
			"routes": []
		}"#,
	)
	.expect("dataset")
}

fn view_for(dataset: &Dataset, query: &str, category: CategoryFilter) -> TableView {
	build_view(dataset, &FilterState::new(query, category), &ViewOptions::default())
}

#[test]
fn matching_query_shows_one_highlighted_row() {
	let view = view_for(&patient_dataset(), "po", CategoryFilter::All);

	let groups = view.groups();
	assert_eq!(groups.len(), 1);
	assert_eq!(groups[0].header.as_deref(), Some("Patient Instructions"));
	assert_eq!(groups[0].rows.len(), 1);

	let cell = &groups[0].rows[0].abbreviation;
	assert_eq!(cell.text(), "po");
	assert_eq!(cell.emphasized_parts().collect::<Vec<_>>(), vec!["po"]);
}

#[test]
fn unmatched_query_echoes_the_query_in_the_notice() {
	let view = view_for(&patient_dataset(), "xyz", CategoryFilter::All);

	assert!(view.groups().is_empty());
	let notice = view.no_results().expect("no results");
	let message = notice.message();
	assert_eq!(message.text(), "No results found for \"xyz\"");
	assert_eq!(message.emphasized_parts().collect::<Vec<_>>(), vec!["xyz"]);

	assert_eq!(plain::render(&view), "No results found for \"*xyz*\"\n");
	assert!(html::render(&view).contains("<span class=\"highlight\">xyz</span>"));
}

#[test]
fn alternate_spelling_matches_without_periods() {
	let dataset = mixed_dataset();
	let view = view_for(&dataset, "tid", CategoryFilter::All);

	assert_eq!(view.row_count(), 1);
	let row = &view.groups()[0].rows[0];
	assert_eq!(row.abbreviation.text(), "t.i.d. or TID");
	assert!(row.abbreviation.emphasized_parts().any(|part| part == "TID"));
	assert_eq!(row.meaning.text(), "three times a day");

	let punctuated = view_for(&dataset, "T.I.D.", CategoryFilter::All);
	assert_eq!(punctuated.row_count(), 1);
}

#[test]
fn reset_restores_the_full_unfiltered_view() {
	let dataset = Arc::new(mixed_dataset());
	let mut controller =
		Controller::with_dataset(Arc::clone(&dataset), FilterState::default(), ViewOptions::default());
	let unfiltered = controller.render().expect("loaded");

	controller.handle(Interaction::SelectCategory {
		category: CategoryFilter::only("prescription"),
		input: "day".into(),
	});
	let narrowed = controller.handle(Interaction::Submit { input: "tid".into() }).expect("loaded");
	assert_eq!(narrowed.row_count(), 1);

	let reset = controller.handle(Interaction::Reset).expect("loaded");
	assert_eq!(controller.state(), &FilterState::default());
	assert_eq!(reset, unfiltered);
	assert_eq!(reset.row_count(), 3);
}

#[test]
fn category_selection_limits_groups_and_skips_empty_ones() {
	let dataset = mixed_dataset();

	let all = view_for(&dataset, "", CategoryFilter::All);
	let keys: Vec<_> = all.groups().iter().map(|group| group.key.as_str()).collect();
	assert_eq!(keys, vec!["prescription", "patient"]);

	let patient = view_for(&dataset, "", CategoryFilter::only("patient"));
	assert_eq!(patient.groups().len(), 1);
	assert_eq!(patient.groups()[0].key, "patient");

	let empty = view_for(&dataset, "", CategoryFilter::only("routes"));
	assert!(empty.no_results().is_some());
}

#[test]
fn longer_queries_narrow_the_results() {
	let dataset = mixed_dataset();
	let short = view_for(&dataset, "d", CategoryFilter::All).row_count();
	let long = view_for(&dataset, "da", CategoryFilter::All).row_count();
	let longer = view_for(&dataset, "day", CategoryFilter::All).row_count();
	assert!(short >= long && long >= longer);
	assert_eq!(longer, 2);
}

#[test]
fn normalized_display_lowercases_the_abbreviation_column() {
	let options = ViewOptions {
		abbreviation_display: AbbreviationDisplay::Normalized,
		..ViewOptions::default()
	};
	let view = build_view(
		&mixed_dataset(),
		&FilterState::new("tid", CategoryFilter::All),
		&options,
	);
	assert_eq!(view.groups()[0].rows[0].abbreviation.text(), "tid or tid");
}

#[test]
fn plain_output_prints_aligned_tables() {
	let view = view_for(&patient_dataset(), "po", CategoryFilter::All);
	assert_eq!(
		plain::render(&view),
		"Patient Instructions\n  Abbreviation  Meaning\n  ------------  -------\n  *po*          by mouth\n"
	);
}

#[test]
fn html_output_escapes_dataset_text() {
	let dataset = parse_dataset(r#"{"quantities": [{"abbr": "<5", "meaning": "less than & five"}]}"#)
		.expect("dataset");
	let rendered = html::render(&view_for(&dataset, "", CategoryFilter::All));
	assert!(rendered.contains("&lt;5"));
	assert!(rendered.contains("less than &amp; five"));
	assert!(rendered.contains("Quantities and Measurement"));
}

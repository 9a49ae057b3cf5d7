use std::sync::Arc;
use std::sync::mpsc;

use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::crossterm::event::{
	KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::*;
use crate::dataset::{AbbreviationRecord, Dataset};
use crate::search::CategoryFilter;
use crate::tui::components::tab_at;
use crate::view::ViewOptions;

fn dataset() -> Dataset {
	[
		(
			"prescription",
			vec![
				AbbreviationRecord::new("t.i.d.", "three times a day").with_alt("TID"),
				AbbreviationRecord::new("q.d.", "every day"),
			],
		),
		("patient", vec![AbbreviationRecord::new("po", "by mouth")]),
	]
	.into_iter()
	.collect()
}

fn loaded_app() -> App<'static> {
	let controller = Controller::with_dataset(
		Arc::new(dataset()),
		FilterState::default(),
		ViewOptions::default(),
	);
	App::new(controller, TuiConfig::default())
}

fn key(code: KeyCode) -> KeyEvent {
	KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(ch: char) -> KeyEvent {
	KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
}

fn type_text(app: &mut App<'_>, text: &str) {
	for ch in text.chars() {
		assert!(app.handle_key(key(KeyCode::Char(ch))).is_none());
	}
}

fn draw(app: &mut App<'_>) -> String {
	draw_sized(app, 100, 20)
}

fn draw_sized(app: &mut App<'_>, width: u16, height: u16) -> String {
	let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("terminal");
	terminal.draw(|frame| app.draw(frame)).expect("draw");
	terminal.backend().to_string()
}

fn click(column: u16, row: u16) -> MouseEvent {
	MouseEvent {
		kind: MouseEventKind::Down(MouseButton::Left),
		column,
		row,
		modifiers: KeyModifiers::NONE,
	}
}

#[test]
fn typing_alone_does_not_refilter() {
	let mut app = loaded_app();
	type_text(&mut app, "po");
	assert_eq!(app.state().query, "");
	assert_eq!(app.view().map(TableView::row_count), Some(3));

	app.handle_key(key(KeyCode::Enter));
	assert_eq!(app.state().query, "po");
	assert_eq!(app.view().map(TableView::row_count), Some(1));
}

#[test]
fn ctrl_s_searches_like_submit() {
	let mut app = loaded_app();
	type_text(&mut app, "tid");
	app.handle_key(ctrl('s'));
	let view = app.view().expect("view");
	assert_eq!(view.groups().len(), 1);
	assert_eq!(view.groups()[0].key, "prescription");
}

#[test]
fn reset_clears_input_and_category() {
	let mut app = loaded_app();
	app.handle_key(key(KeyCode::Tab));
	type_text(&mut app, "day");
	app.handle_key(key(KeyCode::Enter));
	assert_eq!(app.state().category, CategoryFilter::only("prescription"));

	app.handle_key(ctrl('r'));
	assert_eq!(app.state(), &FilterState::default());
	assert_eq!(app.input.text(), "");
	assert_eq!(app.selected_tab, 0);
	assert_eq!(app.view().map(TableView::row_count), Some(3));
}

#[test]
fn tab_cycles_categories_with_the_current_input() {
	let mut app = loaded_app();
	type_text(&mut app, "mouth");
	app.handle_key(KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT));
	let last = app.tabs.len() - 1;
	assert_eq!(app.selected_tab, last);
	assert_eq!(app.state().query, "mouth");
	assert_eq!(app.state().category, app.tabs[last].filter);
}

#[test]
fn escape_cancels_and_ctrl_o_accepts() {
	let mut app = loaded_app();
	let cancelled = app.handle_key(key(KeyCode::Esc)).expect("outcome");
	assert!(!cancelled.accepted);

	let accepted = app.handle_key(ctrl('o')).expect("outcome");
	assert!(accepted.accepted);
	assert_eq!(accepted.view.map(|view| view.row_count()), Some(3));
}

#[test]
fn clicking_buttons_and_tabs_dispatches() {
	let mut app = loaded_app();
	draw(&mut app);
	type_text(&mut app, "xyz");

	let search = app.hit.prompt.search;
	app.handle_mouse(click(search.x, search.y));
	assert!(app.view().and_then(TableView::no_results).is_some());

	let patient = app.hit.tabs[3];
	app.handle_mouse(click(patient.x + 1, patient.y));
	assert_eq!(app.state().category, CategoryFilter::only("patient"));

	let reset = app.hit.prompt.reset;
	app.handle_mouse(click(reset.x, reset.y));
	assert_eq!(app.state(), &FilterState::default());
}

#[test]
fn screen_shows_groups_headers_and_controls() {
	let mut app = loaded_app();
	type_text(&mut app, "tid");
	app.handle_key(key(KeyCode::Enter));
	let screen = draw(&mut app);
	assert!(screen.contains("Search > tid"));
	assert!(screen.contains("[ Search ]"));
	assert!(screen.contains("[ Reset ]"));
	assert!(screen.contains(" All "));
	assert!(screen.contains("Prescription Filling Directions"));
	assert!(screen.contains("t.i.d. or TID"));
	assert!(!screen.contains("Patient Instructions"));
}

#[test]
fn screen_shows_no_results_notice() {
	let mut app = loaded_app();
	type_text(&mut app, "xyz");
	app.handle_key(key(KeyCode::Enter));
	assert!(draw(&mut app).contains("No results found for \"xyz\""));
}

#[test]
fn dataset_arrival_resets_filter_but_keeps_typed_text() {
	let initial = FilterState::new("po", CategoryFilter::All);
	let controller = Controller::new(initial.clone(), ViewOptions::default());
	let mut app = App::new(controller, TuiConfig::default());
	let (tx, rx) = mpsc::channel();
	app.set_dataset_updates(rx);
	assert!(app.is_loading());
	assert!(draw(&mut app).contains("Loading abbreviations"));

	type_text(&mut app, "xyz");
	app.handle_key(key(KeyCode::Enter));
	assert!(app.view().is_none());

	tx.send(Ok(dataset())).expect("send");
	app.pump_dataset_updates();
	assert!(!app.is_loading());
	assert_eq!(app.state(), &initial);
	assert_eq!(app.input.text(), "poxyz");
	assert_eq!(app.view().map(TableView::row_count), Some(1));

	app.handle_key(key(KeyCode::Enter));
	assert_eq!(app.state().query, "poxyz");
	assert_eq!(app.view().map(TableView::row_count), Some(0));
}

#[test]
fn failed_load_leaves_the_results_pane_empty() {
	let controller = Controller::new(FilterState::default(), ViewOptions::default());
	let mut app = App::new(controller, TuiConfig::default());
	let (tx, rx) = mpsc::channel();
	app.set_dataset_updates(rx);
	drop(tx);

	app.pump_dataset_updates();
	assert!(!app.is_loading());
	assert_eq!(
		app.load_error(),
		Some("dataset loader stopped before delivering a result")
	);
	let screen = draw(&mut app);
	assert!(!screen.contains("dataset loader stopped"));
	assert!(!screen.contains("Loading abbreviations"));
	assert!(app.view().is_none());
}

#[test]
fn failed_load_keeps_the_underlying_cause() {
	let controller = Controller::new(FilterState::default(), ViewOptions::default());
	let mut app = App::new(controller, TuiConfig::default());
	let (tx, rx) = mpsc::channel();
	app.set_dataset_updates(rx);

	let source = crate::dataset::parse_dataset(r#"{"patient": [{"abbr": "po"}]}"#).unwrap_err();
	tx.send(Err(LoadError::Parse {
		path: "abbreviations.json".into(),
		source,
	}))
	.expect("send");
	app.pump_dataset_updates();

	let message = app.load_error().expect("load error");
	assert!(message.starts_with("failed to parse abbreviations from abbreviations.json: "));
	assert!(message.contains("missing field `meaning`"));
}

#[test]
fn scrolling_stays_within_the_content() {
	let many: Dataset = [(
		"quantities",
		(0..40)
			.map(|index| AbbreviationRecord::new(format!("q{index}"), "measure"))
			.collect::<Vec<_>>(),
	)]
	.into_iter()
	.collect();
	let controller = Controller::with_dataset(Arc::new(many), FilterState::default(), ViewOptions::default());
	let mut app = App::new(controller, TuiConfig::default());
	draw(&mut app);

	app.handle_key(key(KeyCode::End));
	let max = app.metrics.max_scroll;
	assert!(max > 0);
	assert_eq!(app.scroll, max);
	app.handle_key(key(KeyCode::Down));
	assert_eq!(app.scroll, max);
	app.handle_key(key(KeyCode::Home));
	assert_eq!(app.scroll, 0);
	app.handle_key(key(KeyCode::PageDown));
	assert_eq!(app.scroll, app.metrics.viewport_len);
}

#[test]
fn selected_tab_stays_visible_on_a_narrow_terminal() {
	let mut app = loaded_app();
	let last = app.tabs.len() - 1;
	assert_eq!(app.tabs[last].label, "Routes");

	app.handle_key(key(KeyCode::BackTab));
	assert_eq!(app.state().category, CategoryFilter::only("routes"));

	let screen = draw_sized(&mut app, 80, 24);
	let routes = app.hit.tabs[last];
	assert!(routes.width > 0);
	let tab_row = screen.lines().nth(usize::from(routes.y)).expect("tab row");
	assert!(tab_row.contains("Routes"));
	assert_eq!(tab_at(&app.hit.tabs, routes.x, routes.y), Some(last));

	app.handle_key(key(KeyCode::Tab));
	let screen = draw_sized(&mut app, 80, 24);
	let all = app.hit.tabs[0];
	assert!(all.width > 0);
	assert!(screen.lines().nth(usize::from(all.y)).expect("tab row").contains("All"));
}

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::symbols::border;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

use super::{ScrollMetrics, render_scrollbar};
use crate::highlight::Highlighted;
use crate::tui::theme::Theme;
use crate::view::{ColumnLabels, GroupView, TableView};

const COLUMN_GAP: usize = 2;

pub struct ResultsContext<'a> {
	/// `None` until the dataset has loaded.
	pub view: Option<&'a TableView>,
	/// Whether a dataset load is still running.
	pub loading: bool,
	pub scroll: usize,
	pub area: Rect,
	pub theme: &'a Theme,
}

/// Draw the results pane and return the scroll bounds of its content.
pub fn render_results(frame: &mut Frame, ctx: ResultsContext<'_>) -> ScrollMetrics {
	let ResultsContext {
		view,
		loading,
		scroll,
		area,
		theme,
	} = ctx;

	let block = Block::default()
		.borders(Borders::ALL)
		.border_set(border::ROUNDED)
		.border_style(theme.frame_style());
	let inner = block.inner(area);
	frame.render_widget(block, area);

	match view {
		// A failed load leaves the pane empty; the error is in the log.
		None if !loading => ScrollMetrics::default(),
		None => {
			render_centered(frame, inner, Line::styled("Loading abbreviations...", theme.empty_style()));
			ScrollMetrics::default()
		}
		Some(TableView::NoResults(notice)) => {
			let line = Line::from(spans(&notice.message(), theme.empty_style(), theme.highlight));
			render_centered(frame, inner, line);
			ScrollMetrics::default()
		}
		Some(view @ TableView::Groups { .. }) => {
			let width = abbreviation_width(view, inner.width as usize);
			let lines = build_lines(view, theme, width);
			let metrics = ScrollMetrics::compute(lines.len(), inner.height as usize);
			let scroll = metrics.clamp(scroll);
			let content = render_scrollbar(frame, inner, metrics, scroll, theme);
			let paragraph = Paragraph::new(lines).scroll((scroll as u16, 0));
			frame.render_widget(paragraph, content);
			metrics
		}
	}
}

/// Flatten the grouped view into terminal lines: a header per group, the
/// column headings, then one line per row with the abbreviation column padded
/// to `abbreviation_width`.
pub fn build_lines(view: &TableView, theme: &Theme, abbreviation_width: usize) -> Vec<Line<'static>> {
	let TableView::Groups { columns, groups } = view else {
		return Vec::new();
	};

	let mut lines = Vec::new();
	for (index, group) in groups.iter().enumerate() {
		if index > 0 {
			lines.push(Line::default());
		}
		push_group(&mut lines, columns, group, theme, abbreviation_width);
	}
	lines
}

fn push_group(
	lines: &mut Vec<Line<'static>>,
	columns: &ColumnLabels,
	group: &GroupView,
	theme: &Theme,
	width: usize,
) {
	let header = group.header.as_deref().unwrap_or_default();
	lines.push(Line::styled(format!(" {header} "), theme.header_style()));
	lines.push(Line::styled(
		format!(
			"{}{}",
			pad(&columns.abbreviation, width),
			columns.meaning
		),
		theme.row_highlight,
	));

	for row in &group.rows {
		let mut cells = spans(&row.abbreviation, Style::default(), theme.highlight);
		let used = row.abbreviation.text().width();
		cells.push(Span::raw(" ".repeat(width.saturating_sub(used) + COLUMN_GAP)));
		cells.extend(spans(&row.meaning, Style::default(), theme.highlight));
		lines.push(Line::from(cells));
	}
}

fn spans(text: &Highlighted, plain: Style, emphasis: Style) -> Vec<Span<'static>> {
	text.fragments()
		.iter()
		.map(|fragment| {
			let style = if fragment.emphasized { emphasis } else { plain };
			Span::styled(fragment.text.clone(), style)
		})
		.collect()
}

fn pad(text: &str, width: usize) -> String {
	let padding = width.saturating_sub(text.width()) + COLUMN_GAP;
	format!("{text}{}", " ".repeat(padding))
}

/// Widest abbreviation cell or heading, capped at half the pane.
fn abbreviation_width(view: &TableView, available: usize) -> usize {
	let TableView::Groups { columns, groups } = view else {
		return 0;
	};
	groups
		.iter()
		.flat_map(|group| &group.rows)
		.map(|row| row.abbreviation.text().width())
		.chain([columns.abbreviation.width()])
		.max()
		.unwrap_or_default()
		.min(available / 2)
}

fn render_centered(frame: &mut Frame, area: Rect, line: Line<'static>) {
	if area.height == 0 {
		return;
	}
	let target = Rect {
		y: area.y + area.height / 3,
		height: area.height - area.height / 3,
		..area
	};
	let paragraph = Paragraph::new(line)
		.alignment(Alignment::Center)
		.wrap(Wrap { trim: true });
	frame.render_widget(paragraph, target);
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::dataset::{AbbreviationRecord, Dataset};
	use crate::search::{CategoryFilter, FilterState};
	use crate::view::{ViewOptions, build_view};

	fn view(query: &str) -> TableView {
		let dataset: Dataset = [
			("patient", vec![AbbreviationRecord::new("po", "by mouth")]),
			(
				"prescription",
				vec![AbbreviationRecord::new("t.i.d.", "three times a day").with_alt("TID")],
			),
		]
		.into_iter()
		.collect();
		build_view(&dataset, &FilterState::new(query, CategoryFilter::All), &ViewOptions::default())
	}

	#[test]
	fn groups_flatten_to_header_heading_and_rows() {
		let theme = Theme::default();
		let lines = build_lines(&view(""), &theme, 13);
		let text: Vec<String> = lines.iter().map(|line| line.to_string()).collect();
		assert_eq!(text, vec![
			" Patient Instructions ",
			"Abbreviation   Meaning",
			"po             by mouth",
			"",
			" Prescription Filling Directions ",
			"Abbreviation   Meaning",
			"t.i.d. or TID  three times a day",
		]);
	}

	#[test]
	fn matches_are_styled_with_the_highlight() {
		let theme = Theme::default();
		let lines = build_lines(&view("po"), &theme, 12);
		let row = &lines[2];
		assert_eq!(row.spans[0].content, "po");
		assert_eq!(row.spans[0].style, theme.highlight);
	}

	#[test]
	fn abbreviation_column_is_capped() {
		assert_eq!(abbreviation_width(&view(""), 80), 13);
		assert_eq!(abbreviation_width(&view(""), 10), 5);
		assert_eq!(abbreviation_width(&view("xyz"), 80), 0);
	}
}

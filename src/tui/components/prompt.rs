use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use throbber_widgets_tui::{Throbber, ThrobberState};
use unicode_width::UnicodeWidthStr;

use super::point_in_rect;
use crate::tui::input::QueryInput;
use crate::tui::theme::Theme;

const SEARCH_LABEL: &str = "[ Search ]";
const RESET_LABEL: &str = "[ Reset ]";
const LOADING_LABEL: &str = " Loading abbreviations";

/// Clickable controls on the prompt row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
	Search,
	Reset,
}

pub struct PromptContext<'a> {
	pub input: &'a QueryInput<'a>,
	pub title: &'a str,
	pub area: Rect,
	pub theme: &'a Theme,
	/// Show the spinner while the dataset is loading.
	pub loading: bool,
	pub throbber_state: &'a ThrobberState,
}

/// Where the prompt row placed its parts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PromptAreas {
	pub input: Rect,
	pub search: Rect,
	pub reset: Rect,
}

impl PromptAreas {
	pub fn button_at(&self, column: u16, row: u16) -> Option<Button> {
		if point_in_rect(column, row, self.search) {
			Some(Button::Search)
		} else if point_in_rect(column, row, self.reset) {
			Some(Button::Reset)
		} else {
			None
		}
	}
}

/// Render `title > [input]  [ Search ] [ Reset ]`.
pub fn render_prompt(frame: &mut Frame, ctx: PromptContext<'_>) -> PromptAreas {
	let PromptContext {
		input,
		title,
		area,
		theme,
		loading,
		throbber_state,
	} = ctx;

	let prompt = if title.is_empty() {
		String::new()
	} else {
		format!("{title} > ")
	};
	let chunks = Layout::default()
		.direction(Direction::Horizontal)
		.constraints([
			Constraint::Length(prompt.width() as u16),
			Constraint::Min(1),
			Constraint::Length(SEARCH_LABEL.width() as u16 + 1),
			Constraint::Length(RESET_LABEL.width() as u16 + 1),
		])
		.split(area);

	if !prompt.is_empty() {
		frame.render_widget(Paragraph::new(prompt).style(theme.prompt_style()), chunks[0]);
	}
	input.render(frame, chunks[1]);
	if loading {
		render_progress(frame, chunks[1], throbber_state, theme);
	}

	let search = button_area(chunks[2], SEARCH_LABEL);
	let reset = button_area(chunks[3], RESET_LABEL);
	frame.render_widget(Paragraph::new(SEARCH_LABEL).style(theme.header_style()), search);
	frame.render_widget(Paragraph::new(RESET_LABEL).style(theme.tab_inactive_style()), reset);

	PromptAreas {
		input: chunks[1],
		search,
		reset,
	}
}

/// Leave a one-column gap before each button.
fn button_area(slot: Rect, label: &str) -> Rect {
	let x = slot.x.saturating_add(1);
	Rect {
		x,
		width: (label.width() as u16).min(slot.right().saturating_sub(x)),
		..slot
	}
}

/// Spinner and label right-aligned inside the input area.
fn render_progress(frame: &mut Frame, area: Rect, throbber_state: &ThrobberState, theme: &Theme) {
	let muted = theme.empty_style();
	let throbber = Throbber::default().style(muted).throbber_style(muted);
	let spinner = throbber.to_symbol_span(throbber_state);
	let line = Line::from(vec![spinner, Span::styled(LOADING_LABEL, muted)]);
	let width = line.width() as u16;
	if width == 0 || width >= area.width {
		return;
	}
	let x = area.right().saturating_sub(width);
	frame.buffer_mut().set_line(x, area.y, &line, width);
}

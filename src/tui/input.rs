//! Single-line query input backed by `tui-textarea`.

use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use tui_textarea::{CursorMove, TextArea};

pub const PLACEHOLDER: &str = "abbreviation or meaning";

pub struct QueryInput<'a> {
	textarea: TextArea<'a>,
	style: Style,
	placeholder_style: Style,
}

impl<'a> QueryInput<'a> {
	pub fn new(initial: &str) -> Self {
		let mut input = Self {
			textarea: TextArea::default(),
			style: Style::default(),
			placeholder_style: Style::default().add_modifier(Modifier::DIM),
		};
		input.set_text(initial);
		input
	}

	/// Current input text.
	pub fn text(&self) -> &str {
		self.textarea
			.lines()
			.first()
			.map(String::as_str)
			.unwrap_or_default()
	}

	/// Replace the contents and move the cursor to the end.
	pub fn set_text(&mut self, text: &str) {
		let line: String = text.chars().filter(|ch| *ch != '\n' && *ch != '\r').collect();
		self.textarea = TextArea::new(vec![line]);
		self.apply_styles();
		self.textarea.move_cursor(CursorMove::End);
	}

	pub fn clear(&mut self) {
		self.set_text("");
	}

	pub fn set_styles(&mut self, text: Style, placeholder: Style) {
		self.style = text;
		self.placeholder_style = placeholder;
		self.apply_styles();
	}

	/// Feed a key to the editor. Returns whether the text changed.
	///
	/// Keys that would break the single line (`Enter`, `Ctrl+M`) are refused.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		let newline = matches!(key.code, KeyCode::Enter)
			|| (key.code == KeyCode::Char('m') && key.modifiers.contains(KeyModifiers::CONTROL));
		if newline {
			return false;
		}
		self.textarea.input(key)
	}

	pub fn render(&self, frame: &mut Frame, area: Rect) {
		frame.render_widget(&self.textarea, area);
	}

	fn apply_styles(&mut self) {
		self.textarea.set_style(self.style);
		self.textarea.set_cursor_line_style(Style::default());
		self.textarea
			.set_cursor_style(self.style.add_modifier(Modifier::REVERSED));
		self.textarea.set_placeholder_text(PLACEHOLDER);
		self.textarea.set_placeholder_style(self.placeholder_style);
	}
}

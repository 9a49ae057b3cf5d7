use ratatui::style::{Color, Style};

/// Styles for the terminal table and its controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	/// Category headers, active tab and focused buttons.
	pub header: Style,
	/// Column heading rows.
	pub row_highlight: Style,
	/// Prompt title and input text.
	pub prompt: Style,
	/// Hints, placeholders and the no-results notice.
	pub empty: Style,
	/// Emphasized query matches.
	pub highlight: Style,
}

impl Theme {
	#[must_use]
	pub fn header_style(&self) -> Style {
		self.header
	}

	#[must_use]
	pub fn prompt_style(&self) -> Style {
		self.prompt
	}

	#[must_use]
	pub fn empty_style(&self) -> Style {
		self.empty
	}

	#[must_use]
	pub fn tab_inactive_style(&self) -> Style {
		Style::new()
			.fg(self.header.fg.unwrap_or(Color::Reset))
			.bg(self.row_highlight.bg.unwrap_or(Color::Reset))
	}

	#[must_use]
	pub fn tab_highlight_style(&self) -> Style {
		Style::new().bg(self.header.bg.unwrap_or(Color::Reset))
	}

	/// Border and scrollbar colour.
	#[must_use]
	pub fn frame_style(&self) -> Style {
		Style::new().fg(self.header.fg.unwrap_or(Color::Reset))
	}
}

/// A named theme with the aliases it answers to.
#[derive(Debug, Clone)]
pub struct ThemeRegistration {
	pub name: String,
	pub theme: Theme,
	pub aliases: Vec<String>,
}

impl ThemeRegistration {
	pub fn new(name: impl Into<String>, theme: Theme) -> Self {
		Self {
			name: name.into(),
			theme,
			aliases: Vec::new(),
		}
	}

	pub fn aliases<I, S>(mut self, aliases: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.aliases.extend(aliases.into_iter().map(Into::into));
		self
	}
}

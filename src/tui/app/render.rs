use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Margin};
use ratatui::widgets::Paragraph;

use super::App;
use crate::tui::components::{PromptContext, ResultsContext, render_prompt, render_results, render_tabs};

const HINTS: &str =
	"Enter search · Ctrl+R reset · Tab category · ↑↓ PgUp PgDn scroll · Ctrl+O print · Esc quit";

impl App<'_> {
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});
		let rows = Layout::default()
			.direction(Direction::Vertical)
			.constraints([
				Constraint::Length(1),
				Constraint::Length(1),
				Constraint::Min(3),
				Constraint::Length(1),
			])
			.split(area);

		let theme = self.config.theme;
		self.hit.prompt = render_prompt(frame, PromptContext {
			input: &self.input,
			title: &self.config.input_title,
			area: rows[0],
			theme: &theme,
			loading: self.is_loading(),
			throbber_state: &self.throbber_state,
		});
		self.hit.tabs = render_tabs(frame, rows[1], &self.tabs, self.selected_tab, &theme);

		self.hit.results = rows[2];
		self.metrics = render_results(frame, ResultsContext {
			view: self.view(),
			loading: self.is_loading(),
			scroll: self.scroll,
			area: rows[2],
			theme: &theme,
		});
		self.scroll = self.metrics.clamp(self.scroll);

		frame.render_widget(Paragraph::new(HINTS).style(theme.empty_style()), rows[3]);
	}
}

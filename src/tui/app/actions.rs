use ratatui::crossterm::event::{
	KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::{App, SessionOutcome};
use crate::controller::Interaction;
use crate::tui::components::{Button, point_in_rect, tab_at};

const WHEEL_STEP: usize = 3;

impl App<'_> {
	/// Process a key press. Returns the outcome when the session ends.
	pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Option<SessionOutcome> {
		let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
		match key.code {
			KeyCode::Esc => return Some(self.outcome(false)),
			KeyCode::Char('c') if ctrl => return Some(self.outcome(false)),
			KeyCode::Char('o') if ctrl => return Some(self.outcome(true)),
			KeyCode::Enter => self.dispatch(Interaction::Submit {
				input: self.input.text().to_string(),
			}),
			KeyCode::Char('s') if ctrl => self.press(Button::Search),
			KeyCode::Char('r') if ctrl => self.press(Button::Reset),
			KeyCode::Tab => self.cycle_tab(true),
			KeyCode::BackTab => self.cycle_tab(false),
			KeyCode::Up => self.scroll_up(1),
			KeyCode::Down => self.scroll_down(1),
			KeyCode::PageUp => self.scroll_up(self.page()),
			KeyCode::PageDown => self.scroll_down(self.page()),
			KeyCode::Home => self.scroll = 0,
			KeyCode::End => self.scroll = self.metrics.max_scroll,
			_ => {
				self.input.input(key);
			}
		}
		None
	}

	pub(crate) fn handle_mouse(&mut self, mouse: MouseEvent) {
		match mouse.kind {
			MouseEventKind::Down(MouseButton::Left) => {
				if let Some(button) = self.hit.prompt.button_at(mouse.column, mouse.row) {
					self.press(button);
				} else if let Some(index) = tab_at(&self.hit.tabs, mouse.column, mouse.row) {
					self.select_tab(index);
				}
			}
			MouseEventKind::ScrollUp if self.over_results(mouse) => self.scroll_up(WHEEL_STEP),
			MouseEventKind::ScrollDown if self.over_results(mouse) => self.scroll_down(WHEEL_STEP),
			_ => {}
		}
	}

	pub(crate) fn press(&mut self, button: Button) {
		let interaction = match button {
			Button::Search => Interaction::Search {
				input: self.input.text().to_string(),
			},
			Button::Reset => Interaction::Reset,
		};
		self.dispatch(interaction);
	}

	pub(crate) fn select_tab(&mut self, index: usize) {
		let Some(tab) = self.tabs.get(index) else {
			return;
		};
		let interaction = Interaction::SelectCategory {
			category: tab.filter.clone(),
			input: self.input.text().to_string(),
		};
		self.dispatch(interaction);
	}

	fn cycle_tab(&mut self, forward: bool) {
		let count = self.tabs.len();
		if count == 0 {
			return;
		}
		let next = if forward {
			(self.selected_tab + 1) % count
		} else {
			(self.selected_tab + count - 1) % count
		};
		self.select_tab(next);
	}

	fn over_results(&self, mouse: MouseEvent) -> bool {
		point_in_rect(mouse.column, mouse.row, self.hit.results)
	}

	fn page(&self) -> usize {
		self.metrics.viewport_len.max(1)
	}

	fn scroll_up(&mut self, lines: usize) {
		self.scroll = self.scroll.saturating_sub(lines);
	}

	fn scroll_down(&mut self, lines: usize) {
		self.scroll = self.metrics.clamp(self.scroll.saturating_add(lines));
	}
}

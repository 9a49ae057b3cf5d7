use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::Tabs;
use unicode_width::UnicodeWidthStr;

use super::point_in_rect;
use crate::dataset::{CATEGORIES, Dataset, tab_label};
use crate::search::CategoryFilter;
use crate::tui::theme::Theme;

const ALL_LABEL: &str = "All";
const TAB_PADDING_RIGHT: &str = " ";

/// One mutually exclusive category control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTab {
	pub filter: CategoryFilter,
	pub label: String,
}

impl CategoryTab {
	pub fn all() -> Self {
		Self {
			filter: CategoryFilter::All,
			label: ALL_LABEL.to_string(),
		}
	}

	pub fn for_key(key: &str) -> Self {
		Self {
			filter: CategoryFilter::only(key),
			label: tab_label(key).to_string(),
		}
	}

	/// `All`, the known categories, then any other keys found in `dataset`.
	pub fn tabs_for(dataset: Option<&Dataset>) -> Vec<Self> {
		let mut tabs = vec![Self::all()];
		tabs.extend(CATEGORIES.iter().map(|info| Self::for_key(info.key)));
		if let Some(dataset) = dataset {
			tabs.extend(
				dataset
					.keys()
					.filter(|key| !CATEGORIES.iter().any(|info| info.key == *key))
					.map(Self::for_key),
			);
		}
		tabs
	}

	fn title(&self) -> String {
		format!(" {} ", self.label)
	}
}

/// Draw the tab row and return the screen area of each tab.
pub fn render_tabs(
	frame: &mut Frame,
	area: Rect,
	tabs: &[CategoryTab],
	selected: usize,
	theme: &Theme,
) -> Vec<Rect> {
	let first = window_start(area.width, tabs, selected);
	let active = theme.header_style();
	let inactive = theme.tab_inactive_style();
	let titles: Vec<Line<'static>> = tabs
		.iter()
		.enumerate()
		.skip(first)
		.map(|(index, tab)| {
			let style = if index == selected { active } else { inactive };
			Line::from(tab.title()).style(style)
		})
		.collect();

	let widget = Tabs::new(titles)
		.select(selected.saturating_sub(first))
		.divider("")
		.padding("", TAB_PADDING_RIGHT)
		.highlight_style(theme.tab_highlight_style());
	frame.render_widget(widget, area);

	tab_areas(area, tabs, first)
}

/// Index of the tab under the pointer.
pub fn tab_at(areas: &[Rect], column: u16, row: u16) -> Option<usize> {
	areas
		.iter()
		.position(|area| point_in_rect(column, row, *area))
}

/// First tab to draw so that the selected one fits in `width` columns.
fn window_start(width: u16, tabs: &[CategoryTab], selected: usize) -> usize {
	let selected = selected.min(tabs.len().saturating_sub(1));
	let padding = TAB_PADDING_RIGHT.width();
	let mut first = 0;
	let mut span: usize = tabs
		.iter()
		.take(selected + 1)
		.map(|tab| tab.title().width() + padding)
		.sum::<usize>()
		.saturating_sub(padding);
	while first < selected && span > usize::from(width) {
		span -= tabs[first].title().width() + padding;
		first += 1;
	}
	first
}

/// Hit areas for every tab. Tabs scrolled out of the row get an empty area.
fn tab_areas(area: Rect, tabs: &[CategoryTab], first: usize) -> Vec<Rect> {
	let hidden = Rect {
		x: area.x,
		y: area.y,
		width: 0,
		height: 0,
	};
	let mut x = area.x;
	let mut areas = Vec::with_capacity(tabs.len());
	for (index, tab) in tabs.iter().enumerate() {
		if index < first {
			areas.push(hidden);
			continue;
		}
		let width = tab.title().width() as u16;
		let visible = width.min(area.right().saturating_sub(x));
		areas.push(Rect {
			x,
			y: area.y,
			width: visible,
			height: if visible == 0 { 0 } else { area.height.min(1) },
		});
		x = x
			.saturating_add(width)
			.saturating_add(TAB_PADDING_RIGHT.width() as u16)
			.min(area.right());
	}
	areas
}

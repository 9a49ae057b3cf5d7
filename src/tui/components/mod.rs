//! Widgets drawn by the terminal app.
//!
//! Each render function reports the screen areas it used so mouse clicks can
//! be mapped back to buttons, tabs and the results pane.

mod prompt;
mod results;
mod scrollbar;
mod tabs;

pub use prompt::{Button, PromptAreas, PromptContext, render_prompt};
pub use results::{ResultsContext, build_lines, render_results};
pub use scrollbar::{ScrollMetrics, point_in_rect, render_scrollbar};
pub use tabs::{CategoryTab, render_tabs, tab_at};

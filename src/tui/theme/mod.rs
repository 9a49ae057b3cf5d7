//! Terminal colour themes.
//!
//! Built-in themes are TOML documents compiled into the binary. Lookups go
//! through a process-wide registry that ignores case and resolves aliases.

mod builtins;
mod registry;
mod types;

pub use builtins::default_theme;
pub use registry::{by_name, names};
pub use types::Theme;

/// Name of the theme used when none is configured.
pub const DEFAULT_THEME_NAME: &str = "slate";

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}

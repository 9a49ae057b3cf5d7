use std::fmt::Write;

use super::ResolvedConfig;

pub(super) fn format_summary(config: &ResolvedConfig) -> String {
	let mut out = String::new();
	let _ = writeln!(out, "Effective configuration:");
	let _ = writeln!(out, "  Dataset: {}", config.dataset_path.display());
	if config.initial.query.is_empty() {
		let _ = writeln!(out, "  Initial query: (none)");
	} else {
		let _ = writeln!(out, "  Initial query: {}", config.initial.query);
	}
	let _ = writeln!(out, "  Initial category: {}", config.initial.category);
	let _ = writeln!(out, "  UI theme: {}", config.theme);
	let _ = writeln!(out, "  Prompt title: {}", config.input_title);
	let _ = writeln!(
		out,
		"  Abbreviation display: {}",
		config.view.abbreviation_display
	);
	let _ = writeln!(
		out,
		"  Column headers: {}, {}",
		config.view.columns.abbreviation, config.view.columns.meaning
	);
	out
}

#[cfg(test)]
mod tests {
	use std::path::PathBuf;

	use abbr::{CategoryFilter, FilterState, ViewOptions};

	use super::*;

	#[test]
	fn summary_lists_every_setting() {
		let config = ResolvedConfig {
			dataset_path: PathBuf::from("/srv/abbreviations.json"),
			initial: FilterState::new("tid", CategoryFilter::only("prescription")),
			theme: "light".into(),
			input_title: "Find".into(),
			view: ViewOptions::default(),
		};

		let summary = format_summary(&config);
		assert!(summary.contains("Dataset: /srv/abbreviations.json"));
		assert!(summary.contains("Initial query: tid"));
		assert!(summary.contains("Initial category: prescription"));
		assert!(summary.contains("UI theme: light"));
		assert!(summary.contains("Abbreviation display: original"));
		assert!(summary.contains("Column headers: Abbreviation, Meaning"));
	}
}

use abbr::view::{html, plain};
use abbr::{SessionOutcome, TableView};
use anyhow::Result;

use super::OutputFormat;

/// Format a view in the requested output format.
pub(crate) fn format_view(view: &TableView, format: OutputFormat) -> Result<String> {
	Ok(match format {
		OutputFormat::Plain => plain::render(view),
		OutputFormat::Json => serde_json::to_string_pretty(view)? + "\n",
		OutputFormat::Html => html::render(view),
	})
}

/// Print a view rendered by `--print`.
pub(crate) fn print_view(view: &TableView, format: OutputFormat) -> Result<()> {
	print!("{}", format_view(view, format)?);
	Ok(())
}

/// Format the end of an interactive session.
///
/// JSON always describes the outcome; the other formats print the view only
/// when the session was accepted.
pub(crate) fn format_outcome(outcome: &SessionOutcome, format: OutputFormat) -> Result<Option<String>> {
	if format == OutputFormat::Json {
		return Ok(Some(serde_json::to_string_pretty(outcome)? + "\n"));
	}
	match (&outcome.view, outcome.accepted) {
		(Some(view), true) => format_view(view, format).map(Some),
		_ => Ok(None),
	}
}

pub(crate) fn print_outcome(outcome: &SessionOutcome, format: OutputFormat) -> Result<()> {
	if let Some(text) = format_outcome(outcome, format)? {
		print!("{text}");
	}
	Ok(())
}

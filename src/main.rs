mod cli;
mod settings;
mod workflow;

use abbr::logging;
use anyhow::Result;
use cli::{OutputFormat, parse_cli, print_outcome, print_view};
use log::{debug, warn};
use settings::ResolvedConfig;
use workflow::{SessionWorkflow, render_once};

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in abbr::tui::theme::names() {
			println!("{name}");
		}
		return Ok(());
	}

	init_logging(cli.print);

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	if cli.print {
		let view = render_once(&resolved)?;
		return print_view(&view, cli.output);
	}

	run_session(cli.output, resolved)
}

/// Interactive sessions own the terminal, so their log goes to a file.
fn init_logging(print: bool) {
	if print {
		logging::init_stderr();
		return;
	}
	match logging::init_file() {
		Ok(path) => debug!("logging to {}", path.display()),
		Err(err) => {
			logging::init_stderr();
			warn!("file logging unavailable, using stderr: {err:#}");
		}
	}
}

/// Run the terminal UI and print the outcome in the chosen format.
fn run_session(format: OutputFormat, settings: ResolvedConfig) -> Result<()> {
	let workflow = SessionWorkflow::from_config(settings);
	let outcome = workflow.run()?;
	print_outcome(&outcome, format)
}

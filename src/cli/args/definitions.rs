use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::{DisplayArg, OutputFormat};
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `abbr` binary.
#[derive(Parser, Debug)]
#[command(
	name = "abbr",
	version,
	long_version = long_version(),
	about = "Searchable reference table of prescription abbreviations",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "ABBR_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'd',
		long = "data",
		value_name = "FILE",
		help = "Abbreviation dataset to load (default: data/abbreviations.json)"
	)]
	pub(crate) data: Option<PathBuf>,
	#[arg(
		short = 'q',
		long,
		value_name = "QUERY",
		help = "Provide an initial search query (default: empty)"
	)]
	pub(crate) query: Option<String>,
	#[arg(
		short = 'k',
		long,
		value_name = "KEY",
		help = "Start with a single category selected (default: all)"
	)]
	pub(crate) category: Option<String>,
	#[arg(
		short = 't',
		long,
		value_name = "TITLE",
		help = "Set the input prompt title (default: Search)"
	)]
	pub(crate) title: Option<String>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: slate)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		long = "abbreviation-display",
		value_enum,
		help = "Show abbreviations as written or normalized (default: original)"
	)]
	pub(crate) abbreviation_display: Option<DisplayArg>,
	#[arg(
		short = 'l',
		long = "list-themes",
		help = "List supported themes and exit (default: disabled)"
	)]
	pub(crate) list_themes: bool,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'P',
		long = "print",
		help = "Render the filtered table once without the terminal UI (default: disabled)"
	)]
	pub(crate) print: bool,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how to print the result"
	)]
	pub(crate) output: OutputFormat,
}

use abbr::AbbreviationDisplay;
use clap::ValueEnum;

/// Abbreviation column styles accepted via the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum DisplayArg {
	Original,
	Normalized,
}

impl From<DisplayArg> for AbbreviationDisplay {
	fn from(value: DisplayArg) -> Self {
		match value {
			DisplayArg::Original => AbbreviationDisplay::Original,
			DisplayArg::Normalized => AbbreviationDisplay::Normalized,
		}
	}
}

/// Formats used when printing a view.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
	Plain,
	Json,
	Html,
}

use anyhow::{Context, Result, anyhow, bail};
use include_dir::{Dir, File};
use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

use crate::tui::theme::types::{Theme, ThemeRegistration};

pub(super) struct BuiltinThemes {
	pub(super) registrations: Vec<ThemeRegistration>,
	pub(super) default_theme: Theme,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ThemeFile {
	name: String,
	#[serde(default)]
	aliases: Vec<String>,
	#[serde(default)]
	default: bool,
	styles: StylesTable,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct StylesTable {
	header: StyleEntry,
	row_highlight: StyleEntry,
	prompt: StyleEntry,
	empty: StyleEntry,
	highlight: StyleEntry,
}

impl StylesTable {
	fn to_theme(&self) -> Result<Theme> {
		Ok(Theme {
			header: self.header.to_style().context("styles.header")?,
			row_highlight: self.row_highlight.to_style().context("styles.row_highlight")?,
			prompt: self.prompt.to_style().context("styles.prompt")?,
			empty: self.empty.to_style().context("styles.empty")?,
			highlight: self.highlight.to_style().context("styles.highlight")?,
		})
	}
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct StyleEntry {
	#[serde(default)]
	fg: Option<String>,
	#[serde(default)]
	bg: Option<String>,
	#[serde(default)]
	modifiers: Vec<String>,
}

impl StyleEntry {
	fn to_style(&self) -> Result<Style> {
		let mut style = Style::new();
		if let Some(fg) = &self.fg {
			style = style.fg(parse_color(fg).with_context(|| format!("invalid foreground `{fg}`"))?);
		}
		if let Some(bg) = &self.bg {
			style = style.bg(parse_color(bg).with_context(|| format!("invalid background `{bg}`"))?);
		}
		for name in &self.modifiers {
			style = style.add_modifier(parse_modifier(name)?);
		}
		Ok(style)
	}
}

pub(super) fn load_builtin_themes(dir: &Dir) -> Result<BuiltinThemes> {
	let mut files: Vec<&File> = dir.files().collect();
	files.sort_by(|a, b| a.path().cmp(b.path()));

	let mut registrations = Vec::with_capacity(files.len());
	let mut default_theme: Option<(Theme, String)> = None;

	for file in files {
		let (registration, is_default) = parse_theme_file(file)?;
		if is_default {
			if let Some((_, existing)) = &default_theme {
				bail!(
					"both `{existing}` and `{}` are marked as the default theme",
					registration.name
				);
			}
			default_theme = Some((registration.theme, registration.name.clone()));
		}
		registrations.push(registration);
	}

	let default_theme = default_theme
		.map(|(theme, _)| theme)
		.or_else(|| registrations.first().map(|registration| registration.theme))
		.ok_or_else(|| anyhow!("no built-in theme definitions were found"))?;

	Ok(BuiltinThemes {
		registrations,
		default_theme,
	})
}

fn parse_theme_file(file: &File) -> Result<(ThemeRegistration, bool)> {
	let path = file.path();
	let contents = file
		.contents_utf8()
		.with_context(|| format!("{} is not valid UTF-8", path.display()))?;
	let parsed: ThemeFile = toml::from_str(contents)
		.with_context(|| format!("failed to parse theme {}", path.display()))?;
	let theme = parsed
		.styles
		.to_theme()
		.with_context(|| format!("invalid styles in {}", path.display()))?;

	let registration = ThemeRegistration::new(parsed.name, theme).aliases(
		parsed
			.aliases
			.into_iter()
			.map(|alias| alias.trim().to_string())
			.filter(|alias| !alias.is_empty()),
	);
	Ok((registration, parsed.default))
}

/// Accepts `#rgb`, `#rrggbb`, `rgb(r, g, b)`, an ANSI index and named colours.
fn parse_color(input: &str) -> Result<Color> {
	let value = input.trim();

	if let Some(hex) = value.strip_prefix('#') {
		let digits: String = match hex.len() {
			3 => hex.chars().flat_map(|ch| [ch, ch]).collect(),
			6 => hex.to_string(),
			_ => bail!("hex colours must have 3 or 6 digits"),
		};
		let channel = |range: std::ops::Range<usize>| {
			u8::from_str_radix(&digits[range], 16).with_context(|| format!("bad hex digits in `{value}`"))
		};
		return Ok(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?));
	}

	if let Some(body) = value.strip_prefix("rgb(").and_then(|rest| rest.strip_suffix(')')) {
		let channels = body
			.split(',')
			.map(|part| part.trim().parse::<u8>())
			.collect::<Result<Vec<_>, _>>()
			.with_context(|| format!("bad component in `{value}`"))?;
		let [r, g, b] = channels[..] else {
			bail!("rgb() takes three components, found {}", channels.len());
		};
		return Ok(Color::Rgb(r, g, b));
	}

	if let Ok(index) = value.parse::<u8>() {
		return Ok(Color::Indexed(index));
	}

	let color = match normalize_key(value).as_str() {
		"reset" | "default" | "none" => Color::Reset,
		"black" => Color::Black,
		"red" => Color::Red,
		"green" => Color::Green,
		"yellow" => Color::Yellow,
		"blue" => Color::Blue,
		"magenta" => Color::Magenta,
		"cyan" => Color::Cyan,
		"gray" | "grey" => Color::Gray,
		"dark_gray" | "dark_grey" => Color::DarkGray,
		"light_red" => Color::LightRed,
		"light_green" => Color::LightGreen,
		"light_yellow" => Color::LightYellow,
		"light_blue" => Color::LightBlue,
		"light_magenta" => Color::LightMagenta,
		"light_cyan" => Color::LightCyan,
		"white" => Color::White,
		other => bail!("unknown colour `{other}`"),
	};
	Ok(color)
}

fn parse_modifier(input: &str) -> Result<Modifier> {
	let modifier = match normalize_key(input).as_str() {
		"bold" => Modifier::BOLD,
		"dim" => Modifier::DIM,
		"italic" => Modifier::ITALIC,
		"underline" | "underlined" => Modifier::UNDERLINED,
		"reversed" | "reverse" => Modifier::REVERSED,
		"crossed_out" | "strikethrough" => Modifier::CROSSED_OUT,
		other => bail!("unknown modifier `{other}`"),
	};
	Ok(modifier)
}

fn normalize_key(value: &str) -> String {
	value
		.trim()
		.to_ascii_lowercase()
		.replace(['-', ' '], "_")
}

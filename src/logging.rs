//! Logger setup.
//!
//! The filter is read from `ABBR_LOG` and defaults to `warn`. While the
//! terminal UI owns the screen, records go to a file in the cache directory
//! instead of stderr.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};

use crate::app_dirs;

pub const FILTER_ENV: &str = "ABBR_LOG";
pub const STYLE_ENV: &str = "ABBR_LOG_STYLE";
pub const LOG_FILE_NAME: &str = "abbr.log";

fn builder() -> Builder {
	Builder::from_env(
		Env::new()
			.filter_or(FILTER_ENV, "warn")
			.write_style(STYLE_ENV),
	)
}

/// Log to stderr.
pub fn init_stderr() {
	let _ = builder().target(Target::Stderr).try_init();
}

/// Log to `abbr.log` in the cache directory and return the file path.
pub fn init_file() -> Result<PathBuf> {
	let dir = app_dirs::get_cache_dir()?;
	init_file_in(&dir)
}

pub fn init_file_in(dir: &Path) -> Result<PathBuf> {
	fs::create_dir_all(dir)
		.with_context(|| format!("failed to create log directory {}", dir.display()))?;
	let path = dir.join(LOG_FILE_NAME);
	let file = OpenOptions::new()
		.create(true)
		.append(true)
		.open(&path)
		.with_context(|| format!("failed to open log file {}", path.display()))?;
	let _ = builder()
		.target(Target::Pipe(Box::new(file)))
		.write_style(env_logger::WriteStyle::Never)
		.try_init();
	Ok(path)
}

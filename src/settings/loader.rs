use anyhow::{Context, Result};
use log::debug;

use super::raw::RawConfig;
use super::resolved::ResolvedConfig;
use super::sources::build_config;
use crate::cli::CliArgs;

/// Merge config files, `ABBR_*` variables and CLI flags, then validate.
pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let merged = build_config(cli)?;
	let mut raw: RawConfig = merged
		.try_deserialize()
		.context("failed to deserialize configuration")?;
	raw.apply_cli_overrides(cli);
	let resolved = raw.resolve(cli)?;
	debug!("resolved configuration: {resolved:?}");
	Ok(resolved)
}

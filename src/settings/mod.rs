//! Configuration loading and resolution.
//!
//! Default files, `--config` files, `ABBR_*` environment variables and CLI
//! flags are merged in that order by `sources`, deserialized into the raw
//! sections and then resolved into a validated [`ResolvedConfig`].

mod loader;
mod raw;
mod resolved;
mod sources;
mod util;

pub use loader::load;
pub use resolved::ResolvedConfig;

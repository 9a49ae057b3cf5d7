use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure to obtain the dataset. This is the only error the renderer knows.
#[derive(Debug, Error)]
pub enum LoadError {
	#[error("failed to read abbreviations from {path}")]
	Read {
		path: PathBuf,
		#[source]
		source: io::Error,
	},
	#[error("failed to parse abbreviations from {path}")]
	Parse {
		path: PathBuf,
		#[source]
		source: serde_json::Error,
	},
	#[error("dataset loader stopped before delivering a result")]
	Disconnected,
}

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver};
use std::thread;

use log::{debug, info};

use super::{Dataset, LoadError};

/// Location of the dataset when nothing else is configured.
pub const DEFAULT_DATASET_PATH: &str = "data/abbreviations.json";

pub type LoadResult = Result<Dataset, LoadError>;

/// Parse a dataset from its JSON representation.
pub fn parse_dataset(json: &str) -> Result<Dataset, serde_json::Error> {
	serde_json::from_str(json)
}

/// Read and parse the dataset at `path`.
pub fn load_dataset(path: &Path) -> LoadResult {
	debug!("loading abbreviations from {}", path.display());
	let contents = fs::read_to_string(path).map_err(|source| LoadError::Read {
		path: path.to_path_buf(),
		source,
	})?;
	let dataset = parse_dataset(&contents).map_err(|source| LoadError::Parse {
		path: path.to_path_buf(),
		source,
	})?;
	info!(
		"loaded {} abbreviations across {} categories",
		dataset.record_count(),
		dataset.len()
	);
	Ok(dataset)
}

/// Load the dataset on a background thread.
///
/// The receiver yields exactly one result. The receiving side owns the error
/// and is responsible for reporting it.
pub fn spawn_dataset_load(path: PathBuf) -> Receiver<LoadResult> {
	let (tx, rx) = mpsc::channel();
	thread::spawn(move || {
		// The UI may already be gone.
		let _ = tx.send(load_dataset(&path));
	});
	rx
}

#[cfg(test)]
mod tests {
	use std::io::Write;
	use std::time::Duration;

	use tempfile::NamedTempFile;

	use super::*;

	fn write_temp(contents: &str) -> NamedTempFile {
		let mut file = NamedTempFile::new().unwrap();
		file.write_all(contents.as_bytes()).unwrap();
		file
	}

	#[test]
	fn loads_dataset_from_disk() {
		let file = write_temp(r#"{"patient": [{"abbr": "po", "meaning": "by mouth"}]}"#);
		let dataset = load_dataset(file.path()).expect("loads");
		assert_eq!(dataset.record_count(), 1);
		assert!(dataset.contains_category("patient"));
	}

	#[test]
	fn missing_file_is_a_read_error() {
		let dir = tempfile::tempdir().unwrap();
		let err = load_dataset(&dir.path().join("absent.json")).unwrap_err();
		assert!(matches!(err, LoadError::Read { .. }));
	}

	#[test]
	fn malformed_document_is_a_parse_error() {
		let file = write_temp(r#"{"patient": [{"abbr": "po"}]}"#);
		let err = load_dataset(file.path()).unwrap_err();
		assert!(matches!(err, LoadError::Parse { .. }));
		let message = format!("{:#}", anyhow::Error::new(err));
		assert!(message.starts_with("failed to parse abbreviations from"));
		assert!(message.contains(": missing field `meaning`"));
	}

	#[test]
	fn background_load_delivers_one_result() {
		let file = write_temp(r#"{"routes": [{"abbr": "IV", "meaning": "intravenous"}]}"#);
		let rx = spawn_dataset_load(file.path().to_path_buf());
		let result = rx.recv_timeout(Duration::from_secs(5)).expect("result");
		assert_eq!(result.expect("loads").record_count(), 1);
	}
}

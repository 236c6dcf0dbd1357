use std::fs;
use std::io::{ErrorKind, Write};
use std::path::PathBuf;

use tempfile::NamedTempFile;
use tracing::trace;

use crate::{KeyValueStore, Result, StorageError};

/// Directory-backed store: one file per key.
///
/// Writes go through a temporary file in the same directory and are renamed
/// into place, so a reader never observes a half-written value.
#[derive(Debug, Clone)]
pub struct FileStore {
	dir: PathBuf,
}

impl FileStore {
	/// Opens a store rooted at `dir`. The directory is created on first write.
	pub fn new(dir: impl Into<PathBuf>) -> Self {
		Self { dir: dir.into() }
	}

	fn path_for(&self, key: &str) -> Result<PathBuf> {
		let valid = !key.is_empty()
			&& key != "."
			&& key != ".."
			&& !key.contains(['/', '\\', '\0']);
		if !valid {
			return Err(StorageError::InvalidKey(key.to_owned()));
		}
		Ok(self.dir.join(key))
	}
}

impl KeyValueStore for FileStore {
	fn read(&self, key: &str) -> Result<Option<String>> {
		let path = self.path_for(key)?;
		match fs::read_to_string(&path) {
			Ok(text) => Ok(Some(text)),
			Err(error) if error.kind() == ErrorKind::NotFound => Ok(None),
			Err(error) => Err(StorageError::Io { path, error }),
		}
	}

	fn write(&mut self, key: &str, text: &str) -> Result<()> {
		let path = self.path_for(key)?;
		let io_err = |error| StorageError::Io {
			path: path.clone(),
			error,
		};

		fs::create_dir_all(&self.dir).map_err(io_err)?;
		let mut tmp = NamedTempFile::new_in(&self.dir).map_err(io_err)?;
		tmp.write_all(text.as_bytes()).map_err(io_err)?;
		tmp.persist(&path).map_err(|e| io_err(e.error))?;

		trace!(key, bytes = text.len(), "storage.file.write");
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_missing_key_reads_as_absent() {
		let dir = tempfile::tempdir().unwrap();
		let store = FileStore::new(dir.path());
		assert_eq!(store.read("stck-html").unwrap(), None);
	}

	#[test]
	fn test_write_overwrites_and_survives_reopen() {
		let dir = tempfile::tempdir().unwrap();
		let mut store = FileStore::new(dir.path().join("nested"));
		store.write("stck-css", "a{}").unwrap();
		store.write("stck-css", "b{}").unwrap();
		store.write("stck-css", "b{}").unwrap();

		let reopened = FileStore::new(dir.path().join("nested"));
		assert_eq!(reopened.read("stck-css").unwrap().as_deref(), Some("b{}"));
	}

	#[test]
	fn test_empty_text_is_stored() {
		let dir = tempfile::tempdir().unwrap();
		let mut store = FileStore::new(dir.path());
		store.write("stck-js", "").unwrap();
		assert_eq!(store.read("stck-js").unwrap().as_deref(), Some(""));
	}

	#[test]
	fn test_rejects_path_like_keys() {
		let dir = tempfile::tempdir().unwrap();
		let mut store = FileStore::new(dir.path());
		for key in ["", "..", "a/b", "a\\b"] {
			assert!(matches!(store.write(key, "x"), Err(StorageError::InvalidKey(_))));
		}
	}
}

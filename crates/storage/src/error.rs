//! Storage errors.

use std::path::PathBuf;

use thiserror::Error;

/// Failures from a storage backend. None of these are retried.
#[derive(Debug, Error)]
pub enum StorageError {
	/// Reading or writing the backing file failed.
	#[error("I/O error on {path}: {error}")]
	Io {
		path: PathBuf,
		error: std::io::Error,
	},

	/// The key cannot be mapped onto the backend.
	#[error("invalid storage key `{0}`")]
	InvalidKey(String),

	/// The backend refuses access (storage disabled or quota exhausted).
	#[error("per-device storage is unavailable")]
	Unavailable,
}

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;

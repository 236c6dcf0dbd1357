//! Session errors.

use stck_storage::StorageError;
use thiserror::Error;

/// Errors that end a session.
///
/// Share and shape failures never appear here: they are recovered where they
/// happen. Storage failures are not handled and surface as-is.
#[derive(Debug, Error)]
pub enum SessionError {
	#[error(transparent)]
	Storage(#[from] StorageError),

	/// The session task panicked or was aborted.
	#[error("session task failed: {0}")]
	Task(#[from] tokio::task::JoinError),
}

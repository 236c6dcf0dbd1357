//! Per-device persistence for playground documents.
//!
//! [`KeyValueStore`] is the raw synchronous storage surface (the browser's
//! local storage, a directory on disk, or memory in tests). Writes overwrite
//! unconditionally and are idempotent. There is no eviction, quota handling or
//! retry: a failing backend surfaces a [`StorageError`] to the caller.
//!
//! [`PersistenceAdapter`] maps [`DocumentKey`]s onto namespaced storage keys
//! (`stck-html`, `stck-css`, `stck-js`).
//!
//! [`DocumentKey`]: stck_document::DocumentKey

mod adapter;
pub mod error;
mod file;
mod memory;

pub use adapter::{LEGACY_JS_NAME, PersistenceAdapter};
pub use error::{Result, StorageError};
pub use file::FileStore;
pub use memory::MemoryStore;

/// Synchronous key/value storage that outlives the session.
pub trait KeyValueStore {
	/// Reads the text stored under `key`, or `None` when nothing was written.
	fn read(&self, key: &str) -> Result<Option<String>>;

	/// Stores `text` under `key`, replacing any previous value.
	fn write(&mut self, key: &str, text: &str) -> Result<()>;
}

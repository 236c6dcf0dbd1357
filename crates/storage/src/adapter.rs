use stck_document::DocumentKey;
use stck_primitives::DEFAULT_STORAGE_PREFIX;
use tracing::debug;

use crate::{KeyValueStore, Result};

/// Name older builds stored the script document under (`stck-javascript`).
pub const LEGACY_JS_NAME: &str = "javascript";

/// Reads and writes documents under namespaced storage keys.
#[derive(Debug, Clone)]
pub struct PersistenceAdapter<S> {
	store: S,
	prefix: String,
}

impl<S: KeyValueStore> PersistenceAdapter<S> {
	pub fn new(store: S) -> Self {
		Self::with_prefix(store, DEFAULT_STORAGE_PREFIX)
	}

	pub fn with_prefix(store: S, prefix: impl Into<String>) -> Self {
		Self {
			store,
			prefix: prefix.into(),
		}
	}

	/// Writes `text` through to storage for `key`.
	pub fn write(&mut self, key: DocumentKey, text: &str) -> Result<()> {
		self.store.write(&key.storage_key(&self.prefix), text)
	}

	/// Reads the stored text for `key`.
	///
	/// The script document falls back to its legacy storage key when the
	/// current one was never written.
	pub fn read(&self, key: DocumentKey) -> Result<Option<String>> {
		if let Some(text) = self.store.read(&key.storage_key(&self.prefix))? {
			return Ok(Some(text));
		}
		if key != DocumentKey::Js {
			return Ok(None);
		}

		let legacy = format!("{}{LEGACY_JS_NAME}", self.prefix);
		let text = self.store.read(&legacy)?;
		if text.is_some() {
			debug!(key = %legacy, "storage.legacy_key");
		}
		Ok(text)
	}

	pub fn store(&self) -> &S {
		&self.store
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::MemoryStore;

	#[test]
	fn test_write_uses_namespaced_keys() {
		let mut adapter = PersistenceAdapter::new(MemoryStore::new());
		adapter.write(DocumentKey::Html, "<p>").unwrap();
		adapter.write(DocumentKey::Js, "1").unwrap();

		assert_eq!(adapter.store().read("stck-html").unwrap().as_deref(), Some("<p>"));
		assert_eq!(adapter.store().read("stck-js").unwrap().as_deref(), Some("1"));
		assert_eq!(adapter.read(DocumentKey::Css).unwrap(), None);
	}

	#[test]
	fn test_custom_prefix() {
		let mut adapter = PersistenceAdapter::with_prefix(MemoryStore::new(), "pg:");
		adapter.write(DocumentKey::Css, "a{}").unwrap();
		assert_eq!(adapter.store().read("pg:css").unwrap().as_deref(), Some("a{}"));
	}

	#[test]
	fn test_js_falls_back_to_legacy_key() {
		let store: MemoryStore = [("stck-javascript", "legacy()")].into_iter().collect();
		let mut adapter = PersistenceAdapter::new(store);
		assert_eq!(adapter.read(DocumentKey::Js).unwrap().as_deref(), Some("legacy()"));

		adapter.write(DocumentKey::Js, "current()").unwrap();
		assert_eq!(adapter.read(DocumentKey::Js).unwrap().as_deref(), Some("current()"));
	}

	#[test]
	fn test_legacy_key_only_applies_to_js() {
		let store: MemoryStore = [("stck-javascript", "x")].into_iter().collect();
		let adapter = PersistenceAdapter::new(store);
		assert_eq!(adapter.read(DocumentKey::Html).unwrap(), None);
	}
}

use std::collections::HashMap;

use crate::{KeyValueStore, Result};

/// In-memory store. Lives as long as the value does.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
	entries: HashMap<String, String>,
}

impl MemoryStore {
	pub fn new() -> Self {
		Self::default()
	}
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MemoryStore {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self {
			entries: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
		}
	}
}

impl KeyValueStore for MemoryStore {
	fn read(&self, key: &str) -> Result<Option<String>> {
		Ok(self.entries.get(key).cloned())
	}

	fn write(&mut self, key: &str, text: &str) -> Result<()> {
		self.entries.insert(key.to_owned(), text.to_owned());
		Ok(())
	}
}

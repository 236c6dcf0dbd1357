//! Owner of the live document set.

use serde_json::Value;

use crate::{DocumentKey, DocumentSet, ShapeError, validate};

/// Holds the session's live [`DocumentSet`].
///
/// Mutation only happens through [`set`](Self::set) and
/// [`replace_all`](Self::replace_all). Consumers that need to keep the
/// content take a [`snapshot`](Self::snapshot).
#[derive(Debug, Clone, Default)]
pub struct DocumentStore {
	documents: DocumentSet,
}

impl DocumentStore {
	pub fn new(documents: DocumentSet) -> Self {
		Self { documents }
	}

	pub fn get(&self, key: DocumentKey) -> &str {
		self.documents.get(key)
	}

	pub fn set(&mut self, key: DocumentKey, text: impl Into<String>) -> &DocumentSet {
		self.documents.set(key, text);
		&self.documents
	}

	/// Validates `candidate` and, only if it has exactly the three recognized
	/// keys, replaces every document with it.
	///
	/// On error the current documents are left untouched.
	pub fn replace_all(&mut self, candidate: &Value) -> Result<&DocumentSet, ShapeError> {
		self.documents = validate(candidate)?;
		Ok(&self.documents)
	}

	pub fn documents(&self) -> &DocumentSet {
		&self.documents
	}

	pub fn snapshot(&self) -> DocumentSet {
		self.documents.clone()
	}
}

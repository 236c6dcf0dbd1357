//! Resolution of the starting document set.

use stck_config::PlaygroundConfig;
use stck_document::{DocumentKey, DocumentStore};
use stck_share::{DecodeError, Location, decode_candidate};
use stck_storage::{KeyValueStore, PersistenceAdapter, StorageError};
use tracing::{debug, trace};

/// Where a starting document came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentSource {
	/// The URL fragment held a valid share token.
	Fragment,
	/// Text previously written to per-device storage.
	Stored,
	/// Built-in (or configured) default text.
	Default,
}

/// The source of each resolved starting document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
	/// Source per document, in canonical key order.
	pub sources: [DocumentSource; 3],
}

impl Resolution {
	pub fn source(&self, key: DocumentKey) -> DocumentSource {
		let index = match key {
			DocumentKey::Html => 0,
			DocumentKey::Css => 1,
			DocumentKey::Js => 2,
		};
		self.sources[index]
	}
}

/// Resolves the starting documents for a session into `store`.
///
/// A share token in `location` goes through
/// [`DocumentStore::replace_all`] and, if it has the exact three-key shape,
/// is taken whole. Otherwise each document independently falls back to its
/// stored text and then to its default. A malformed token is never partially
/// applied.
pub(crate) fn resolve<S: KeyValueStore>(
	store: &mut DocumentStore,
	location: &impl Location,
	persistence: &PersistenceAdapter<S>,
	config: &PlaygroundConfig,
) -> Result<Resolution, StorageError> {
	let fragment = location.fragment().unwrap_or_default();
	match decode_candidate(&fragment) {
		Ok(candidate) => match store.replace_all(&candidate) {
			Ok(_) => {
				debug!("session.bootstrap.fragment");
				return Ok(Resolution {
					sources: [DocumentSource::Fragment; 3],
				});
			}
			Err(err) => debug!(error = %err, "session.bootstrap.fragment_rejected"),
		},
		Err(DecodeError::Empty) => trace!("session.bootstrap.no_fragment"),
		Err(err) => debug!(error = %err, "session.bootstrap.fragment_rejected"),
	}

	let mut sources = [DocumentSource::Default; 3];
	for (slot, key) in sources.iter_mut().zip(DocumentKey::ALL) {
		match persistence.read(key)? {
			Some(text) => {
				*slot = DocumentSource::Stored;
				store.set(key, text);
			}
			None => {
				store.set(key, config.default_text(key));
			}
		}
	}

	debug!(?sources, "session.bootstrap.fallback");
	Ok(Resolution { sources })
}

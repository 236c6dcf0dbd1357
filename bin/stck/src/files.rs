//! Mapping between a document set and files in a directory.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use anyhow::{Context, Result};
use stck_config::PlaygroundConfig;
use stck_document::{DocumentKey, DocumentSet};
use tracing::debug;

/// File holding `key` inside a playground directory.
pub fn file_name(key: DocumentKey) -> &'static str {
	match key {
		DocumentKey::Html => "index.html",
		DocumentKey::Css => "style.css",
		DocumentKey::Js => "script.js",
	}
}

/// Reads all three documents from `dir`. Missing files take the configured
/// default text.
pub fn read_dir(dir: &Path, config: &PlaygroundConfig) -> Result<DocumentSet> {
	let mut documents = DocumentSet::default();
	for key in DocumentKey::ALL {
		let path = dir.join(file_name(key));
		let text = match fs::read_to_string(&path) {
			Ok(text) => text,
			Err(err) if err.kind() == ErrorKind::NotFound => {
				debug!(path = %path.display(), "stck.files.default");
				config.default_text(key).to_owned()
			}
			Err(err) => return Err(err).with_context(|| format!("reading {}", path.display())),
		};
		documents.set(key, text);
	}
	Ok(documents)
}

/// Writes all three documents into `dir`, creating it if needed.
pub fn write_dir(dir: &Path, documents: &DocumentSet) -> Result<()> {
	fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
	for (key, text) in documents.iter() {
		let path = dir.join(file_name(key));
		fs::write(&path, text).with_context(|| format!("writing {}", path.display()))?;
	}
	Ok(())
}

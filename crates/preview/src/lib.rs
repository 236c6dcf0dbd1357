//! Preview generation.
//!
//! The preview is never patched in place. Every publish assembles a fresh,
//! standalone HTML document from the three documents and exposes it as a
//! `data:` resource, so scripts run isolated from the host page and start
//! from a clean slate each time.
//!
//! Identical content yields an identical address, so each
//! [`PreviewResource`] also carries a version from a monotonically
//! increasing counter. Surfaces key the loaded frame by that version and
//! reload whenever it changes.


use stck_document::{DocumentKey, DocumentSet};
use thiserror::Error;
use tracing::trace;

/// Address prefix of every preview resource.
pub const DATA_URI_PREFIX: &str = "data:text/html;charset=utf-8,";

#[derive(Debug, Error)]
pub enum PreviewError {
	#[error("preview address is not an HTML data resource")]
	NotHtmlData,

	#[error("preview address is not valid percent-encoding: {0}")]
	Encoding(#[from] std::string::FromUtf8Error),
}

/// A loadable, self-contained preview document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewResource {
	uri: String,
	version: u64,
}

impl PreviewResource {
	/// The `data:` address to load.
	pub fn uri(&self) -> &str {
		&self.uri
	}

	/// Remount key for the consuming surface.
	pub fn version(&self) -> u64 {
		self.version
	}

	/// Decodes the address back into the HTML document it carries.
	pub fn document(&self) -> Result<String, PreviewError> {
		let encoded = self
			.uri
			.strip_prefix(DATA_URI_PREFIX)
			.ok_or(PreviewError::NotHtmlData)?;
		Ok(urlencoding::decode(encoded)?.into_owned())
	}

	/// Whether a surface currently showing `previous` must discard it and load
	/// this resource. Compares versions only, never content.
	pub fn needs_remount(&self, previous: Option<&PreviewResource>) -> bool {
		previous.is_none_or(|prev| prev.version != self.version)
	}
}

/// Builds preview resources and owns the version counter.
#[derive(Debug, Clone, Default)]
pub struct PreviewRenderer {
	version: u64,
}

impl PreviewRenderer {
	pub fn new() -> Self {
		Self::default()
	}

	/// Renders `documents` into a fresh resource with the next version.
	pub fn render(&mut self, documents: &DocumentSet) -> PreviewResource {
		self.version += 1;
		let html = document(documents);
		let uri = format!("{DATA_URI_PREFIX}{}", urlencoding::encode(&html));
		trace!(version = self.version, bytes = uri.len(), "preview.render");
		PreviewResource {
			uri,
			version: self.version,
		}
	}
}

/// Assembles the standalone HTML document: body, then style, then script.
pub fn document(documents: &DocumentSet) -> String {
	[
		"<!doctype html>".to_owned(),
		r#"<html lang="en">"#.to_owned(),
		format!(
			r#"<body height="100%" width="100%">{}</body>"#,
			documents.get(DocumentKey::Html)
		),
		format!("<style>{}</style>", documents.get(DocumentKey::Css)),
		format!("<script>{}</script>", documents.get(DocumentKey::Js)),
		"</html>".to_owned(),
	]
	.join("\n")
}

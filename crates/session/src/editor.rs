use stck_document::{DocumentKey, RelatedDocument};

/// What a host hands to the external editor widget for one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorBinding {
	pub key: DocumentKey,
	/// Editor language tag (`html`, `css`, `javascript`).
	pub language: &'static str,
	/// Starting text. The widget owns the text after mount.
	pub initial_text: String,
	/// The other two documents, for cross-document assistance.
	pub related: Vec<RelatedDocument>,
}

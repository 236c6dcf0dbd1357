//! The three recognized document keys.

use std::fmt;

/// Identifies one of the three documents in a [`DocumentSet`](crate::DocumentSet).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DocumentKey {
	Html,
	Css,
	Js,
}

impl DocumentKey {
	/// All keys in canonical order.
	pub const ALL: [DocumentKey; 3] = [DocumentKey::Html, DocumentKey::Css, DocumentKey::Js];

	/// Key name as it appears in share tokens.
	pub const fn name(self) -> &'static str {
		match self {
			DocumentKey::Html => "html",
			DocumentKey::Css => "css",
			DocumentKey::Js => "js",
		}
	}

	/// Language tag handed to the editor widget.
	pub const fn language(self) -> &'static str {
		match self {
			DocumentKey::Html => "html",
			DocumentKey::Css => "css",
			DocumentKey::Js => "javascript",
		}
	}

	/// Namespaced storage key, e.g. `stck-html` for the `stck-` prefix.
	pub fn storage_key(self, prefix: &str) -> String {
		format!("{prefix}{}", self.name())
	}
}

impl fmt::Display for DocumentKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_display_matches_token_name() {
		let names: Vec<_> = DocumentKey::ALL.iter().map(ToString::to_string).collect();
		assert_eq!(names, ["html", "css", "js"]);
		assert_eq!(DocumentKey::Js.language(), "javascript");
	}

	#[test]
	fn test_storage_keys() {
		let keys: Vec<_> = DocumentKey::ALL.iter().map(|k| k.storage_key("stck-")).collect();
		assert_eq!(keys, ["stck-html", "stck-css", "stck-js"]);
	}
}

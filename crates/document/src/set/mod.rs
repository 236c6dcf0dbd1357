//! The fixed-shape document set.


use serde::Serialize;
use serde_json::Value;

use crate::{DocumentKey, ShapeError, defaults};

/// Exactly three text documents keyed by [`DocumentKey`].
///
/// Serializes as a JSON object with keys in canonical order (`html`, `css`,
/// `js`), which is the form share tokens are built from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct DocumentSet {
	html: String,
	css: String,
	js: String,
}

/// Another document's text offered to an editor as cross-document context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedDocument {
	pub key: DocumentKey,
	/// Editor language tag (`html`, `css`, `javascript`).
	pub language: &'static str,
	pub text: String,
}

impl DocumentSet {
	pub fn new(html: impl Into<String>, css: impl Into<String>, js: impl Into<String>) -> Self {
		Self {
			html: html.into(),
			css: css.into(),
			js: js.into(),
		}
	}

	/// The built-in starter documents.
	pub fn builtin() -> Self {
		Self::new(defaults::HTML, defaults::CSS, defaults::JS)
	}

	/// Builds a set from a per-key resolver.
	pub fn from_fn(mut f: impl FnMut(DocumentKey) -> String) -> Self {
		Self {
			html: f(DocumentKey::Html),
			css: f(DocumentKey::Css),
			js: f(DocumentKey::Js),
		}
	}

	pub fn get(&self, key: DocumentKey) -> &str {
		match key {
			DocumentKey::Html => &self.html,
			DocumentKey::Css => &self.css,
			DocumentKey::Js => &self.js,
		}
	}

	pub fn set(&mut self, key: DocumentKey, text: impl Into<String>) {
		*self.slot_mut(key) = text.into();
	}

	/// Documents in canonical order.
	pub fn iter(&self) -> impl Iterator<Item = (DocumentKey, &str)> + '_ {
		DocumentKey::ALL.into_iter().map(move |key| (key, self.get(key)))
	}

	/// The other two documents, for cross-document editor assistance.
	///
	/// Never includes `key` itself.
	pub fn related(&self, key: DocumentKey) -> Vec<RelatedDocument> {
		self.iter()
			.filter(|(other, _)| *other != key)
			.map(|(other, text)| RelatedDocument {
				key: other,
				language: other.language(),
				text: text.to_owned(),
			})
			.collect()
	}

	fn slot_mut(&mut self, key: DocumentKey) -> &mut String {
		match key {
			DocumentKey::Html => &mut self.html,
			DocumentKey::Css => &mut self.css,
			DocumentKey::Js => &mut self.js,
		}
	}
}

/// Validates an untyped candidate into a [`DocumentSet`].
///
/// The candidate must be an object with exactly the keys `html`, `css` and
/// `js`, each bound to a string. Document contents are never inspected.
pub fn validate(candidate: &Value) -> Result<DocumentSet, ShapeError> {
	let Value::Object(map) = candidate else {
		return Err(ShapeError::NotAnObject(json_kind(candidate)));
	};

	if let Some(unknown) = map
		.keys()
		.find(|k| !DocumentKey::ALL.iter().any(|key| key.name() == k.as_str()))
	{
		return Err(ShapeError::UnknownKey(unknown.clone()));
	}

	let mut set = DocumentSet::default();
	for key in DocumentKey::ALL {
		match map.get(key.name()) {
			Some(Value::String(text)) => set.set(key, text.as_str()),
			Some(_) => return Err(ShapeError::NotText(key)),
			None => return Err(ShapeError::MissingKey(key)),
		}
	}
	Ok(set)
}

fn json_kind(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "a boolean",
		Value::Number(_) => "a number",
		Value::String(_) => "a string",
		Value::Array(_) => "an array",
		Value::Object(_) => "an object",
	}
}

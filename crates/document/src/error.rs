//! Shape validation errors.

use thiserror::Error;

use crate::DocumentKey;

/// A candidate document set does not have exactly the `html`, `css` and `js` keys.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
	/// The candidate is not a key/value object at all.
	#[error("document set must be an object, got {0}")]
	NotAnObject(&'static str),

	/// One of the three recognized keys is absent.
	#[error("document set is missing the `{0}` document")]
	MissingKey(DocumentKey),

	/// A key outside the recognized three is present.
	#[error("document set has unrecognized key `{0}`")]
	UnknownKey(String),

	/// A recognized key is bound to something other than text.
	#[error("document `{0}` must be text")]
	NotText(DocumentKey),
}

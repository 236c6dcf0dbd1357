//! Share token errors.

use stck_document::ShapeError;
use thiserror::Error;

/// The fragment is not a well-formed share token.
#[derive(Debug, Error)]
pub enum DecodeError {
	/// No fragment, or an empty one. Expected on a first visit.
	#[error("no share token present")]
	Empty,

	#[error("share token is not valid percent-encoding: {0}")]
	Percent(#[source] std::string::FromUtf8Error),

	#[error("share token is not valid base64: {0}")]
	Base64(#[from] base64::DecodeError),

	#[error("share token payload is not UTF-8: {0}")]
	Utf8(#[source] std::string::FromUtf8Error),

	#[error("share token payload is not valid JSON: {0}")]
	Json(#[from] serde_json::Error),
}

/// Any reason a fragment could not become a document set.
#[derive(Debug, Error)]
pub enum ShareError {
	#[error(transparent)]
	Decode(#[from] DecodeError),

	#[error(transparent)]
	Shape(#[from] ShapeError),
}

/// Serializing the document set failed.
#[derive(Debug, Error)]
#[error("failed to serialize document set: {0}")]
pub struct EncodeError(#[from] pub serde_json::Error);

//! Share token encoding.


use std::fmt;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::Value;
use stck_document::{DocumentSet, validate};

use crate::{DecodeError, EncodeError, ShareError};

/// A fragment-safe encoding of a complete [`DocumentSet`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShareToken(String);

impl ShareToken {
	pub fn as_str(&self) -> &str {
		&self.0
	}

}

impl fmt::Display for ShareToken {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

/// Encodes `documents` as a share token.
///
/// JSON (keys in canonical order), then base64 with the standard alphabet,
/// then percent-encoding so `+`, `/` and `=` are safe in a fragment.
pub fn encode_token(documents: &DocumentSet) -> Result<ShareToken, EncodeError> {
	let json = serde_json::to_vec(documents)?;
	let b64 = STANDARD.encode(json);
	Ok(ShareToken(urlencoding::encode(&b64).into_owned()))
}

/// Decodes a URL fragment back into a validated [`DocumentSet`].
///
/// A leading `#` is ignored. An absent or empty fragment yields
/// [`DecodeError::Empty`]. A payload that parses but does not have exactly
/// the three recognized keys yields a [`ShapeError`](stck_document::ShapeError).
pub fn decode(fragment: &str) -> Result<DocumentSet, ShareError> {
	let candidate = decode_candidate(fragment)?;
	Ok(validate(&candidate)?)
}

/// Reverses the token encoding layers without checking the shape.
///
/// The result still has to go through [`validate`] (or
/// [`DocumentStore::replace_all`](stck_document::DocumentStore::replace_all))
/// before it can be used as a document set.
pub fn decode_candidate(fragment: &str) -> Result<Value, DecodeError> {
	let fragment = fragment.strip_prefix('#').unwrap_or(fragment).trim();
	if fragment.is_empty() {
		return Err(DecodeError::Empty);
	}

	let b64 = urlencoding::decode(fragment).map_err(DecodeError::Percent)?;
	let bytes = STANDARD.decode(b64.trim().as_bytes())?;
	let json = String::from_utf8(bytes).map_err(DecodeError::Utf8)?;
	Ok(serde_json::from_str(&json)?)
}
